use std::fmt;

use super::run_id::RunId;
use super::target_language::TargetLanguage;

/// The three adapter invocations within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Transcode,
    Transcription,
    Translation,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transcode => "transcode",
            Self::Transcription => "transcription",
            Self::Translation => "translation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The first error a run hit, qualified by the stage that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct StageFailure {
    pub stage: Stage,
    pub detail: String,
}

impl StageFailure {
    pub fn new(stage: Stage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.detail)
    }
}

/// Terminal value of one pipeline run. Partial results survive a later
/// failure: a transcript produced before a translation error is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub run_id: RunId,
    pub target_language: TargetLanguage,
    pub transcript: Option<String>,
    pub translation: Option<String>,
    pub failure: Option<StageFailure>,
}

impl RunOutcome {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none() && self.transcript.is_some() && self.translation.is_some()
    }
}
