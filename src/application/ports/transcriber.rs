use std::path::Path;

use async_trait::async_trait;

/// Produces the best Portuguese transcript for a canonical waveform file.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, waveform: &Path) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio file too small or invalid")]
    TooSmall,
    #[error("no audio could be captured from the file")]
    NoSpeechDetected,
    #[error("audio could not be understood")]
    Unintelligible,
    #[error("speech service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("transcription failed: {0}")]
    Other(String),
}
