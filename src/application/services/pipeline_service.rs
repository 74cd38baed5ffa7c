use std::sync::Arc;

use crate::application::ports::{ScratchStore, Transcoder, Transcriber, Translator};
use crate::domain::{AudioUpload, RunId, RunOutcome, Stage, StageFailure, TargetLanguage};

/// Sequences the three adapters for one run: stage the upload, transcode it
/// to the canonical waveform, transcribe, translate.
///
/// The first failing stage short-circuits the rest. Scratch files are
/// discarded before `run` returns regardless of the terminal state, and a
/// discard failure is only ever logged, never reported as the run's error.
pub struct PipelineService<T, S, L>
where
    T: Transcoder,
    S: Transcriber,
    L: Translator,
{
    transcoder: Arc<T>,
    transcriber: Arc<S>,
    translator: Arc<L>,
    scratch: Arc<dyn ScratchStore>,
}

impl<T, S, L> PipelineService<T, S, L>
where
    T: Transcoder,
    S: Transcriber,
    L: Translator,
{
    pub fn new(
        transcoder: Arc<T>,
        transcriber: Arc<S>,
        translator: Arc<L>,
        scratch: Arc<dyn ScratchStore>,
    ) -> Self {
        Self {
            transcoder,
            transcriber,
            translator,
            scratch,
        }
    }

    pub async fn run(&self, upload: AudioUpload, target: TargetLanguage) -> RunOutcome {
        let run_id = RunId::new();
        tracing::info!(
            run_id = %run_id,
            filename = %upload.filename,
            bytes = upload.size_bytes(),
            target = %target,
            "Pipeline run started"
        );

        let (transcript, translation, failure) = self.execute(run_id, &upload, target).await;

        if let Err(e) = self.scratch.discard(run_id).await {
            tracing::warn!(run_id = %run_id, error = %e, "Could not clean up scratch files");
        }

        match &failure {
            Some(f) => {
                tracing::warn!(run_id = %run_id, stage = %f.stage, error = %f.detail, "Pipeline run failed")
            }
            None => tracing::info!(run_id = %run_id, "Pipeline run completed"),
        }

        RunOutcome {
            run_id,
            target_language: target,
            transcript,
            translation,
            failure,
        }
    }

    async fn execute(
        &self,
        run_id: RunId,
        upload: &AudioUpload,
        target: TargetLanguage,
    ) -> (Option<String>, Option<String>, Option<StageFailure>) {
        let input = match self.scratch.stage_upload(run_id, &upload.data).await {
            Ok(path) => path,
            Err(e) => {
                return (
                    None,
                    None,
                    Some(StageFailure::new(Stage::Transcode, e.to_string())),
                );
            }
        };

        let waveform = self.scratch.waveform_path(run_id);
        if let Err(e) = self.transcoder.transcode(&input, &waveform).await {
            return (
                None,
                None,
                Some(StageFailure::new(Stage::Transcode, e.to_string())),
            );
        }

        let transcript = match self.transcriber.transcribe(&waveform).await {
            Ok(text) => text,
            Err(e) => {
                return (
                    None,
                    None,
                    Some(StageFailure::new(Stage::Transcription, e.to_string())),
                );
            }
        };
        tracing::debug!(run_id = %run_id, chars = transcript.len(), "Transcription stage completed");

        match self.translator.translate(&transcript, target).await {
            Ok(translated) => (Some(transcript), Some(translated), None),
            // Scenario: translation fails after a good transcript. The
            // transcript stays available to the caller.
            Err(e) => (
                Some(transcript),
                None,
                Some(StageFailure::new(Stage::Translation, e.to_string())),
            ),
        }
    }
}
