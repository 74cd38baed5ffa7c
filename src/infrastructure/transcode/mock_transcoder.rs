use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{TranscodeError, Transcoder};

/// Test double that either writes a fixed waveform to the output path or
/// fails with a fixed diagnostic.
pub struct MockTranscoder {
    waveform: Option<Vec<u8>>,
    diagnostic: Option<String>,
    calls: AtomicUsize,
}

impl MockTranscoder {
    pub fn succeeding(waveform: Vec<u8>) -> Self {
        Self {
            waveform: Some(waveform),
            diagnostic: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(diagnostic: impl Into<String>) -> Self {
        Self {
            waveform: None,
            diagnostic: Some(diagnostic.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    async fn transcode(&self, _input: &Path, output: &Path) -> Result<(), TranscodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(diagnostic) = &self.diagnostic {
            return Err(TranscodeError::ExternalProcessFailed(diagnostic.clone()));
        }

        match &self.waveform {
            Some(bytes) => tokio::fs::write(output, bytes)
                .await
                .map_err(|e| TranscodeError::ExternalProcessFailed(e.to_string())),
            None => Err(TranscodeError::ExternalProcessFailed(
                "mock has no waveform".to_string(),
            )),
        }
    }
}
