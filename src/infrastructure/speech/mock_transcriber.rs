use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{TranscriptionError, Transcriber};

type RespondFn = dyn Fn() -> Result<String, TranscriptionError> + Send + Sync;

/// Test double answering every transcription request with a canned result.
pub struct MockTranscriber {
    respond: Box<RespondFn>,
    calls: AtomicUsize,
}

impl MockTranscriber {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn() -> Result<String, TranscriptionError> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _waveform: &Path) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)()
    }
}
