use std::path::Path;

use async_trait::async_trait;

/// Converts an arbitrary input audio file into the canonical waveform
/// (mono, 16 kHz, 16-bit signed little-endian PCM) at `output`.
///
/// On failure the caller must not assume anything about `output`.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("external transcoder failed: {0}")]
    ExternalProcessFailed(String),
}
