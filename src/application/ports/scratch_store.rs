use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::RunId;

/// Run-scoped temporary storage for the raw upload and the transcoded
/// waveform. Paths are unique per run so concurrent runs never collide.
#[async_trait]
pub trait ScratchStore: Send + Sync {
    /// Persists the uploaded bytes and returns the staged file path.
    async fn stage_upload(&self, run_id: RunId, data: &[u8]) -> Result<PathBuf, ScratchStoreError>;

    /// Path the transcoder should write the canonical waveform to.
    fn waveform_path(&self, run_id: RunId) -> PathBuf;

    /// Removes every file staged for the run. Files a failed stage never
    /// created are not an error.
    async fn discard(&self, run_id: RunId) -> Result<(), ScratchStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
