use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{ScratchStore, ScratchStoreError};
use crate::domain::RunId;

/// Filesystem-backed scratch area shared by all runs. Isolation between
/// concurrent runs relies entirely on the run id in each file name.
pub struct LocalScratchDir {
    base: PathBuf,
}

impl LocalScratchDir {
    pub fn new(base: PathBuf) -> Result<Self, ScratchStoreError> {
        std::fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn input_path(&self, run_id: RunId) -> PathBuf {
        self.base.join(format!("input_{}", run_id))
    }
}

#[async_trait]
impl ScratchStore for LocalScratchDir {
    async fn stage_upload(&self, run_id: RunId, data: &[u8]) -> Result<PathBuf, ScratchStoreError> {
        let path = self.input_path(run_id);
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }

    fn waveform_path(&self, run_id: RunId) -> PathBuf {
        self.base.join(format!("output_{}.wav", run_id))
    }

    async fn discard(&self, run_id: RunId) -> Result<(), ScratchStoreError> {
        for path in [self.input_path(run_id), self.waveform_path(run_id)] {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                // A stage that failed early never created its file.
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
