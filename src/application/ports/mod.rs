mod scratch_store;
mod transcoder;
mod transcriber;
mod translator;

pub use scratch_store::{ScratchStore, ScratchStoreError};
pub use transcoder::{TranscodeError, Transcoder};
pub use transcriber::{TranscriptionError, Transcriber};
pub use translator::{TranslationError, Translator};
