mod audio_upload;
mod outcome;
mod run_id;
mod target_language;

pub use audio_upload::{AudioFormat, AudioUpload};
pub use outcome::{RunOutcome, Stage, StageFailure};
pub use run_id::RunId;
pub use target_language::TargetLanguage;
