mod health;
mod languages;
mod translate;

pub use health::health_handler;
pub use languages::languages_handler;
pub use translate::{translate_handler, ErrorResponse, TranslateResponse, TRANSCRIPT_FILENAME};
