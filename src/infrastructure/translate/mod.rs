mod gemini_translator;
mod mock_translator;

pub use gemini_translator::{GeminiTranslator, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_translator::MockTranslator;
