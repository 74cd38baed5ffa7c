use async_trait::async_trait;

use crate::domain::TargetLanguage;

/// Translates recognized Portuguese text into the selected target language
/// through a single-shot generative-text completion.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation service unavailable: {0}")]
    ServiceUnavailable(String),
}
