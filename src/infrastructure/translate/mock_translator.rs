use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{TranslationError, Translator};
use crate::domain::TargetLanguage;

type RespondFn = dyn Fn(&str, TargetLanguage) -> Result<String, TranslationError> + Send + Sync;

/// Test double answering every translation request with a canned result.
pub struct MockTranslator {
    respond: Box<RespondFn>,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str, TargetLanguage) -> Result<String, TranslationError> + Send + Sync + 'static,
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
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)(text, target)
    }
}
