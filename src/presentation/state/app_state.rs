use std::sync::Arc;

use crate::application::ports::{Transcoder, Transcriber, Translator};
use crate::application::services::PipelineService;
use crate::presentation::config::Settings;

pub struct AppState<T, S, L>
where
    T: Transcoder,
    S: Transcriber,
    L: Translator,
{
    pub pipeline: Arc<PipelineService<T, S, L>>,
    pub settings: Settings,
}

impl<T, S, L> Clone for AppState<T, S, L>
where
    T: Transcoder,
    S: Transcriber,
    L: Translator,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            settings: self.settings.clone(),
        }
    }
}
