mod settings;

pub use settings::{
    ServerSettings, Settings, SpeechSettings, StartupError, StorageSettings, TranscoderSettings,
    TranslationSettings,
};
