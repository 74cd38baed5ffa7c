use crate::infrastructure::translate::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Process-wide configuration, read once at startup and immutable after.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcoder: TranscoderSettings,
    pub speech: SpeechSettings,
    pub translation: TranslationSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct TranscoderSettings {
    pub command: String,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub base_url: String,
    pub api_key: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct TranslationSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub scratch_dir: String,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "127.0.0.1"),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            transcoder: TranscoderSettings {
                command: env_or("FFMPEG_COMMAND", "ffmpeg"),
            },
            speech: SpeechSettings {
                base_url: env_or("SPEECH_API_URL", "http://www.google.com/speech-api"),
                api_key: env_or("SPEECH_API_KEY", ""),
                language: env_or("SPEECH_LANGUAGE", "pt-BR"),
            },
            translation: TranslationSettings {
                base_url: env_or("GEMINI_API_URL", DEFAULT_BASE_URL),
                api_key: env_or("GEMINI_API_KEY", ""),
                model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            },
            storage: StorageSettings {
                scratch_dir: env_or("SCRATCH_DIR", "temp_audio"),
            },
        }
    }

    /// Startup precondition: the generative-text credential must be present.
    /// Checked once, before any request is accepted.
    pub fn validate(&self) -> Result<(), StartupError> {
        if self.translation.api_key.trim().is_empty() {
            return Err(StartupError::MissingCredential);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("GEMINI_API_KEY is not set; the translation service credential is required")]
    MissingCredential,
    #[error("transcoder command not found or not executable: {0}")]
    TranscoderNotFound(String),
}
