mod google_speech_transcriber;
mod mock_transcriber;

pub use google_speech_transcriber::GoogleSpeechTranscriber;
pub use mock_transcriber::MockTranscriber;
