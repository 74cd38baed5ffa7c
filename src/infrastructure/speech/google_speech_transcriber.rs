use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionError, Transcriber};
use crate::infrastructure::audio::waveform;

/// Waveforms below this size carry no usable speech; reject them before
/// spending a network round-trip.
const MIN_WAVEFORM_BYTES: u64 = 1024;

/// Sends captured audio to the Google speech-recognition HTTP service and
/// keeps only the best hypothesis.
pub struct GoogleSpeechTranscriber {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl GoogleSpeechTranscriber {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            language: language.into(),
        }
    }
}

// The service answers with one JSON object per line; the first line whose
// result list is non-empty carries the hypotheses.
#[derive(Deserialize)]
struct RecognizeLine {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<Hypothesis>,
}

#[derive(Deserialize)]
struct Hypothesis {
    transcript: String,
    #[serde(default)]
    #[allow(dead_code)]
    confidence: Option<f64>,
}

fn best_hypothesis(body: &str) -> Result<String, TranscriptionError> {
    for line in body.lines().filter(|l| !l.trim().is_empty()) {
        let parsed: RecognizeLine = serde_json::from_str(line).map_err(|e| {
            TranscriptionError::ServiceUnavailable(format!("malformed response: {}", e))
        })?;

        if let Some(hypothesis) = parsed
            .result
            .into_iter()
            .flat_map(|r| r.alternative)
            .next()
        {
            return Ok(hypothesis.transcript);
        }
    }

    // The service produced no hypothesis above its confidence threshold.
    Err(TranscriptionError::Unintelligible)
}

#[async_trait]
impl Transcriber for GoogleSpeechTranscriber {
    async fn transcribe(&self, waveform_path: &Path) -> Result<String, TranscriptionError> {
        let metadata = tokio::fs::metadata(waveform_path)
            .await
            .map_err(|e| TranscriptionError::Other(format!("stat waveform: {}", e)))?;
        if metadata.len() < MIN_WAVEFORM_BYTES {
            return Err(TranscriptionError::TooSmall);
        }

        let samples = waveform::read_canonical(waveform_path)?;
        let captured = waveform::calibrate_and_capture(&samples);
        if captured.samples.is_empty() {
            return Err(TranscriptionError::NoSpeechDetected);
        }

        tracing::debug!(
            samples = captured.samples.len(),
            energy_threshold = captured.energy_threshold,
            "Captured audio after ambient calibration"
        );

        let audio = waveform::encode_wav(&captured.samples)?;

        let url = format!("{}/v2/recognize", self.base_url.trim_end_matches('/'));
        let file_part = multipart::Part::bytes(audio)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("mime: {}", e)))?;
        let form = multipart::Form::new().part("file", file_part);

        tracing::debug!(lang = %self.language, "Sending captured audio for recognition");

        let response = self
            .client
            .post(&url)
            .query(&[("lang", self.language.as_str()), ("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ServiceUnavailable(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("body: {}", e)))?;

        let transcript = best_hypothesis(&body)?;
        tracing::info!(chars = transcript.len(), "Speech recognition completed");
        Ok(transcript)
    }
}
