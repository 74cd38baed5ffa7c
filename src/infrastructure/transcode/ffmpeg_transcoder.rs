use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{TranscodeError, Transcoder};

/// Invokes an external ffmpeg-compatible command to produce the canonical
/// waveform: mono, 16 kHz, 16-bit signed little-endian PCM.
pub struct FfmpegTranscoder {
    command: String,
}

impl FfmpegTranscoder {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Startup probe. The command must be resolvable and answer `-version`
    /// with exit code 0; anything else means transcoding can never work.
    pub async fn probe(&self) -> Result<(), TranscodeError> {
        let output = Command::new(&self.command)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                TranscodeError::ExternalProcessFailed(format!("{}: {}", self.command, e))
            })?;

        if !output.status.success() {
            return Err(TranscodeError::ExternalProcessFailed(format!(
                "{} -version exited with {}",
                self.command, output.status
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            "Transcoding upload to canonical waveform"
        );

        // -y overwrites a stale destination, so retranscoding is idempotent.
        let result = Command::new(&self.command)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-acodec", "pcm_s16le", "-ar", "16000", "-ac", "1"])
            .args(["-loglevel", "error"])
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                TranscodeError::ExternalProcessFailed(format!(
                    "failed to spawn {}: {}",
                    self.command, e
                ))
            })?;

        if !result.status.success() {
            let diagnostic = String::from_utf8_lossy(&result.stderr).trim().to_string();
            let diagnostic = if diagnostic.is_empty() {
                format!("exit status {}", result.status)
            } else {
                diagnostic
            };
            return Err(TranscodeError::ExternalProcessFailed(diagnostic));
        }

        Ok(())
    }
}
