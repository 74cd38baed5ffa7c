use std::io::Cursor;
use std::path::Path;

use crate::application::ports::TranscriptionError;

pub const SAMPLE_RATE: u32 = 16_000;
/// Leading window consumed to estimate the ambient noise floor.
pub const CALIBRATION_MS: u32 = 500;
/// Hard ceiling on captured audio; longer recordings are truncated.
pub const CAPTURE_LIMIT_SECS: u32 = 60;

const DYNAMIC_ENERGY_RATIO: f64 = 1.5;

/// Audio captured after ambient calibration, together with the energy
/// threshold derived from the calibration window.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedAudio {
    pub samples: Vec<i16>,
    pub energy_threshold: f64,
}

/// Reads a canonical waveform file into raw samples. Anything that is not
/// mono 16 kHz 16-bit signed PCM is rejected; the transcoder should never
/// produce such a file.
pub fn read_canonical(path: &Path) -> Result<Vec<i16>, TranscriptionError> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| TranscriptionError::Other(format!("open waveform: {}", e)))?;

    let spec = reader.spec();
    if spec.sample_rate != SAMPLE_RATE
        || spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        return Err(TranscriptionError::Other(format!(
            "not a canonical waveform: {} Hz, {} channel(s), {} bit",
            spec.sample_rate, spec.channels, spec.bits_per_sample
        )));
    }

    reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TranscriptionError::Other(format!("read samples: {}", e)))
}

/// Single-pass calibration and capture. The first `CALIBRATION_MS` of audio
/// seed the speech/silence energy threshold and are not part of the capture;
/// everything after it is captured up to `CAPTURE_LIMIT_SECS`.
pub fn calibrate_and_capture(samples: &[i16]) -> CapturedAudio {
    let calibration_len =
        ((SAMPLE_RATE as usize * CALIBRATION_MS as usize) / 1000).min(samples.len());
    let energy_threshold = rms(&samples[..calibration_len]) * DYNAMIC_ENERGY_RATIO;

    let rest = &samples[calibration_len..];
    let capture_limit = SAMPLE_RATE as usize * CAPTURE_LIMIT_SECS as usize;

    CapturedAudio {
        samples: rest[..rest.len().min(capture_limit)].to_vec(),
        energy_threshold,
    }
}

/// Encodes captured samples back into an in-memory canonical WAV for the
/// outbound recognition request.
pub fn encode_wav(samples: &[i16]) -> Result<Vec<u8>, TranscriptionError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| TranscriptionError::Other(format!("encode wav: {}", e)))?;
        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| TranscriptionError::Other(format!("encode wav: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| TranscriptionError::Other(format!("encode wav: {}", e)))?;
    }

    Ok(cursor.into_inner())
}

fn rms(samples: &[i16]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f64 = samples
        .iter()
        .map(|&s| {
            let v = s as f64;
            v * v
        })
        .sum();
    (sum_squares / samples.len() as f64).sqrt()
}
