use std::io::Cursor;

use tradux::application::ports::TranscriptionError;
use tradux::infrastructure::audio::waveform::{
    calibrate_and_capture, encode_wav, read_canonical, SAMPLE_RATE,
};

fn seconds(n: f64) -> usize {
    (SAMPLE_RATE as f64 * n) as usize
}

#[test]
fn given_two_seconds_of_audio_when_capturing_then_calibration_window_is_excluded() {
    let samples: Vec<i16> = (0..seconds(2.0)).map(|i| (i % 100) as i16).collect();
    let captured = calibrate_and_capture(&samples);
    assert_eq!(captured.samples.len(), seconds(2.0) - seconds(0.5));
    assert_eq!(captured.samples[0], samples[seconds(0.5)]);
}

#[test]
fn given_audio_longer_than_one_minute_when_capturing_then_it_is_truncated() {
    let samples = vec![0i16; seconds(75.0)];
    let captured = calibrate_and_capture(&samples);
    assert_eq!(captured.samples.len(), seconds(60.0));
}

#[test]
fn given_audio_shorter_than_calibration_window_when_capturing_then_nothing_is_captured() {
    let samples = vec![0i16; seconds(0.25)];
    let captured = calibrate_and_capture(&samples);
    assert!(captured.samples.is_empty());
}

#[test]
fn given_silence_when_calibrating_then_energy_threshold_is_zero() {
    let samples = vec![0i16; seconds(1.0)];
    let captured = calibrate_and_capture(&samples);
    assert_eq!(captured.energy_threshold, 0.0);
}

#[test]
fn given_noisy_calibration_window_when_calibrating_then_threshold_scales_with_ambient_energy() {
    let mut samples = vec![1000i16; seconds(0.5)];
    samples.extend(vec![0i16; seconds(1.0)]);
    let captured = calibrate_and_capture(&samples);
    // rms(1000) * dynamic ratio 1.5
    assert!((captured.energy_threshold - 1500.0).abs() < 1.0);
}

#[test]
fn given_encoded_samples_when_decoding_then_they_round_trip() {
    let samples: Vec<i16> = (0..1600).map(|i| (i * 3 % 2000) as i16 - 1000).collect();
    let bytes = encode_wav(&samples).unwrap();

    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
    assert_eq!(reader.spec().channels, 1);
    let decoded: Vec<i16> = reader.into_samples().map(Result::unwrap).collect();
    assert_eq!(decoded, samples);
}

#[test]
fn given_canonical_file_when_reading_then_samples_are_returned() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("canonical.wav");

    let samples: Vec<i16> = (0..seconds(1.0)).map(|i| (i % 512) as i16).collect();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for &s in &samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();

    let read_back = read_canonical(&path).unwrap();
    assert_eq!(read_back, samples);
}

#[test]
fn given_non_canonical_sample_rate_when_reading_then_error_is_returned() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("cd_quality.wav");

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for _ in 0..1000 {
        writer.write_sample(0i16).unwrap();
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();

    let result = read_canonical(&path);
    assert!(matches!(result, Err(TranscriptionError::Other(_))));
}
