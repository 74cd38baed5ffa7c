pub mod waveform;
