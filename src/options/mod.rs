//! Waveform options and region palettes.

/// Named region palettes.
pub mod colormap;
/// `WaveOptions` and its mapping codec.
pub mod wave;
