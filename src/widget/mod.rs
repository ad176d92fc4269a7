//! Widget entry point: payload assembly, the host bridge, and decoding what the widget reports.

/// Host bridge trait.
pub mod bridge;
/// Arguments, payload and the `Wavesurfer` entry point.
pub mod component;
/// Reported state and region syncing.
pub mod state;
