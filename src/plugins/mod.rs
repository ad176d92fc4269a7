//! Plugin selection and option bundles.

/// Names, configurations and the list codec.
pub mod config;
/// Typed option bundles.
pub mod options;
