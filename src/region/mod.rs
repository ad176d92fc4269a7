//! Region annotations and their wire form.

/// Mapping encode/decode.
pub mod codec;
/// Widget-side id derivation and color lightening.
pub mod color;
/// `Region` and `RegionList`.
pub mod model;
