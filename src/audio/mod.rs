//! Audio-source resolution: turning paths, URLs, bytes and sample arrays into a URL or a
//! `data:` URI the widget can load.

/// Blocking downloads.
pub mod fetch;
/// Suffix to MIME tables.
pub mod mime;
/// The resolver and its delivery modes.
pub mod resolve;
/// Host capabilities for served URLs.
pub mod serve;
/// Caller-facing source shapes.
pub mod source;
/// In-memory WAV encoding.
pub mod wav;
