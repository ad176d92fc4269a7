use std::path::Path;

/// MIME type used when an audio suffix is unknown or missing.
pub const DEFAULT_AUDIO_MIME: &str = "audio/wav";

/// MIME type used when an image suffix is unknown or missing.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

const AUDIO_SUFFIXES: &[(&str, &str)] = &[
    ("wav", "audio/wav"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("m4a", "audio/mp4"),
    ("flac", "audio/flac"),
    ("webm", "audio/webm"),
];

const IMAGE_SUFFIXES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which suffix table a lookup should use.
pub enum MediaKind {
    /// Audio payloads for the waveform itself.
    Audio,
    /// Images, e.g. the overlay plugin's background.
    Image,
}

impl MediaKind {
    /// Fallback MIME type for this kind.
    pub fn default_mime(self) -> &'static str {
        match self {
            Self::Audio => DEFAULT_AUDIO_MIME,
            Self::Image => DEFAULT_IMAGE_MIME,
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Audio => AUDIO_SUFFIXES,
            Self::Image => IMAGE_SUFFIXES,
        }
    }
}

/// Infer a MIME type from a file name's extension (case-insensitive).
pub fn mime_for_name(name: impl AsRef<Path>, kind: MediaKind) -> &'static str {
    let Some(ext) = name.as_ref().extension().and_then(|s| s.to_str()) else {
        return kind.default_mime();
    };
    let ext = ext.to_ascii_lowercase();
    kind.table()
        .iter()
        .find(|(suffix, _)| *suffix == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(kind.default_mime())
}

#[cfg(test)]
#[path = "../../tests/unit/audio/mime.rs"]
mod tests;
