use std::{
    io::Read,
    path::{Path, PathBuf},
};

use crate::foundation::error::{WidgetError, WidgetResult};

/// A caller-supplied audio reference, before resolution.
pub enum AudioSource {
    /// Path, URL or `data:` URI given as a string.
    Text(String),
    /// Filesystem path.
    Path(PathBuf),
    /// Encoded audio bytes, with the file name they came from if known.
    Bytes {
        /// Encoded file contents.
        data: Vec<u8>,
        /// Used only for MIME inference.
        file_name: Option<String>,
    },
    /// Buffered byte stream; read to the end on resolution.
    Stream {
        /// Stream positioned at the start of the encoded audio.
        reader: Box<dyn Read + Send>,
        /// Used only for MIME inference.
        file_name: Option<String>,
    },
    /// Mono samples in `[-1, 1]`, encoded to WAV on resolution.
    Samples(Vec<f32>),
}

impl std::fmt::Debug for AudioSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(&truncated(s)).finish(),
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Self::Bytes { data, file_name } => f
                .debug_struct("Bytes")
                .field("len", &data.len())
                .field("file_name", file_name)
                .finish(),
            Self::Stream { file_name, .. } => f
                .debug_struct("Stream")
                .field("file_name", file_name)
                .finish_non_exhaustive(),
            Self::Samples(s) => f.debug_struct("Samples").field("len", &s.len()).finish(),
        }
    }
}

impl AudioSource {
    /// In-memory encoded bytes.
    pub fn bytes(data: impl Into<Vec<u8>>, file_name: Option<&str>) -> Self {
        Self::Bytes {
            data: data.into(),
            file_name: file_name.map(str::to_string),
        }
    }

    /// A readable stream of encoded bytes.
    pub fn stream(reader: impl Read + Send + 'static, file_name: Option<&str>) -> Self {
        Self::Stream {
            reader: Box::new(reader),
            file_name: file_name.map(str::to_string),
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Path(_) => "path",
            Self::Bytes { .. } => "bytes",
            Self::Stream { .. } => "stream",
            Self::Samples(_) => "samples",
        }
    }
}

impl From<&str> for AudioSource {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AudioSource {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<PathBuf> for AudioSource {
    fn from(p: PathBuf) -> Self {
        Self::Path(p)
    }
}

impl From<&Path> for AudioSource {
    fn from(p: &Path) -> Self {
        Self::Path(p.to_path_buf())
    }
}

impl From<Vec<u8>> for AudioSource {
    fn from(data: Vec<u8>) -> Self {
        Self::Bytes {
            data,
            file_name: None,
        }
    }
}

impl From<Vec<f32>> for AudioSource {
    fn from(samples: Vec<f32>) -> Self {
        Self::Samples(samples)
    }
}

impl TryFrom<serde_json::Value> for AudioSource {
    type Error = WidgetError;

    /// Accepts a string or an array of numbers.
    fn try_from(v: serde_json::Value) -> WidgetResult<Self> {
        match v {
            serde_json::Value::String(s) => Ok(Self::Text(s)),
            serde_json::Value::Array(items) => {
                let mut samples = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let x = item.as_f64().ok_or_else(|| {
                        WidgetError::unsupported(format!(
                            "sample array element {i} is not a number"
                        ))
                    })?;
                    samples.push(x as f32);
                }
                Ok(Self::Samples(samples))
            }
            serde_json::Value::Null => Err(WidgetError::invalid_source("audio source is null")),
            other => Err(WidgetError::unsupported(format!(
                "audio source must be a string or a sample array, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// `data:` URIs are already canonical.
pub fn is_data_uri(s: &str) -> bool {
    s.len() >= 5 && s[..5].eq_ignore_ascii_case("data:")
}

/// `http://` or `https://` followed by a host.
pub fn is_http_url(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    let rest = if lower.starts_with("https://") {
        &s[8..]
    } else if lower.starts_with("http://") {
        &s[7..]
    } else {
        return false;
    };
    !rest.is_empty()
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn truncated(s: &str) -> String {
    const MAX: usize = 64;
    match s.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/source.rs"]
mod tests;
