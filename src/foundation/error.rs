use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Top-level error taxonomy used by resolver, codec and widget APIs.
#[derive(thiserror::Error, Debug)]
pub enum WidgetError {
    /// No audio reference was supplied.
    #[error("invalid source: {0}")]
    InvalidSource(String),

    /// A path-shaped string or path does not exist on disk.
    #[error("source not found: '{}'", .0.display())]
    SourceNotFound(PathBuf),

    /// Fetching a remote source failed or returned a non-success status.
    #[error("download error: '{url}': {reason}")]
    Download {
        /// URL that was requested.
        url: String,
        /// Transport error or HTTP status description.
        reason: String,
    },

    /// The runtime shape of a source matches none of the recognized forms.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Plugin name outside the fixed lookup table.
    #[error("unknown plugin: '{0}'")]
    UnknownPlugin(String),

    /// A region mapping is missing required fields or has the wrong shape.
    #[error("malformed region at index {index}: {reason}")]
    MalformedRegion {
        /// Position of the offending entry in the inbound sequence.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The widget returned a value that is neither the sentinel nor a state mapping.
    #[error("malformed widget state: {0}")]
    MalformedState(String),

    /// Served-URL resolution was requested but the host has no active session.
    #[error("no active host session to build a served url")]
    NoActiveSession,

    /// Invalid component or resolver configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WidgetError {
    /// Build a [`WidgetError::InvalidSource`] value.
    pub fn invalid_source(msg: impl Into<String>) -> Self {
        Self::InvalidSource(msg.into())
    }

    /// Build a [`WidgetError::Download`] value.
    pub fn download(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`WidgetError::UnsupportedType`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedType(msg.into())
    }

    /// Build a [`WidgetError::MalformedRegion`] value.
    pub fn malformed_region(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRegion {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`WidgetError::MalformedState`] value.
    pub fn malformed_state(msg: impl Into<String>) -> Self {
        Self::MalformedState(msg.into())
    }

    /// Build a [`WidgetError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`WidgetError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
