//! Host capabilities needed to hand the widget a served URL instead of an inline payload.

use crate::foundation::error::WidgetResult;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Origin of the browser request that owns the current script run.
pub struct HostSession {
    /// Scheme without `://`, e.g. `https`.
    pub protocol: String,
    /// Host and optional port, e.g. `dash.example.com:8501`.
    pub host: String,
}

impl HostSession {
    /// Build a session origin.
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Join this origin with a server-relative `path`.
    pub fn url_for(&self, path: &str) -> String {
        let protocol = self.protocol.trim_end_matches("://").trim_end_matches(':');
        let host = self.host.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{protocol}://{host}{path}")
        } else {
            format!("{protocol}://{host}/{path}")
        }
    }
}

/// Locates the host session active for the current script run.
pub trait SessionLocator: Send + Sync {
    /// `None` when no browser session is attached (e.g. the script runs headless).
    fn current_session(&self) -> Option<HostSession>;
}

/// Registers media with the host so its static file server can serve it.
pub trait MediaStore: Send + Sync {
    /// Store `bytes` and return the server-relative path they are served under.
    ///
    /// `name_hint` is the original file name when known.
    fn register(&self, bytes: &[u8], mime: &str, name_hint: Option<&str>) -> WidgetResult<String>;
}

/// A fixed session, for hosts that know their origin up front.
#[derive(Clone, Debug)]
pub struct StaticSession(pub HostSession);

impl SessionLocator for StaticSession {
    fn current_session(&self) -> Option<HostSession> {
        Some(self.0.clone())
    }
}
