use std::{
    collections::HashMap,
    io::Read,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::{
    audio::{
        fetch::{HttpFetch, UreqFetcher},
        mime::{MediaKind, mime_for_name},
        serve::{MediaStore, SessionLocator},
        source::{AudioSource, is_data_uri, is_http_url},
        wav::encode_wav_mono_i16,
    },
    foundation::{
        config::ResolverConfig,
        error::{WidgetError, WidgetResult},
    },
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Canonical audio reference the widget can load directly: a URL or a `data:` URI.
pub struct ResolvedAudio(String);

impl ResolvedAudio {
    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// `true` when the payload is inlined.
    pub fn is_data_uri(&self) -> bool {
        is_data_uri(&self.0)
    }

    /// Decode an inlined payload into `(mime, bytes)`. `None` for URLs or non-base64 URIs.
    pub fn decode_data_uri(&self) -> Option<(&str, Vec<u8>)> {
        let rest = self.0.get(5..).filter(|_| self.is_data_uri())?;
        let (meta, payload) = rest.split_once(',')?;
        let mime = meta.strip_suffix(";base64")?;
        let bytes = BASE64.decode(payload).ok()?;
        Some((mime, bytes))
    }
}

impl std::fmt::Display for ResolvedAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedAudio {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build `data:<mime>;base64,<payload>`.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

#[derive(Clone, Default)]
/// How resolved media reaches the widget.
pub enum ResolveMode {
    /// Embed everything as `data:` URIs; remote URLs are downloaded.
    #[default]
    Inline,
    /// Register media with the host and return `<protocol>://<host><path>`.
    Served {
        /// Finds the origin of the active browser session.
        session: Arc<dyn SessionLocator>,
        /// Host media registry returning served paths.
        media: Arc<dyn MediaStore>,
    },
    /// Local development: files are expected at `<base_url>/<file name>`.
    DevServer {
        /// Dev server origin, e.g. `http://localhost:8000`.
        base_url: String,
    },
}

impl std::fmt::Debug for ResolveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline => f.write_str("Inline"),
            Self::Served { .. } => f.debug_struct("Served").finish_non_exhaustive(),
            Self::DevServer { base_url } => f
                .debug_struct("DevServer")
                .field("base_url", base_url)
                .finish(),
        }
    }
}

/// Anything that can turn an [`AudioSource`] into a [`ResolvedAudio`].
pub trait SourceResolver: Send + Sync {
    /// Resolve an audio reference. `None` is [`WidgetError::InvalidSource`].
    fn resolve(&self, source: Option<AudioSource>) -> WidgetResult<ResolvedAudio>;
}

/// Turns caller-supplied audio references into strings the widget can consume.
///
/// Plain resolvers never cache: resolving the same file twice reads it twice. Wrap in
/// [`MemoizedResolver`] to reuse results.
#[derive(Clone)]
pub struct AudioResolver {
    mode: ResolveMode,
    config: ResolverConfig,
    fetcher: Arc<dyn HttpFetch>,
}

impl std::fmt::Debug for AudioResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioResolver")
            .field("mode", &self.mode)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for AudioResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioResolver {
    /// Inline resolver with default config.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Inline resolver using `config` for downloads and sample encoding.
    pub fn with_config(config: ResolverConfig) -> Self {
        let fetcher = Arc::new(UreqFetcher::new(&config));
        Self {
            mode: ResolveMode::Inline,
            config,
            fetcher,
        }
    }

    /// Replace the delivery mode.
    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the download backend.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn HttpFetch>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Active delivery mode.
    pub fn mode(&self) -> &ResolveMode {
        &self.mode
    }

    /// Active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve an image reference (e.g. the overlay plugin's `imageUrl`).
    ///
    /// Same dispatch as audio, with the image suffix table. Sample arrays are rejected.
    pub fn resolve_image(&self, source: Option<AudioSource>) -> WidgetResult<String> {
        let source =
            source.ok_or_else(|| WidgetError::invalid_source("image source is required"))?;
        self.resolve_kind(source, MediaKind::Image)
    }

    fn resolve_kind(&self, source: AudioSource, kind: MediaKind) -> WidgetResult<String> {
        tracing::debug!(source = source.kind(), mode = ?self.mode, "resolving");
        match source {
            AudioSource::Text(s) => self.resolve_text(&s, kind),
            AudioSource::Path(p) => self.resolve_path(&p, kind),
            AudioSource::Bytes { data, file_name } => {
                self.deliver_bytes(&data, file_name.as_deref(), kind)
            }
            AudioSource::Stream {
                mut reader,
                file_name,
            } => {
                let mut data = Vec::new();
                reader
                    .read_to_end(&mut data)
                    .context("read audio stream")?;
                self.deliver_bytes(&data, file_name.as_deref(), kind)
            }
            AudioSource::Samples(samples) => {
                if kind == MediaKind::Image {
                    return Err(WidgetError::unsupported(
                        "sample arrays cannot be used as images",
                    ));
                }
                let wav = encode_wav_mono_i16(&samples, self.config.array_sample_rate)?;
                self.deliver(&wav, "audio/wav", None)
            }
        }
    }

    fn resolve_text(&self, s: &str, kind: MediaKind) -> WidgetResult<String> {
        if is_data_uri(s) {
            return Ok(s.to_string());
        }

        let path = Path::new(s);
        if path.is_file() {
            return self.resolve_file(path, kind);
        }

        if is_http_url(s) {
            return match self.mode {
                ResolveMode::Inline => {
                    let body = self.fetcher.fetch(s)?;
                    // Content type of the response is not consulted.
                    Ok(data_uri(kind.default_mime(), &body))
                }
                ResolveMode::Served { .. } | ResolveMode::DevServer { .. } => Ok(s.to_string()),
            };
        }

        Err(WidgetError::SourceNotFound(PathBuf::from(s)))
    }

    fn resolve_path(&self, path: &Path, kind: MediaKind) -> WidgetResult<String> {
        if path.is_file() {
            return self.resolve_file(path, kind);
        }
        match path.to_str() {
            Some(s) if is_http_url(s) || is_data_uri(s) => self.resolve_text(s, kind),
            _ => Err(WidgetError::SourceNotFound(path.to_path_buf())),
        }
    }

    fn resolve_file(&self, path: &Path, kind: MediaKind) -> WidgetResult<String> {
        let file_name = path.file_name().and_then(|s| s.to_str());

        if let ResolveMode::DevServer { base_url } = &self.mode {
            let file_name = file_name.ok_or_else(|| {
                WidgetError::unsupported(format!(
                    "'{}' has no utf-8 file name to serve",
                    path.display()
                ))
            })?;
            return Ok(format!("{}/{file_name}", base_url.trim_end_matches('/')));
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("read media bytes from '{}'", path.display()))?;
        self.deliver(&bytes, mime_for_name(path, kind), file_name)
    }

    fn deliver_bytes(
        &self,
        bytes: &[u8],
        file_name: Option<&str>,
        kind: MediaKind,
    ) -> WidgetResult<String> {
        let mime = file_name
            .map(|n| mime_for_name(n, kind))
            .unwrap_or(kind.default_mime());
        self.deliver(bytes, mime, file_name)
    }

    fn deliver(&self, bytes: &[u8], mime: &str, name_hint: Option<&str>) -> WidgetResult<String> {
        match &self.mode {
            ResolveMode::Inline | ResolveMode::DevServer { .. } => Ok(data_uri(mime, bytes)),
            ResolveMode::Served { session, media } => {
                let session = session
                    .current_session()
                    .ok_or(WidgetError::NoActiveSession)?;
                let path = media.register(bytes, mime, name_hint)?;
                Ok(session.url_for(&path))
            }
        }
    }
}

impl SourceResolver for AudioResolver {
    #[tracing::instrument(level = "debug", skip_all)]
    fn resolve(&self, source: Option<AudioSource>) -> WidgetResult<ResolvedAudio> {
        let source =
            source.ok_or_else(|| WidgetError::invalid_source("audio source is required"))?;
        self.resolve_kind(source, MediaKind::Audio)
            .map(ResolvedAudio)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum MemoKey {
    Text(String),
    Path(PathBuf),
    Bytes(Vec<u8>, Option<String>),
    Samples(Vec<u32>),
}

impl MemoKey {
    fn for_source(source: &AudioSource) -> Option<Self> {
        match source {
            AudioSource::Text(s) => Some(Self::Text(s.clone())),
            AudioSource::Path(p) => Some(Self::Path(p.clone())),
            AudioSource::Bytes { data, file_name } => {
                Some(Self::Bytes(data.clone(), file_name.clone()))
            }
            AudioSource::Samples(s) => Some(Self::Samples(s.iter().map(|x| x.to_bits()).collect())),
            AudioSource::Stream { .. } => None,
        }
    }
}

/// Resolver that remembers results for the lifetime of the wrapper.
///
/// Keys are the input values themselves; a file whose contents change on disk keeps its first
/// resolution. Streams are never cached.
#[derive(Debug)]
pub struct MemoizedResolver {
    inner: AudioResolver,
    cache: Mutex<HashMap<MemoKey, ResolvedAudio>>,
}

impl MemoizedResolver {
    /// Wrap `inner`.
    pub fn new(inner: AudioResolver) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached resolutions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` when nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<MemoKey, ResolvedAudio>> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SourceResolver for MemoizedResolver {
    fn resolve(&self, source: Option<AudioSource>) -> WidgetResult<ResolvedAudio> {
        let key = source.as_ref().and_then(MemoKey::for_source);
        if let Some(k) = &key
            && let Some(hit) = self.lock().get(k)
        {
            tracing::debug!("resolution cache hit");
            return Ok(hit.clone());
        }

        let resolved = self.inner.resolve(source)?;
        if let Some(k) = key {
            self.lock().insert(k, resolved.clone());
        }
        Ok(resolved)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/resolve.rs"]
mod tests;
