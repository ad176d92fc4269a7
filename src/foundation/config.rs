use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::foundation::error::{WidgetError, WidgetResult};

/// Registered component name shared by both release and dev declarations.
pub const COMPONENT_NAME: &str = "wavesurfer";

/// Dev endpoint used when `RELEASE` is not `True` and no override is set.
pub const DEFAULT_DEV_URL: &str = "http://localhost:5432";

/// Sample rate assumed when a raw sample array is encoded to WAV.
///
/// Independent of [`crate::WaveOptions::sample_rate`].
pub const ARRAY_SAMPLE_RATE: u32 = 16_000;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Knobs for [`crate::AudioResolver`].
pub struct ResolverConfig {
    /// Request timeout for remote downloads. `None` blocks until the server answers or the
    /// connection drops.
    ///
    /// Defaults to 30 seconds.
    pub fetch_timeout: Option<Duration>,
    /// TCP connect timeout for remote downloads.
    pub connect_timeout: Duration,
    /// Sample rate used when encoding sample arrays.
    pub array_sample_rate: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Some(Duration::from_secs(30)),
            connect_timeout: Duration::from_secs(10),
            array_sample_rate: ARRAY_SAMPLE_RATE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where the host should load the front-end bundle from.
pub enum ComponentSource {
    /// Local dev server (`npm start`).
    DevUrl(String),
    /// Prebuilt static bundle directory.
    BuildDir(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Declaration handed to the host when registering the widget.
pub struct ComponentConfig {
    /// Registered component name.
    pub name: String,
    /// Bundle location.
    pub source: ComponentSource,
}

impl ComponentConfig {
    /// Read `RELEASE` and `WAVESURFER_DEV_URL` from the environment, loading `.env` first.
    ///
    /// `package_dir` is the directory holding `frontend/dist` for release builds.
    pub fn from_env(package_dir: impl AsRef<Path>) -> WidgetResult<Self> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("no .env loaded: {e}");
        }
        let release = std::env::var("RELEASE").ok();
        let dev_url = std::env::var("WAVESURFER_DEV_URL").ok();
        Self::from_vars(release.as_deref(), dev_url.as_deref(), package_dir)
    }

    /// Build a declaration from already-read variables.
    ///
    /// Release mode is on unless `release` is present and not exactly `"True"`.
    pub fn from_vars(
        release: Option<&str>,
        dev_url: Option<&str>,
        package_dir: impl AsRef<Path>,
    ) -> WidgetResult<Self> {
        let is_release = release.unwrap_or("True") == "True";
        let source = if is_release {
            let build_dir = absolute(&package_dir.as_ref().join("frontend").join("dist"))?;
            if !build_dir.is_dir() {
                return Err(WidgetError::config(format!(
                    "build directory '{}' does not exist",
                    build_dir.display()
                )));
            }
            ComponentSource::BuildDir(build_dir)
        } else {
            ComponentSource::DevUrl(dev_url.unwrap_or(DEFAULT_DEV_URL).to_string())
        };

        Ok(Self {
            name: COMPONENT_NAME.to_string(),
            source,
        })
    }

    /// `true` when the declaration points at a prebuilt bundle.
    pub fn is_release(&self) -> bool {
        matches!(self.source, ComponentSource::BuildDir(_))
    }
}

fn absolute(path: &Path) -> WidgetResult<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        WidgetError::config(format!("resolve absolute path '{}': {e}", path.display()))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
