use std::sync::Arc;

use serde_json::{Map, Value};

use crate::{
    audio::{
        resolve::{AudioResolver, ResolvedAudio, SourceResolver},
        source::AudioSource,
    },
    foundation::error::WidgetResult,
    options::wave::{WaveOptions, encode_options},
    plugins::config::{DEFAULT_PLUGINS, PluginConfigList, encode_plugins, expand},
    region::{
        codec::{check_bounds, decode_regions, encode_regions},
        model::{Region, RegionList},
    },
    widget::{bridge::WidgetBridge, state::WidgetState},
};

/// Regions handed to the entry point.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionInput {
    /// Typed regions.
    List(RegionList),
    /// Raw mappings; validated and normalized before sending.
    Maps(Vec<Value>),
}

impl From<RegionList> for RegionInput {
    fn from(list: RegionList) -> Self {
        Self::List(list)
    }
}

impl From<Vec<Region>> for RegionInput {
    fn from(regions: Vec<Region>) -> Self {
        Self::List(regions.into())
    }
}

impl From<Vec<Value>> for RegionInput {
    fn from(maps: Vec<Value>) -> Self {
        Self::Maps(maps)
    }
}

/// Plugins handed to the entry point.
#[derive(Clone, Debug, PartialEq)]
pub enum PluginSelection {
    /// Names expanded to their default bundles.
    Names(Vec<String>),
    /// Fully configured plugins.
    Configs(PluginConfigList),
}

impl PluginSelection {
    /// Selection by name.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }

    fn into_list(self) -> WidgetResult<PluginConfigList> {
        match self {
            Self::Names(names) => expand(&names),
            Self::Configs(list) => Ok(list),
        }
    }
}

impl From<PluginConfigList> for PluginSelection {
    fn from(list: PluginConfigList) -> Self {
        Self::Configs(list)
    }
}

/// Arguments of one widget render.
#[derive(Debug)]
pub struct WaveSurferArgs {
    /// Audio to play. Required.
    pub audio_src: Option<AudioSource>,
    /// Regions to draw.
    pub regions: Option<RegionInput>,
    /// Host widget key.
    pub key: Option<String>,
    /// Display options. Defaults are sent when absent.
    pub wave_options: Option<WaveOptions>,
    /// Palette for regions without an explicit color. Passed through unvalidated.
    pub region_colormap: Option<String>,
    /// Show the transport controls.
    pub show_controls: bool,
    /// Plugins to enable. `regions`, `timeline` and `zoom` when absent.
    pub plugins: Option<PluginSelection>,
}

impl Default for WaveSurferArgs {
    fn default() -> Self {
        Self {
            audio_src: None,
            regions: None,
            key: None,
            wave_options: None,
            region_colormap: None,
            show_controls: true,
            plugins: None,
        }
    }
}

impl WaveSurferArgs {
    /// Arguments for `audio` with every other field at its default.
    pub fn new(audio: impl Into<AudioSource>) -> Self {
        Self {
            audio_src: Some(audio.into()),
            ..Self::default()
        }
    }

    /// Set the regions.
    pub fn regions(mut self, regions: impl Into<RegionInput>) -> Self {
        self.regions = Some(regions.into());
        self
    }

    /// Set the host widget key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the display options.
    pub fn wave_options(mut self, options: WaveOptions) -> Self {
        self.wave_options = Some(options);
        self
    }

    /// Set the region palette.
    ///
    /// Any name is accepted; [`crate::Colormap`] lists the ones the widget ships with.
    pub fn region_colormap(mut self, colormap: impl Into<String>) -> Self {
        self.region_colormap = Some(colormap.into());
        self
    }

    /// Show or hide the transport controls.
    pub fn show_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    /// Set the plugins.
    pub fn plugins(mut self, plugins: impl Into<PluginSelection>) -> Self {
        self.plugins = Some(plugins.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Outbound mapping handed to the [`WidgetBridge`]. Field order is the wire key order.
pub struct WidgetPayload {
    /// Resolved audio URL or `data:` URI.
    pub audio_src: ResolvedAudio,
    /// Encoded regions; `null` when none were given.
    pub regions: Option<Vec<Map<String, Value>>>,
    /// Host widget key.
    pub key: Option<String>,
    /// Value the host reports before the widget first answers. Always `0`.
    pub default: u8,
    /// Complete option mapping.
    pub wave_options: Map<String, Value>,
    /// Region palette name.
    pub region_colormap: Option<String>,
    /// Show the transport controls.
    pub controls: bool,
    /// Encoded plugin list.
    pub plugin_configurations: Option<Vec<Map<String, Value>>>,
}

impl WidgetPayload {
    /// Payload as a JSON value.
    pub fn to_value(&self) -> WidgetResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Validate `args` and assemble the outbound payload.
///
/// Plugins and regions are checked before the audio is resolved, so a bad name or region
/// never costs a download.
pub fn build_payload(
    resolver: &dyn SourceResolver,
    args: WaveSurferArgs,
) -> WidgetResult<WidgetPayload> {
    let plugins = match args.plugins {
        Some(selection) => selection.into_list()?,
        None => PluginConfigList::from_names(&DEFAULT_PLUGINS),
    };

    let regions = match args.regions {
        Some(RegionInput::List(list)) => {
            check_bounds(&list)?;
            list
        }
        Some(RegionInput::Maps(maps)) => decode_regions(&maps)?,
        None => RegionList::new(),
    };

    let audio_src = resolver.resolve(args.audio_src)?;
    let wave_options = encode_options(&args.wave_options.unwrap_or_default());

    Ok(WidgetPayload {
        audio_src,
        regions: (!regions.is_empty()).then(|| encode_regions(&regions)),
        key: args.key,
        default: 0,
        wave_options,
        region_colormap: args.region_colormap,
        controls: args.show_controls,
        plugin_configurations: Some(encode_plugins(&plugins)),
    })
}

/// Waveform widget bound to a host bridge and an audio resolver.
pub struct Wavesurfer<B> {
    bridge: B,
    resolver: Arc<dyn SourceResolver>,
}

impl<B> std::fmt::Debug for Wavesurfer<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wavesurfer").finish_non_exhaustive()
    }
}

impl<B: WidgetBridge> Wavesurfer<B> {
    /// Widget using inline resolution with default settings.
    pub fn new(bridge: B) -> Self {
        Self {
            bridge,
            resolver: Arc::new(AudioResolver::new()),
        }
    }

    /// Replace the audio resolver.
    pub fn with_resolver(mut self, resolver: impl SourceResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Share an existing resolver (e.g. a memoized one) between widgets.
    pub fn with_shared_resolver(mut self, resolver: Arc<dyn SourceResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Assemble the payload without rendering.
    pub fn payload(&self, args: WaveSurferArgs) -> WidgetResult<WidgetPayload> {
        build_payload(self.resolver.as_ref(), args)
    }

    /// Render the widget and decode what it reported.
    #[tracing::instrument(skip_all, fields(key = ?args.key))]
    pub fn render(&self, args: WaveSurferArgs) -> WidgetResult<WidgetState> {
        let payload = self.payload(args)?;
        tracing::debug!(
            regions = payload.regions.as_ref().map_or(0, Vec::len),
            plugins = payload.plugin_configurations.as_ref().map_or(0, Vec::len),
            "rendering widget"
        );
        let value = self.bridge.render(&payload)?;
        WidgetState::from_value(&value).inspect_err(|e| {
            tracing::warn!("widget returned an unreadable state: {e}");
        })
    }
}

/// One-shot render with inline resolution.
pub fn wavesurfer<B: WidgetBridge>(bridge: B, args: WaveSurferArgs) -> WidgetResult<WidgetState> {
    Wavesurfer::new(bridge).render(args)
}

#[cfg(test)]
#[path = "../../tests/unit/widget/component.rs"]
mod tests;
