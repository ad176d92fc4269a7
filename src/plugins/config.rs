use std::str::FromStr;

use serde_json::{Map, Value};

use crate::{
    foundation::error::{WidgetError, WidgetResult},
    plugins::options::{
        HoverOptions, MinimapOptions, OverlayOptions, PluginOptions, RegionsOptions,
        SpectrogramOptions, TimelineOptions, ZoomOptions,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Optional widget features.
pub enum PluginName {
    /// Editable regions.
    Regions,
    /// Spectrogram view.
    Spectrogram,
    /// Time ruler.
    Timeline,
    /// Wheel zoom.
    Zoom,
    /// Pointer line and time label.
    Hover,
    /// Overview waveform.
    Minimap,
    /// Image over or under the waveform.
    Overlay,
}

/// Plugins enabled when the caller does not choose any.
pub const DEFAULT_PLUGINS: [PluginName; 3] =
    [PluginName::Regions, PluginName::Timeline, PluginName::Zoom];

impl PluginName {
    /// Every plugin, in declaration order.
    pub const ALL: [PluginName; 7] = [
        Self::Regions,
        Self::Spectrogram,
        Self::Timeline,
        Self::Zoom,
        Self::Hover,
        Self::Minimap,
        Self::Overlay,
    ];

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regions => "regions",
            Self::Spectrogram => "spectrogram",
            Self::Timeline => "timeline",
            Self::Zoom => "zoom",
            Self::Hover => "hover",
            Self::Minimap => "minimap",
            Self::Overlay => "overlay",
        }
    }

    /// Fixed default option bundle for this plugin.
    pub fn default_options(self) -> Map<String, Value> {
        match self {
            Self::Regions => RegionsOptions::default().to_map(),
            Self::Spectrogram => SpectrogramOptions::default().to_map(),
            Self::Timeline => TimelineOptions::default().to_map(),
            Self::Zoom => ZoomOptions::default().to_map(),
            Self::Hover => HoverOptions::default().to_map(),
            Self::Minimap => MinimapOptions::default().to_map(),
            Self::Overlay => OverlayOptions::default().to_map(),
        }
    }
}

impl std::fmt::Display for PluginName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluginName {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| WidgetError::UnknownPlugin(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One enabled plugin and its options.
pub struct PluginConfig {
    /// Which plugin.
    pub name: PluginName,
    /// Options passed to the plugin factory.
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl PluginConfig {
    /// Plugin with an explicit option mapping.
    pub fn new(name: PluginName, options: Map<String, Value>) -> Self {
        Self { name, options }
    }

    /// Plugin with its default bundle.
    pub fn with_defaults(name: PluginName) -> Self {
        Self::new(name, name.default_options())
    }

    /// Plugin configured from a typed bundle.
    pub fn with_options<O: PluginOptions>(options: &O) -> Self {
        Self::new(O::PLUGIN, options.to_map())
    }

    /// `{name, options}`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("name".to_string(), Value::from(self.name.as_str()));
        m.insert("options".to_string(), Value::Object(self.options.clone()));
        m
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Ordered plugin configurations. Order is the widget's registration and layering order.
pub struct PluginConfigList {
    plugins: Vec<PluginConfig>,
}

impl PluginConfigList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default bundles for typed names.
    pub fn from_names(names: &[PluginName]) -> Self {
        names.iter().copied().map(PluginConfig::with_defaults).collect()
    }

    /// Append a configuration.
    pub fn push(&mut self, config: PluginConfig) {
        self.plugins.push(config);
    }

    /// Number of plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// `true` when no plugin is enabled.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PluginConfig> {
        self.plugins.iter()
    }

    /// First configuration for `name`.
    pub fn get(&self, name: PluginName) -> Option<&PluginConfig> {
        self.plugins.iter().find(|p| p.name == name)
    }

    /// Read either a list of names or a list of `{name, options}` mappings.
    pub fn from_value(value: &Value) -> WidgetResult<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| WidgetError::serde("plugins must be a list"))?;
        items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(PluginConfig::with_defaults(name.parse()?)),
                Value::Object(obj) => {
                    let name = obj
                        .get("name")
                        .and_then(Value::as_str)
                        .ok_or_else(|| WidgetError::serde("plugin entry without a name"))?
                        .parse()?;
                    let options = match obj.get("options") {
                        None | Some(Value::Null) => Map::new(),
                        Some(Value::Object(m)) => m.clone(),
                        Some(_) => {
                            return Err(WidgetError::serde("plugin options must be a mapping"));
                        }
                    };
                    Ok(PluginConfig::new(name, options))
                }
                _ => Err(WidgetError::serde(
                    "plugin entries must be names or mappings",
                )),
            })
            .collect()
    }
}

impl FromIterator<PluginConfig> for PluginConfigList {
    fn from_iter<I: IntoIterator<Item = PluginConfig>>(iter: I) -> Self {
        Self {
            plugins: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<PluginConfig>> for PluginConfigList {
    fn from(plugins: Vec<PluginConfig>) -> Self {
        Self { plugins }
    }
}

impl<'a> IntoIterator for &'a PluginConfigList {
    type Item = &'a PluginConfig;
    type IntoIter = std::slice::Iter<'a, PluginConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.plugins.iter()
    }
}

/// Expand plugin names into their default configurations, in order.
///
/// Unknown names are [`WidgetError::UnknownPlugin`].
pub fn expand<S: AsRef<str>>(names: &[S]) -> WidgetResult<PluginConfigList> {
    names
        .iter()
        .map(|n| n.as_ref().parse().map(PluginConfig::with_defaults))
        .collect()
}

/// `[{name, options}, ...]`, order preserved.
pub fn encode_plugins(list: &PluginConfigList) -> Vec<Map<String, Value>> {
    list.iter().map(PluginConfig::to_map).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/plugins/config.rs"]
mod tests;
