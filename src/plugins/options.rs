use serde_json::{Map, Value};

use crate::plugins::config::PluginName;

/// Typed option bundle for one plugin.
///
/// `Default` values are the bundles [`PluginName::default_options`] hands out.
pub trait PluginOptions: serde::Serialize {
    /// Plugin these options configure.
    const PLUGIN: PluginName;

    /// Flat mapping sent to the widget.
    fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(m)) => m,
            _ => Map::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Region editing.
pub struct RegionsOptions {
    /// Create regions by dragging on empty waveform.
    pub drag_selection: bool,
}

impl Default for RegionsOptions {
    fn default() -> Self {
        Self {
            drag_selection: true,
        }
    }
}

impl PluginOptions for RegionsOptions {
    const PLUGIN: PluginName = PluginName::Regions;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Spectrogram rendered under the waveform.
pub struct SpectrogramOptions {
    /// Draw frequency labels.
    pub labels: bool,
    /// Height in pixels.
    pub height: u32,
    /// One spectrogram per channel.
    pub split_channels: bool,
    /// FFT window size.
    pub fft_samples: u32,
}

impl Default for SpectrogramOptions {
    fn default() -> Self {
        Self {
            labels: true,
            height: 200,
            split_channels: false,
            fft_samples: 512,
        }
    }
}

impl PluginOptions for SpectrogramOptions {
    const PLUGIN: PluginName = PluginName::Spectrogram;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Time ruler.
pub struct TimelineOptions {
    /// Height in pixels.
    pub height: u32,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self { height: 10 }
    }
}

impl PluginOptions for TimelineOptions {
    const PLUGIN: PluginName = PluginName::Timeline;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Wheel zoom.
pub struct ZoomOptions {
    /// Zoom step per wheel tick.
    pub scale: f64,
    /// Upper bound in pixels per second.
    pub max_zoom: u32,
    /// Grow the step with the zoom level.
    pub exponential_zooming: bool,
    /// Steps between min and max zoom.
    pub iterations: u32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            scale: 0.5,
            max_zoom: 100,
            exponential_zooming: true,
            iterations: 100,
        }
    }
}

impl PluginOptions for ZoomOptions {
    const PLUGIN: PluginName = PluginName::Zoom;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Vertical line and time label following the pointer.
pub struct HoverOptions {
    /// Line color.
    pub line_color: String,
    /// Line width in pixels.
    pub line_width: u32,
    /// Label background color.
    pub label_background: String,
    /// Label text color.
    pub label_color: String,
    /// Label font size.
    pub label_size: String,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            line_color: "#ff0000".to_string(),
            line_width: 2,
            label_background: "#555".to_string(),
            label_color: "#fff".to_string(),
            label_size: "11px".to_string(),
        }
    }
}

impl PluginOptions for HoverOptions {
    const PLUGIN: PluginName = PluginName::Hover;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Small overview waveform.
pub struct MinimapOptions {
    /// Height in pixels.
    pub height: u32,
    /// Unplayed color.
    pub wave_color: String,
    /// Played color.
    pub progress_color: String,
}

impl Default for MinimapOptions {
    fn default() -> Self {
        Self {
            height: 20,
            wave_color: "#ddd".to_string(),
            progress_color: "#999".to_string(),
        }
    }
}

impl PluginOptions for MinimapOptions {
    const PLUGIN: PluginName = PluginName::Minimap;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Image drawn over or under the waveform (e.g. a precomputed spectrogram).
///
/// Use [`crate::AudioResolver::resolve_image`] to turn a local image into `image_url`.
pub struct OverlayOptions {
    /// URL or `data:` URI of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// `"overlay"` or `"underlay"`.
    pub position: String,
    /// Image opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            image_url: None,
            position: "overlay".to_string(),
            opacity: 1.0,
        }
    }
}

impl PluginOptions for OverlayOptions {
    const PLUGIN: PluginName = PluginName::Overlay;
}
