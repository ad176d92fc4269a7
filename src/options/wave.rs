use serde_json::{Map, Value};

use crate::foundation::error::{WidgetError, WidgetResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Waveform width: a pixel count or a CSS length such as `"100%"`.
pub enum WaveWidth {
    /// Fixed width in pixels.
    Pixels(u32),
    /// CSS length string.
    Relative(String),
}

impl Default for WaveWidth {
    fn default() -> Self {
        Self::Relative("100%".to_string())
    }
}

impl From<WaveWidth> for Value {
    fn from(w: WaveWidth) -> Self {
        match w {
            WaveWidth::Pixels(px) => Value::from(px),
            WaveWidth::Relative(s) => Value::from(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Appearance and behavior of the waveform.
///
/// Every field has a fixed default, so `WaveOptions { height: 128, ..Default::default() }` is
/// the usual way to override a few.
pub struct WaveOptions {
    /// Color of the unplayed waveform.
    pub wave_color: String,
    /// Color of the played part.
    pub progress_color: String,
    /// Playback cursor width in pixels.
    pub cursor_width: u32,
    /// Minimum horizontal zoom.
    pub min_px_per_sec: u32,
    /// Stretch to the container width.
    pub fill_parent: bool,
    /// Seek by dragging on the waveform.
    pub drag_to_seek: bool,
    /// Scroll the container during playback.
    pub auto_scroll: bool,
    /// Keep the cursor centered while scrolling.
    pub auto_center: bool,
    /// Decoding sample rate used by the widget.
    pub sample_rate: u32,
    /// Waveform height in pixels.
    pub height: u32,
    /// Waveform width.
    pub width: WaveWidth,
    /// Bar width in pixels; `0` draws a continuous wave.
    pub bar_width: u32,
    /// Gap between bars in pixels.
    pub bar_gap: u32,
    /// Bar corner radius in pixels.
    pub bar_radius: u32,
    /// Stretch the waveform to full height.
    pub normalize: bool,
    /// Hide the horizontal scrollbar.
    pub hide_scrollbar: bool,
    /// Region fill opacity in `[0, 1]`.
    pub region_opacity: f64,
    /// How much region colors are lightened on hover.
    pub region_lightening: u32,
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            wave_color: "violet".to_string(),
            progress_color: "purple".to_string(),
            cursor_width: 0,
            min_px_per_sec: 100,
            fill_parent: true,
            drag_to_seek: true,
            auto_scroll: true,
            auto_center: true,
            sample_rate: 44_100,
            height: 240,
            width: WaveWidth::default(),
            bar_width: 0,
            bar_gap: 0,
            bar_radius: 2,
            normalize: true,
            hide_scrollbar: true,
            region_opacity: 0.2,
            region_lightening: 50,
        }
    }
}

impl WaveOptions {
    /// Complete mapping of every option; see [`encode_options`].
    pub fn to_map(&self) -> Map<String, Value> {
        encode_options(self)
    }
}

/// Project every field to its camelCase key. The widget always receives all keys.
pub fn encode_options(o: &WaveOptions) -> Map<String, Value> {
    let mut m = Map::new();
    m.insert("waveColor".into(), o.wave_color.clone().into());
    m.insert("progressColor".into(), o.progress_color.clone().into());
    m.insert("cursorWidth".into(), o.cursor_width.into());
    m.insert("minPxPerSec".into(), o.min_px_per_sec.into());
    m.insert("fillParent".into(), o.fill_parent.into());
    m.insert("dragToSeek".into(), o.drag_to_seek.into());
    m.insert("autoScroll".into(), o.auto_scroll.into());
    m.insert("autoCenter".into(), o.auto_center.into());
    m.insert("sampleRate".into(), o.sample_rate.into());
    m.insert("height".into(), o.height.into());
    m.insert("width".into(), o.width.clone().into());
    m.insert("barWidth".into(), o.bar_width.into());
    m.insert("barGap".into(), o.bar_gap.into());
    m.insert("barRadius".into(), o.bar_radius.into());
    m.insert("normalize".into(), o.normalize.into());
    m.insert("hideScrollbar".into(), o.hide_scrollbar.into());
    m.insert("regionOpacity".into(), o.region_opacity.into());
    m.insert("regionLightening".into(), o.region_lightening.into());
    m
}

/// Read a possibly partial mapping; missing keys take their defaults.
pub fn decode_options(value: &Value) -> WidgetResult<WaveOptions> {
    if !value.is_object() {
        return Err(WidgetError::serde("wave options must be a mapping"));
    }
    serde_json::from_value(value.clone())
        .map_err(|e| WidgetError::serde(format!("wave options: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/options/wave.rs"]
mod tests;
