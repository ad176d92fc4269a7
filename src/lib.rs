//! Host-side binding for an interactive waveform widget.
//!
//! The crate prepares everything the browser widget needs and decodes what it sends back:
//!
//! - Resolve an audio reference (path, URL, bytes, stream or samples) with [`AudioResolver`]
//! - Encode regions, display options and plugin selections into the widget's wire mappings
//! - Hand the assembled [`WidgetPayload`] to a host [`WidgetBridge`] and read the
//!   [`WidgetState`] it reports
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Audio-source resolution.
pub mod audio;
/// Waveform display options and region palettes.
pub mod options;
/// Plugin selection and option bundles.
pub mod plugins;
/// Region annotations.
pub mod region;
/// Widget entry point and state.
pub mod widget;

pub use crate::foundation::config::{
    ARRAY_SAMPLE_RATE, COMPONENT_NAME, ComponentConfig, ComponentSource, DEFAULT_DEV_URL,
    ResolverConfig,
};
pub use crate::foundation::error::{WidgetError, WidgetResult};

pub use crate::audio::fetch::{HttpFetch, UreqFetcher};
pub use crate::audio::resolve::{
    AudioResolver, MemoizedResolver, ResolveMode, ResolvedAudio, SourceResolver,
};
pub use crate::audio::serve::{HostSession, MediaStore, SessionLocator, StaticSession};
pub use crate::audio::source::AudioSource;
pub use crate::options::colormap::Colormap;
pub use crate::options::wave::{WaveOptions, WaveWidth};
pub use crate::plugins::config::{PluginConfig, PluginConfigList, PluginName};
pub use crate::region::model::{Region, RegionList};
pub use crate::widget::bridge::WidgetBridge;
pub use crate::widget::component::{
    PluginSelection, RegionInput, WaveSurferArgs, Wavesurfer, WidgetPayload, wavesurfer,
};
pub use crate::widget::state::{RegionSync, WidgetState};
