use serde_json::Value;

use crate::{
    foundation::error::{WidgetError, WidgetResult},
    region::{codec::decode_regions, model::RegionList},
};

/// What the widget last reported.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetState {
    /// Not initialized on this rerun, or ready without edits yet (`null`, `0` or `1`).
    Pending,
    /// Current regions and the time of the last change.
    Ready {
        /// Regions as the user left them.
        regions: RegionList,
        /// Change timestamp in milliseconds.
        ts: f64,
    },
}

impl WidgetState {
    /// Decode a bridge return value.
    pub fn from_value(value: &Value) -> WidgetResult<Self> {
        match value {
            Value::Null | Value::Number(_) => Ok(Self::Pending),
            Value::Object(obj) => {
                let regions = match obj.get("regions") {
                    Some(Value::Array(items)) => decode_regions(items)?,
                    Some(Value::Null) | None => RegionList::new(),
                    Some(other) => {
                        return Err(WidgetError::malformed_state(format!(
                            "regions must be a list, got {other}"
                        )));
                    }
                };
                let ts = obj
                    .get("ts")
                    .and_then(Value::as_f64)
                    .ok_or_else(|| WidgetError::malformed_state("missing numeric 'ts'"))?;
                Ok(Self::Ready { regions, ts })
            }
            other => Err(WidgetError::malformed_state(format!(
                "expected a number or a mapping, got {other}"
            ))),
        }
    }

    /// `true` for [`WidgetState::Ready`].
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Reported regions, if any.
    pub fn regions(&self) -> Option<&RegionList> {
        match self {
            Self::Ready { regions, .. } => Some(regions),
            Self::Pending => None,
        }
    }

    /// Reported change timestamp, if any.
    pub fn ts(&self) -> Option<f64> {
        match self {
            Self::Ready { ts, .. } => Some(*ts),
            Self::Pending => None,
        }
    }
}

/// Caller-side region state kept in step with the widget across reruns.
///
/// A reported state is adopted only when its `ts` differs from the last adopted one, so
/// replaying the same report does not clobber regions the caller changed since.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionSync {
    regions: RegionList,
    last_ts: Option<f64>,
}

impl RegionSync {
    /// Start from `regions` with no adopted report.
    pub fn new(regions: RegionList) -> Self {
        Self {
            regions,
            last_ts: None,
        }
    }

    /// Adopt `state` if it carries a new timestamp. Returns whether the regions changed hands.
    pub fn observe(&mut self, state: &WidgetState) -> bool {
        let WidgetState::Ready { regions, ts } = state else {
            return false;
        };
        if self.last_ts == Some(*ts) {
            return false;
        }
        tracing::debug!(ts, regions = regions.len(), "adopting widget regions");
        self.regions = regions.clone();
        self.last_ts = Some(*ts);
        true
    }

    /// Replace the regions from the caller side. The last adopted timestamp is kept.
    pub fn set_regions(&mut self, regions: RegionList) {
        self.regions = regions;
    }

    /// Current regions.
    pub fn regions(&self) -> &RegionList {
        &self.regions
    }

    /// Timestamp of the last adopted report.
    pub fn last_ts(&self) -> Option<f64> {
        self.last_ts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/state.rs"]
mod tests;
