use serde_json::{Map, Value};

use crate::{
    foundation::error::{WidgetError, WidgetResult},
    region::model::{Region, RegionList},
};

/// Encode one region as `{start, end, content, color, drag, resize[, id]}`.
///
/// Non-finite bounds have no JSON form and come out as `null`; [`check_bounds`] rejects them
/// up front.
pub fn encode_region(region: &Region) -> Map<String, Value> {
    let mut m = Map::new();
    m.insert("start".to_string(), Value::from(region.start));
    m.insert("end".to_string(), Value::from(region.end));
    m.insert("content".to_string(), Value::from(region.content.clone()));
    m.insert(
        "color".to_string(),
        region.color.clone().map(Value::from).unwrap_or(Value::Null),
    );
    m.insert("drag".to_string(), Value::from(region.draggable));
    m.insert("resize".to_string(), Value::from(region.resizable));
    if let Some(id) = &region.id {
        m.insert("id".to_string(), Value::from(id.clone()));
    }
    m
}

/// Encode a list in order.
pub fn encode_regions(regions: &RegionList) -> Vec<Map<String, Value>> {
    regions.iter().map(encode_region).collect()
}

/// Decode one mapping; `index` is only used for error reporting.
pub fn decode_region(index: usize, value: &Value) -> WidgetResult<Region> {
    let obj = value.as_object().ok_or_else(|| {
        WidgetError::malformed_region(index, "expected a mapping")
    })?;
    for field in ["start", "end"] {
        match obj.get(field) {
            None | Some(Value::Null) => {
                return Err(WidgetError::malformed_region(
                    index,
                    format!("missing numeric field '{field}'"),
                ));
            }
            Some(v) if !v.is_number() => {
                return Err(WidgetError::malformed_region(
                    index,
                    format!("field '{field}' must be a number"),
                ));
            }
            Some(_) => {}
        }
    }

    serde_json::from_value(value.clone())
        .map_err(|e| WidgetError::malformed_region(index, e.to_string()))
}

/// Decode widget-returned mappings, preserving order.
pub fn decode_regions(values: &[Value]) -> WidgetResult<RegionList> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| decode_region(i, v))
        .collect()
}

/// Reject regions whose `start` or `end` is NaN or infinite.
pub fn check_bounds(regions: &RegionList) -> WidgetResult<()> {
    for (i, r) in regions.iter().enumerate() {
        if !r.start.is_finite() || !r.end.is_finite() {
            return Err(WidgetError::malformed_region(
                i,
                format!("non-finite bounds ({}, {})", r.start, r.end),
            ));
        }
    }
    Ok(())
}

impl RegionList {
    /// Bulk [`encode_regions`].
    pub fn to_maps(&self) -> Vec<Map<String, Value>> {
        encode_regions(self)
    }

    /// Bulk [`decode_regions`].
    pub fn from_maps(values: &[Value]) -> WidgetResult<Self> {
        decode_regions(values)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/region/codec.rs"]
mod tests;
