use std::collections::HashSet;

use crate::region::color::region_id;

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A labeled time interval drawn over the waveform.
///
/// Identity is the position within the owning [`RegionList`] unless the widget supplied an `id`.
pub struct Region {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds. Not checked against `start`.
    pub end: f64,
    /// Label text.
    #[serde(default)]
    pub content: String,
    /// CSS color; the widget picks one from the colormap when absent.
    #[serde(default)]
    pub color: Option<String>,
    /// Whether the region can be dragged.
    #[serde(rename = "drag", alias = "draggable", default = "default_true")]
    pub draggable: bool,
    /// Whether the region edges can be resized.
    #[serde(rename = "resize", alias = "resizable", default = "default_true")]
    pub resizable: bool,
    /// Widget-assigned identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Region {
    /// Draggable, resizable region with no color and no id.
    pub fn new(start: f64, end: f64, content: impl Into<String>) -> Self {
        Self {
            start,
            end,
            content: content.into(),
            color: None,
            draggable: true,
            resizable: true,
            id: None,
        }
    }

    /// Copy with `color` set.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Copy with `draggable` set.
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Copy with `resizable` set.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Copy with `id` set.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// `start <= end`. Informational only; nothing rejects unordered regions.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Length in seconds (negative for unordered regions).
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Ordered regions. Order drives display order and positional identity.
pub struct RegionList {
    regions: Vec<Region>,
}

impl RegionList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region.
    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// `true` when there are no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region at `index`.
    pub fn get(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    /// Take the underlying vector.
    pub fn into_vec(self) -> Vec<Region> {
        self.regions
    }

    /// New list where every region carries the id the widget would derive for it, keeping
    /// only the first region per id.
    pub fn with_widget_ids(&self) -> Self {
        let mut seen = HashSet::new();
        self.regions
            .iter()
            .map(|r| match &r.id {
                Some(_) => r.clone(),
                None => r.clone().with_id(region_id(r)),
            })
            .filter(|r| seen.insert(r.id.clone()))
            .collect()
    }
}

impl From<Vec<Region>> for RegionList {
    fn from(regions: Vec<Region>) -> Self {
        Self { regions }
    }
}

impl FromIterator<Region> for RegionList {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RegionList {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl<'a> IntoIterator for &'a RegionList {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

impl std::ops::Index<usize> for RegionList {
    type Output = Region;

    fn index(&self, index: usize) -> &Region {
        &self.regions[index]
    }
}
