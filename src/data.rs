// src/data.rs
//
// Canonical activity data and view-layer wrappers.
//
// - Activity: one normalized event/tour record. Also the JSON source shape:
//   a JSON array of these deserializes directly, bypassing decode/normalize.
// - ActivitySet: read-only holder for the loaded collection. Built once per
//   load; never mutated afterwards. Re-fetching builds a new set.
// - FilteredView: derived view produced by the filter engine — row indices
//   into the set, original order preserved, nothing cloned.

use serde::{Deserialize, Serialize};

/// One canonical activity record.
///
/// Optional text fields hold the empty string when the source had no value;
/// `tags` is always present, possibly empty. `image` is non-empty after
/// normalization (placeholder-defaulted).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "fullDescription")]
    pub full_description: String,
    pub date: String,
    pub location: String,
    pub image: String,
    pub price: String,
    pub tags: Vec<String>,
    pub organizer: String,
    pub link: String,
    pub age: String,
    pub duration: String,
    pub tour_type: String,
    pub environment: String,
}

/// One row of the filter-definition sheet. Populates selector UI only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterDef {
    pub group: String,
    pub category: String,
    pub label: String,
}

/// Authoritative, ordered activity collection for one load.
#[derive(Clone, Debug, Default)]
pub struct ActivitySet {
    activities: Vec<Activity>,
}

impl ActivitySet {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Detail-view lookup. Ids are line offsets, so gaps are possible and
    /// positional indexing would be wrong.
    pub fn get(&self, id: u32) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }
}

/// Zero-copy filtered view for display/export.
/// Holds positions of kept rows in the source set.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    pub row_ix: Vec<usize>,
    set: &'a ActivitySet,
}

impl<'a> FilteredView<'a> {
    pub fn from_indices(set: &'a ActivitySet, row_ix: Vec<usize>) -> Self {
        Self { row_ix, set }
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    /// Borrow a single activity by projected index (no cloning).
    pub fn activity(&self, i: usize) -> Option<&'a Activity> {
        self.row_ix.get(i).and_then(|&ix| self.set.activities().get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Activity> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.set.activities().get(ix))
    }

    /// Materialize owned records (for JSON output boundaries).
    pub fn to_owned_activities(&self) -> Vec<Activity> {
        self.iter().cloned().collect()
    }
}
