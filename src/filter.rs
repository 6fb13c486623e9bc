// src/filter.rs
//
// Filter engine: free-text search + per-group category predicates over the
// activity set. All predicates are conjunctive; a group whose selected value
// is the "all" sentinel is bypassed. Output is an ordered index view — the
// set itself is never touched, so filtering is idempotent by construction.

use crate::data::{ActivitySet, Activity, FilteredView};

/// Category value meaning "do not restrict on this group".
pub const ALL_SENTINEL: &str = "all";

/// The theme group doubles as the flat single-category mode: its predicate
/// is exact tag membership, which is the flat variant's only predicate.
pub const THEME_GROUP: &str = "theme";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterQuery {
    pub search: String,
    pub selected: Vec<(String, String)>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat single-category mode: one tag-membership restriction, "all"
    /// meaning none. Same predicate path as the per-group mode.
    pub fn flat(category: &str) -> Self {
        Self {
            search: s!(),
            selected: vec![(s!(THEME_GROUP), s!(category))],
        }
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = s!(term);
        self
    }

    pub fn with_group(mut self, group: &str, value: &str) -> Self {
        self.selected.push((s!(group), s!(value)));
        self
    }
}

/// Recompute the filtered view. Runs fully on every call; cheap enough that
/// callers re-run it per keystroke.
pub fn filter_view<'a>(set: &'a ActivitySet, query: &FilterQuery) -> FilteredView<'a> {
    FilteredView::from_indices(set, filter_indices(set, query))
}

/// Ordered positions of all activities satisfying the query.
pub fn filter_indices(set: &ActivitySet, query: &FilterQuery) -> Vec<usize> {
    set.iter()
        .enumerate()
        .filter(|(_, a)| matches(a, query))
        .map(|(ix, _)| ix)
        .collect()
}

pub fn matches(a: &Activity, query: &FilterQuery) -> bool {
    let term = query.search.to_lowercase();
    let matches_search = a.title.to_lowercase().contains(&term)
        || a.description.to_lowercase().contains(&term);
    if !matches_search {
        return false;
    }

    query
        .selected
        .iter()
        .filter(|(_, value)| value != ALL_SENTINEL)
        .all(|(group, value)| group_matches(a, group, value))
}

/// Per-group matching. Any group this list does not recognize fails closed.
fn group_matches(a: &Activity, group: &str, value: &str) -> bool {
    match group {
        "location" => member_of(&a.location, value),
        "price" => price_in_range(&a.price, value),
        "age" => member_of(&a.age, value),
        "duration" => !a.duration.is_empty() && a.duration == value,
        "tour_type" => member_of(&a.tour_type, value),
        "environment" => member_of(&a.environment, value),
        THEME_GROUP => a.tags.iter().any(|t| t == value),
        _ => false,
    }
}

/// Substring membership with an emptiness guard: an activity with no value
/// for the field never matches a restriction on it.
fn member_of(field: &str, value: &str) -> bool {
    !field.is_empty() && field.contains(value)
}

/// Strip non-digits from the price text and test the remainder against one
/// of the six fixed ranges. Unparseable prices and unknown range labels are
/// both non-matches.
fn price_in_range(price: &str, range: &str) -> bool {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    let Ok(p) = digits.parse::<i64>() else {
        return false;
    };

    match range {
        "0-300" => p <= 300,
        "300-500" => p > 300 && p <= 500,
        "500-800" => p > 500 && p <= 800,
        "800-1000" => p > 800 && p <= 1000,
        "1000-1200" => p > 1000 && p <= 1200,
        "1200+" => p > 1200,
        _ => false,
    }
}
