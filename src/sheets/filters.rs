// src/sheets/filters.rs
//
// Filter-definition sheet: rows of (group, category, label) after a header
// row. Consumed only to build the selector UI.

use crate::core::csv;
use crate::data::FilterDef;

pub fn parse(text: &str) -> Vec<FilterDef> {
    let rows = csv::parse_rows(text, ',');
    if rows.len() < 2 {
        return Vec::new();
    }

    rows[1..]
        .iter()
        .filter(|r| r.len() >= 3)
        .map(|r| FilterDef {
            group: s!(r[0].trim()),
            category: s!(r[1].trim()),
            label: s!(r[2].trim()),
        })
        .collect()
}

/// Group names in first-appearance order, for stable selector layout.
pub fn group_order(defs: &[FilterDef]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for d in defs {
        if !out.iter().any(|g| *g == d.group) {
            out.push(d.group.clone());
        }
    }
    out
}
