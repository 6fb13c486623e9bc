// src/sheets/settings.rs
//
// Settings sheet: rows of (group, key, value) after a header row.

use crate::config::settings::SettingRow;
use crate::core::csv;

/// Shape decoded rows into setting triples. Rows with fewer than three cells
/// are skipped; extra cells are ignored. A header-only sheet yields nothing.
pub fn parse(text: &str) -> Vec<SettingRow> {
    let rows = csv::parse_rows(text, ',');
    if rows.len() < 2 {
        return Vec::new();
    }

    rows[1..]
        .iter()
        .filter(|r| r.len() >= 3)
        .map(|r| SettingRow {
            group: s!(r[0].trim()),
            key: s!(r[1].trim()),
            value: s!(r[2].trim()),
        })
        .collect()
}
