// src/normalize.rs
//
// Record normalizer: decoded CSV rows → canonical Activity sequence.
//
// The header-translation table is a constructor argument on purpose: the
// table arrives with the settings sheet, and making it explicit keeps the
// normalizer testable without any load-order assumptions.

use std::collections::HashMap;

use crate::config::consts::{ASSET_IMAGE_DIR, ASSET_ROOT, DEFAULT_IMAGE};
use crate::data::Activity;

pub struct Normalizer {
    field_map: HashMap<String, String>,
}

impl Normalizer {
    pub fn new(field_map: HashMap<String, String>) -> Self {
        Self { field_map }
    }

    /// Trim each header cell, translate it, or fall back to the lowercased
    /// header text for unmapped columns.
    pub fn canonical_headers(&self, header_row: &[String]) -> Vec<String> {
        header_row
            .iter()
            .map(|h| {
                let h = h.trim();
                match self.field_map.get(h) {
                    Some(canon) => canon.clone(),
                    None => h.to_lowercase(),
                }
            })
            .collect()
    }

    /// First row is the header; every data row whose cell count matches the
    /// header count becomes an Activity. Mismatched rows are dropped — no
    /// partial records. Ids are 1-based data-row offsets, so dropped rows
    /// leave gaps but order stays strictly increasing.
    pub fn normalize(&self, rows: &[Vec<String>]) -> Vec<Activity> {
        if rows.len() < 2 {
            // Header-only or empty source: zero records, not an error.
            return Vec::new();
        }

        let headers = self.canonical_headers(&rows[0]);
        let mut out = Vec::with_capacity(rows.len() - 1);

        for (offset, row) in rows[1..].iter().enumerate() {
            if row.len() != headers.len() {
                logd!(
                    "Normalize: dropping row {} ({} cells vs {} headers)",
                    offset + 1,
                    row.len(),
                    headers.len()
                );
                continue;
            }

            let mut a = Activity {
                id: (offset + 1) as u32,
                ..Activity::default()
            };

            for (header, cell) in headers.iter().zip(row.iter()) {
                apply_field(&mut a, header, cell.trim());
            }

            if a.image.is_empty() {
                a.image = s!(DEFAULT_IMAGE);
            }

            out.push(a);
        }

        out
    }
}

/// Assign one trimmed cell to its canonical field. Unknown canonical names
/// are ignored; the struct is the schema.
fn apply_field(a: &mut Activity, field: &str, value: &str) {
    match field {
        "title" => a.title = s!(value),
        "description" => a.description = s!(value),
        "fullDescription" | "full_description" => a.full_description = s!(value),
        "date" => a.date = s!(value),
        "location" => a.location = s!(value),
        "image" => a.image = image_path(value),
        "price" => a.price = s!(value),
        "tags" => a.tags = split_tags(value),
        "organizer" => a.organizer = s!(value),
        "link" => a.link = s!(value),
        "age" => a.age = s!(value),
        "duration" => a.duration = s!(value),
        "tour_type" => a.tour_type = s!(value),
        "environment" => a.environment = s!(value),
        _ => {}
    }
}

/// Comma-split tag list. An empty cell yields an empty sequence, never an
/// absent value.
fn split_tags(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(|t| s!(t.trim())).collect()
}

/// Empty → placeholder; bare filename → rooted under the asset-image dir;
/// absolute URLs and already-rooted paths pass through.
fn image_path(value: &str) -> String {
    if value.is_empty() {
        s!(DEFAULT_IMAGE)
    } else if value.starts_with("http") || value.starts_with(ASSET_ROOT) {
        s!(value)
    } else {
        format!("{}{}", ASSET_IMAGE_DIR, value)
    }
}
