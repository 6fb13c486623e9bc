// src/sheets/activities.rs
//
// Activities sheet: either CSV (decoded and normalized) or a JSON array of
// already-normalized records.

use std::error::Error;

use crate::core::csv;
use crate::data::Activity;
use crate::normalize::Normalizer;

/// True when the body is the JSON source shape.
pub fn looks_like_json(text: &str) -> bool {
    text.trim_start().starts_with('[')
}

pub fn parse_csv(text: &str, normalizer: &Normalizer) -> Vec<Activity> {
    normalizer.normalize(&csv::parse_rows(text, ','))
}

/// JSON alternative source: bypasses decoder and normalizer entirely.
pub fn parse_json(text: &str) -> Result<Vec<Activity>, Box<dyn Error>> {
    Ok(serde_json::from_str(text)?)
}

/// Dispatch on the body shape.
pub fn parse(text: &str, normalizer: &Normalizer) -> Result<Vec<Activity>, Box<dyn Error>> {
    if looks_like_json(text) {
        parse_json(text)
    } else {
        Ok(parse_csv(text, normalizer))
    }
}
