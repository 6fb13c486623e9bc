// src/config/settings.rs
//
// Site settings: a flat string map plus the header-translation table and
// source-location overrides. Built from hardcoded defaults, then merged once
// with the rows of the settings sheet. Read-only for the rest of the session.

use std::collections::HashMap;

use super::consts::*;
use super::options::SheetKind;

/// Reserved row group: header-translation entries (key = source header,
/// value = canonical field name).
pub const GROUP_FIELD_MAPPING: &str = "field_mapping";

/// Reserved row group: source configuration (host and sheet paths).
pub const GROUP_CONFIG: &str = "config";

/// One decoded settings row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingRow {
    pub group: String,
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct SiteSettings {
    values: HashMap<String, String>,
    field_map: HashMap<String, String>,
    config: HashMap<String, String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            values: default_values(),
            field_map: default_field_map(),
            config: HashMap::new(),
        }
    }
}

impl SiteSettings {
    /// Merge sheet rows over the defaults. Rows with an empty key or value
    /// are skipped; reserved groups go to their own tables, everything else
    /// lands in the flat map keyed by `key`.
    pub fn merge_rows(&mut self, rows: &[SettingRow]) {
        for row in rows {
            if row.key.is_empty() || row.value.is_empty() {
                continue;
            }
            match row.group.as_str() {
                GROUP_FIELD_MAPPING => {
                    self.field_map.insert(row.key.clone(), row.value.clone());
                }
                GROUP_CONFIG => {
                    self.config.insert(row.key.clone(), row.value.clone());
                }
                _ => {
                    self.values.insert(row.key.clone(), row.value.clone());
                }
            }
        }
    }

    /// Flat setting by key; empty string when unknown (defaults cover every
    /// key the front-ends read).
    pub fn text(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn field_map(&self) -> &HashMap<String, String> {
        &self.field_map
    }

    pub fn host(&self) -> &str {
        self.config.get("host").map(String::as_str).unwrap_or(SHEET_HOST)
    }

    pub fn sheet_path(&self, kind: SheetKind) -> &str {
        let (key, fallback) = match kind {
            SheetKind::Settings => ("settings_path", SETTINGS_PATH),
            SheetKind::Filters => ("filters_path", FILTERS_PATH),
            SheetKind::Activities => ("activities_path", ACTIVITIES_PATH),
        };
        self.config.get(key).map(String::as_str).unwrap_or(fallback)
    }
}

fn default_values() -> HashMap<String, String> {
    [
        ("site_title", "Culture Explore"),
        ("page_title", "Cultural & Historical Tours"),
        ("search_placeholder", "Search tours..."),
        ("filter_all", "All"),
        ("filter_heading", "Filters"),
        ("loading_text", "Loading activities..."),
        ("no_results", "No activities match your filters."),
        ("error_text", "Could not load activities. Please try again later."),
        ("detail_date_label", "Date"),
        ("detail_location_label", "Location"),
        ("detail_price_label", "Price"),
        ("detail_organizer_label", "Organizer"),
    ]
    .into_iter()
    .map(|(k, v)| (s!(k), s!(v)))
    .collect()
}

/// Known header translations for the published sheet. The sheet's own
/// `field_mapping` rows extend or override these.
fn default_field_map() -> HashMap<String, String> {
    [
        ("標題", "title"),
        ("簡介", "description"),
        ("完整介紹", "full_description"),
        ("日期", "date"),
        ("地點", "location"),
        ("圖片", "image"),
        ("標籤", "tags"),
        ("價格", "price"),
        ("主辦單位", "organizer"),
        ("連結", "link"),
        ("適合年齡", "age"),
        ("時長", "duration"),
        ("導覽類型", "tour_type"),
        ("環境", "environment"),
    ]
    .into_iter()
    .map(|(k, v)| (s!(k), s!(v)))
    .collect()
}
