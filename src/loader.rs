// src/loader.rs
//
// The load chain: settings → filter definitions → activities, in that order
// because settings carry the sheet locations and the header-translation
// table the later steps need.
//
// Per-step fallback: remote (or local-dir) fetch → cached store copy →
// default. Settings fall back to hardcoded defaults and filters to an empty
// list — the site must still render. Activities are the one step whose
// exhausted fallback aborts the chain; the caller surfaces a single error
// state. No retries anywhere.

use std::error::Error;

use crate::config::options::{AppOptions, SheetKind};
use crate::config::settings::SiteSettings;
use crate::data::{ActivitySet, FilterDef};
use crate::normalize::Normalizer;
use crate::progress::Progress;
use crate::sheets;
use crate::store;

/// Everything one session works with, loaded once and read-only after.
#[derive(Clone, Debug)]
pub struct SiteData {
    pub settings: SiteSettings,
    pub filters: Vec<FilterDef>,
    pub activities: ActivitySet,
}

impl Default for SiteData {
    fn default() -> Self {
        Self {
            settings: SiteSettings::default(),
            filters: Vec::new(),
            activities: ActivitySet::default(),
        }
    }
}

/// Run the full chain against the configured source.
pub fn load_site(
    options: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<SiteData, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
    }

    // 1. Settings — never fatal.
    let defaults = SiteSettings::default();
    let settings = match fetch_and_cache(SheetKind::Settings, options, &defaults) {
        Ok(text) => parse_settings(&text),
        Err(e) => {
            logd!("Load: settings fetch failed ({}), trying cache", e);
            match store::load_sheet(SheetKind::Settings) {
                Ok(text) => parse_settings(&text),
                Err(_) => {
                    logf!("Load: settings unavailable, using defaults");
                    SiteSettings::default()
                }
            }
        }
    };
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("settings");
    }

    // 2. Filter definitions — never fatal.
    let filters = match fetch_and_cache(SheetKind::Filters, options, &settings) {
        Ok(text) => sheets::filters::parse(&text),
        Err(e) => {
            logd!("Load: filters fetch failed ({}), trying cache", e);
            match store::load_sheet(SheetKind::Filters) {
                Ok(text) => sheets::filters::parse(&text),
                Err(_) => {
                    logf!("Load: filters unavailable, selectors will be empty");
                    Vec::new()
                }
            }
        }
    };
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("filters");
    }

    // 3. Activities — exhausted fallback aborts the chain.
    let normalizer = Normalizer::new(settings.field_map().clone());
    let text = match fetch_and_cache(SheetKind::Activities, options, &settings) {
        Ok(text) => text,
        Err(e) => {
            loge!("Load: activities fetch failed ({}), trying cache", e);
            store::load_sheet(SheetKind::Activities)
                .map_err(|_| format!("activities unavailable: {}", e))?
        }
    };
    let activities = ActivitySet::new(sheets::activities::parse(&text, &normalizer)?);
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("activities");
        p.finish();
    }

    logf!(
        "Load: OK filters={} activities={}",
        filters.len(),
        activities.len()
    );

    Ok(SiteData { settings, filters, activities })
}

/// Offline-first view for GUI startup: cached sheets only, defaults where
/// nothing is cached. Never fails; the set may simply be empty.
pub fn load_cached() -> SiteData {
    let settings = match store::load_sheet(SheetKind::Settings) {
        Ok(text) => parse_settings(&text),
        Err(_) => SiteSettings::default(),
    };

    let filters = store::load_sheet(SheetKind::Filters)
        .map(|text| sheets::filters::parse(&text))
        .unwrap_or_default();

    let normalizer = Normalizer::new(settings.field_map().clone());
    let activities = store::load_sheet(SheetKind::Activities)
        .ok()
        .and_then(|text| sheets::activities::parse(&text, &normalizer).ok())
        .map(ActivitySet::new)
        .unwrap_or_default();

    SiteData { settings, filters, activities }
}

/* ---------- helpers ---------- */

fn parse_settings(text: &str) -> SiteSettings {
    let mut settings = SiteSettings::default();
    settings.merge_rows(&sheets::settings::parse(text));
    settings
}

/// Fetch one sheet and refresh its store copy on success.
fn fetch_and_cache(
    kind: SheetKind,
    options: &AppOptions,
    settings: &SiteSettings,
) -> Result<String, Box<dyn Error>> {
    let text = sheets::fetch_text(
        kind,
        &options.source,
        settings.host(),
        settings.sheet_path(kind),
    )?;
    match store::save_sheet(kind, &text) {
        Ok(p) => logd!("Cache: saved {} → {}", kind.name(), p.display()),
        Err(e) => loge!("Cache: save failed for {}: {}", kind.name(), e),
    }
    Ok(text)
}
