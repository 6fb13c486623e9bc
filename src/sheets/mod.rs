// src/sheets/mod.rs
//! # Sheet sources
//!
//! One module per sheet of the published trio. Each module focuses on a
//! single sheet and encodes *what shape its rows have* and *how to turn them
//! into the record type the rest of the pipeline consumes*.
//!
//! ## What lives here
//! - **Fetching** one sheet's CSV text (remote over `core::net`, or a local
//!   file in offline mode).
//! - **Pure row shaping**: settings → `(group, key, value)` triples,
//!   filters → `FilterDef` triples, activities → `Activity` records via the
//!   normalizer. The shaping functions take text and return records, so they
//!   are testable offline against fixture strings.
//!
//! ## What does **not** live here
//! - **Fallback policy and caching** — the loader owns the
//!   remote → store-copy → default chain (`src/loader.rs`, `src/store.rs`).
//! - **Filtering and presentation** — the filter engine and the front-ends
//!   consume canonical records and never see sheet text.
//!
//! ## Conventions & invariants
//! - All three sheets go through the one quote-aware decoder in `core::csv`.
//! - The first row of every sheet is a header; a sheet with fewer than two
//!   rows holds zero records.
//! - The activities sheet alternatively ships as a JSON array of normalized
//!   records, which bypasses decode/normalize entirely.

use std::error::Error;
use std::path::Path;

use crate::config::options::{SheetKind, SourceOptions};
use crate::core::net;

pub mod activities;
pub mod filters;
pub mod settings;

/// Fetch one sheet's raw text from the configured source. Transport errors
/// propagate; the caller decides what degraded state to present.
pub fn fetch_text(
    kind: SheetKind,
    source: &SourceOptions,
    host: &str,
    path: &str,
) -> Result<String, Box<dyn Error>> {
    match &source.local_dir {
        Some(dir) => read_local(kind, dir),
        None => net::http_get(host, path),
    }
}

fn read_local(kind: SheetKind, dir: &Path) -> Result<String, Box<dyn Error>> {
    // Offline activities may be the JSON shape instead of CSV.
    if kind == SheetKind::Activities {
        let json = dir.join("activities.json");
        if json.exists() {
            return Ok(std::fs::read_to_string(json)?);
        }
    }
    let p = dir.join(kind.file_name());
    std::fs::read_to_string(&p)
        .map_err(|e| format!("{}: {}", p.display(), e).into())
}
