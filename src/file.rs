// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::csv;
use crate::data::{Activity, FilteredView};

/// Column layout for exported views. Tags are rejoined with commas; the
/// quote-aware writer keeps the cell intact.
pub const EXPORT_HEADERS: [&str; 14] = [
    "Id", "Title", "Description", "Full description", "Date", "Location",
    "Price", "Tags", "Age", "Duration", "Tour type", "Environment",
    "Organizer", "Link",
];

pub fn activity_row(a: &Activity) -> Vec<String> {
    vec![
        a.id.to_string(),
        a.title.clone(),
        a.description.clone(),
        a.full_description.clone(),
        a.date.clone(),
        a.location.clone(),
        a.price.clone(),
        a.tags.join(","),
        a.age.clone(),
        a.duration.clone(),
        a.tour_type.clone(),
        a.environment.clone(),
        a.organizer.clone(),
        a.link.clone(),
    ]
}

pub fn view_rows(view: &FilteredView<'_>) -> Vec<Vec<String>> {
    view.iter().map(activity_row).collect()
}

/// Create the full export string (Copy/Export) for a filtered view.
pub fn to_export_string(export: &ExportOptions, view: &FilteredView<'_>) -> String {
    let headers: Vec<String> = EXPORT_HEADERS.iter().map(|h| s!(*h)).collect();
    let rows = view_rows(view);
    csv::rows_to_string(
        export.include_headers.then_some(headers.as_slice()),
        &rows,
        export.format.delim(),
    )
}

/// Write a single export file based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    view: &FilteredView<'_>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, to_export_string(export, view))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
