// tests/export_view.rs
//
// Filtered-view export: column layout, header toggle, delimiter, and the
// single-file write path.

use std::fs;
use std::path::PathBuf;

use tourdex::config::options::{ExportFormat, ExportOptions};
use tourdex::data::{Activity, ActivitySet, FilteredView};
use tourdex::file::{to_export_string, write_export_single, EXPORT_HEADERS};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tourdex_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_set() -> ActivitySet {
    let mut a = Activity {
        id: 1,
        title: "Night Market Tour".into(),
        description: "Food stalls, alleys".into(),
        price: "$250".into(),
        tags: vec!["food".into(), "night".into()],
        ..Activity::default()
    };
    a.location = "Old Town".into();
    let b = Activity {
        id: 2,
        title: "Museum Walk".into(),
        price: "$400".into(),
        ..Activity::default()
    };
    ActivitySet::new(vec![a, b])
}

#[test]
fn export_string_honors_header_toggle_and_order() {
    let set = sample_set();
    let view = FilteredView::from_indices(&set, vec![0, 1]);

    let mut export = ExportOptions::default();
    export.include_headers = true;
    let text = to_export_string(&export, &view);
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), EXPORT_HEADERS.join(","));
    assert!(lines.next().unwrap().starts_with("1,Night Market Tour"));
    assert!(lines.next().unwrap().starts_with("2,Museum Walk"));

    export.include_headers = false;
    let text = to_export_string(&export, &view);
    assert!(text.starts_with("1,Night Market Tour"));
}

#[test]
fn cells_with_commas_are_quoted() {
    let set = sample_set();
    let view = FilteredView::from_indices(&set, vec![0]);

    let mut export = ExportOptions::default();
    export.include_headers = false;
    let text = to_export_string(&export, &view);
    // description and the rejoined tag list both carry commas
    assert!(text.contains("\"Food stalls, alleys\""));
    assert!(text.contains("\"food,night\""));
}

#[test]
fn tsv_needs_no_quoting_for_commas() {
    let set = sample_set();
    let view = FilteredView::from_indices(&set, vec![0]);

    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.include_headers = false;
    let text = to_export_string(&export, &view);
    assert!(text.contains("Food stalls, alleys"));
    assert!(!text.contains('"'));
}

#[test]
fn out_path_extension_follows_format() {
    let mut export = ExportOptions::default();
    export.set_path("out/picks");
    export.format = ExportFormat::Csv;
    assert!(export.out_path().to_string_lossy().ends_with("picks.csv"));
    export.format = ExportFormat::Tsv;
    assert!(export.out_path().to_string_lossy().ends_with("picks.tsv"));
}

#[test]
fn write_export_single_creates_dirs_and_writes() {
    let set = sample_set();
    let view = FilteredView::from_indices(&set, vec![1]);

    let dir = tmp_dir("single");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("nested/picks.csv").to_str().unwrap());

    let written = write_export_single(&export, &view).unwrap();
    let content = fs::read_to_string(&written).unwrap();
    assert!(content.starts_with(&EXPORT_HEADERS.join(",")));
    assert!(content.contains("Museum Walk"));
    assert!(!content.contains("Night Market Tour"));
}

#[test]
fn view_preserves_set_order_and_borrows_by_id_gaps() {
    // ids with gaps (dropped rows upstream) still resolve by id, not index
    let set = ActivitySet::new(vec![
        Activity { id: 1, title: "A".into(), ..Activity::default() },
        Activity { id: 3, title: "C".into(), ..Activity::default() },
    ]);
    assert_eq!(set.get(3).unwrap().title, "C");
    assert!(set.get(2).is_none());

    let view = FilteredView::from_indices(&set, vec![1]);
    assert_eq!(view.activity(0).unwrap().title, "C");
}
