// tests/settings.rs
//
// Settings sheet parsing and the one-time merge over hardcoded defaults.

use tourdex::config::options::SheetKind;
use tourdex::config::settings::SiteSettings;
use tourdex::sheets::settings::parse;

#[test]
fn header_only_sheet_yields_no_rows() {
    assert!(parse("group,key,value\n").is_empty());
    assert!(parse("").is_empty());
}

#[test]
fn rows_need_at_least_three_cells() {
    let rows = parse("group,key,value\nui,site_title\nui,page_title,Tours,extra\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, "page_title");
    assert_eq!(rows[0].value, "Tours");
}

#[test]
fn quoted_values_keep_their_commas() {
    let rows = parse("group,key,value\nui,no_results,\"Nothing found, sorry\"\n");
    assert_eq!(rows[0].value, "Nothing found, sorry");
}

#[test]
fn later_values_override_defaults() {
    let mut settings = SiteSettings::default();
    assert_eq!(settings.text("filter_all"), "All");

    settings.merge_rows(&parse("group,key,value\nui,filter_all,Everything\n"));
    assert_eq!(settings.text("filter_all"), "Everything");

    // untouched keys keep their defaults
    assert_eq!(settings.text("filter_heading"), "Filters");
}

#[test]
fn field_mapping_rows_feed_the_translation_table_not_the_flat_map() {
    let mut settings = SiteSettings::default();
    let text = "group,key,value\nfield_mapping,Titel,title\n";
    settings.merge_rows(&parse(text));

    assert_eq!(settings.field_map().get("Titel").map(String::as_str), Some("title"));
    assert_eq!(settings.text("Titel"), "");
}

#[test]
fn config_rows_override_source_locations() {
    let mut settings = SiteSettings::default();
    let text = "group,key,value\n\
                config,host,mirror.example.org\n\
                config,activities_path,/alt/acts.csv\n";
    settings.merge_rows(&parse(text));

    assert_eq!(settings.host(), "mirror.example.org");
    assert_eq!(settings.sheet_path(SheetKind::Activities), "/alt/acts.csv");
    // unconfigured paths keep their defaults
    assert_eq!(settings.sheet_path(SheetKind::Filters), "/pub/filters.csv");
    // reserved rows never leak into the flat map
    assert_eq!(settings.text("host"), "");
}

#[test]
fn rows_with_empty_key_or_value_are_skipped() {
    let mut settings = SiteSettings::default();
    settings.merge_rows(&parse("group,key,value\nui,,x\nui,site_title,\n"));
    assert_eq!(settings.text("site_title"), "Culture Explore");
}

#[test]
fn default_field_map_translates_the_published_headers() {
    let settings = SiteSettings::default();
    let map = settings.field_map();
    assert_eq!(map.get("標題").map(String::as_str), Some("title"));
    assert_eq!(map.get("導覽類型").map(String::as_str), Some("tour_type"));
}
