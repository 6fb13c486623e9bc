// tests/sources.rs
//
// Source shapes: filter-definition rows and the JSON alternative for
// activities (which bypasses decode/normalize).

use tourdex::config::settings::SiteSettings;
use tourdex::normalize::Normalizer;
use tourdex::sheets::{activities, filters};

#[test]
fn filter_sheet_rows_become_defs_in_order() {
    let text = "group,category,label\n\
                location,old_town,Old Town\n\
                price,0-300,Up to 300\n\
                location,riverside,Riverside\n\
                short,row\n";
    let defs = filters::parse(text);
    assert_eq!(defs.len(), 3);
    assert_eq!(defs[0].group, "location");
    assert_eq!(defs[1].category, "0-300");

    // groups keep first-appearance order
    assert_eq!(filters::group_order(&defs), vec!["location", "price"]);
}

#[test]
fn json_source_bypasses_the_normalizer() {
    let text = r#"[
        {
            "id": 7,
            "title": "Harbor Lights",
            "description": "Evening harbor walk",
            "fullDescription": "A long evening walk along the harbor.",
            "image": "assets/images/harbor.png",
            "price": "$420",
            "tags": ["night", "sea"]
        }
    ]"#;

    assert!(activities::looks_like_json(text));

    let acts = activities::parse_json(text).unwrap();
    assert_eq!(acts.len(), 1);
    assert_eq!(acts[0].id, 7);
    assert_eq!(acts[0].full_description, "A long evening walk along the harbor.");
    // absent optional fields default to empty
    assert!(acts[0].duration.is_empty());
    assert!(acts[0].organizer.is_empty());
}

#[test]
fn parse_dispatches_on_body_shape() {
    let settings = SiteSettings::default();
    let n = Normalizer::new(settings.field_map().clone());

    let csv = "標題,價格\nTemple Tour,$180\n";
    let acts = activities::parse(csv, &n).unwrap();
    assert_eq!(acts.len(), 1);
    assert_eq!(acts[0].title, "Temple Tour");

    let json = r#"[{"id": 1, "title": "From JSON"}]"#;
    let acts = activities::parse(json, &n).unwrap();
    assert_eq!(acts[0].title, "From JSON");
}

#[test]
fn malformed_json_propagates_an_error() {
    assert!(activities::parse_json("[{\"id\": }]").is_err());
}
