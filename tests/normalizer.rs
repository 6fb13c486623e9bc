// tests/normalizer.rs
//
// Record normalizer: header translation, strict column counts, synthetic
// ids, per-field post-processing.

use std::collections::HashMap;

use tourdex::core::csv::parse_rows;
use tourdex::normalize::Normalizer;

fn mapper() -> Normalizer {
    let map: HashMap<String, String> = [
        ("標題", "title"),
        ("簡介", "description"),
        ("標籤", "tags"),
        ("圖片", "image"),
        ("價格", "price"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    Normalizer::new(map)
}

fn rows(text: &str) -> Vec<Vec<String>> {
    parse_rows(text, ',')
}

#[test]
fn header_only_source_yields_zero_records() {
    let n = mapper();
    assert!(n.normalize(&rows("標題,簡介,標籤\n")).is_empty());
    assert!(n.normalize(&rows("")).is_empty());
}

#[test]
fn column_count_mismatch_drops_the_row() {
    let n = mapper();
    let text = "標題,簡介,標籤\n\
                A,a desc,t1\n\
                B,too short\n\
                C,another,t2\n";
    let acts = n.normalize(&rows(text));
    assert_eq!(acts.len(), 2);
    assert_eq!(acts[0].title, "A");
    assert_eq!(acts[1].title, "C");
}

#[test]
fn ids_are_line_offsets_and_keep_gaps_for_dropped_rows() {
    let n = mapper();
    let text = "標題,簡介,標籤\n\
                A,x,\n\
                broken\n\
                C,y,\n";
    let acts = n.normalize(&rows(text));
    let ids: Vec<u32> = acts.iter().map(|a| a.id).collect();
    // row 2 was dropped; its offset is not reused
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn headers_translate_and_unmapped_headers_fall_back_to_lowercase() {
    let n = mapper();
    let text = "標題, Location ,簡介\nTour,Old Town,desc\n";
    let acts = n.normalize(&rows(text));
    assert_eq!(acts[0].title, "Tour");
    // " Location " → trimmed → unmapped → "location"
    assert_eq!(acts[0].location, "Old Town");
    assert_eq!(acts[0].description, "desc");
}

#[test]
fn tags_split_on_comma_and_trim() {
    let n = mapper();
    let text = "標題,標籤\nA,\"food, night , history\"\nB,\n";
    let acts = n.normalize(&rows(text));
    assert_eq!(acts[0].tags, vec!["food", "night", "history"]);
    // empty source cell yields an empty sequence, never an absent value
    assert!(acts[1].tags.is_empty());
}

#[test]
fn image_defaulting_and_prefixing() {
    let n = mapper();
    let text = "標題,圖片\n\
                A,\n\
                B,photo.png\n\
                C,https://cdn.example.org/x.png\n\
                D,assets/images/y.png\n";
    let acts = n.normalize(&rows(text));
    assert_eq!(acts[0].image, "assets/images/default.png");
    assert_eq!(acts[1].image, "assets/images/photo.png");
    assert_eq!(acts[2].image, "https://cdn.example.org/x.png");
    assert_eq!(acts[3].image, "assets/images/y.png");
}

#[test]
fn image_is_never_empty_even_without_an_image_column() {
    let n = mapper();
    let acts = n.normalize(&rows("標題\nA\n"));
    assert_eq!(acts[0].image, "assets/images/default.png");
}

#[test]
fn cell_values_are_trimmed() {
    let n = mapper();
    let acts = n.normalize(&rows("標題,價格\n  Spaced  , $300 \n"));
    assert_eq!(acts[0].title, "Spaced");
    assert_eq!(acts[0].price, "$300");
}

#[test]
fn unknown_canonical_fields_are_ignored() {
    let n = mapper();
    let acts = n.normalize(&rows("標題,internal_notes\nA,whatever\n"));
    assert_eq!(acts.len(), 1);
    assert_eq!(acts[0].title, "A");
}
