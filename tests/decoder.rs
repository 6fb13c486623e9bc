// tests/decoder.rs
//
// CSV decoder behavior: quoting, escapes, line endings, round-trips.

use tourdex::core::csv::{parse_rows, rows_to_string};

#[test]
fn splits_cells_on_unquoted_commas_only() {
    let rows = parse_rows("a,b,c\n\"a,b\",c\n", ',');
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["a", "b", "c"]);
    // a comma inside an active quoted span is part of the cell
    assert_eq!(rows[1], vec!["a,b", "c"]);
}

#[test]
fn doubled_quote_collapses_to_literal_quote() {
    let rows = parse_rows("\"he said \"\"hi\"\"\",x\n", ',');
    assert_eq!(rows[0], vec!["he said \"hi\"", "x"]);
}

#[test]
fn surrounding_quotes_are_stripped() {
    let rows = parse_rows("\"plain\",\"with space\"\n", ',');
    assert_eq!(rows[0], vec!["plain", "with space"]);
}

#[test]
fn tolerates_crlf_and_bare_lf() {
    let rows = parse_rows("a,b\r\nc,d\ne,f", ',');
    assert_eq!(rows, vec![
        vec!["a", "b"],
        vec!["c", "d"],
        vec!["e", "f"],
    ]);
}

#[test]
fn newline_inside_quotes_stays_in_cell() {
    let rows = parse_rows("\"line1\nline2\",x\n", ',');
    assert_eq!(rows[0], vec!["line1\nline2", "x"]);
}

#[test]
fn decoder_does_not_trim_whitespace() {
    let rows = parse_rows(" a , b \n", ',');
    assert_eq!(rows[0], vec![" a ", " b "]);
}

#[test]
fn blank_lines_are_skipped_and_no_phantom_trailing_row() {
    let rows = parse_rows("a,b\n\n\nc,d\n", ',');
    assert_eq!(rows.len(), 2);

    // trailing newline must not produce an empty row
    let rows = parse_rows("a,b\n", ',');
    assert_eq!(rows.len(), 1);
}

#[test]
fn trailing_empty_cell_survives() {
    let rows = parse_rows("a,\n", ',');
    assert_eq!(rows[0], vec!["a", ""]);
}

#[test]
fn round_trip_is_exact() {
    let rows = vec![
        vec![s("Night Market Tour"), s("a,b"), s("said \"hi\"")],
        vec![s("plain"), s(""), s("multi\nline")],
    ];
    let text = rows_to_string(None, &rows, ',');
    assert_eq!(parse_rows(&text, ','), rows);
}

#[test]
fn tsv_round_trip() {
    let rows = vec![vec![s("a\tb"), s("c")]];
    let text = rows_to_string(None, &rows, '\t');
    assert_eq!(parse_rows(&text, '\t'), rows);
}

fn s(v: &str) -> String {
    v.to_string()
}
