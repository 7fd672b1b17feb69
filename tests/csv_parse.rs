// tests/csv_parse.rs
//
// Header-keyed parsing of uploaded delimited text.
//
use collegefinder::csv::{parse_records, quoted_row, split_line};

#[test]
fn quoted_comma_and_doubled_quote_stay_in_one_field() {
    let fields = split_line(r#""Hansraj, ""Delhi""",Delhi"#);
    assert_eq!(fields, vec![r#"Hansraj, "Delhi""#.to_string(), "Delhi".to_string()]);
}

#[test]
fn headers_are_lowercased_and_values_trimmed() {
    let text = "Name , CITY,State\r\n  SRCC , Delhi ,Delhi\r\n";
    let rows = parse_records(text);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "SRCC");
    assert_eq!(rows[0]["city"], "Delhi");
    assert_eq!(rows[0]["state"], "Delhi");
}

#[test]
fn short_rows_pad_missing_trailing_fields() {
    let rows = parse_records("name,city,state\nLoyola College,Chennai\n");
    assert_eq!(rows[0]["name"], "Loyola College");
    assert_eq!(rows[0]["city"], "Chennai");
    assert_eq!(rows[0]["state"], "");
}

#[test]
fn blank_lines_are_skipped() {
    let rows = parse_records("name,state\n\n   \nA,Goa\n\nB,Assam\n");
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn whitespace_only_input_is_empty() {
    assert!(parse_records("").is_empty());
    assert!(parse_records(" \n\r\n\t").is_empty());
}

#[test]
fn header_only_yields_no_rows() {
    assert!(parse_records("name,city,state\n").is_empty());
}

#[test]
fn unterminated_quote_does_not_fail() {
    let rows = parse_records("name,state\n\"Open, College,Delhi\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Open, College,Delhi");
    assert_eq!(rows[0]["state"], "");
}

#[test]
fn quoted_row_doubles_inner_quotes() {
    assert_eq!(quoted_row(&["a", "", "say \"hi\""]), "\"a\",\"\",\"say \"\"hi\"\"\"");
    assert_eq!(quoted_row(&[]), "");
}
