// src/csv.rs
use std::collections::BTreeMap;
use std::mem::take;

/// One parsed data row: lower-cased header → trimmed value.
pub type RawRecord = BTreeMap<String, String>;

/* ---------------- Parsing ---------------- */

/// Split one line into fields. Quotes toggle, `""` inside quotes is a literal
/// quote, commas inside quotes are kept. Unterminated quotes run to end of line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => fields.push(take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

/// Non-blank lines, split on LF with an optional preceding CR.
/// A bare CR also ends a line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).filter(|l| !l.trim().is_empty())
}

/// Header-keyed parse. First non-blank line is the header row.
/// Short rows pad with "", extra cells are dropped, duplicate headers: last wins.
pub fn parse_records(text: &str) -> Vec<RawRecord> {
    let mut it = lines(text);
    let Some(header_line) = it.next() else { return Vec::new() };

    let headers: Vec<String> = split_line(header_line)
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    it.map(|line| {
        let cells = split_line(line);
        let mut rec = RawRecord::new();
        for (ix, h) in headers.iter().enumerate() {
            let v = cells.get(ix).map(|c| c.trim()).unwrap_or("");
            rec.insert(h.clone(), s!(v));
        }
        rec
    })
    .collect()
}

/* ---------------- Writing ---------------- */

/// Every cell wrapped in quotes, inner quotes doubled. No line ending.
pub fn quoted_row(row: &[&str]) -> String {
    row.iter()
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
