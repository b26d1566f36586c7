// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). Blank lines are skipped;
/// a line holding only `""` is a row with one empty cell.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut quoted = false; // a `""` line is one empty cell, not a blank line
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                    quoted = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_unless_blank(&mut rows, &mut row, take(&mut quoted));
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    push_unless_blank(&mut rows, &mut row, quoted);

    rows
}

fn push_unless_blank(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, quoted: bool) {
    if !quoted && row.len() == 1 && row[0].is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    // a bare empty line would read back as blank
    if let [only] = row {
        if only.is_empty() {
            return writeln!(w, "\"\"");
        }
    }
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line (if any) followed by every row.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let row = cells!["plain", "a,b", "say \"hi\"", "two\nlines", ""];
        let s = rows_to_string(None, &[row], ',');
        assert_eq!(s, "plain,\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\",\n");
    }

    #[test]
    fn parses_quoted_fields_and_crlf() {
        let text = "A,B\r\n\"x, y\",\"he said \"\"no\"\"\"\r\n\"multi\nline\",\r\n";
        let rows = parse_rows(text, ',');
        assert_eq!(rows, vec![
            cells!["A", "B"],
            cells!["x, y", "he said \"no\""],
            cells!["multi\nline", ""],
        ]);
    }

    #[test]
    fn trailing_newline_adds_no_row() {
        assert_eq!(parse_rows("a,b\n", ',').len(), 1);
        assert_eq!(parse_rows("a,b\n\n\nc,d", ',').len(), 2);
        assert!(parse_rows("", ',').is_empty());
    }

    #[test]
    fn write_then_parse_keeps_cells() {
        let headers = cells!["RESPONSE TEXT", "SCRIPT NOTES"];
        let rows = vec![cells!["Well, \"boss\"...", "Angry / annoyed"], cells!["", ""]];
        let text = rows_to_string(Some(&headers), &rows, ',');
        let parsed = parse_rows(&text, ',');
        assert_eq!(parsed[0], headers);
        assert_eq!(&parsed[1..], &rows[..]);
    }

    #[test]
    fn single_column_empty_cells_survive() {
        let headers = cells!["RESPONSE TEXT"];
        let rows = vec![cells!["Hey."], cells![""], cells!["Bye."]];
        let text = rows_to_string(Some(&headers), &rows, ',');
        assert_eq!(text, "RESPONSE TEXT\nHey.\n\"\"\nBye.\n");
        assert_eq!(parse_rows(&text, ','), [vec![headers], rows].concat());
        assert_eq!(parse_rows("a\n\n\"\"", ','), vec![cells!["a"], cells![""]]);
    }
}
