// src/specs/dialogue.rs

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{HEADER_SKIP, ANCHOR_CHILD};
use crate::core::html::cell_text;
use crate::error::{Error, Result};
use crate::table::DialogueTable;

/// Page text → DialogueTable.
///
/// Column *i* is every `<td>` that is the *i*-th child of its row. Cells
/// carrying a `class` attribute mark categories rather than dialogue and are
/// left out of their column before padding.
pub fn extract_table(html_doc: &str) -> Result<DialogueTable> {
    let doc = Html::parse_document(html_doc);

    let names = read_headers(&doc)?;
    let ncols = count_columns(&doc)?;
    log::debug!("Extract: {} header(s), {} data column(s)", names.len(), ncols);

    let mut data = Vec::with_capacity(ncols);
    let mut dropped = 0usize;
    for idx in 1..=ncols {
        let sel = selector(&format!("table tbody td:nth-child({idx})"))?;
        let mut col = Vec::new();
        for td in doc.select(&sel) {
            if is_non_dialogue(&td) {
                dropped += 1;
                continue;
            }
            col.push(cell_text(&td));
        }
        data.push(col);
    }
    if dropped > 0 {
        log::debug!("Extract: dropped {dropped} non-dialogue cell(s)");
    }

    DialogueTable::from_columns(names, data)
}

/* ---------- helpers ---------- */

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::parse(format!("bad selector {css:?}: {e}")))
}

/// Every `<th>` inside a row, minus the page chrome ones that come first.
fn read_headers(doc: &Html) -> Result<Vec<String>> {
    let sel = selector("tr th")?;
    let names: Vec<String> = doc
        .select(&sel)
        .skip(HEADER_SKIP)
        .map(|th| cell_text(&th))
        .collect();
    if names.is_empty() {
        return Err(Error::parse("no column headers found"));
    }
    Ok(names)
}

/// `ceil(all body cells / cells that are the ANCHOR_CHILD-th of their row)`
fn count_columns(doc: &Html) -> Result<usize> {
    let all = doc.select(&selector("table tbody td")?).count();
    let anchored = doc
        .select(&selector(&format!("table tbody td:nth-child({ANCHOR_CHILD})"))?)
        .count();
    if anchored == 0 {
        return Err(Error::parse("no dialogue table found"));
    }
    Ok(all.div_ceil(anchored))
}

fn is_non_dialogue(td: &ElementRef<'_>) -> bool {
    td.value().attr("class").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME: &str = r#"<table class="infobox"><tr><th>Cait</th></tr><tr><th>Companion</th></tr></table>"#;

    fn page(rows: &str, headers: &str) -> String {
        format!(
            "<html><body>{CHROME}<table class=\"va-table\"><tr>{headers}</tr>{rows}</table></body></html>"
        )
    }

    const HEADERS: &str = "<th>RESPONSE TEXT</th><th>SCRIPT NOTES</th><th>EMOTION</th>";

    #[test]
    fn drops_flagged_cells_and_pads() {
        let rows = r#"
            <tr><td>Hey there.</td><td>Friendly / happy</td><td>Neutral</td></tr>
            <tr><td class="va-dialogue-category">Greeting</td><td>What do you want?</td><td>Annoyed</td></tr>
            <tr><td>Piss off.</td><td></td><td>Angry</td></tr>
        "#;
        let t = extract_table(&page(rows, HEADERS)).unwrap();

        assert_eq!(t.headers(), cells!["RESPONSE TEXT", "SCRIPT NOTES", "EMOTION"]);
        assert!(t.columns().iter().all(|c| c.cells.len() == t.nrows()));
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.column("RESPONSE TEXT").unwrap().cells, cells!["Hey there.", "Piss off.", ""]);
        assert_eq!(t.column("SCRIPT NOTES").unwrap().cells, cells!["Friendly / happy", "What do you want?", ""]);
        assert!(t.to_rows().iter().flatten().all(|c| c != "Greeting"));
    }

    #[test]
    fn cells_are_plain_text() {
        let rows = "<tr><td>Go see <a href=\"/wiki/Piper\">Piper</a>.\n</td><td>a &amp; b</td><td>x</td></tr>";
        let t = extract_table(&page(rows, HEADERS)).unwrap();
        assert_eq!(t.row(0).unwrap(), vec!["Go see Piper.", "a & b", "x"]);
    }

    #[test]
    fn markup_inside_attributes_stays_out_of_cells() {
        let rows = r#"<tr><td>Go <a title="x>y" href="/w">Piper</a>.</td><td>b</td><td>c</td></tr>"#;
        let headers = r#"<th>RESPONSE <span title="a>b">TEXT</span></th><th>NOTES</th><th>EMOTION</th>"#;
        let t = extract_table(&page(rows, headers)).unwrap();
        assert_eq!(t.headers()[0], "RESPONSE TEXT");
        assert_eq!(t.row(0).unwrap()[0], "Go Piper.");
    }

    #[test]
    fn ragged_rows_stay_rectangular() {
        let rows = r#"
            <tr><td>a1</td><td>b1</td><td>c1</td></tr>
            <tr><td>a2</td><td>b2</td></tr>
            <tr><td>a3</td><td>b3</td><td>c3</td></tr>
            <tr><td>a4</td></tr>
        "#;
        let t = extract_table(&page(rows, HEADERS)).unwrap();
        assert_eq!(t.nrows(), 4);
        assert_eq!(t.column("EMOTION").unwrap().cells, cells!["c1", "c3", "", ""]);
    }

    #[test]
    fn missing_table_is_parse_error() {
        let err = extract_table(&format!("<html><body>{CHROME}<p>nothing</p></body></html>")).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn more_headers_than_columns_is_shape_mismatch() {
        let rows = "<tr><td>a</td><td>b</td><td>c</td></tr>";
        let headers = format!("{HEADERS}<th>EXTRA</th>");
        let err = extract_table(&page(rows, &headers)).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 4, found: 3 }));
    }

    #[test]
    fn unnamed_columns_are_dropped() {
        let rows = "<tr><td>a</td><td>b</td><td>c</td><td>d</td></tr>";
        let t = extract_table(&page(rows, HEADERS)).unwrap();
        assert_eq!(t.ncols(), 3);
        assert_eq!(t.row(0).unwrap(), vec!["a", "b", "c"]);
    }
}
