// src/core/html.rs

use scraper::ElementRef;

/// Text nodes of a `<td>`/`<th>` → plain cell text.
/// The parser already decoded entities; embedded newlines are dropped
/// and whitespace runs collapse to one space.
pub fn cell_text(el: &ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    super::sanitize::normalize_ws(&raw.replace('\n', ""))
}
