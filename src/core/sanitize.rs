// src/core/sanitize.rs

use crate::config::consts::{OUT_SUFFIX, STORE_EXT};

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Wiki page slug: spaces become underscores.
pub fn character_slug(name: &str) -> String {
    name.trim().replace(' ', "_")
}

/// `Piper Wright` → `piper_wright_dialogue.csv`
pub fn output_file_name(character: &str) -> String {
    format!("{}{}", character_slug(character).to_lowercase(), OUT_SUFFIX)
}

/// First char upper-cased, the rest lower-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => s!(),
    }
}

/// Stored file name (or path) → human label: `jane_doe.csv` → `Jane Doe`.
pub fn display_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let ext = format!(".{STORE_EXT}");
    let stem = base.strip_suffix(ext.as_str()).unwrap_or(base);
    stem.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(display_name("jane_doe.csv"), "Jane Doe");
        assert_eq!(display_name("cait.csv"), "Cait");
        assert_eq!(display_name("storage/PIPER_wright_dialogue.csv"), "Piper Wright Dialogue");
        assert_eq!(display_name("notes"), "Notes");
    }

    #[test]
    fn slugs_and_file_names() {
        assert_eq!(character_slug(" Nick Valentine "), "Nick_Valentine");
        assert_eq!(output_file_name("Nick Valentine"), "nick_valentine_dialogue.csv");
        assert_eq!(output_file_name("Cait"), "cait_dialogue.csv");
    }

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn capitalize_lowers_tail() {
        assert_eq!(capitalize("mCdONOUGH"), "Mcdonough");
        assert_eq!(capitalize(""), "");
    }
}
