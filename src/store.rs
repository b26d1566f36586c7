// src/store.rs
//
// The storage folder: one CSV per character, header row first.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{STORE_EXT, STORE_SEP};
use crate::core::sanitize::display_name;
use crate::csv::parse_rows;
use crate::error::{Error, Result};
use crate::table::DialogueTable;

/// One listed file: `cait.csv` shown as `Cait`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StoredFile {
    pub label: String,
    pub file_name: String,
    #[serde(skip)]
    pub path: PathBuf,
}

impl StoredFile {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(Self { label: display_name(&file_name), file_name, path })
    }
}

pub fn save_table(path: &Path, table: &DialogueTable) -> Result<PathBuf> {
    let p = crate::file::write_table(path, table)?;
    log::info!("Store: saved {} ({} cols × {} rows)", p.display(), table.ncols(), table.nrows());
    Ok(p)
}

pub fn load_table(path: &Path) -> Result<DialogueTable> {
    let text = fs::read_to_string(path)?;
    parse_table(&text)
}

/// First row is the header; an empty file is an empty table.
pub fn parse_table(text: &str) -> Result<DialogueTable> {
    let mut rows = parse_rows(text, STORE_SEP).into_iter();
    let Some(headers) = rows.next() else {
        return Ok(DialogueTable::default());
    };
    DialogueTable::from_rows(headers, rows.collect())
}

/// Every regular `.csv` file directly inside `dir`, sorted by label.
pub fn list_stored(dir: &Path) -> Result<Vec<StoredFile>> {
    if !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("storage folder not found: {}", dir.display()),
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()).unwrap_or("") != STORE_EXT { continue; }
        if let Some(f) = StoredFile::from_path(path) {
            files.push(f);
        }
    }

    files.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.file_name.cmp(&b.file_name)));
    log::debug!("Store: {} file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Resolve a listed file by name. Only names from the listing are accepted,
/// so a request can never reach outside the storage folder.
pub fn find<'a>(files: &'a [StoredFile], file_name: &str) -> Result<&'a StoredFile> {
    files
        .iter()
        .find(|f| f.file_name == file_name)
        .ok_or_else(|| Error::UnknownFile(s!(file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DialogueTable {
        DialogueTable::from_columns(
            cells!["RESPONSE TEXT", "SCRIPT NOTES"],
            vec![cells!["Hello, there.", "Fine."], cells!["Happy / Cheerful"]],
        )
        .unwrap()
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/cait.csv");
        save_table(&path, &sample()).unwrap();
        let back = load_table(&path).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn single_column_keeps_empty_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codsworth.csv");
        let table = DialogueTable::from_columns(
            cells!["RESPONSE TEXT"],
            vec![cells!["Sir!", "", "Mum!"]],
        )
        .unwrap();
        save_table(&path, &table).unwrap();
        let back = load_table(&path).unwrap();
        assert_eq!(back.nrows(), 3);
        assert_eq!(back, table);
    }

    #[test]
    fn saving_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        save_table(&a, &sample()).unwrap();
        save_table(&b, &sample()).unwrap();
        save_table(&a, &sample()).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn listing_is_sorted_and_csv_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["piper_wright.csv", "cait.csv", "notes.txt", "nick_valentine.csv"] {
            fs::write(dir.path().join(name), "A\nx\n").unwrap();
        }
        fs::create_dir(dir.path().join("sub.csv")).unwrap();

        let files = list_stored(dir.path()).unwrap();
        let labels: Vec<_> = files.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Cait", "Nick Valentine", "Piper Wright"]);
        assert_eq!(files[0].file_name, "cait.csv");
    }

    #[test]
    fn find_only_accepts_listed_names() {
        let files = vec![StoredFile::from_path(PathBuf::from("storage/cait.csv")).unwrap()];
        assert!(find(&files, "cait.csv").is_ok());
        assert!(matches!(find(&files, "../secret.csv"), Err(Error::UnknownFile(_))));
    }

    #[test]
    fn empty_text_is_empty_table() {
        assert!(parse_table("").unwrap().is_empty());
    }
}
