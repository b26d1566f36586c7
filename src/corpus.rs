// src/corpus.rs
//
// Stored table → the five token lists the charts are built from.

use std::path::Path;

use crate::config::consts::NOTES_SEP;
use crate::config::options::AnalyzeOptions;
use crate::core::sanitize::display_name;
use crate::error::{Error, Result};
use crate::nlp::{Analyzer, Pos, TaggedToken};
use crate::store;
use crate::table::DialogueTable;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterCorpus {
    pub name: String,
    pub responses: Vec<String>,
    pub notes: Vec<String>,
    pub words: Vec<String>,
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub sentiment: Vec<String>,
}

impl CharacterCorpus {
    /// Token list by category index, in `chart::CATEGORIES` order
    /// (all, nouns, verbs, adjectives).
    pub fn category(&self, ix: usize) -> &[String] {
        match ix {
            1 => &self.nouns,
            2 => &self.verbs,
            3 => &self.adjectives,
            _ => &self.words,
        }
    }
}

pub fn build_corpus(path: &Path, opts: &AnalyzeOptions, analyzer: &Analyzer) -> Result<CharacterCorpus> {
    let table = store::load_table(path)?;
    let name = display_name(&path.to_string_lossy());
    from_table(&name, &table, opts, analyzer)
}

pub fn from_table(
    name: &str,
    table: &DialogueTable,
    opts: &AnalyzeOptions,
    analyzer: &Analyzer,
) -> Result<CharacterCorpus> {
    let responses: Vec<String> = table
        .column(&opts.response_column)
        .ok_or_else(|| Error::MissingColumn(opts.response_column.clone()))?
        .cells
        .iter()
        .filter(|c| !c.trim().is_empty())
        .map(|c| c.to_lowercase())
        .collect();

    let notes: Vec<String> = match table.column(&opts.notes_column) {
        Some(col) => col
            .cells
            .iter()
            .filter(|c| !c.trim().is_empty())
            .map(|c| sentiment_of(c))
            .filter(|s| !s.is_empty())
            .collect(),
        None => {
            log::debug!("Corpus: no {:?} column, sentiment left empty", opts.notes_column);
            Vec::new()
        }
    };

    let tagged = analyzer.content_tokens(&responses.join(" "));
    let words = texts(&tagged, |_| true);
    let nouns = texts(&tagged, |p| p == Pos::Noun);
    let verbs = texts(&tagged, |p| p == Pos::Verb);
    let adjectives = texts(&tagged, |p| p == Pos::Adj);
    let sentiment = texts(&analyzer.content_tokens(&notes.join(" ")), |_| true);

    log::info!(
        "Corpus: {name}: {} response(s), {} word(s), {} sentiment token(s)",
        responses.len(),
        words.len(),
        sentiment.len()
    );

    Ok(CharacterCorpus {
        name: s!(name),
        responses,
        notes,
        words,
        nouns,
        verbs,
        adjectives,
        sentiment,
    })
}

/// `"Amused / Smug "` → `"smug"`: the part after the last separator.
pub fn sentiment_of(note: &str) -> String {
    note.rsplit(NOTES_SEP).next().unwrap_or(note).trim().to_lowercase()
}

fn texts(tokens: &[TaggedToken], keep: impl Fn(Pos) -> bool) -> Vec<String> {
    tokens.iter().filter(|t| keep(t.pos)).map(|t| t.text.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> DialogueTable {
        DialogueTable::from_rows(headers, rows).unwrap()
    }

    #[test]
    fn sentiment_is_last_segment() {
        assert_eq!(sentiment_of("Amused / Smug "), "smug");
        assert_eq!(sentiment_of("Irritated"), "irritated");
        assert_eq!(sentiment_of("a/b/ Angry"), "angry");
    }

    #[test]
    fn builds_lists() {
        let t = table(
            cells!["RESPONSE TEXT", "SCRIPT NOTES"],
            vec![
                cells!["The raiders stole my whiskey.", "Angry / Irritated"],
                cells!["", "Cheerful"],
                cells!["Raiders never learn.", ""],
            ],
        );
        let c = from_table("Cait", &t, &AnalyzeOptions::default(), &Analyzer::default()).unwrap();

        assert_eq!(c.responses.len(), 2);
        assert_eq!(c.words.iter().filter(|w| *w == "raiders").count(), 2);
        assert!(c.words.iter().all(|w| w.chars().all(|ch| !ch.is_uppercase())));
        assert!(c.nouns.contains(&s!("whiskey")));
        assert!(c.verbs.contains(&s!("stole")));
        assert_eq!(c.sentiment, cells!["irritated", "cheerful"]);
    }

    #[test]
    fn missing_notes_column_gives_empty_sentiment() {
        let t = table(cells!["RESPONSE TEXT"], vec![cells!["Whiskey for the raiders."]]);
        let c = from_table("X", &t, &AnalyzeOptions::default(), &Analyzer::default()).unwrap();
        assert!(c.sentiment.is_empty());
        assert!(!c.words.is_empty());
    }

    #[test]
    fn missing_response_column_is_an_error() {
        let t = table(cells!["SCRIPT NOTES"], vec![cells!["Happy"]]);
        let err = from_table("X", &t, &AnalyzeOptions::default(), &Analyzer::default()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "RESPONSE TEXT"));
    }

    #[test]
    fn build_from_file_uses_display_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jane_doe.csv");
        std::fs::write(&path, "RESPONSE TEXT,SCRIPT NOTES\nGo away.,Annoyed\n").unwrap();
        let c = build_corpus(&path, &AnalyzeOptions::default(), &Analyzer::default()).unwrap();
        assert_eq!(c.name, "Jane Doe");
        assert_eq!(c.sentiment, cells!["annoyed"]);
    }
}
