// tests/analyze_chart.rs
use std::fs;

use wiki_dialogue::chart::{build_chart, to_json};
use wiki_dialogue::config::options::AnalyzeOptions;
use wiki_dialogue::corpus::build_corpus;
use wiki_dialogue::freq::TokenFrequencyTable;
use wiki_dialogue::nlp::Analyzer;

const CAIT: &str = "\
TOPIC,RESPONSE TEXT,SCRIPT NOTES
GREET,\"Raiders again? I'll gut every raider in the Combat Zone.\",Angry / Irritated
IDLE,Whiskey. Whiskey makes the raiders quiet.,Amused
IDLE,,
ATTACK,Get out of my way!,
";

#[test]
fn file_to_figure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cait.csv");
    fs::write(&path, CAIT).unwrap();

    let corpus = build_corpus(&path, &AnalyzeOptions::default(), &Analyzer::default()).unwrap();
    assert_eq!(corpus.name, "Cait");
    assert_eq!(corpus.responses.len(), 3);
    assert_eq!(corpus.sentiment, vec!["irritated", "amused"]);

    let freq = TokenFrequencyTable::from_tokens(&corpus.words);
    assert_eq!(freq.get("whiskey"), Some(2));
    assert_eq!(freq.get("raiders"), Some(2));
    assert!(freq.get("?").is_none());

    let fig = build_chart(&corpus, 10).unwrap();
    assert_eq!(fig.data.len(), 5);
    assert_eq!(fig.data[0].x[0], "raiders");
    assert!(fig.data.iter().all(|t| t.x.len() <= 10));

    let json = to_json(&fig).unwrap();
    assert!(json.contains("\"updatemenus\""));
    assert!(json.contains("Cait's Most Common Words"));
}

#[test]
fn no_notes_column_means_empty_sentiment_trace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dogmeat.csv");
    fs::write(&path, "RESPONSE TEXT\nWoof woof.\n").unwrap();

    let corpus = build_corpus(&path, &AnalyzeOptions::default(), &Analyzer::default()).unwrap();
    assert!(corpus.sentiment.is_empty());

    let fig = build_chart(&corpus, 10).unwrap();
    assert!(fig.data[4].x.is_empty());
    assert!(fig.data[4].visible);
}

#[test]
fn chart_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cait.csv");
    fs::write(&path, CAIT).unwrap();
    let a = Analyzer::default();
    let one = to_json(&build_chart(&build_corpus(&path, &AnalyzeOptions::default(), &a).unwrap(), 10).unwrap()).unwrap();
    let two = to_json(&build_chart(&build_corpus(&path, &AnalyzeOptions::default(), &a).unwrap(), 10).unwrap()).unwrap();
    assert_eq!(one, two);
}
