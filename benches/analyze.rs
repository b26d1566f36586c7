// benches/analyze.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use wiki_dialogue::{
    config::options::AnalyzeOptions,
    corpus,
    freq::TokenFrequencyTable,
    nlp::Analyzer,
    specs::dialogue,
    table::DialogueTable,
};

const LINES: &[&str] = &[
    "Well, look at you. Fresh out of the vault and already picking fights.",
    "I don't need a babysitter, I need a drink.",
    "Raiders took everything. Now I take it back, one bullet at a time.",
    "You're all right, you know that? For a vault dweller.",
];

fn sample_page(rows: usize) -> String {
    let mut body = String::from(
        "<html><body><table><tr><th>Cait</th></tr><tr><th>Companion</th></tr></table><table>\
         <tr><th>RESPONSE TEXT</th><th>SCRIPT NOTES</th><th>EMOTION</th></tr>",
    );
    for i in 0..rows {
        if i % 25 == 0 {
            body.push_str("<tr><td class=\"va-dialogue-category\">Category</td></tr>");
        }
        body.push_str(&format!(
            "<tr><td>{}</td><td>Amused / Smug</td><td>Neutral</td></tr>",
            LINES[i % LINES.len()]
        ));
    }
    body.push_str("</table></body></html>");
    body
}

fn sample_table(rows: usize) -> DialogueTable {
    let responses = (0..rows).map(|i| LINES[i % LINES.len()].to_string()).collect();
    let notes = (0..rows).map(|_| "Annoyed / Irritated".to_string()).collect();
    DialogueTable::from_columns(
        vec!["RESPONSE TEXT".to_string(), "SCRIPT NOTES".to_string()],
        vec![responses, notes],
    )
    .expect("sample table")
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page(500);
    c.bench_function("extract_table_500", |b| {
        b.iter(|| {
            let t = dialogue::extract_table(black_box(&page)).expect("extract");
            black_box(t.nrows())
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let table = sample_table(500);
    let analyzer = Analyzer::default();
    let opts = AnalyzeOptions::default();

    c.bench_function("corpus_500", |b| {
        b.iter(|| {
            let corpus = corpus::from_table("Cait", black_box(&table), &opts, &analyzer).expect("corpus");
            black_box(corpus.words.len())
        })
    });

    let corpus = corpus::from_table("Cait", &table, &opts, &analyzer).expect("corpus");
    c.bench_function("top10_words", |b| {
        b.iter(|| black_box(TokenFrequencyTable::from_tokens(black_box(&corpus.words)).top(10)))
    });
}

criterion_group!(benches, bench_extract, bench_analyze);
criterion_main!(benches);
