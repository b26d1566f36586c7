// src/nlp/stopwords.rs
use std::collections::HashSet;

/// Tokenizer fragments that carry no content on their own.
const CLITIC_STOPS: &[&str] = &["n't", "'s", "'m", "'re", "'ve", "'ll", "'d", "nt", "s", "m", "re", "ve", "ll", "d"];

#[derive(Clone, Debug)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// English list from the `stop-words` crate plus clitic fragments.
    pub fn english() -> Self {
        let base = stop_words::get(stop_words::LANGUAGE::English);
        Self::from_words(base.iter().map(String::as_str).chain(CLITIC_STOPS.iter().copied()))
    }

    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        Self { words: words.into_iter().map(|w| w.trim().to_lowercase()).collect() }
    }

    /// Case-insensitive; typographic apostrophes count as `'`.
    pub fn contains(&self, word: &str) -> bool {
        let w = word.to_lowercase().replace('\u{2019}', "'");
        self.words.contains(&w)
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl Default for StopWords {
    fn default() -> Self { Self::english() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_function_words() {
        let sw = StopWords::english();
        for w in ["the", "and", "I", "You", "of", "n't", "'s"] {
            assert!(sw.contains(w), "{w} should be a stop word");
        }
        for w in ["raider", "whiskey", "caravan"] {
            assert!(!sw.contains(w), "{w} should not be a stop word");
        }
    }

    #[test]
    fn custom_list() {
        let sw = StopWords::from_words(["Foo", " bar "]);
        assert!(sw.contains("foo"));
        assert!(sw.contains("BAR"));
        assert_eq!(sw.len(), 2);
    }
}
