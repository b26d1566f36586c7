// src/nlp/mod.rs
//
// Text → tagged tokens → content words.

pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use stopwords::StopWords;
pub use tagger::{LexiconTagger, Pos, Tagger};
pub use tokenizer::{Token, TokenKind, tokenize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: Pos,
    pub is_stop: bool,
    pub is_punct: bool,
}

impl TaggedToken {
    /// Kept in the word lists: neither a stop word nor punctuation.
    pub fn is_content(&self) -> bool {
        !self.is_stop && !self.is_punct
    }
}

pub struct Analyzer {
    stop: StopWords,
    tagger: Box<dyn Tagger + Send + Sync>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(StopWords::english(), Box::new(LexiconTagger::new()))
    }
}

impl Analyzer {
    pub fn new(stop: StopWords, tagger: Box<dyn Tagger + Send + Sync>) -> Self {
        Self { stop, tagger }
    }

    pub fn analyze(&self, text: &str) -> Vec<TaggedToken> {
        let tokens = tokenize(text);
        let tags = self.tagger.tag(&tokens);

        tokens
            .into_iter()
            .zip(tags)
            .map(|(tok, pos)| TaggedToken {
                is_stop: self.stop.contains(&tok.text),
                is_punct: tok.is_punct() || pos == Pos::Punct,
                text: tok.text,
                pos,
            })
            .collect()
    }

    /// Content tokens only, tags kept.
    pub fn content_tokens(&self, text: &str) -> Vec<TaggedToken> {
        self.analyze(text).into_iter().filter(TaggedToken::is_content).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_stop_words_and_punctuation() {
        let a = Analyzer::default();
        let words: Vec<String> = a
            .content_tokens("well, i don't like raiders. raiders want whiskey!")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert!(words.contains(&s!("raiders")));
        assert!(words.contains(&s!("whiskey")));
        assert!(!words.iter().any(|w| w == "," || w == "." || w == "!"));
        assert!(!words.iter().any(|w| w == "i" || w == "n't" || w == "are"));
    }

    #[test]
    fn custom_stop_list() {
        let a = Analyzer::new(StopWords::from_words(["caps"]), Box::new(LexiconTagger::new()));
        let words: Vec<String> = a.content_tokens("the caps").into_iter().map(|t| t.text).collect();
        assert_eq!(words, vec!["the"]);
    }
}
