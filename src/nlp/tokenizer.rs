// src/nlp/tokenizer.rs
//
// Word-boundary tokenizer (UAX #29 via unicode-segmentation) with English
// clitic splitting: "don't" → "do" + "n't", "cait's" → "cait" + "'s".

use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
    Symbol,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(), kind }
    }

    pub fn is_punct(&self) -> bool { self.kind == TokenKind::Punct }
}

// Longest first so "n't" wins over "'t"-style partial matches.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'m", "'d"];

pub fn tokenize(text: &str) -> Vec<Token> {
    let text = normalize_quotes(text);
    let mut out = Vec::new();

    for seg in text.split_word_bounds() {
        if seg.chars().all(char::is_whitespace) {
            continue;
        }
        if seg.chars().any(char::is_alphanumeric) {
            push_word(&mut out, seg);
        } else if seg.chars().all(is_punct_char) {
            out.push(Token::new(seg, TokenKind::Punct));
        } else {
            out.push(Token::new(seg, TokenKind::Symbol));
        }
    }
    out
}

fn push_word(out: &mut Vec<Token>, seg: &str) {
    if !seg.chars().any(char::is_alphabetic) {
        out.push(Token::new(seg, TokenKind::Number));
        return;
    }

    let lower = seg.to_lowercase();
    for clitic in CLITICS {
        // Keep the bare clitic ("'s" alone) and need at least one char of stem.
        if lower.len() > clitic.len() && lower.ends_with(clitic) && seg.is_char_boundary(seg.len() - clitic.len()) {
            let (stem, tail) = seg.split_at(seg.len() - clitic.len());
            out.push(Token::new(stem, TokenKind::Word));
            out.push(Token::new(tail, TokenKind::Word));
            return;
        }
    }
    out.push(Token::new(seg, TokenKind::Word));
}

fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}', '\u{02BC}'], "'")
}

pub fn is_punct_char(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(
            ch,
            '\u{201C}' | '\u{201D}' | '\u{2014}' | '\u{2013}' | '\u{2026}' | '\u{00AB}' | '\u{00BB}' | '\u{00BF}' | '\u{00A1}'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<String> {
        tokenize(s).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_words_and_punctuation() {
        assert_eq!(texts("Well, look at you!"), vec!["Well", ",", "look", "at", "you", "!"]);
    }

    #[test]
    fn splits_clitics() {
        assert_eq!(texts("don't you're cait's"), vec!["do", "n't", "you", "'re", "cait", "'s"]);
        assert_eq!(texts("I\u{2019}m fine"), vec!["I", "'m", "fine"]);
    }

    #[test]
    fn kinds() {
        let toks = tokenize("raiders: 3.5 caps...");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Word, TokenKind::Punct, TokenKind::Number, TokenKind::Word,
                 TokenKind::Punct, TokenKind::Punct, TokenKind::Punct]
        );
    }

    #[test]
    fn hyphens_split() {
        assert_eq!(texts("well-known"), vec!["well", "-", "known"]);
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("   ").is_empty());
    }
}
