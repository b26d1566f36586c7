// src/freq.rs
use std::collections::HashMap;

/// Token → count, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenFrequencyTable {
    entries: Vec<(String, usize)>,
}

impl TokenFrequencyTable {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for tok in tokens {
            let tok = tok.as_ref();
            match index.get(tok) {
                Some(&ix) => entries[ix].1 += 1,
                None => {
                    index.insert(s!(tok), entries.len());
                    entries.push((s!(tok), 1));
                }
            }
        }
        Self { entries }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.entries.iter().find(|(t, _)| t == token).map(|(_, n)| *n)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn entries(&self) -> &[(String, usize)] { &self.entries }

    /// Highest counts first; equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1)); // stable
        sorted.truncate(n);
        sorted
    }
}
