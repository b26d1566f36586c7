// src/nlp/tagger.rs
//
// Part-of-speech tagging with the Universal tag set.
//
// `LexiconTagger` is a two-pass heuristic tagger: a lexical pass (closed-class
// word lists, an open-class verb/adjective lexicon with inflection stripping,
// suffix rules) followed by a left/right context pass for the common noun/verb
// ambiguities ("the fight" vs "to fight"). Unknown words default to NOUN.

use std::collections::{HashMap, HashSet};

use super::tokenizer::{Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Punct,
    Sconj,
    Sym,
    Verb,
}

pub trait Tagger {
    /// One tag per token, same order.
    fn tag(&self, tokens: &[Token]) -> Vec<Pos>;
}

const DET: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "another", "either", "neither", "all", "both", "such", "what", "which", "whose",
];

const POSSESSIVE: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const PRON: &[&str] = &[
    "i", "me", "mine", "myself", "you", "yours", "yourself", "yourselves", "he", "him",
    "himself", "she", "hers", "herself", "it", "itself", "we", "us", "ours", "ourselves", "they",
    "them", "theirs", "themselves", "who", "whom", "whoever", "whatever", "something", "anything",
    "nothing", "everything", "someone", "anyone", "everyone", "nobody", "somebody", "anybody",
    "everybody", "ya", "y'all",
];

const ADP: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "from", "up", "down", "out", "off", "over",
    "under", "than", "as", "near", "among", "across", "behind", "beyond", "upon", "within",
    "without", "toward", "towards", "around", "since", "until", "till", "via", "per", "despite",
    "onto", "inside", "outside", "along", "past",
];

const AUX: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    "ca", "wo", "sha", "'m", "'re", "'ve", "'ll", "'d", "gon", "gotta", "ai",
];

const MODAL: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "ca", "wo", "'ll",
    "'d", "do", "does", "did",
];

const CCONJ: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

const SCONJ: &[&str] = &["if", "because", "while", "although", "though", "unless", "whether", "when", "where", "once", "cause"];

const ADV: &[&str] = &[
    "not", "never", "very", "too", "also", "just", "only", "really", "quite", "rather", "almost",
    "always", "often", "sometimes", "already", "still", "even", "ever", "here", "there", "now",
    "then", "again", "soon", "later", "maybe", "perhaps", "away", "back", "together", "instead",
    "anyway", "anymore", "how", "why", "so", "else", "enough", "somewhere", "anywhere",
    "everywhere", "nowhere", "today", "tonight", "tomorrow", "yesterday", "ago", "more", "most",
    "less", "least", "much", "pretty", "forward", "alone", "sure",
];

const PART: &[&str] = &["n't", "to", "'s", "not"];

const INTJ: &[&str] = &[
    "oh", "ah", "hey", "hi", "hello", "yeah", "yes", "yep", "nope", "okay", "ok", "wow", "huh",
    "hmm", "uh", "um", "please", "thanks", "bye", "goodbye", "damn", "shit", "whoa", "heh", "ha",
];

const NUM: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
];

const VERBS: &[&str] = &[
    "go", "get", "make", "know", "think", "take", "see", "come", "want", "look", "use", "find",
    "give", "tell", "work", "call", "try", "ask", "need", "feel", "become", "leave", "put", "mean",
    "keep", "let", "begin", "seem", "help", "talk", "turn", "start", "show", "hear", "play", "run",
    "move", "like", "live", "believe", "hold", "bring", "happen", "write", "sit", "stand", "lose",
    "pay", "meet", "include", "continue", "set", "learn", "change", "lead", "understand", "watch",
    "follow", "stop", "create", "speak", "read", "allow", "add", "spend", "grow", "walk", "win",
    "offer", "remember", "love", "consider", "appear", "buy", "wait", "serve", "die", "send",
    "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain", "suggest", "raise",
    "pass", "sell", "require", "decide", "pull", "break", "thank", "drink", "eat", "fight",
    "shoot", "hate", "hurt", "save", "protect", "trust", "care", "worry", "forget", "sleep",
    "carry", "fix", "wish", "hope", "steal", "hide", "kiss", "laugh", "cry", "smile", "drop",
    "throw", "catch", "hit", "jump", "climb", "drive", "owe", "promise", "guess", "swear",
    "shut", "clean", "check", "join", "deal", "scare", "bother", "say", "punch", "kick", "beat",
    "rob", "sneak", "search", "listen", "answer", "bet", "mind", "miss", "figure", "count",
    "handle", "cover", "touch", "bleed", "burn", "destroy", "lie", "sing", "dance", "shoot",
];

/// Irregular past forms → base.
const IRREGULAR: &[(&str, &str)] = &[
    ("went", "go"), ("gone", "go"), ("got", "get"), ("gotten", "get"), ("made", "make"),
    ("knew", "know"), ("known", "know"), ("thought", "think"), ("took", "take"),
    ("taken", "take"), ("saw", "see"), ("seen", "see"), ("came", "come"), ("gave", "give"),
    ("given", "give"), ("told", "tell"), ("found", "find"), ("felt", "feel"),
    ("became", "become"), ("left", "leave"), ("meant", "mean"), ("kept", "keep"),
    ("began", "begin"), ("begun", "begin"), ("held", "hold"), ("brought", "bring"),
    ("wrote", "write"), ("written", "write"), ("sat", "sit"), ("stood", "stand"),
    ("lost", "lose"), ("paid", "pay"), ("met", "meet"), ("led", "lead"),
    ("understood", "understand"), ("spoke", "speak"), ("spoken", "speak"), ("grew", "grow"),
    ("grown", "grow"), ("won", "win"), ("bought", "buy"), ("built", "build"), ("fell", "fall"),
    ("fallen", "fall"), ("sent", "send"), ("spent", "spend"), ("drank", "drink"),
    ("ate", "eat"), ("eaten", "eat"), ("fought", "fight"), ("shot", "shoot"), ("hid", "hide"),
    ("hidden", "hide"), ("caught", "catch"), ("threw", "throw"), ("thrown", "throw"),
    ("drove", "drive"), ("driven", "drive"), ("slept", "sleep"), ("stole", "steal"),
    ("stolen", "steal"), ("broke", "break"), ("broken", "break"), ("forgot", "forget"),
    ("forgotten", "forget"), ("said", "say"), ("heard", "hear"), ("ran", "run"),
    ("swore", "swear"), ("sworn", "swear"), ("beaten", "beat"), ("bled", "bleed"),
    ("burnt", "burn"), ("sang", "sing"), ("sung", "sing"),
];

const ADJS: &[&str] = &[
    "good", "bad", "new", "old", "great", "big", "small", "little", "large", "long", "short",
    "high", "low", "young", "early", "late", "right", "wrong", "real", "best", "better", "worse",
    "worst", "free", "full", "whole", "true", "false", "able", "easy", "hard", "strong", "weak",
    "dead", "alive", "happy", "sad", "angry", "mad", "scared", "afraid", "nice", "fine", "poor",
    "rich", "clean", "dirty", "dark", "bright", "cold", "hot", "warm", "safe", "crazy", "stupid",
    "smart", "funny", "strange", "weird", "different", "same", "other", "own", "last", "next",
    "ready", "busy", "tired", "hungry", "sick", "quiet", "loud", "fast", "slow", "ugly", "lucky",
    "fair", "proud", "kind", "cruel", "brave", "calm", "simple", "deep", "heavy", "empty",
    "clear", "cheap", "bloody", "tough", "rough", "glad", "sorry", "amused", "annoyed",
    "irritated", "disgusted", "concerned", "curious", "surprised", "excited", "bored",
    "confused", "upset", "neutral", "flirty", "drunk", "tense", "sly", "shy", "worried",
    "pleased", "ashamed", "embarrassed", "interested", "frightened", "determined", "relieved",
    "puzzled", "disappointed", "depressed", "fucking", "goddamn", "damned", "first", "second",
    "third", "only", "certain", "entire", "main", "huge", "tiny", "nervous", "serious", "honest",
    "friendly", "lovely", "lonely", "silly", "likely", "deadly", "ugly",
];

const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ish", "ical", "ic", "est"];
const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ism", "ist", "ship", "hood", "ance", "ence"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Lexical reading of one word, before context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reading {
    Tag(Pos),
    /// Verb lexicon hit on a base or -s form: a noun after a determiner.
    VerbOrNoun,
    /// Not in any list and no telling suffix.
    Unknown,
}

pub struct LexiconTagger {
    closed: HashMap<&'static str, Pos>,
    verbs: HashSet<&'static str>,
    irregular: HashMap<&'static str, &'static str>,
    adjs: HashSet<&'static str>,
    possessive: HashSet<&'static str>,
    modal: HashSet<&'static str>,
}

impl Default for LexiconTagger {
    fn default() -> Self { Self::new() }
}

impl LexiconTagger {
    pub fn new() -> Self {
        let mut closed = HashMap::new();
        // Later lists win on overlap; PART/"to" is resolved in context.
        for (list, pos) in [
            (ADP, Pos::Adp),
            (SCONJ, Pos::Sconj),
            (DET, Pos::Det),
            (PRON, Pos::Pron),
            (POSSESSIVE, Pos::Pron),
            (NUM, Pos::Num),
            (CCONJ, Pos::Cconj),
            (ADV, Pos::Adv),
            (INTJ, Pos::Intj),
            (AUX, Pos::Aux),
            (PART, Pos::Part),
        ] {
            for w in list {
                closed.insert(*w, pos);
            }
        }

        Self {
            closed,
            verbs: VERBS.iter().copied().collect(),
            irregular: IRREGULAR.iter().copied().collect(),
            adjs: ADJS.iter().copied().collect(),
            possessive: POSSESSIVE.iter().copied().collect(),
            modal: MODAL.iter().copied().collect(),
        }
    }

    fn is_verb_base(&self, w: &str) -> bool {
        self.verbs.contains(w)
    }

    /// -s / -ed / -ing stripping against the verb lexicon.
    fn verb_inflection(&self, w: &str) -> Option<Inflection> {
        if self.irregular.contains_key(w) {
            return Some(Inflection::Past);
        }
        if let Some(stem) = w.strip_suffix("ing") {
            if self.any_base(stem, true) { return Some(Inflection::Participle); }
        }
        if let Some(stem) = w.strip_suffix("ied") {
            if self.is_verb_base(&format!("{stem}y")) { return Some(Inflection::Past); }
        }
        if let Some(stem) = w.strip_suffix("ed") {
            if self.any_base(stem, true) { return Some(Inflection::Past); }
        }
        if let Some(stem) = w.strip_suffix("ies") {
            if self.is_verb_base(&format!("{stem}y")) { return Some(Inflection::ThirdPerson); }
        }
        if let Some(stem) = w.strip_suffix("es") {
            if self.is_verb_base(stem) { return Some(Inflection::ThirdPerson); }
        }
        if let Some(stem) = w.strip_suffix('s') {
            if self.is_verb_base(stem) { return Some(Inflection::ThirdPerson); }
        }
        None
    }

    /// `stem`, `stem+e`, or `stem` with a doubled final consonant undone.
    fn any_base(&self, stem: &str, allow_e: bool) -> bool {
        if stem.is_empty() { return false; }
        if self.is_verb_base(stem) { return true; }
        if allow_e && self.is_verb_base(&format!("{stem}e")) { return true; }
        // doubled final consonant: stopped, running
        let mut rev = stem.chars().rev();
        match (rev.next(), rev.next()) {
            (Some(a), Some(b)) if a == b && a.is_ascii_alphabetic() && !matches!(a, 'l' | 's') => {
                self.is_verb_base(&stem[..stem.len() - a.len_utf8()])
            }
            _ => false,
        }
    }

    fn lexical(&self, tok: &Token) -> Reading {
        match tok.kind {
            TokenKind::Punct => return Reading::Tag(Pos::Punct),
            TokenKind::Number => return Reading::Tag(Pos::Num),
            TokenKind::Symbol => return Reading::Tag(Pos::Sym),
            TokenKind::Word => {}
        }

        let w = tok.text.to_lowercase();
        let w = w.as_str();

        if let Some(pos) = self.closed.get(w) {
            return Reading::Tag(*pos);
        }
        if self.adjs.contains(w) {
            return Reading::Tag(Pos::Adj);
        }
        if self.is_verb_base(w) {
            return Reading::VerbOrNoun;
        }
        match self.verb_inflection(w) {
            Some(Inflection::ThirdPerson) => return Reading::VerbOrNoun,
            Some(_) => return Reading::Tag(Pos::Verb),
            None => {}
        }
        if w.len() > 4 && w.ends_with("ly") {
            return Reading::Tag(Pos::Adv);
        }
        if w.len() > 4 && ADJ_SUFFIXES.iter().any(|s| w.ends_with(s)) {
            return Reading::Tag(Pos::Adj);
        }
        if w.len() > 4 && NOUN_SUFFIXES.iter().any(|s| w.ends_with(s)) {
            return Reading::Tag(Pos::Noun);
        }
        if w.len() > 4 && VERB_SUFFIXES.iter().any(|s| w.ends_with(s)) {
            return Reading::Tag(Pos::Verb);
        }
        if w.len() > 4 && (w.ends_with("ing") || w.ends_with("ed")) {
            return Reading::Tag(Pos::Verb);
        }
        Reading::Unknown
    }

    fn is_nominal_context(&self, prev: Option<(&Token, Pos)>) -> bool {
        match prev {
            Some((tok, pos)) => {
                matches!(pos, Pos::Det | Pos::Adj | Pos::Num)
                    || self.possessive.contains(tok.text.to_lowercase().as_str())
                    || (tok.text == "'s" && pos == Pos::Part)
            }
            None => false,
        }
    }

    fn is_verbal_context(&self, prev: Option<(&Token, Pos)>) -> bool {
        match prev {
            Some((tok, pos)) => {
                let w = tok.text.to_lowercase();
                (pos == Pos::Part && w == "to")
                    || self.modal.contains(w.as_str())
                    || (pos == Pos::Pron && !self.possessive.contains(w.as_str()))
                    || w == "n't"
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Inflection {
    ThirdPerson,
    Past,
    Participle,
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[Token]) -> Vec<Pos> {
        let readings: Vec<Reading> = tokens.iter().map(|t| self.lexical(t)).collect();
        let mut tags: Vec<Pos> = Vec::with_capacity(tokens.len());

        for (i, tok) in tokens.iter().enumerate() {
            let prev = i.checked_sub(1).map(|j| (&tokens[j], tags[j]));

            let pos = match readings[i] {
                Reading::Tag(Pos::Part) if tok.text.eq_ignore_ascii_case("to") => {
                    // "to run" vs "to the vault"
                    match readings.get(i + 1) {
                        Some(Reading::VerbOrNoun) => Pos::Part,
                        Some(Reading::Tag(Pos::Verb)) => Pos::Part,
                        Some(Reading::Tag(Pos::Aux)) => Pos::Part,
                        _ => Pos::Adp,
                    }
                }
                Reading::Tag(Pos::Part) if tok.text == "'s" => {
                    // "cait's gun" (possessive) vs "it's" (is)
                    match prev {
                        Some((_, Pos::Pron)) => Pos::Aux,
                        _ => Pos::Part,
                    }
                }
                Reading::Tag(pos) => pos,
                Reading::VerbOrNoun => {
                    if self.is_nominal_context(prev) { Pos::Noun } else { Pos::Verb }
                }
                Reading::Unknown => {
                    if self.is_verbal_context(prev) { Pos::Verb } else { Pos::Noun }
                }
            };
            tags.push(pos);
        }
        tags
    }
}
