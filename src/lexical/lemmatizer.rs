//! Dictionary-form reduction by word class.
//!
//! `MorphLemmatizer` follows WordNet's morphy: irregular forms come from
//! exception tables, regular forms from suffix detachment rules. With a
//! lexicon the first rule candidate found in it wins; without one a set of
//! spelling heuristics picks the candidate.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::types::{PrepError, PrepResult, WordClass};

/// Reduces a lowercase word to its lemma for a given word class.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str, class: WordClass) -> String;
}

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"), ("men", "man"), ("women", "woman"), ("people", "person"),
    ("mice", "mouse"), ("geese", "goose"), ("feet", "foot"), ("teeth", "tooth"),
    ("data", "datum"), ("criteria", "criterion"), ("phenomena", "phenomenon"),
    ("analyses", "analysis"), ("indices", "index"), ("leaves", "leaf"), ("lives", "life"),
    ("wives", "wife"), ("knives", "knife"), ("halves", "half"), ("wolves", "wolf"),
    ("selves", "self"), ("oxen", "ox"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"), ("am", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("has", "have"), ("had", "have"), ("does", "do"), ("did", "do"),
    ("done", "do"), ("goes", "go"), ("went", "go"), ("gone", "go"), ("made", "make"),
    ("took", "take"), ("taken", "take"), ("gave", "give"), ("given", "give"), ("saw", "see"),
    ("seen", "see"), ("came", "come"), ("ate", "eat"), ("eaten", "eat"), ("ran", "run"),
    ("began", "begin"), ("begun", "begin"), ("bought", "buy"), ("brought", "bring"),
    ("thought", "think"), ("found", "find"), ("got", "get"), ("gotten", "get"),
    ("held", "hold"), ("kept", "keep"), ("knew", "know"), ("known", "know"),
    ("left", "leave"), ("led", "lead"), ("lost", "lose"), ("met", "meet"), ("paid", "pay"),
    ("said", "say"), ("sold", "sell"), ("sent", "send"), ("spent", "spend"),
    ("stood", "stand"), ("told", "tell"), ("won", "win"), ("wrote", "write"),
    ("written", "write"), ("built", "build"), ("grew", "grow"), ("grown", "grow"),
    ("became", "become"), ("felt", "feel"), ("meant", "mean"), ("understood", "understand"),
    ("chose", "choose"), ("chosen", "choose"), ("fell", "fall"), ("spoke", "speak"),
    ("spoken", "speak"), ("drove", "drive"), ("driven", "drive"), ("rose", "rise"),
    ("risen", "rise"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("further", "far"), ("farther", "far"), ("farthest", "far"), ("elder", "old"),
    ("eldest", "old"), ("less", "little"), ("least", "little"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("best", "well"), ("better", "well"), ("deeper", "deeply"), ("farther", "far"),
    ("further", "far"), ("harder", "hard"), ("hardest", "hard"),
];

/// Words that look inflected but are their own lemma in every class.
const INVARIANT: &[&str] = &[
    "news", "series", "species", "physics", "mathematics", "economics", "politics", "this",
    "bias", "canvas", "atlas", "alias", "lens", "means", "thus", "always", "perhaps", "yes",
];

/// WordNet detachment rules: (suffix, replacement).
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""), ("ses", "s"), ("xes", "x"), ("zes", "z"), ("ches", "ch"), ("shes", "sh"),
    ("men", "man"), ("ies", "y"),
];
const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""), ("ies", "y"), ("es", "e"), ("es", ""), ("ed", "e"), ("ed", ""), ("ing", "e"),
    ("ing", ""),
];
const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

#[derive(Debug, Clone)]
pub struct MorphLemmatizer {
    exceptions: HashMap<WordClass, HashMap<&'static str, &'static str>>,
    lexicon: Option<HashSet<String>>,
}

impl MorphLemmatizer {
    pub fn new() -> Self {
        let table = |pairs: &[(&'static str, &'static str)]| -> HashMap<&'static str, &'static str> {
            pairs.iter().copied().collect()
        };
        let mut exceptions = HashMap::new();
        exceptions.insert(WordClass::Noun, table(NOUN_EXCEPTIONS));
        exceptions.insert(WordClass::Verb, table(VERB_EXCEPTIONS));
        exceptions.insert(WordClass::Adjective, table(ADJECTIVE_EXCEPTIONS));
        exceptions.insert(WordClass::AdjectiveSatellite, table(ADJECTIVE_EXCEPTIONS));
        exceptions.insert(WordClass::Adverb, table(ADVERB_EXCEPTIONS));
        Self {
            exceptions,
            lexicon: None,
        }
    }

    /// Validate rule candidates against a set of known lemmas.
    pub fn with_lexicon<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lexicon = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Load a newline-separated word list. Blank lines and `#` comments are skipped.
    pub fn load_lexicon(path: impl AsRef<Path>) -> PrepResult<HashSet<String>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| PrepError::io(path, e))?;
        let words: HashSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        log::debug!("loaded {} lexicon entries from {}", words.len(), path.display());
        Ok(words)
    }

    fn rules(class: WordClass) -> &'static [(&'static str, &'static str)] {
        match class {
            WordClass::Noun => NOUN_RULES,
            WordClass::Verb => VERB_RULES,
            WordClass::Adjective | WordClass::AdjectiveSatellite => ADJECTIVE_RULES,
            WordClass::Adverb => &[],
        }
    }

    fn candidates(word: &str, class: WordClass) -> Vec<String> {
        Self::rules(class)
            .iter()
            .filter_map(|&(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .filter(|stem| !stem.is_empty())
                    .map(|stem| format!("{stem}{replacement}"))
            })
            .collect()
    }

    fn guess(word: &str, class: WordClass) -> String {
        match class {
            WordClass::Noun => guess_noun(word),
            WordClass::Verb => guess_verb(word),
            WordClass::Adjective | WordClass::AdjectiveSatellite => guess_adjective(word),
            WordClass::Adverb => word.to_string(),
        }
    }
}

impl Default for MorphLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for MorphLemmatizer {
    fn lemmatize(&self, word: &str, class: WordClass) -> String {
        if INVARIANT.contains(&word) {
            return word.to_string();
        }
        if let Some(lemma) = self.exceptions.get(&class).and_then(|t| t.get(word)) {
            return lemma.to_string();
        }
        match &self.lexicon {
            Some(lexicon) => {
                if lexicon.contains(word) {
                    return word.to_string();
                }
                Self::candidates(word, class)
                    .into_iter()
                    .find(|c| lexicon.contains(c))
                    .unwrap_or_else(|| word.to_string())
            }
            None => Self::guess(word, class),
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// "stopp" -> "stop", "runn" -> "run".
fn undouble(stem: &str) -> Option<&str> {
    let mut rev = stem.chars().rev();
    let (last, prev) = (rev.next()?, rev.next()?);
    (last == prev && matches!(last, 'b' | 'g' | 'm' | 'n' | 'p' | 'r' | 't'))
        .then(|| &stem[..stem.len() - last.len_utf8()])
}

/// Consonant-vowel-consonant ending, as in "mak" or "lik".
fn ends_cvc(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    let n = chars.len();
    let (a, b, c) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, 'w' | 'x' | 'y')
}

/// Restore a silent `e` dropped before `-ing`/`-ed`.
fn restore_verb_stem(stem: &str) -> String {
    if let Some(base) = undouble(stem) {
        return base.to_string();
    }
    let needs_e = stem.ends_with('v')
        || stem.ends_with('c')
        || stem.ends_with("us")
        || stem.ends_with("iz")
        || (stem.chars().count() == 3 && ends_cvc(stem));
    if needs_e {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

fn guess_noun(word: &str) -> String {
    if word.chars().count() <= 3
        || word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
    {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies").filter(|stem| stem.chars().count() > 1) {
        return format!("{stem}y");
    }
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("men") {
        return format!("{stem}man");
    }
    // "-as" is mostly singular ("bias", "canvas") except after "e" ("ideas")
    if word.ends_with("as") && !word.ends_with("eas") {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

fn guess_verb(word: &str) -> String {
    if word.chars().count() <= 3 || word.ends_with("ss") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        // "died" -> "die", "studied" -> "study"
        return if stem.chars().count() > 1 {
            format!("{stem}y")
        } else {
            format!("{stem}ie")
        };
    }
    if let Some(stem) = word.strip_suffix("ing") {
        if stem.chars().count() >= 2 {
            return restore_verb_stem(stem);
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if stem.ends_with('e') {
            return stem.to_string();
        }
        return restore_verb_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["s", "x", "z", "ch", "sh"].iter().any(|s| stem.ends_with(s)) {
            return stem.to_string();
        }
    }
    if word.ends_with("us") || word.ends_with("as") {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

fn guess_adjective(word: &str) -> String {
    for suffix in ["est", "er"] {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if let Some(base) = stem.strip_suffix('i') {
            return format!("{base}y");
        }
        if let Some(base) = undouble(stem) {
            return base.to_string();
        }
        if suffix == "est" && stem.chars().count() >= 4 {
            return stem.to_string();
        }
    }
    word.to_string()
}
