//! Part-of-speech tagging with Penn Treebank tags.

use std::collections::HashMap;

use crate::types::TaggedToken;

/// Assigns a treebank tag to every token of one sentence.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

/// Closed-class words and their tags.
const CLOSED_CLASS: &[(&str, &str)] = &[
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("all", "DT"), ("both", "DT"), ("another", "DT"),
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("into", "IN"), ("about", "IN"), ("over", "IN"),
    ("under", "IN"), ("after", "IN"), ("before", "IN"), ("between", "IN"),
    ("through", "IN"), ("during", "IN"), ("against", "IN"), ("without", "IN"),
    ("within", "IN"), ("since", "IN"), ("until", "IN"), ("upon", "IN"), ("via", "IN"),
    ("than", "IN"), ("because", "IN"), ("while", "IN"), ("if", "IN"), ("although", "IN"),
    ("though", "IN"), ("as", "IN"), ("across", "IN"), ("among", "IN"),
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"),
    ("them", "PRP"), ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"),
    ("its", "PRP$"), ("our", "PRP$"), ("their", "PRP$"),
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    ("to", "TO"),
    ("is", "VBZ"), ("has", "VBZ"), ("does", "VBZ"), ("are", "VBP"), ("am", "VBP"),
    ("have", "VBP"), ("do", "VBP"), ("was", "VBD"), ("were", "VBD"), ("had", "VBD"),
    ("did", "VBD"), ("be", "VB"), ("been", "VBN"), ("being", "VBG"),
    ("which", "WDT"), ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("when", "WRB"),
    ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    ("not", "RB"), ("very", "RB"), ("also", "RB"), ("just", "RB"), ("too", "RB"),
    ("never", "RB"), ("always", "RB"), ("often", "RB"), ("here", "RB"), ("there", "EX"),
    ("now", "RB"), ("then", "RB"), ("so", "RB"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "ical", "less", "ish", "ary", "ic", "al",
];
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ship", "ance", "ence", "ist",
];

/// Lexicon and suffix heuristics. No statistical model.
///
/// Capitalized words are proper nouns except at sentence start, where a
/// recognisable suffix or a plural ending wins.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexicon: HashMap<String, String>,
}

impl RuleTagger {
    pub fn new() -> Self {
        Self {
            lexicon: CLOSED_CLASS
                .iter()
                .map(|&(w, t)| (w.to_string(), t.to_string()))
                .collect(),
        }
    }

    /// Add or override lexicon entries (lowercase word → tag).
    pub fn with_entries<'a>(mut self, entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.lexicon
            .extend(entries.into_iter().map(|(w, t)| (w.to_lowercase(), t.to_string())));
        self
    }

    fn tag_one(&self, token: &str, index: usize, previous: Option<&str>) -> String {
        let lower = token.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }
        if !token.chars().any(char::is_alphanumeric) {
            return match token {
                "." | "!" | "?" => ".",
                "," => ",",
                ":" | ";" | "-" => ":",
                "(" => "(",
                ")" => ")",
                _ => "SYM",
            }
            .to_string();
        }
        if token.chars().any(|c| c.is_ascii_digit()) && !token.chars().any(char::is_alphabetic) {
            return "CD".to_string();
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        if capitalized && index > 0 {
            return "NNP".to_string();
        }
        if matches!(previous, Some("MD") | Some("TO")) {
            return "VB".to_string();
        }
        match suffix_tag(&lower) {
            Some(tag) => tag.to_string(),
            None if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 => {
                "NNS".to_string()
            }
            None if capitalized => "NNP".to_string(),
            None => "NN".to_string(),
        }
    }
}

fn suffix_tag(lower: &str) -> Option<&'static str> {
    if lower.contains('-') {
        return Some("JJ");
    }
    if lower.len() <= 3 {
        return None;
    }
    if lower.ends_with("ly") {
        return Some("RB");
    }
    if lower.ends_with("ing") && lower.len() > 4 {
        return Some("VBG");
    }
    if lower.ends_with("ed") {
        return Some("VBD");
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some("NN");
    }
    if lower.ends_with("est") && lower.len() > 5 {
        return Some("JJS");
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some("JJ");
    }
    None
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let previous = tagged.last().map(|t| t.tag.as_str());
            let tag = self.tag_one(token, i, previous);
            tagged.push(TaggedToken::new(token.clone(), tag));
        }
        tagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(sentence: &str) -> Vec<String> {
        let tokens: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        RuleTagger::new()
            .tag(&tokens)
            .into_iter()
            .map(|t| t.tag)
            .collect()
    }

    #[test]
    fn closed_class_and_proper_nouns() {
        assert_eq!(
            tags("The office in New York is quickly growing ."),
            vec!["DT", "NN", "IN", "NNP", "NNP", "VBZ", "RB", "VBG", "."]
        );
    }

    #[test]
    fn modal_is_followed_by_base_verb() {
        assert_eq!(tags("we will deliver"), vec!["PRP", "MD", "VB"]);
    }

    #[test]
    fn plural_and_adjective_suffixes() {
        assert_eq!(tags("famous companies"), vec!["JJ", "NNS"]);
    }

    #[test]
    fn sentence_initial_capital_uses_suffix() {
        assert_eq!(tags("Running shops"), vec!["VBG", "NNS"]);
        assert_eq!(tags("Acme ships"), vec!["NNP", "NNS"]);
        assert_eq!(tags("Customers agree"), vec!["NNS", "NN"]);
    }
}
