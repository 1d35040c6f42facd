//! Abbreviation-aware sentence segmentation.
//!
//! Candidate boundaries come from Unicode sentence segmentation (UAX #29).
//! A candidate that ends on a known abbreviation ("Dr.", "e.g.") is glued to
//! the following segment. So is an uppercase initial ("J.") when the next
//! segment opens with a capitalized word that is not a common function word.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::config::ENGLISH_STOP_WORDS;

/// Abbreviations that do not end a sentence when followed by a capital.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "inc", "ltd", "co",
    "corp", "plc", "llc", "dept", "univ", "gov", "gen", "col", "capt", "sgt", "rev", "hon",
    "e.g", "i.e", "cf", "al", "fig", "approx", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "a.m", "p.m",
];

#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: HashSet<String>,
}

impl SentenceSplitter {
    /// English abbreviations.
    pub fn new() -> Self {
        Self::with_abbreviations(ABBREVIATIONS.iter().copied())
    }

    /// Abbreviations are given lowercase without the final period.
    pub fn with_abbreviations<'a>(abbreviations: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            abbreviations: abbreviations.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Split `text` into trimmed, non-empty sentences in document order.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;
        let mut offset = 0;
        let mut segments = text.split_sentence_bounds().peekable();

        while let Some(segment) = segments.next() {
            let seg_start = offset;
            offset += segment.len();
            if start.is_none() {
                if segment.trim().is_empty() {
                    continue;
                }
                start = Some(seg_start);
            }
            let Some(s) = start else { continue };
            let candidate = text[s..offset].trim();
            if self.continues_after(candidate, segments.peek().copied()) {
                continue;
            }
            sentences.push(candidate);
            start = None;
        }

        if let Some(s) = start {
            let rest = text[s..].trim();
            if !rest.is_empty() {
                sentences.push(rest);
            }
        }

        sentences
    }

    fn continues_after(&self, candidate: &str, next: Option<&str>) -> bool {
        let Some(stripped) = candidate.strip_suffix('.') else {
            return false;
        };
        let last = stripped
            .rsplit(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or("");
        let mut chars = last.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(c), None) => c.is_uppercase() && c != 'I' && opens_with_name(next),
            _ => self.abbreviations.contains(&last.to_lowercase()),
        }
    }
}

/// Whether the next segment starts with a capitalized word other than a
/// function word ("Smith" but not "Then" or "It").
fn opens_with_name(next: Option<&str>) -> bool {
    let Some(word) = next.and_then(|n| n.split_whitespace().next()) else {
        return false;
    };
    let word = word.trim_end_matches(|c: char| !c.is_alphanumeric());
    word.chars().next().is_some_and(char::is_uppercase)
        && !ENGLISH_STOP_WORDS.contains(&word.to_lowercase().as_str())
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let s = SentenceSplitter::new();
        assert_eq!(
            s.split("First one. Second one! Third one?"),
            vec!["First one.", "Second one!", "Third one?"]
        );
    }

    #[test]
    fn keeps_abbreviations_inside() {
        let s = SentenceSplitter::new();
        assert_eq!(
            s.split("Dr. Smith met Mr. Jones. They talked."),
            vec!["Dr. Smith met Mr. Jones.", "They talked."]
        );
    }

    #[test]
    fn keeps_initials_inside() {
        let s = SentenceSplitter::new();
        assert_eq!(
            s.split("J. Smith founded it. It grew."),
            vec!["J. Smith founded it.", "It grew."]
        );
    }

    #[test]
    fn initials_need_a_name_after_them() {
        let s = SentenceSplitter::new();
        assert_eq!(
            s.split("We chose plan B. Then it worked. So did I. Great."),
            vec!["We chose plan B.", "Then it worked.", "So did I.", "Great."]
        );
        assert_eq!(
            s.split("The memo from John F. Kennedy arrived. It was short."),
            vec!["The memo from John F. Kennedy arrived.", "It was short."]
        );
    }

    #[test]
    fn empty_and_blank_input() {
        let s = SentenceSplitter::new();
        assert!(s.split("").is_empty());
        assert!(s.split("  \n\t ").is_empty());
    }

    #[test]
    fn trailing_text_without_period() {
        let s = SentenceSplitter::new();
        assert_eq!(s.split("One. two three"), vec!["One. two three"]);
    }
}
