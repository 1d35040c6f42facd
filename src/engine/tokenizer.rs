//! Pattern tokenizer shared by every pipeline stage.

use regex::Regex;

use crate::types::PrepResult;

/// Token patterns in priority order. The first alternative that matches at a
/// position wins, so compounds, mentions and URLs are kept whole instead of
/// falling through to the single-character pattern.
const TOKEN_PATTERNS: &[&str] = &[
    // URLs
    r"https?://(?:[a-z]|[0-9]|[$-_@.\&+]|[!*\(\),](?:%[0-9a-f][0-9a-f]))+",
    // three or more hyphenated words
    r"\w+(?:-\w+){2,}",
    // two hyphenated words
    r"\w+-\w+",
    // escaped newline markers
    r"\\+n+",
    // @-mentions
    r"@[\w_]+",
    // HTML tags
    r"<[^>]+>",
    // contractions
    r"\w+'\w",
    // words
    r"[\w_]+",
    // anything else that isn't whitespace
    r"\S",
];

/// Splits raw text into surface tokens. Case is left untouched.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Compile the combined, case-insensitive token pattern.
    pub fn new() -> PrepResult<Self> {
        let combined = format!("(?i){}", TOKEN_PATTERNS.join("|"));
        Ok(Self {
            pattern: Regex::new(&combined)?,
        })
    }

    /// Lazily yield tokens as slices of `text`.
    pub fn tokens<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.pattern.find_iter(text).map(|m| m.as_str())
    }

    /// Tokenize into owned strings.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).map(str::to_string).collect()
    }

    /// Number of raw tokens in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}
