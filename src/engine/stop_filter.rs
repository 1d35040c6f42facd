//! Noise removal: stop words, punctuation, numbers, markup and short tokens.

use crate::types::StopConfig;

/// Drops noise tokens and lowercases the survivors.
///
/// A token is dropped when its lowercased form is in the stop set, contains
/// `<`, is two characters or shorter, contains an ASCII digit, or contains no
/// ASCII letter. Non-Latin scripts fail the last check and are always dropped.
#[derive(Debug, Clone, Default)]
pub struct StopFilter {
    config: StopConfig,
}

impl StopFilter {
    pub fn new(config: StopConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StopConfig {
        &self.config
    }

    /// Whether a single token survives. The check is made on `token.to_lowercase()`.
    pub fn keeps(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.keeps_lowercase(&lower)
    }

    fn keeps_lowercase(&self, lower: &str) -> bool {
        !(self.config.contains(lower)
            || lower.contains('<')
            || lower.chars().count() <= 2
            || lower.chars().any(|c| c.is_ascii_digit())
            || !lower.chars().any(|c| c.is_ascii_lowercase()))
    }

    /// Filter a token sequence, returning lowercased survivors in order.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|lower| self.keeps_lowercase(lower))
            .collect()
    }
}

/// Replace hyphens with underscores so hyphen compounds share the collocation
/// joiner. Not part of the default flow.
pub fn hyphens_to_underscores<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref().replace('-', "_"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(tokens: &[&str]) -> Vec<String> {
        StopFilter::default().filter(tokens)
    }

    #[test]
    fn drops_each_noise_class() {
        assert_eq!(
            filter(&["The", "<b>", "ab", "abc123", "---", "...", "quot", "Rust"]),
            vec!["rust"]
        );
    }

    #[test]
    fn stop_words_checked_case_insensitively() {
        assert!(filter(&["THE", "Because"]).is_empty());
    }

    #[test]
    fn keeps_compounds_and_mentions() {
        assert_eq!(
            filter(&["Well-Known", "@rustlang", "new_york"]),
            vec!["well-known", "@rustlang", "new_york"]
        );
    }

    #[test]
    fn drops_non_latin_words() {
        assert!(filter(&["日本語", "Привет"]).is_empty());
    }

    #[test]
    fn length_counts_characters() {
        // "été" is three characters but five bytes
        assert_eq!(filter(&["été"]), vec!["été"]);
        assert!(filter(&["né"]).is_empty());
    }

    #[test]
    fn hyphen_helper_is_explicit() {
        assert_eq!(hyphens_to_underscores(&["well-known"]), vec!["well_known"]);
    }
}
