//! Immutable configuration values for the filter stage and the pipeline.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{PrepError, PrepResult};

/// English stop words (NLTK list).
pub(crate) const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// ASCII punctuation characters.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Literal backslash-n left behind by scrapers that escape newlines.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// HTML entity residue (`&quot;` split by the tokenizer).
pub const QUOT_ARTIFACT: &str = "quot";

/// The stop set: `stop_words ∪ punctuation ∪ extras`.
#[derive(Debug, Clone)]
pub struct StopConfig {
    stop_words: HashSet<String>,
    punctuation: HashSet<String>,
    extras: HashSet<String>,
}

impl StopConfig {
    /// English stop words, ASCII punctuation, the escaped newline and `quot`.
    pub fn english() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            punctuation: PUNCTUATION.chars().map(String::from).collect(),
            extras: [ESCAPED_NEWLINE, QUOT_ARTIFACT]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    /// Build from explicit parts.
    pub fn from_parts<I, J, K>(stop_words: I, punctuation: J, extras: K) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator<Item = char>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
            punctuation: punctuation.into_iter().map(String::from).collect(),
            extras: extras.into_iter().map(Into::into).collect(),
        }
    }

    /// Return a copy with additional artifact tokens in the stop set.
    pub fn with_extra_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.extras.extend(words.into_iter().map(Into::into));
        self
    }

    /// Whether a (lowercased) token is in the stop set.
    pub fn contains(&self, token: &str) -> bool {
        self.stop_words.contains(token)
            || self.punctuation.contains(token)
            || self.extras.contains(token)
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn punctuation(&self) -> &HashSet<String> {
        &self.punctuation
    }

    pub fn extras(&self) -> &HashSet<String> {
        &self.extras
    }

    /// Total number of entries across the three sets.
    pub fn len(&self) -> usize {
        self.stop_words.len() + self.punctuation.len() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StopConfig {
    fn default() -> Self {
        Self::english()
    }
}

/// Which representation sentence tokens take before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenMode {
    /// Raw tokenizer output.
    #[default]
    Surface,
    /// POS tagging, entity chunking and lemmatization before filtering.
    Lemmatized,
}

/// Where collocation augmentation runs relative to the stop filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollocationOrder {
    BeforeFilter,
    #[default]
    AfterFilter,
}

/// Bigram augmentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollocationConfig {
    /// Minimum number of adjacent co-occurrences.
    pub min_freq: usize,
    /// Maximum number of bigrams appended.
    pub top_n: usize,
    pub order: CollocationOrder,
}

impl Default for CollocationConfig {
    fn default() -> Self {
        Self {
            min_freq: 2,
            top_n: 10,
            order: CollocationOrder::AfterFilter,
        }
    }
}

/// Pipeline settings, loadable from TOML.
///
/// ```toml
/// mode = "lemmatized"
/// extra_stop_words = ["nbsp"]
///
/// [collocations]
/// min_freq = 3
/// top_n = 5
/// order = "before_filter"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub mode: TokenMode,
    /// Website fragments with this many raw tokens or fewer are discarded.
    pub min_fragment_tokens: usize,
    /// Joiner used when website fragments are aggregated into one document.
    pub fragment_separator: String,
    /// Added to the stop set's extras.
    pub extra_stop_words: Vec<String>,
    pub collocations: Option<CollocationConfig>,
    /// Optional newline-separated word list used to validate lemma candidates.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: TokenMode::Surface,
            min_fragment_tokens: 2,
            fragment_separator: ". ".to_string(),
            extra_stop_words: Vec::new(),
            collocations: None,
            lexicon_path: None,
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> PrepResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> PrepResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| PrepError::io(path, e))?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> PrepResult<()> {
        if let Some(c) = &self.collocations {
            if c.min_freq == 0 {
                return Err(PrepError::InvalidConfig(
                    "collocations.min_freq must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_stop_set_has_artifacts() {
        let stop = StopConfig::english();
        assert!(stop.contains("the"));
        assert!(stop.contains("quot"));
        assert!(stop.contains("\\n"));
        assert!(stop.contains(","));
        assert!(!stop.contains("rust"));
    }

    #[test]
    fn parses_partial_toml() {
        let config = PipelineConfig::from_toml_str(
            r#"
            mode = "lemmatized"

            [collocations]
            top_n = 3
            order = "before_filter"
            "#,
        )
        .unwrap();
        assert_eq!(config.mode, TokenMode::Lemmatized);
        assert_eq!(config.fragment_separator, ". ");
        let c = config.collocations.unwrap();
        assert_eq!(c.min_freq, 2);
        assert_eq!(c.top_n, 3);
        assert_eq!(c.order, CollocationOrder::BeforeFilter);
    }

    #[test]
    fn rejects_zero_min_freq() {
        let err = PipelineConfig::from_toml_str("[collocations]\nmin_freq = 0\n").unwrap_err();
        assert!(matches!(err, PrepError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = PipelineConfig::from_toml_str("mode = \"stemmed\"\n").unwrap_err();
        assert!(matches!(err, PrepError::Config(_)));
    }
}
