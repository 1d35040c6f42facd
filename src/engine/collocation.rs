//! Bigram collocations ranked by pointwise mutual information.

use std::collections::HashMap;

use crate::types::CollocationConfig;

/// An adjacent token pair that passed the frequency filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBigram {
    pub first: String,
    pub second: String,
    /// Adjacent co-occurrence count.
    pub freq: usize,
    pub pmi: f64,
}

impl ScoredBigram {
    /// `first_second`.
    pub fn joined(&self) -> String {
        format!("{}_{}", self.first, self.second)
    }
}

/// Finds frequent bigrams and appends them to a token sequence.
#[derive(Debug, Clone, Default)]
pub struct Collocations {
    config: CollocationConfig,
}

impl Collocations {
    pub fn new(config: CollocationConfig) -> Self {
        Self { config }
    }

    pub fn with_params(min_freq: usize, top_n: usize) -> Self {
        Self::new(CollocationConfig {
            min_freq,
            top_n,
            ..CollocationConfig::default()
        })
    }

    pub fn config(&self) -> &CollocationConfig {
        &self.config
    }

    /// Bigrams occurring at least `min_freq` times, best PMI first, at most `top_n`.
    /// Equal scores are ordered by the pair itself.
    pub fn rank<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<ScoredBigram> {
        if self.config.top_n == 0 || tokens.len() < 2 {
            return Vec::new();
        }

        let mut word_freq: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *word_freq.entry(token.as_ref()).or_insert(0) += 1;
        }
        let mut pair_freq: HashMap<(&str, &str), usize> = HashMap::new();
        for pair in tokens.windows(2) {
            *pair_freq
                .entry((pair[0].as_ref(), pair[1].as_ref()))
                .or_insert(0) += 1;
        }

        let total = tokens.len() as f64;
        let mut ranked: Vec<ScoredBigram> = pair_freq
            .into_iter()
            .filter(|&(_, freq)| freq >= self.config.min_freq)
            .map(|((first, second), freq)| {
                let n_first = word_freq[first] as f64;
                let n_second = word_freq[second] as f64;
                let pmi = (freq as f64 * total).log2() - (n_first * n_second).log2();
                ScoredBigram {
                    first: first.to_string(),
                    second: second.to_string(),
                    freq,
                    pmi,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.pmi
                .partial_cmp(&a.pmi)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| (&a.first, &a.second).cmp(&(&b.first, &b.second)))
        });
        ranked.truncate(self.config.top_n);
        ranked
    }

    /// Append the ranked bigrams, joined with `_`, after the existing tokens.
    pub fn augment(&self, mut tokens: Vec<String>) -> Vec<String> {
        let bigrams = self.rank(&tokens);
        log::trace!("appending {} collocations", bigrams.len());
        tokens.extend(bigrams.iter().map(ScoredBigram::joined));
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn appends_frequent_pair_at_end() {
        let tokens = words("machine learning helps machine learning scale fast");
        let out = Collocations::with_params(2, 10).augment(tokens.clone());
        assert_eq!(&out[..tokens.len()], tokens.as_slice());
        assert_eq!(&out[tokens.len()..], ["machine_learning".to_string()]);
    }

    #[test]
    fn pmi_prefers_exclusive_pairs() {
        // "new york" always co-occur; "the city" shares "the" with other pairs.
        let tokens = words("new york the city new york the city the end the end");
        let ranked = Collocations::with_params(2, 10).rank(&tokens);
        assert_eq!(ranked[0].joined(), "new_york");
        assert!(ranked[0].pmi > ranked.last().unwrap().pmi);
    }

    #[test]
    fn below_min_freq_is_untouched() {
        let tokens = words("one two three four");
        let out = Collocations::with_params(2, 10).augment(tokens.clone());
        assert_eq!(out, tokens);
    }

    #[test]
    fn respects_top_n() {
        let tokens = words("a b a b c d c d e f e f");
        let out = Collocations::with_params(2, 2).augment(tokens.clone());
        assert_eq!(out.len(), tokens.len() + 2);
        assert_eq!(Collocations::with_params(2, 0).augment(tokens.clone()), tokens);
    }
}
