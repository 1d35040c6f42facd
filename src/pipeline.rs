//! Document-, sentence- and website-level entry points.

use log::{debug, trace};

use crate::engine::{Collocations, SentenceSplitter, StopFilter, Tokenizer};
use crate::lexical::{LemmaStage, MorphLemmatizer};
use crate::types::{CollocationOrder, PipelineConfig, PrepResult, StopConfig, TokenMode};

/// The text-normalization pipeline.
///
/// All linguistic resources (token pattern, stop set, lexicon) are built once
/// in the constructor and never mutated, so one instance can be shared across
/// threads and every call is independent of previous calls.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    tokenizer: Tokenizer,
    splitter: SentenceSplitter,
    filter: StopFilter,
    lemma: Option<LemmaStage>,
    collocations: Option<Collocations>,
}

impl Pipeline {
    /// Build every stage from `config`. Reads the lexicon file if one is set.
    pub fn new(config: PipelineConfig) -> PrepResult<Self> {
        config.validate()?;
        let lemma = match config.mode {
            TokenMode::Surface => None,
            TokenMode::Lemmatized => {
                let mut lemmatizer = MorphLemmatizer::new();
                if let Some(path) = &config.lexicon_path {
                    lemmatizer = lemmatizer.with_lexicon(MorphLemmatizer::load_lexicon(path)?);
                }
                Some(LemmaStage::with_lemmatizer(lemmatizer))
            }
        };
        Self::with_parts(config, StopConfig::english(), lemma)
    }

    /// Surface tokens with the default English stop set.
    pub fn surface() -> PrepResult<Self> {
        Self::new(PipelineConfig::default())
    }

    /// Lemmatized tokens with the default tagger, chunker and lemmatizer.
    pub fn lemmatized() -> PrepResult<Self> {
        Self::new(PipelineConfig {
            mode: TokenMode::Lemmatized,
            ..PipelineConfig::default()
        })
    }

    /// Assemble from explicit stages. The mode follows `lemma`: `Some` selects
    /// lemmatized tokens, `None` surface tokens.
    pub fn with_parts(
        mut config: PipelineConfig,
        stop: StopConfig,
        lemma: Option<LemmaStage>,
    ) -> PrepResult<Self> {
        config.validate()?;
        config.mode = if lemma.is_some() {
            TokenMode::Lemmatized
        } else {
            TokenMode::Surface
        };
        let stop = stop.with_extra_words(config.extra_stop_words.iter().cloned());
        let collocations = config.collocations.clone().map(Collocations::new);

        debug!(
            "pipeline ready: mode={:?}, {} stop entries, collocations={:?}",
            config.mode,
            stop.len(),
            config.collocations
        );

        Ok(Self {
            tokenizer: Tokenizer::new()?,
            splitter: SentenceSplitter::new(),
            filter: StopFilter::new(stop),
            lemma,
            collocations,
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn mode(&self) -> TokenMode {
        self.config.mode
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn splitter(&self) -> &SentenceSplitter {
        &self.splitter
    }

    pub fn filter(&self) -> &StopFilter {
        &self.filter
    }

    pub fn lemma_stage(&self) -> Option<&LemmaStage> {
        self.lemma.as_ref()
    }

    /// Sentence segmentation only.
    pub fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.splitter.split(text)
    }

    /// Unfiltered units of one sentence: raw tokens, or lemmas and entity chunks.
    fn sentence_units(&self, sentence: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(sentence);
        match &self.lemma {
            Some(stage) => stage.process(&tokens),
            None => tokens,
        }
    }

    /// Tokenize and filter a single sentence.
    pub fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let units = self.sentence_units(sentence);
        let kept = self.filter.filter(&units);
        trace!("sentence: {} units, {} kept", units.len(), kept.len());
        kept
    }

    /// One filtered token list per sentence, in document order. Sentences
    /// that lose every token stay as empty lists.
    pub fn tokenize_document(&self, text: &str) -> Vec<Vec<String>> {
        self.sentences(text)
            .into_iter()
            .map(|s| self.tokenize_sentence(s))
            .collect()
    }

    /// Keep fragments whose raw token count exceeds `min_fragment_tokens`.
    pub fn drop_short_fragments<'f, S: AsRef<str>>(&self, fragments: &'f [S]) -> Vec<&'f str> {
        let kept: Vec<&str> = fragments
            .iter()
            .map(|f| f.as_ref())
            .filter(|f| self.tokenizer.count(f) > self.config.min_fragment_tokens)
            .collect();
        debug!(
            "website fragments: {} in, {} dropped as too short",
            fragments.len(),
            fragments.len() - kept.len()
        );
        kept
    }

    /// Join fragments with the configured separator.
    pub fn aggregate_fragments<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        fragments
            .iter()
            .map(|f| f.as_ref())
            .collect::<Vec<&str>>()
            .join(&self.config.fragment_separator)
    }

    /// Website text, one fragment per structural line of the page: drop short
    /// fragments, aggregate the rest, then tokenize as a document.
    pub fn tokenize_website<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<Vec<String>> {
        let document = self.website_document(fragments);
        self.tokenize_document(&document)
    }

    fn website_document<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        let kept = self.drop_short_fragments(fragments);
        self.aggregate_fragments(&kept)
    }

    /// Flat list of filtered terms for the whole document, with collocations
    /// appended at the end when configured.
    pub fn document_terms(&self, text: &str) -> Vec<String> {
        let units: Vec<String> = self
            .sentences(text)
            .into_iter()
            .flat_map(|s| self.sentence_units(s))
            .collect();

        match &self.collocations {
            None => self.filter.filter(&units),
            Some(c) => match c.config().order {
                CollocationOrder::BeforeFilter => self.filter.filter(&c.augment(units)),
                CollocationOrder::AfterFilter => c.augment(self.filter.filter(&units)),
            },
        }
    }

    /// [`document_terms`](Self::document_terms) over aggregated website fragments.
    pub fn website_terms<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<String> {
        let document = self.website_document(fragments);
        self.document_terms(&document)
    }
}
