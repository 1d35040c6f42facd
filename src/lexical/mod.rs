//! Part-of-speech tagging, named-entity chunking and lemmatization.
//!
//! These stages are optional. A [`LemmaStage`] bundles one implementation of
//! each trait and is selected at pipeline construction with
//! [`TokenMode::Lemmatized`](crate::types::TokenMode::Lemmatized).

pub mod chunker;
pub mod lemmatizer;
pub mod tagger;

pub use chunker::{EntityChunker, ProperNounChunker};
pub use lemmatizer::{Lemmatizer, MorphLemmatizer};
pub use tagger::{PosTagger, RuleTagger};

use crate::types::{ChunkedToken, TaggedToken, WordClass};

/// Tagger, chunker and lemmatizer applied in that order.
pub struct LemmaStage {
    tagger: Box<dyn PosTagger>,
    chunker: Box<dyn EntityChunker>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl LemmaStage {
    pub fn new(
        tagger: Box<dyn PosTagger>,
        chunker: Box<dyn EntityChunker>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        Self {
            tagger,
            chunker,
            lemmatizer,
        }
    }

    /// Rule tagger, proper-noun chunker and the given lemmatizer.
    pub fn with_lemmatizer(lemmatizer: MorphLemmatizer) -> Self {
        Self::new(
            Box::new(RuleTagger::new()),
            Box::new(ProperNounChunker),
            Box::new(lemmatizer),
        )
    }

    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        self.tagger.tag(tokens)
    }

    pub fn chunk(&self, tagged: &[TaggedToken]) -> Vec<ChunkedToken> {
        self.chunker.chunk(tagged)
    }

    /// Lowercase every unit; lemmatize words by their tag, pass entities through.
    ///
    /// Only purely alphabetic words reach the lemmatizer. URLs, mentions,
    /// hyphen compounds and contractions are kept whole.
    pub fn lemmatize_chunks(&self, chunks: &[ChunkedToken]) -> Vec<String> {
        chunks
            .iter()
            .map(|chunk| match chunk {
                ChunkedToken::Entity(joined) => joined.to_lowercase(),
                ChunkedToken::Word(token) => {
                    let lower = token.text.to_lowercase();
                    if lower.chars().all(char::is_alphabetic) {
                        self.lemmatizer
                            .lemmatize(&lower, WordClass::from_tag(&token.tag))
                    } else {
                        lower
                    }
                }
            })
            .collect()
    }

    /// Chunk a tagged sentence and lemmatize the result.
    pub fn lemmatize_sentence(&self, tagged: &[TaggedToken]) -> Vec<String> {
        self.lemmatize_chunks(&self.chunk(tagged))
    }

    /// Tag, chunk and lemmatize raw sentence tokens.
    pub fn process(&self, tokens: &[String]) -> Vec<String> {
        let tagged = self.tag(tokens);
        log::trace!("tagged {} tokens", tagged.len());
        self.lemmatize_sentence(&tagged)
    }
}

impl Default for LemmaStage {
    fn default() -> Self {
        Self::with_lemmatizer(MorphLemmatizer::new())
    }
}

impl std::fmt::Debug for LemmaStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaStage").finish_non_exhaustive()
    }
}
