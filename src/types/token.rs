//! Token shapes that flow between the lexical stages.

use serde::{Deserialize, Serialize};

/// A surface token paired with its Penn Treebank part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Lemmatization mode selected from a part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl WordClass {
    /// Map a treebank tag to a lemma mode. Unknown tags are nouns.
    pub fn from_tag(tag: &str) -> Self {
        match tag.chars().next() {
            Some('J') => WordClass::Adjective,
            Some('V') => WordClass::Verb,
            Some('N') => WordClass::Noun,
            Some('R') => WordClass::Adverb,
            Some('S') => WordClass::AdjectiveSatellite,
            _ => WordClass::Noun,
        }
    }

    /// WordNet's single-letter name for this class.
    pub fn name(&self) -> &'static str {
        match self {
            WordClass::Noun => "n",
            WordClass::Verb => "v",
            WordClass::Adjective => "a",
            WordClass::AdjectiveSatellite => "s",
            WordClass::Adverb => "r",
        }
    }
}

/// One element of a sentence after named-entity chunking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkedToken {
    /// A multi- or single-word entity, its words joined by `_`. Never lemmatized.
    Entity(String),
    /// An ordinary tagged word awaiting lemmatization.
    Word(TaggedToken),
}

impl ChunkedToken {
    /// Build an entity chunk from its member tokens.
    pub fn entity<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        ChunkedToken::Entity(words.into_iter().collect::<Vec<_>>().join("_"))
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, ChunkedToken::Entity(_))
    }
}
