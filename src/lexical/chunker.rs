//! Named-entity chunking over tagged sentences.

use crate::types::{ChunkedToken, TaggedToken};

/// Groups contiguous entity tokens into single units, keeping order.
pub trait EntityChunker: Send + Sync {
    fn chunk(&self, tagged: &[TaggedToken]) -> Vec<ChunkedToken>;
}

/// Treats every maximal run of proper-noun tags (`NNP`, `NNPS`) as one entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounChunker;

impl ProperNounChunker {
    fn is_entity_tag(tag: &str) -> bool {
        tag == "NNP" || tag == "NNPS"
    }
}

impl EntityChunker for ProperNounChunker {
    fn chunk(&self, tagged: &[TaggedToken]) -> Vec<ChunkedToken> {
        let mut out = Vec::with_capacity(tagged.len());
        let mut run: Vec<&str> = Vec::new();

        for token in tagged {
            if Self::is_entity_tag(&token.tag) {
                run.push(&token.text);
                continue;
            }
            if !run.is_empty() {
                out.push(ChunkedToken::entity(run.drain(..)));
            }
            out.push(ChunkedToken::Word(token.clone()));
        }
        if !run.is_empty() {
            out.push(ChunkedToken::entity(run.drain(..)));
        }

        out
    }
}
