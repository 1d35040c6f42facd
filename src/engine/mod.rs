//! Text-processing stages: tokenization, sentence splitting, filtering and collocations.

pub mod collocation;
pub mod sentence;
pub mod stop_filter;
pub mod tokenizer;

pub use collocation::{Collocations, ScoredBigram};
pub use sentence::SentenceSplitter;
pub use stop_filter::{hyphens_to_underscores, StopFilter};
pub use tokenizer::Tokenizer;
