//! Text normalization for lexical analysis.
//!
//! Raw documents (or scraped website fragments) go through sentence
//! segmentation, pattern tokenization and noise filtering, with optional
//! POS-aware lemmatization that keeps named entities whole and optional
//! bigram collocation augmentation.
//!
//! ```no_run
//! use lexprep::Pipeline;
//!
//! let pipeline = Pipeline::surface()?;
//! let sentences = pipeline.tokenize_document("Acme builds well-known tools. It ships daily.");
//! assert_eq!(sentences.len(), 2);
//! # Ok::<(), lexprep::PrepError>(())
//! ```

pub mod engine;
pub mod lexical;
pub mod pipeline;
pub mod types;
pub mod util;

#[cfg(feature = "company")]
pub mod company;

pub use engine::{
    hyphens_to_underscores, Collocations, ScoredBigram, SentenceSplitter, StopFilter, Tokenizer,
};
pub use lexical::{
    EntityChunker, LemmaStage, Lemmatizer, MorphLemmatizer, PosTagger, ProperNounChunker,
    RuleTagger,
};
pub use pipeline::Pipeline;
pub use types::{
    ChunkedToken, CollocationConfig, CollocationOrder, PipelineConfig, PrepError, PrepResult,
    StopConfig, TaggedToken, TokenMode, WordClass,
};

#[cfg(feature = "company")]
pub use company::{CompanyClient, CompanyRecord};
