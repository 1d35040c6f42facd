//! Shared types: errors, token shapes and configuration.

pub mod config;
pub mod error;
pub mod token;

pub use config::{
    CollocationConfig, CollocationOrder, PipelineConfig, StopConfig, TokenMode, ESCAPED_NEWLINE,
    QUOT_ARTIFACT,
};
pub use error::{PrepError, PrepResult};
pub use token::{ChunkedToken, TaggedToken, WordClass};
