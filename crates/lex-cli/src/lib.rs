//! CLI library components for the lexicon extractor.

pub mod logging;
pub mod pipeline;
