//! Lexicon ingestion.
//!
//! Loads a line-delimited JSON lexicon (one entry per line, with `pos`,
//! `word` and an optional `forms` array) fully into memory.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use lex_ingest::read_lexicon;
//!
//! let lexicon = read_lexicon(Path::new("data/kaikki.jsonl"))?;
//! println!("{} entries", lexicon.entries.len());
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === JSON Reading ===
pub use reader::{RawLexicon, parse_lexicon, read_lexicon};
