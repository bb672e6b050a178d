//! Data model for lexicon extraction.
//!
//! Source entries are read from a line-delimited JSON lexicon, projected onto
//! the accepted parts of speech, and flattened into [`FlatRecord`]s that are
//! partitioned into CSV files.

pub mod entry;
pub mod options;
pub mod pos;
pub mod progress;
pub mod record;
pub mod tags;

pub use entry::{FormEntry, RawEntry, RawForm, SourceEntry};
pub use options::{DICTIONARY_FILE_NAME, DictionarySource};
pub use pos::PartOfSpeech;
pub use progress::{NoProgress, ProgressObserver, Stage};
pub use record::{FlatRecord, FormRow};
pub use tags::{Tags, render_tags_cell};
