//! Output generation for extracted lexicons.
//!
//! A reconciled record set is partitioned into a master word list and one
//! `form,tags` table per accepted part of speech, then written as CSV.

pub mod error;
pub mod partition;
pub mod writer;

pub use error::{OutputError, Result};
pub use partition::{
    PartTable, PartitionedLexicon, build_dictionary, form_rows_for, partition_records,
};
pub use writer::{
    FORM_TABLE_HEADER, OutputPaths, csv_writer, write_dictionary, write_form_rows, write_lexicon,
};
