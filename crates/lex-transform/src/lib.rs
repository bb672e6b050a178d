//! Lexicon normalization stages.
//!
//! The stages run strictly downstream: entries are selected, deduplicated,
//! flattened into records, reconciled against their headwords and
//! deduplicated again. Every stage returns a new sequence.

pub mod dedupe;
pub mod flatten;
pub mod reconcile;
pub mod select;

pub use dedupe::dedupe_rows;
pub use flatten::{COMPOUND_MARKER, flatten_entries, usable_form};
pub use reconcile::{Reconciliation, missing_word_forms, reconcile_missing_forms};
pub use select::select_entries;
