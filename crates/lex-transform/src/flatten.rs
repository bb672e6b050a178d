//! Form flattening.
//!
//! Each entry's nested form list is expanded into one [`FlatRecord`] per
//! usable form. Entries without a form list stand for themselves.

use lex_model::{FlatRecord, FormEntry, ProgressObserver, SourceEntry, Stage};

/// Marks multi-word or compound artifacts in the source lexicon.
pub const COMPOUND_MARKER: char = '+';

/// Returns the form of a form entry when it is usable as a record.
///
/// Missing forms and forms containing [`COMPOUND_MARKER`] are rejected.
pub fn usable_form(entry: &FormEntry) -> Option<&str> {
    entry
        .form
        .as_deref()
        .filter(|form| !form.is_empty() && !form.contains(COMPOUND_MARKER))
}

/// Flattens entries into records, preserving input order.
///
/// No deduplication happens here.
pub fn flatten_entries(
    entries: &[SourceEntry],
    observer: &dyn ProgressObserver,
) -> Vec<FlatRecord> {
    observer.start(Stage::Flatten, entries.len() as u64);
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        flatten_entry(entry, &mut records);
        observer.advance(Stage::Flatten, 1);
    }
    observer.finish(Stage::Flatten);
    records
}

fn flatten_entry(entry: &SourceEntry, out: &mut Vec<FlatRecord>) {
    let Some(forms) = &entry.forms else {
        out.push(FlatRecord::placeholder(
            entry.part_of_speech,
            &entry.headword,
        ));
        return;
    };
    for form_entry in forms {
        let Some(form) = usable_form(form_entry) else {
            continue;
        };
        out.push(FlatRecord {
            part_of_speech: entry.part_of_speech,
            form: form.to_string(),
            tags: form_entry.tags.clone(),
            headword: entry.headword.clone(),
        });
    }
}
