//! Missing-form reconciliation.
//!
//! After flattening, some headwords never appear among their own forms (all
//! their forms were compounds, or the list simply omits the base form). Each
//! such (part of speech, headword) pair gets a placeholder record.

use std::collections::BTreeSet;

use lex_model::{FlatRecord, PartOfSpeech, ProgressObserver, SourceEntry, Stage};

/// Output of [`reconcile_missing_forms`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Input records followed by the injected placeholders.
    pub records: Vec<FlatRecord>,
    /// Number of placeholder records appended.
    pub injected: usize,
}

/// Computes the (part of speech, headword) pairs that have no record with
/// `form == headword` under the same part of speech.
pub fn missing_word_forms(
    records: &[FlatRecord],
    entries: &[SourceEntry],
) -> BTreeSet<(PartOfSpeech, String)> {
    let pos_forms: BTreeSet<(PartOfSpeech, &str)> = records
        .iter()
        .map(|record| (record.part_of_speech, record.form.as_str()))
        .collect();
    entries
        .iter()
        .filter(|entry| !pos_forms.contains(&(entry.part_of_speech, entry.headword.as_str())))
        .map(|entry| (entry.part_of_speech, entry.headword.clone()))
        .collect()
}

/// Returns `records` with a placeholder appended for every missing pair.
///
/// Placeholders are appended in ascending (part of speech, headword) order.
/// The input slice is left untouched.
pub fn reconcile_missing_forms(
    records: &[FlatRecord],
    entries: &[SourceEntry],
    observer: &dyn ProgressObserver,
) -> Reconciliation {
    let missing = missing_word_forms(records, entries);
    observer.start(Stage::Reconcile, missing.len() as u64);
    let mut combined = Vec::with_capacity(records.len() + missing.len());
    combined.extend_from_slice(records);
    for (part_of_speech, headword) in &missing {
        combined.push(FlatRecord::placeholder(*part_of_speech, headword));
        observer.advance(Stage::Reconcile, 1);
    }
    observer.finish(Stage::Reconcile);
    Reconciliation {
        records: combined,
        injected: missing.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lex_model::{FormEntry, NoProgress, Tags};

    fn entry(pos: PartOfSpeech, headword: &str) -> SourceEntry {
        SourceEntry {
            part_of_speech: pos,
            forms: Some(vec![]),
            headword: headword.to_string(),
        }
    }

    fn record(pos: PartOfSpeech, form: &str, headword: &str) -> FlatRecord {
        FlatRecord {
            part_of_speech: pos,
            form: form.to_string(),
            tags: Some(Tags::new(["t"])),
            headword: headword.to_string(),
        }
    }

    #[test]
    fn test_injects_missing_headword() {
        let entries = vec![entry(PartOfSpeech::Verb, "run")];
        let records = vec![record(PartOfSpeech::Verb, "ran", "run")];
        let result = reconcile_missing_forms(&records, &entries, &NoProgress);
        assert_eq!(result.injected, 1);
        assert_eq!(result.records.len(), 2);
        assert_eq!(
            result.records[1],
            FlatRecord::placeholder(PartOfSpeech::Verb, "run")
        );
    }

    #[test]
    fn test_no_op_when_headword_present() {
        let entries = vec![entry(PartOfSpeech::Noun, "cat")];
        let records = vec![
            record(PartOfSpeech::Noun, "cat", "cat"),
            record(PartOfSpeech::Noun, "cats", "cat"),
        ];
        let result = reconcile_missing_forms(&records, &entries, &NoProgress);
        assert_eq!(result.injected, 0);
        assert_eq!(result.records, records);
    }

    #[test]
    fn test_form_under_other_part_of_speech_does_not_count() {
        let entries = vec![entry(PartOfSpeech::Noun, "run")];
        let records = vec![record(PartOfSpeech::Verb, "run", "run")];
        let missing = missing_word_forms(&records, &entries);
        assert_eq!(
            missing.into_iter().collect::<Vec<_>>(),
            vec![(PartOfSpeech::Noun, "run".to_string())]
        );
    }

    #[test]
    fn test_form_from_other_headword_counts() {
        // "lay" is both a headword and the past tense of "lie".
        let entries = vec![entry(PartOfSpeech::Verb, "lie"), entry(PartOfSpeech::Verb, "lay")];
        let records = vec![
            record(PartOfSpeech::Verb, "lie", "lie"),
            record(PartOfSpeech::Verb, "lay", "lie"),
        ];
        assert!(missing_word_forms(&records, &entries).is_empty());
    }

    #[test]
    fn test_duplicate_entries_inject_once() {
        let mut with_forms = entry(PartOfSpeech::Adj, "red");
        with_forms.forms = Some(vec![FormEntry::new(Some("redder".to_string()), None)]);
        let entries = vec![entry(PartOfSpeech::Adj, "red"), with_forms];
        let records = vec![record(PartOfSpeech::Adj, "redder", "red")];
        let result = reconcile_missing_forms(&records, &entries, &NoProgress);
        assert_eq!(result.injected, 1);
    }
}
