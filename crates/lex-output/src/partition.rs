//! Partitioning of the reconciled record set into output tables.

use lex_model::{DictionarySource, FlatRecord, FormRow, PartOfSpeech};
use lex_transform::dedupe_rows;

/// Rows destined for one part-of-speech file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartTable {
    pub part_of_speech: PartOfSpeech,
    /// Distinct (form, tags) rows sorted by form.
    pub rows: Vec<FormRow>,
}

/// Every table written for one run, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedLexicon {
    /// Distinct, sorted master word list.
    pub dictionary: Vec<String>,
    /// One table per accepted part of speech, in [`PartOfSpeech::ALL`] order.
    pub parts: Vec<PartTable>,
}

impl PartitionedLexicon {
    /// Total number of rows across the part-of-speech tables.
    pub fn row_count(&self) -> usize {
        self.parts.iter().map(|part| part.rows.len()).sum()
    }

    pub fn part(&self, part_of_speech: PartOfSpeech) -> Option<&PartTable> {
        self.parts
            .iter()
            .find(|part| part.part_of_speech == part_of_speech)
    }
}

/// Deduplicates the records and splits them into the master dictionary and
/// one table per part of speech.
pub fn partition_records(records: &[FlatRecord], source: DictionarySource) -> PartitionedLexicon {
    let records = dedupe_rows(records.to_vec());
    let dictionary = build_dictionary(&records, source);
    let parts = PartOfSpeech::ALL
        .iter()
        .map(|pos| PartTable {
            part_of_speech: *pos,
            rows: form_rows_for(&records, *pos),
        })
        .collect();
    PartitionedLexicon { dictionary, parts }
}

/// Distinct values of the chosen column across all parts of speech, sorted.
pub fn build_dictionary(records: &[FlatRecord], source: DictionarySource) -> Vec<String> {
    let words: Vec<&str> = records
        .iter()
        .map(|record| match source {
            DictionarySource::Forms => record.form.as_str(),
            DictionarySource::Headwords => record.headword.as_str(),
        })
        .collect();
    let mut words = dedupe_rows(words);
    words.sort_unstable();
    words.into_iter().map(str::to_string).collect()
}

/// Distinct (form, tags) rows of one part of speech, sorted by form.
///
/// Rows sharing a form keep their first-seen order.
pub fn form_rows_for(records: &[FlatRecord], part_of_speech: PartOfSpeech) -> Vec<FormRow> {
    let rows: Vec<FormRow> = records
        .iter()
        .filter(|record| record.part_of_speech == part_of_speech)
        .map(FlatRecord::to_form_row)
        .collect();
    let mut rows = dedupe_rows(rows);
    rows.sort_by(|a, b| a.form.cmp(&b.form));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use lex_model::Tags;

    fn record(pos: PartOfSpeech, form: &str, tags: Option<&[&str]>, headword: &str) -> FlatRecord {
        FlatRecord {
            part_of_speech: pos,
            form: form.to_string(),
            tags: tags.map(|tags| Tags::new(tags.iter().copied())),
            headword: headword.to_string(),
        }
    }

    fn sample() -> Vec<FlatRecord> {
        vec![
            record(PartOfSpeech::Noun, "cats", Some(&["pl"]), "cat"),
            record(PartOfSpeech::Noun, "cat", Some(&["sg"]), "cat"),
            record(PartOfSpeech::Noun, "cats", Some(&["pl"]), "cat"),
            record(PartOfSpeech::Verb, "run", None, "run"),
            record(PartOfSpeech::Verb, "ran", Some(&["past"]), "run"),
            record(PartOfSpeech::Noun, "run", None, "run"),
        ]
    }

    #[test]
    fn test_partition_writes_every_part_of_speech() {
        let lexicon = partition_records(&sample(), DictionarySource::Forms);
        let order: Vec<_> = lexicon.parts.iter().map(|part| part.part_of_speech).collect();
        assert_eq!(order, PartOfSpeech::ALL.to_vec());
        assert!(lexicon.part(PartOfSpeech::Adj).unwrap().rows.is_empty());
    }

    #[test]
    fn test_part_rows_are_sorted_and_distinct() {
        let lexicon = partition_records(&sample(), DictionarySource::Forms);
        let nouns = &lexicon.part(PartOfSpeech::Noun).unwrap().rows;
        let forms: Vec<_> = nouns.iter().map(|row| row.form.as_str()).collect();
        assert_eq!(forms, vec!["cat", "cats", "run"]);
        assert_eq!(lexicon.row_count(), 5);
    }

    #[test]
    fn test_same_form_different_headword_collapses_in_part_table() {
        let records = vec![
            record(PartOfSpeech::Verb, "lay", Some(&["past"]), "lie"),
            record(PartOfSpeech::Verb, "lay", Some(&["past"]), "lay"),
        ];
        let rows = form_rows_for(&records, PartOfSpeech::Verb);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_equal_forms_keep_first_seen_order() {
        let records = vec![
            record(PartOfSpeech::Adj, "red", Some(&["positive"]), "red"),
            record(PartOfSpeech::Adj, "red", None, "red"),
            record(PartOfSpeech::Adj, "Red", None, "Red"),
        ];
        let rows = form_rows_for(&records, PartOfSpeech::Adj);
        assert_eq!(rows[0].form, "Red");
        assert_eq!(rows[1].tags, Some(Tags::new(["positive"])));
        assert_eq!(rows[2].tags, None);
    }

    #[test]
    fn test_dictionary_from_forms() {
        let dictionary = build_dictionary(&sample(), DictionarySource::Forms);
        assert_eq!(dictionary, vec!["cat", "cats", "ran", "run"]);
    }

    #[test]
    fn test_dictionary_from_headwords() {
        let dictionary = build_dictionary(&sample(), DictionarySource::Headwords);
        assert_eq!(dictionary, vec!["cat", "run"]);
    }
}
