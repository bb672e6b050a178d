use lex_model::{RawEntry, SourceEntry};

/// Projects raw entries onto the accepted parts of speech, in input order.
pub fn select_entries(raw: &[RawEntry]) -> Vec<SourceEntry> {
    raw.iter().filter_map(SourceEntry::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lex_model::PartOfSpeech;

    fn raw(pos: &str, word: &str) -> RawEntry {
        RawEntry {
            pos: pos.to_string(),
            word: word.to_string(),
            forms: None,
        }
    }

    #[test]
    fn test_drops_unaccepted_parts_of_speech() {
        let entries = select_entries(&[
            raw("noun", "cat"),
            raw("interjection", "wow"),
            raw("name", "Alice"),
            raw("verb", "run"),
        ]);
        let pairs: Vec<_> = entries
            .iter()
            .map(|entry| (entry.part_of_speech, entry.headword.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![(PartOfSpeech::Noun, "cat"), (PartOfSpeech::Verb, "run")]
        );
    }
}
