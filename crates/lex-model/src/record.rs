//! Flattened records, the durable unit written to the output files.

use crate::pos::PartOfSpeech;
use crate::tags::Tags;

/// One (part of speech, form, tags, headword) tuple.
///
/// Field order matches the derived `Ord`, so sorting or set membership
/// compares all four fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlatRecord {
    pub part_of_speech: PartOfSpeech,
    pub form: String,
    pub tags: Option<Tags>,
    pub headword: String,
}

impl FlatRecord {
    /// Record standing in for a headword with no surviving form of its own.
    pub fn placeholder(part_of_speech: PartOfSpeech, headword: &str) -> Self {
        Self {
            part_of_speech,
            form: headword.to_string(),
            tags: None,
            headword: headword.to_string(),
        }
    }

    /// Projects the columns written to a part-of-speech file.
    pub fn to_form_row(&self) -> FormRow {
        FormRow {
            form: self.form.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// A row of a part-of-speech CSV file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormRow {
    pub form: String,
    pub tags: Option<Tags>,
}
