//! Lexicon entries as read from the source file and after projection.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::pos::PartOfSpeech;
use crate::tags::Tags;

/// One line of the source lexicon, restricted to the fields the pipeline uses.
///
/// `pos` is kept as the raw label so entries outside the accepted set can be
/// counted before they are filtered out. Fields not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    pub pos: String,
    pub word: String,
    #[serde(default)]
    pub forms: Option<Vec<RawForm>>,
}

/// One element of a source entry's `forms` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawForm {
    /// Non-string values are read as absent.
    #[serde(default, deserialize_with = "lenient_string")]
    pub form: Option<String>,
    #[serde(default)]
    pub tags: Option<Tags>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrOther {
        Text(String),
        Other(#[allow(dead_code)] IgnoredAny),
    }

    Ok(match Option::<StringOrOther>::deserialize(deserializer)? {
        Some(StringOrOther::Text(text)) => Some(text),
        Some(StringOrOther::Other(_)) | None => None,
    })
}

/// A lexicon entry whose part of speech is in the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceEntry {
    pub part_of_speech: PartOfSpeech,
    pub forms: Option<Vec<FormEntry>>,
    pub headword: String,
}

/// An inflected form nested inside a [`SourceEntry`].
///
/// `form` is `None` when the source value was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormEntry {
    pub form: Option<String>,
    pub tags: Option<Tags>,
}

impl FormEntry {
    /// Builds a form entry, normalizing an empty form string to absent.
    pub fn new(form: Option<String>, tags: Option<Tags>) -> Self {
        Self {
            form: form.filter(|value| !value.is_empty()),
            tags,
        }
    }
}

impl SourceEntry {
    /// Projects a raw entry, returning `None` when its part of speech is not accepted.
    pub fn from_raw(raw: &RawEntry) -> Option<Self> {
        let part_of_speech = raw.pos.parse::<PartOfSpeech>().ok()?;
        let forms = raw.forms.as_ref().map(|forms| {
            forms
                .iter()
                .map(|form| FormEntry::new(form.form.clone(), form.tags.clone()))
                .collect()
        });
        Some(Self {
            part_of_speech,
            forms,
            headword: raw.word.clone(),
        })
    }
}
