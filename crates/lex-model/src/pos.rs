//! Accepted parts of speech.
//!
//! Only eight grammatical categories survive the initial entry filter. The
//! variant order is the order in which per-part-of-speech files are written.

use std::fmt;
use std::str::FromStr;

/// Grammatical category of a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartOfSpeech {
    Adj,
    Adv,
    Conj,
    Det,
    Noun,
    Prep,
    Pron,
    Verb,
}

impl PartOfSpeech {
    /// All accepted parts of speech, in output order.
    pub const ALL: [PartOfSpeech; 8] = [
        PartOfSpeech::Adj,
        PartOfSpeech::Adv,
        PartOfSpeech::Conj,
        PartOfSpeech::Det,
        PartOfSpeech::Noun,
        PartOfSpeech::Prep,
        PartOfSpeech::Pron,
        PartOfSpeech::Verb,
    ];

    /// Returns the label as it appears in the source lexicon.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "adj",
            PartOfSpeech::Adv => "adv",
            PartOfSpeech::Conj => "conj",
            PartOfSpeech::Det => "det",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Prep => "prep",
            PartOfSpeech::Pron => "pron",
            PartOfSpeech::Verb => "verb",
        }
    }

    /// File name of the CSV holding this part of speech (e.g. `noun.csv`).
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    /// Parse a source label. Matching is exact: the lexicon uses lowercase
    /// labels and anything else (`"Noun"`, `"interjection"`) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adj" => Ok(PartOfSpeech::Adj),
            "adv" => Ok(PartOfSpeech::Adv),
            "conj" => Ok(PartOfSpeech::Conj),
            "det" => Ok(PartOfSpeech::Det),
            "noun" => Ok(PartOfSpeech::Noun),
            "prep" => Ok(PartOfSpeech::Prep),
            "pron" => Ok(PartOfSpeech::Pron),
            "verb" => Ok(PartOfSpeech::Verb),
            _ => Err(format!("Unsupported part of speech: {s}")),
        }
    }
}
