//! Output options shared by the partitioner and the CLI.

/// Column projected into `dictionary.csv`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DictionarySource {
    /// Every distinct form of the reconciled record set. Headwords are
    /// included since each one has a record with `form == headword`.
    #[default]
    Forms,
    /// Distinct headwords only.
    Headwords,
}

/// Name of the master word list written next to the part-of-speech files.
pub const DICTIONARY_FILE_NAME: &str = "dictionary.csv";
