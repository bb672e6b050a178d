//! Line-delimited JSON reading.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use lex_model::RawEntry;

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Source lexicon loaded fully into memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLexicon {
    /// One entry per non-blank input line, in file order.
    pub entries: Vec<RawEntry>,
    /// Number of lines in the file, blank lines included.
    pub line_count: usize,
}

/// Reads a line-delimited JSON lexicon.
///
/// Every record must carry string `pos` and `word` fields. `forms` may be
/// missing or null on individual records, but a non-empty file where no
/// record has a `forms` key is rejected.
pub fn read_lexicon(path: &Path) -> Result<RawLexicon> {
    if !path.is_file() {
        return Err(IngestError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = std::str::from_utf8(&bytes).map_err(|e| IngestError::InvalidEncoding {
        path: path.to_path_buf(),
        line: line_of_offset(&bytes, e.valid_up_to()),
        source: e,
    })?;
    parse_lexicon(text, path)
}

/// Parses lexicon text. `path` is only used in error messages.
pub fn parse_lexicon(text: &str, path: &Path) -> Result<RawLexicon> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let mut entries = Vec::new();
    let mut line_count = 0usize;
    let mut saw_forms = false;

    for (idx, line) in text.lines().enumerate() {
        line_count += 1;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let value: Value =
            serde_json::from_str(line).map_err(|e| IngestError::InvalidJson {
                path: path.to_path_buf(),
                line: line_no,
                source: e,
            })?;
        let Some(object) = value.as_object() else {
            return Err(IngestError::NotAnObject {
                path: path.to_path_buf(),
                line: line_no,
            });
        };
        saw_forms |= object.contains_key("forms");
        let entry: RawEntry =
            serde_json::from_value(value).map_err(|e| IngestError::InvalidRecord {
                path: path.to_path_buf(),
                line: line_no,
                source: e,
            })?;
        entries.push(entry);
    }

    if !entries.is_empty() && !saw_forms {
        return Err(IngestError::MissingColumn {
            field: "forms",
            path: path.to_path_buf(),
        });
    }
    if entries.is_empty() {
        warn!(path = %path.display(), "lexicon contains no records");
    }
    debug!(
        path = %path.display(),
        line_count,
        entry_count = entries.len(),
        "parsed lexicon"
    );

    Ok(RawLexicon {
        entries,
        line_count,
    })
}

/// 1-based line holding byte `offset`.
fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    1 + bytes[..offset].iter().filter(|b| **b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lex_model::Tags;

    fn parse(text: &str) -> Result<RawLexicon> {
        parse_lexicon(text, Path::new("test.jsonl"))
    }

    #[test]
    fn test_parse_entry_with_forms() {
        let lexicon = parse(
            r#"{"pos":"noun","word":"cat","forms":[{"form":"cats","tags":["plural"]},{"form":"cat"}]}"#,
        )
        .unwrap();
        assert_eq!(lexicon.entries.len(), 1);
        let entry = &lexicon.entries[0];
        assert_eq!(entry.pos, "noun");
        assert_eq!(entry.word, "cat");
        let forms = entry.forms.as_ref().unwrap();
        assert_eq!(forms[0].form.as_deref(), Some("cats"));
        assert_eq!(forms[0].tags, Some(Tags::new(["plural"])));
        assert_eq!(forms[1].tags, None);
    }

    #[test]
    fn test_blank_lines_and_bom_are_skipped() {
        let text = "\u{feff}{\"pos\":\"verb\",\"word\":\"run\",\"forms\":null}\n\n   \n";
        let lexicon = parse(text).unwrap();
        assert_eq!(lexicon.entries.len(), 1);
        assert_eq!(lexicon.line_count, 3);
        assert!(lexicon.entries[0].forms.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let text = r#"{"pos":"adj","word":"red","lang":"English","forms":[{"form":"redder","tags":["comparative"],"source":"declension"}]}"#;
        let lexicon = parse(text).unwrap();
        assert_eq!(lexicon.entries[0].forms.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_non_string_form_is_absent() {
        let text = r#"{"pos":"noun","word":"cat","forms":[{"form":3,"tags":["x"]}]}"#;
        let lexicon = parse(text).unwrap();
        assert_eq!(lexicon.entries[0].forms.as_ref().unwrap()[0].form, None);
    }

    #[test]
    fn test_invalid_json_reports_line() {
        let text = "{\"pos\":\"noun\",\"word\":\"cat\",\"forms\":[]}\n{not json";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, IngestError::InvalidJson { line: 2, .. }));
    }

    #[test]
    fn test_non_object_line_rejected() {
        let err = parse("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, IngestError::NotAnObject { line: 1, .. }));
    }

    #[test]
    fn test_missing_word_rejected() {
        let err = parse(r#"{"pos":"noun","forms":[]}"#).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { line: 1, .. }));
        assert!(err.to_string().contains("missing field `word`"));
    }

    #[test]
    fn test_non_string_pos_rejected() {
        let err = parse(r#"{"pos":7,"word":"seven","forms":[]}"#).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { line: 1, .. }));
    }

    #[test]
    fn test_forms_column_required() {
        let text = "{\"pos\":\"verb\",\"word\":\"run\"}\n{\"pos\":\"noun\",\"word\":\"cat\"}";
        let err = parse(text).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn { field: "forms", .. }
        ));
    }

    #[test]
    fn test_forms_column_needed_on_one_record_only() {
        let text = "{\"pos\":\"verb\",\"word\":\"run\"}\n{\"pos\":\"noun\",\"word\":\"cat\",\"forms\":[]}";
        let lexicon = parse(text).unwrap();
        assert_eq!(lexicon.entries.len(), 2);
        assert!(lexicon.entries[0].forms.is_none());
        assert_eq!(lexicon.entries[1].forms, Some(vec![]));
    }

    #[test]
    fn test_empty_input_is_empty_lexicon() {
        let lexicon = parse("").unwrap();
        assert!(lexicon.entries.is_empty());
        assert_eq!(lexicon.line_count, 0);
    }

    #[test]
    fn test_bad_tags_rejected() {
        let err = parse(r#"{"pos":"noun","word":"cat","forms":[{"form":"cats","tags":"plural"}]}"#)
            .unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { line: 1, .. }));
    }

    #[test]
    fn test_null_word_rejected() {
        let text = "{\"pos\":\"noun\",\"word\":\"cat\",\"forms\":[]}\n{\"pos\":\"noun\",\"word\":null}";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_forms_must_be_array() {
        let err = parse(r#"{"pos":"noun","word":"cat","forms":"cats"}"#).unwrap_err();
        assert!(err.is_data_format());
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_line_of_offset() {
        assert_eq!(line_of_offset(b"abc", 2), 1);
        assert_eq!(line_of_offset(b"a\nb\nc", 4), 3);
    }
}
