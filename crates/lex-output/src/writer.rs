//! CSV serialization of a partitioned lexicon.
//!
//! Files are first written to hidden staging files inside the destination
//! directory, one at a time, and renamed into place only after all of them
//! were written. A failed run leaves no partial output behind.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Terminator, Writer, WriterBuilder};
use tempfile::TempPath;
use tracing::debug;

use lex_model::{
    DICTIONARY_FILE_NAME, FormRow, PartOfSpeech, ProgressObserver, Stage, render_tags_cell,
};

use crate::error::{OutputError, Result};
use crate::partition::PartitionedLexicon;

/// Header row of every part-of-speech file.
pub const FORM_TABLE_HEADER: [&str; 2] = ["form", "tags"];

/// Paths of the files written by [`write_lexicon`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub dictionary: PathBuf,
    pub parts: Vec<(PartOfSpeech, PathBuf)>,
}

impl OutputPaths {
    /// Paths that [`write_lexicon`] creates for `dir`, in write order.
    pub fn for_dir(dir: &Path) -> Self {
        Self {
            dictionary: dir.join(DICTIONARY_FILE_NAME),
            parts: PartOfSpeech::ALL
                .iter()
                .map(|pos| (*pos, dir.join(pos.file_name())))
                .collect(),
        }
    }

    pub fn file_count(&self) -> usize {
        1 + self.parts.len()
    }
}

/// Writes `dictionary.csv` and one `<pos>.csv` per part of speech into `dir`.
///
/// Existing files with the same names are overwritten.
pub fn write_lexicon(
    lexicon: &PartitionedLexicon,
    dir: &Path,
    observer: &dyn ProgressObserver,
) -> Result<OutputPaths> {
    if !dir.is_dir() {
        return Err(OutputError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let paths = OutputPaths::for_dir(dir);
    observer.start(Stage::Write, paths.file_count() as u64);

    let mut staged = Vec::with_capacity(paths.file_count());
    let dictionary = stage_csv(dir, &paths.dictionary, |writer| {
        write_dictionary(writer, &lexicon.dictionary)
    })?;
    staged.push((dictionary, paths.dictionary.clone()));
    observer.advance(Stage::Write, 1);

    for (pos, target) in &paths.parts {
        let rows = lexicon
            .part(*pos)
            .map(|part| part.rows.as_slice())
            .unwrap_or_default();
        let temp = stage_csv(dir, target, |writer| write_form_rows(writer, rows))?;
        staged.push((temp, target.clone()));
        observer.advance(Stage::Write, 1);
    }

    for (temp, target) in staged {
        temp.persist(&target).map_err(|e| OutputError::Persist {
            path: target.clone(),
            source: e.error,
        })?;
        debug!(path = %target.display(), "wrote output file");
    }
    observer.finish(Stage::Write);
    Ok(paths)
}

/// Writes the master word list: one value per line, no header.
pub fn write_dictionary<W: std::io::Write>(
    writer: &mut Writer<W>,
    words: &[String],
) -> csv::Result<()> {
    for word in words {
        writer.write_record([word.as_str()])?;
    }
    Ok(())
}

/// Writes a `form,tags` table.
pub fn write_form_rows<W: std::io::Write>(
    writer: &mut Writer<W>,
    rows: &[FormRow],
) -> csv::Result<()> {
    writer.write_record(FORM_TABLE_HEADER)?;
    for row in rows {
        let tags = render_tags_cell(row.tags.as_ref());
        writer.write_record([row.form.as_str(), tags.as_str()])?;
    }
    Ok(())
}

/// Builds the CSV writer settings shared by every output file.
pub fn csv_writer<W: std::io::Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn stage_csv<F>(dir: &Path, target: &Path, write: F) -> Result<TempPath>
where
    F: FnOnce(&mut Writer<&mut File>) -> csv::Result<()>,
{
    let mut builder = tempfile::Builder::new();
    builder.prefix(".lex-extract-").suffix(".csv.tmp");
    // Staging files default to 0600; outputs should look like plain files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    let mut staging = builder
        .tempfile_in(dir)
        .map_err(|e| OutputError::Stage {
            dir: dir.to_path_buf(),
            source: e,
        })?;
    {
        let mut writer = csv_writer(staging.as_file_mut());
        write(&mut writer).map_err(|e| OutputError::CsvWrite {
            path: target.to_path_buf(),
            source: e,
        })?;
        writer.flush().map_err(|e| OutputError::Flush {
            path: target.to_path_buf(),
            source: e,
        })?;
    }
    // Closes the handle; the file is removed if it is never persisted.
    Ok(staging.into_temp_path())
}
