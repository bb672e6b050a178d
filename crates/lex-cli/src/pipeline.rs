//! Lexicon extraction pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the line-delimited JSON lexicon fully into memory
//! 2. **Select**: keep accepted parts of speech, drop duplicate entries
//! 3. **Flatten**: expand form lists into flat records
//! 4. **Reconcile**: add placeholders for headwords missing from their forms
//! 5. **Partition**: deduplicate, split per part of speech, write CSV files
//!
//! Every stage takes the output of the previous one and returns a new value.
//! Nothing is written before the last stage, so input errors never leave
//! partial output behind.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lex_ingest::{RawLexicon, read_lexicon};
use lex_model::{DictionarySource, FlatRecord, PartOfSpeech, ProgressObserver, SourceEntry};
use lex_output::{OutputPaths, PartitionedLexicon, partition_records, write_lexicon};
use lex_transform::{
    Reconciliation, dedupe_rows, flatten_entries, reconcile_missing_forms, select_entries,
};

/// Inputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Line-delimited JSON lexicon.
    pub input_path: PathBuf,
    /// Existing destination directory.
    pub output_dir: PathBuf,
    pub dictionary_source: DictionarySource,
    /// Skip the file writes of the partition stage.
    pub dry_run: bool,
}

impl PipelineConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            dictionary_source: DictionarySource::default(),
            dry_run: false,
        }
    }
}

/// Row count of one part-of-speech file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartSummary {
    pub part_of_speech: PartOfSpeech,
    pub rows: usize,
    pub path: Option<PathBuf>,
}

/// Counts gathered while running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Records read from the input.
    pub entries_read: usize,
    /// Distinct entries with an accepted part of speech.
    pub entries_kept: usize,
    /// Records produced by flattening.
    pub flattened: usize,
    /// Placeholder records added by reconciliation.
    pub injected: usize,
    /// Distinct records after reconciliation.
    pub records: usize,
    /// Lines of `dictionary.csv`.
    pub dictionary_words: usize,
    pub dictionary_path: Option<PathBuf>,
    pub parts: Vec<PartSummary>,
    pub dry_run: bool,
}

/// Runs every stage for `config`.
pub fn run_pipeline(
    config: &PipelineConfig,
    observer: &dyn ProgressObserver,
) -> Result<PipelineReport> {
    let raw = ingest(&config.input_path)?;
    let entries = select(&raw);
    let flattened = flatten(&entries, observer);
    let Reconciliation { records, injected } = reconcile(&flattened, &entries, observer);
    let counts = StageCounts {
        entries_read: raw.entries.len(),
        entries_kept: entries.len(),
        flattened: flattened.len(),
        injected,
        records: records.len(),
    };
    let lexicon = partition(&records, config.dictionary_source);
    let paths = if config.dry_run {
        info!(output_dir = %config.output_dir.display(), "dry run: skipping file writes");
        None
    } else {
        Some(output(&lexicon, &config.output_dir, observer)?)
    };

    Ok(build_report(config, counts, &lexicon, paths.as_ref()))
}

/// Record counts taken between the normalization stages.
#[derive(Debug, Clone, Copy)]
struct StageCounts {
    entries_read: usize,
    entries_kept: usize,
    flattened: usize,
    injected: usize,
    records: usize,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Reads the lexicon.
pub fn ingest(input_path: &Path) -> Result<RawLexicon> {
    let span = info_span!("ingest", input = %input_path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let raw = read_lexicon(input_path)
        .with_context(|| format!("read lexicon {}", input_path.display()))?;
    info!(
        entry_count = raw.entries.len(),
        line_count = raw.line_count,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(raw)
}

// ============================================================================
// Stage 2: Select
// ============================================================================

/// Projects entries onto the accepted parts of speech and drops duplicates.
pub fn select(raw: &RawLexicon) -> Vec<SourceEntry> {
    info_span!("select").in_scope(|| {
        let entries = dedupe_rows(select_entries(&raw.entries));
        info!(
            entries_read = raw.entries.len(),
            entries_kept = entries.len(),
            "select complete"
        );
        entries
    })
}

// ============================================================================
// Stage 3: Flatten
// ============================================================================

pub fn flatten(entries: &[SourceEntry], observer: &dyn ProgressObserver) -> Vec<FlatRecord> {
    info_span!("flatten").in_scope(|| {
        let start = Instant::now();
        let records = flatten_entries(entries, observer);
        info!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "flatten complete"
        );
        records
    })
}

// ============================================================================
// Stage 4: Reconcile
// ============================================================================

/// Adds missing headword forms, then drops duplicate records.
pub fn reconcile(
    records: &[FlatRecord],
    entries: &[SourceEntry],
    observer: &dyn ProgressObserver,
) -> Reconciliation {
    info_span!("reconcile").in_scope(|| {
        let start = Instant::now();
        let Reconciliation { records, injected } =
            reconcile_missing_forms(records, entries, observer);
        let records = dedupe_rows(records);
        info!(
            injected,
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "reconcile complete"
        );
        Reconciliation { records, injected }
    })
}

// ============================================================================
// Stage 5: Partition + Output
// ============================================================================

pub fn partition(records: &[FlatRecord], source: DictionarySource) -> PartitionedLexicon {
    info_span!("partition").in_scope(|| {
        let lexicon = partition_records(records, source);
        info!(
            dictionary_words = lexicon.dictionary.len(),
            row_count = lexicon.row_count(),
            "partition complete"
        );
        lexicon
    })
}

pub fn output(
    lexicon: &PartitionedLexicon,
    output_dir: &Path,
    observer: &dyn ProgressObserver,
) -> Result<OutputPaths> {
    let span = info_span!("output", output_dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let paths = write_lexicon(lexicon, output_dir, observer)
        .with_context(|| format!("write output files to {}", output_dir.display()))?;
    info!(
        file_count = paths.file_count(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(paths)
}

fn build_report(
    config: &PipelineConfig,
    counts: StageCounts,
    lexicon: &PartitionedLexicon,
    paths: Option<&OutputPaths>,
) -> PipelineReport {
    let parts = lexicon
        .parts
        .iter()
        .map(|part| PartSummary {
            part_of_speech: part.part_of_speech,
            rows: part.rows.len(),
            path: paths.and_then(|paths| {
                paths
                    .parts
                    .iter()
                    .find(|(pos, _)| *pos == part.part_of_speech)
                    .map(|(_, path)| path.clone())
            }),
        })
        .collect();
    PipelineReport {
        input_path: config.input_path.clone(),
        output_dir: config.output_dir.clone(),
        entries_read: counts.entries_read,
        entries_kept: counts.entries_kept,
        flattened: counts.flattened,
        injected: counts.injected,
        records: counts.records,
        dictionary_words: lexicon.dictionary.len(),
        dictionary_path: paths.map(|paths| paths.dictionary.clone()),
        parts,
        dry_run: config.dry_run,
    }
}
