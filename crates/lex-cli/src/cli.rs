//! CLI argument definitions for the lexicon extractor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lex_model::DictionarySource;

#[derive(Parser)]
#[command(
    name = "lex-extract",
    version,
    about = "Extract data from a Wiktionary JSON dump",
    long_about = "Extract per-part-of-speech word lists from a line-delimited JSON lexicon.\n\n\
                  Writes dictionary.csv plus one CSV per part of speech \
                  (adj, adv, conj, det, noun, prep, pron, verb)."
)]
pub struct Cli {
    /// Path to the line-delimited JSON lexicon.
    #[arg(long = "json_file_path", short = 'i', value_name = "PATH")]
    pub json_file_path: PathBuf,

    /// Folder that will contain the output CSV files (created if missing).
    #[arg(long = "saving_path", short = 's', value_name = "DIR")]
    pub saving_path: PathBuf,

    /// Column listed in dictionary.csv.
    #[arg(long = "dictionary-source", value_enum, default_value = "forms")]
    pub dictionary_source: DictionarySourceArg,

    /// Run every stage without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Disable progress bars.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

/// CLI dictionary column choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DictionarySourceArg {
    /// Every distinct form (headwords included).
    Forms,
    /// Distinct headwords only.
    Headwords,
}

impl From<DictionarySourceArg> for DictionarySource {
    fn from(arg: DictionarySourceArg) -> Self {
        match arg {
            DictionarySourceArg::Forms => DictionarySource::Forms,
            DictionarySourceArg::Headwords => DictionarySource::Headwords,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
