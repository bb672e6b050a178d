use std::fs;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use lex_cli::pipeline::{PipelineConfig, PipelineReport, run_pipeline};
use lex_ingest::IngestError;
use lex_model::{NoProgress, ProgressObserver};

use crate::cli::Cli;
use crate::progress::BarProgress;

pub fn run_extract(cli: &Cli) -> Result<PipelineReport> {
    let span = info_span!("extract", input = %cli.json_file_path.display());
    let _guard = span.enter();

    if !cli.json_file_path.exists() {
        return Err(IngestError::InputNotFound {
            path: cli.json_file_path.clone(),
        }
        .into());
    }
    if !cli.dry_run && !cli.saving_path.exists() {
        fs::create_dir_all(&cli.saving_path)
            .with_context(|| format!("create {}", cli.saving_path.display()))?;
        debug!(output_dir = %cli.saving_path.display(), "created output directory");
    }

    let config = PipelineConfig {
        dictionary_source: cli.dictionary_source.into(),
        dry_run: cli.dry_run,
        ..PipelineConfig::new(&cli.json_file_path, &cli.saving_path)
    };
    let observer: Box<dyn ProgressObserver> = if show_progress(cli) {
        Box::new(BarProgress::new())
    } else {
        Box::new(NoProgress)
    };
    run_pipeline(&config, observer.as_ref())
}

fn show_progress(cli: &Cli) -> bool {
    !cli.no_progress && io::stderr().is_terminal()
}
