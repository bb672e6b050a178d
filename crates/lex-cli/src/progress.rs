//! Terminal progress bars for pipeline stages.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use lex_model::{ProgressObserver, Stage};

const BAR_TEMPLATE: &str = "{msg:<26} {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]";

/// Shows one `indicatif` bar per stage on stderr.
#[derive(Default)]
pub struct BarProgress {
    current: Mutex<Option<ProgressBar>>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }
}

impl ProgressObserver for BarProgress {
    fn start(&self, stage: Stage, total: u64) {
        let bar = ProgressBar::new(total);
        bar.set_style(Self::style());
        bar.set_message(stage.as_str());
        if let Ok(mut slot) = self.current.lock()
            && let Some(previous) = slot.replace(bar)
        {
            previous.finish_and_clear();
        }
    }

    fn advance(&self, _stage: Stage, delta: u64) {
        if let Ok(slot) = self.current.lock()
            && let Some(bar) = slot.as_ref()
        {
            bar.inc(delta);
        }
    }

    fn finish(&self, _stage: Stage) {
        if let Ok(mut slot) = self.current.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish();
        }
    }
}
