//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Per-file progress bar drawn on stderr, disabled in quiet mode
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self { bar: None, quiet }
    }

    /// Start a bar for `total_files`; a single file gets no bar
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let bar = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.enable_steady_tick(Duration::from_millis(120));
        self.bar = Some(bar);
    }

    /// Record one finished file. Safe to call from worker threads.
    pub fn file_completed(&self, filename: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(filename.to_string());
            bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
            log::info!("Processed {} file(s)", bar.position());
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }
}
