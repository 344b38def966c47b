// file: src/pipeline/progress.rs
// description: fetch progress reporting and run statistics
// reference: uses indicatif for the spinner and tracks per-run counters

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub pages_fetched: u32,
    pub repositories_fetched: usize,
    pub repositories_rendered: usize,
    pub duration: Duration,
}

impl RunStats {
    /// Fetched but not rendered, i.e. archived.
    pub fn repositories_skipped(&self) -> usize {
        self.repositories_fetched
            .saturating_sub(self.repositories_rendered)
    }
}

pub struct FetchProgress {
    bar: ProgressBar,
    pages: u32,
    repositories: usize,
    start_time: Instant,
}

impl FetchProgress {
    pub fn new(colored: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style(colored));
        bar.enable_steady_tick(Duration::from_millis(120));
        Self::with_bar(bar)
    }

    /// Draws nothing; used for tests and non-interactive runs.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            pages: 0,
            repositories: 0,
            start_time: Instant::now(),
        }
    }

    pub fn page_fetched(&mut self, org: &str, count: usize) {
        self.pages += 1;
        self.repositories += count;
        self.bar.set_message(format!(
            "{}: {} repositories across {} page(s)",
            org, self.repositories, self.pages
        ));
        self.bar.tick();
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for FetchProgress {
    fn drop(&mut self) {
        self.finish();
    }
}

fn spinner_style(colored: bool) -> ProgressStyle {
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] {msg}"
    } else {
        "{spinner} [{elapsed_precise}] {msg}"
    };

    ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
