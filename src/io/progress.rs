//! Spinner feedback while a search runs

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::monitor::SearchMonitor;
use crate::algorithm::roster::EntityId;
use crate::algorithm::stats::SearchStats;
use crate::io::configuration::{PROGRESS_UPDATE_INTERVAL, SPINNER_TICK_MS};
use crate::spatial::Cell;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Search monitor drawing an `indicatif` spinner with placement counts
///
/// The message is refreshed every `update_interval` placements to keep the
/// search loop cheap. The spinner is cleared when the search ends.
pub struct SearchProgress {
    bar: ProgressBar,
    update_interval: u64,
    total_entities: usize,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a spinner drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new_spinner())
    }

    /// Create a monitor around an existing bar, e.g. a hidden one in tests
    pub fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(SPINNER_STYLE.clone());
        Self {
            bar,
            update_interval: PROGRESS_UPDATE_INTERVAL,
            total_entities: 0,
        }
    }

    /// Change how many placements pass between message refreshes
    #[must_use]
    pub fn update_interval(mut self, interval: u64) -> Self {
        self.update_interval = interval.max(1);
        self
    }

    /// Current spinner message
    pub fn message(&self) -> String {
        self.bar.message()
    }

    fn refresh(&self, depth: usize, stats: &SearchStats) {
        self.bar.set_message(format!(
            "{} placements, depth {}/{}, {} pruned",
            stats.nodes, depth, self.total_entities, stats.prunes
        ));
    }
}

impl SearchMonitor for SearchProgress {
    fn on_search_start(&mut self, entities: usize, _cells: usize) {
        self.total_entities = entities;
        self.bar.set_message("searching");
        self.bar
            .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    }

    fn on_place(&mut self, depth: usize, _entity: EntityId, _cell: Cell, stats: &SearchStats) {
        if stats.nodes.is_multiple_of(self.update_interval) {
            self.refresh(depth, stats);
        }
    }

    fn on_search_end(&mut self, _found: bool, stats: &SearchStats) {
        self.refresh(stats.max_depth, stats);
        self.bar.finish_and_clear();
    }
}
