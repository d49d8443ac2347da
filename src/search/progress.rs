//! Progress reporting for long searches
//!
//! Purely observational: a sink may drop or delay updates without affecting results.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};

/// Receives "units of work completed" signals from search workers
pub trait ProgressSink: Sync {
    /// Record `units` more completed work items
    fn advance(&self, units: u64);

    /// Called once after every worker has stopped
    fn finish(&self);
}

/// Discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProgressSink for Silent {
    fn advance(&self, _units: u64) {}

    fn finish(&self) {}
}

impl ProgressSink for ProgressBar {
    fn advance(&self, units: u64) {
        self.inc(units);
    }

    fn finish(&self) {
        self.finish_with_message("Complete!");
    }
}

/// Counts progress without displaying it
#[derive(Debug, Default)]
pub struct Tally {
    units: AtomicU64,
    finished: AtomicU64,
}

impl Tally {
    #[must_use]
    pub fn units(&self) -> u64 {
        self.units.load(Ordering::Relaxed)
    }

    /// Number of `finish` calls received
    #[must_use]
    pub fn finish_calls(&self) -> u64 {
        self.finished.load(Ordering::Relaxed)
    }
}

impl ProgressSink for Tally {
    fn advance(&self, units: u64) {
        self.units.fetch_add(units, Ordering::Relaxed);
    }

    fn finish(&self) {
        self.finished.fetch_add(1, Ordering::Relaxed);
    }
}

/// Progress bar with throughput and ETA for `total` work items
///
/// # Panics
/// Will not panic - the template is a valid constant.
#[must_use]
pub fn progress_bar(total: u64, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {unit} ({{percent}}%) | {{per_sec}} | ETA {{eta}}"
            ))
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_accumulates() {
        let tally = Tally::default();
        tally.advance(3);
        tally.advance(4);
        tally.finish();
        assert_eq!(tally.units(), 7);
        assert_eq!(tally.finish_calls(), 1);
    }

    #[test]
    fn progress_bar_counts_units() {
        let pb = progress_bar(10, "wheels");
        ProgressSink::advance(&pb, 4);
        assert_eq!(pb.position(), 4);
        ProgressSink::finish(&pb);
        assert!(pb.is_finished());
    }

    #[test]
    fn silent_accepts_everything() {
        Silent.advance(u64::MAX);
        Silent.finish();
    }
}
