//! Extraction statistics tracking.
//!
//! Counts the candidate nodes and elements skipped during one extraction so
//! the recovered failures stay visible in the logs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::SkipReason;

/// Thread-safe skip counters, one per [`SkipReason`].
///
/// All reasons are initialized to zero on creation.
pub struct ExtractionStats {
    skipped: HashMap<SkipReason, AtomicUsize>,
}

impl ExtractionStats {
    pub fn new() -> Self {
        let mut skipped = HashMap::new();
        for reason in SkipReason::iter() {
            skipped.insert(reason, AtomicUsize::new(0));
        }
        ExtractionStats { skipped }
    }

    /// Increment a skip counter.
    pub fn record_skip(&self, reason: SkipReason) {
        if let Some(counter) = self.skipped.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment skip counter for {:?} which is not in the map. \
                 This indicates a bug in ExtractionStats initialization.",
                reason
            );
        }
    }

    /// Get the count for a skip reason.
    pub fn skip_count(&self, reason: SkipReason) -> usize {
        self.skipped
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Logs every non-zero counter at debug level.
    pub fn log_summary(&self) {
        if self.total_skipped() == 0 {
            return;
        }
        for reason in SkipReason::iter() {
            let count = self.skip_count(reason);
            if count > 0 {
                log::debug!("Skipped {} candidate(s): {}", count, reason);
            }
        }
    }
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}
