/// Summary statistics over a scan report

use serde::Serialize;

use crate::core::classifier::SubtitleResult;

/// Per-category counts for a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub english: usize,
    pub portuguese: usize,
    pub undefined: usize,
    pub errors: usize,
}

impl Stats {
    /// Count results per category.
    ///
    /// Pure and O(n); `total` always equals the sum of the four category
    /// counts.
    pub fn aggregate(results: &[SubtitleResult]) -> Self {
        let mut stats = Stats::default();

        for result in results {
            stats.total += 1;
            match result {
                SubtitleResult::English { .. } => stats.english += 1,
                SubtitleResult::Portuguese { .. } => stats.portuguese += 1,
                SubtitleResult::Undefined { .. } => stats.undefined += 1,
                SubtitleResult::Error { .. } => stats.errors += 1,
            }
        }

        stats
    }
}
