/// Subtitle Scanner - classifies subtitle files by probable language
///
/// This library scans a directory for `.srt` files, classifies each one by
/// keyword matching over its decoded text, and renders the outcome as an HTML
/// report.

// Re-export core modules
pub mod core;
pub mod web;

// Re-export main pipeline types for convenience
pub use crate::core::classifier::SubtitleResult;
pub use crate::core::scanner::scan_directory;
pub use crate::core::stats::Stats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a directory and aggregate the per-category counts.
///
/// This is a convenience function for simple use cases wanting the whole
/// pipeline in one call.
///
/// # Arguments
///
/// * `directory` - Directory containing `.srt` files
///
/// # Returns
///
/// The per-file results in listing order, plus the aggregated counts
pub fn scan_and_aggregate<P: AsRef<std::path::Path>>(
    directory: P,
) -> anyhow::Result<(Vec<SubtitleResult>, Stats)> {
    let results = core::scanner::scan_directory(directory.as_ref())?;
    let stats = Stats::aggregate(&results);
    Ok((results, stats))
}
