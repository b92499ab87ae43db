/// Directory scanning for subtitle files
///
/// This module enumerates a directory, filters entries down to subtitle
/// files by name, and runs the classifier over each one in listing order.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::classifier::{self, SubtitleResult};

/// Suffix that marks a subtitle file (exact, case-sensitive match).
pub const SUBTITLE_EXTENSION: &str = ".srt";

/// Error when the scan target is not an existing directory
#[derive(Debug, Error)]
#[error("Not a directory: {path}")]
pub struct NotADirectory {
    pub path: PathBuf,
}

/// List the subtitle files in a directory.
///
/// Keeps every entry whose name ends with `.srt`, in whatever order the
/// directory listing yields (no sorting, no recursion into subdirectories).
/// The filter looks at the name only, so a directory named like a subtitle
/// file is kept here and surfaces as an error row once classification tries
/// to read it.
///
/// # Arguments
///
/// * `dir_path` - Directory to enumerate
///
/// # Returns
///
/// Paths of the matching entries
pub fn list_subtitle_files(dir_path: &Path) -> Result<Vec<PathBuf>> {
    if !dir_path.is_dir() {
        return Err(NotADirectory {
            path: dir_path.to_path_buf(),
        }
        .into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir_path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_name = entry.file_name().to_string_lossy();
        if file_name.ends_with(SUBTITLE_EXTENSION) {
            files.push(entry.path().to_path_buf());
        } else {
            debug!("Skipping {}: not a subtitle file", entry.path().display());
        }
    }

    Ok(files)
}

/// Scan a directory and classify every subtitle file in it.
///
/// A failure on one file becomes an error entry for that file alone; the
/// scan continues with the next entry. Fails only when the directory itself
/// cannot be listed.
///
/// # Arguments
///
/// * `dir_path` - Directory to scan
///
/// # Returns
///
/// One classification result per subtitle file, in listing order
pub fn scan_directory(dir_path: &Path) -> Result<Vec<SubtitleResult>> {
    let files = list_subtitle_files(dir_path)?;
    info!(
        "Scanning {} subtitle files in {}",
        files.len(),
        dir_path.display()
    );

    Ok(files
        .iter()
        .map(|path| classifier::classify_file(path))
        .collect())
}
