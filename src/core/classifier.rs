/// Language classification for subtitle files
///
/// This file contains the classification rule itself: a file's decoded text
/// is checked for a small set of marker words and assigned to exactly one
/// language category.

use std::path::Path;

use anyhow::Result;
use log::{debug, warn};

use crate::core::encoding;

/// Portuguese marker word, matched as a literal substring of the lowercased
/// content. The accent is load-bearing: the unaccented form must not match.
const PORTUGUESE_MARKER: &str = "você";

/// English marker word.
const ENGLISH_MARKER: &str = "you";

/// Classification outcome for a single subtitle file.
///
/// Exactly one variant holds per file. The language variants carry the file
/// stem (name without extension or directory), captured once at
/// classification time; the error variant carries the base name together
/// with the failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleResult {
    English { file_stem: String },
    Portuguese { file_stem: String },
    Undefined { file_stem: String },
    Error { detail: String },
}

impl SubtitleResult {
    /// The file stem for language outcomes, `None` for errors.
    pub fn file_stem(&self) -> Option<&str> {
        match self {
            SubtitleResult::English { file_stem }
            | SubtitleResult::Portuguese { file_stem }
            | SubtitleResult::Undefined { file_stem } => Some(file_stem),
            SubtitleResult::Error { .. } => None,
        }
    }

    /// Whether this entry records a failed classification.
    pub fn is_error(&self) -> bool {
        matches!(self, SubtitleResult::Error { .. })
    }
}

/// Classify one subtitle file by probable language.
///
/// Marker checks run in priority order over the lowercased decoded content:
/// Portuguese first, then English, then undefined. Never fails: any I/O or
/// detection failure is folded into the `Error` variant so a single bad file
/// cannot abort a directory scan.
///
/// # Arguments
///
/// * `file_path` - Path to the subtitle file
///
/// # Returns
///
/// The classification outcome
pub fn classify_file(file_path: &Path) -> SubtitleResult {
    match classify_inner(file_path) {
        Ok(result) => result,
        Err(e) => {
            warn!("Failed to classify {}: {:#}", file_path.display(), e);
            SubtitleResult::Error {
                detail: format!("{}: {:#}", base_name(file_path), e),
            }
        }
    }
}

/// The fallible part of classification; failures become `Error` entries in
/// the caller.
fn classify_inner(file_path: &Path) -> Result<SubtitleResult> {
    let encoding = encoding::detect_encoding(file_path)?;
    let text = encoding::read_text_lossy(file_path, encoding)?;
    let content = text.to_lowercase();

    let file_stem = file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    // Priority order: Portuguese, then English, then undefined.
    let result = if content.contains(PORTUGUESE_MARKER) {
        SubtitleResult::Portuguese { file_stem }
    } else if content.contains(ENGLISH_MARKER) {
        SubtitleResult::English { file_stem }
    } else {
        SubtitleResult::Undefined { file_stem }
    };

    debug!("Classified {} as {:?}", file_path.display(), result);
    Ok(result)
}

/// File name with extension, used in error details.
fn base_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_subtitle(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write subtitle file");
        path
    }

    #[test]
    fn test_english_marker_is_case_insensitive() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_subtitle(&temp_dir, "a.srt", "Hello, how are YOU today?");

        assert_eq!(
            classify_file(&path),
            SubtitleResult::English {
                file_stem: "a".to_string()
            }
        );
    }

    #[test]
    fn test_portuguese_marker_matches_accented_word() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_subtitle(&temp_dir, "b.srt", "Como você está?");

        assert_eq!(
            classify_file(&path),
            SubtitleResult::Portuguese {
                file_stem: "b".to_string()
            }
        );
    }

    #[test]
    fn test_portuguese_wins_over_english() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_subtitle(&temp_dir, "both.srt", "You know... VOCÊ sabe.");

        assert_eq!(
            classify_file(&path),
            SubtitleResult::Portuguese {
                file_stem: "both".to_string()
            }
        );
    }

    #[test]
    fn test_unaccented_word_is_not_portuguese() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_subtitle(&temp_dir, "mangled.srt", "Como voce esta?");

        assert_eq!(
            classify_file(&path),
            SubtitleResult::Undefined {
                file_stem: "mangled".to_string()
            }
        );
    }

    #[test]
    fn test_no_markers_is_undefined() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_subtitle(&temp_dir, "c.srt", "Bonjour le monde");

        assert_eq!(
            classify_file(&path),
            SubtitleResult::Undefined {
                file_stem: "c".to_string()
            }
        );
    }

    #[test]
    fn test_stem_keeps_inner_dots() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_subtitle(&temp_dir, "Movie.Name.2020.srt", "you");

        assert_eq!(
            classify_file(&path).file_stem(),
            Some("Movie.Name.2020")
        );
    }

    #[test]
    fn test_missing_file_becomes_error_with_base_name() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("gone.srt");

        let result = classify_file(&path);
        assert!(result.is_error());
        match result {
            SubtitleResult::Error { detail } => {
                assert!(detail.starts_with("gone.srt: "));
                assert!(detail.len() > "gone.srt: ".len());
            }
            other => panic!("Expected an error entry, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_entry_becomes_error() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("fake.srt");
        fs::create_dir(&path).expect("Failed to create directory");

        let result = classify_file(&path);
        match result {
            SubtitleResult::Error { detail } => assert!(detail.contains("fake.srt")),
            other => panic!("Expected an error entry, got {:?}", other),
        }
    }
}
