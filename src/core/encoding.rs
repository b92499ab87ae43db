/// Text encoding detection for subtitle files
///
/// Subtitle files in the wild come in a mix of UTF-8 and legacy single-byte
/// encodings, so the content is sniffed before it is decoded.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use log::debug;

/// Guess the text encoding of a file from its raw bytes.
///
/// Performs one full binary read and feeds the bytes to the detector. When
/// the detector has no confident guess (or the file is empty), falls back to
/// UTF-8. Only the file read itself can fail; detection never does.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The best-guess encoding
pub fn detect_encoding(file_path: &Path) -> Result<&'static Encoding> {
    let raw_data = fs::read(file_path).context(format!(
        "Failed to read file for encoding detection: {}",
        file_path.display()
    ))?;

    if raw_data.is_empty() {
        return Ok(UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&raw_data, true);
    let (guess, confident) = detector.guess_assess(None, true);

    let encoding = if confident { guess } else { UTF_8 };
    debug!(
        "Detected encoding {} for {}",
        encoding.name(),
        file_path.display()
    );

    Ok(encoding)
}

/// Read a file and decode it as text with the given encoding.
///
/// This is the best-effort decode policy: malformed byte sequences become the
/// replacement character instead of an error, so content problems never abort
/// classification. Only the file read itself can fail.
pub fn read_text_lossy(file_path: &Path, encoding: &'static Encoding) -> Result<String> {
    let raw_data = fs::read(file_path)
        .context(format!("Failed to read file: {}", file_path.display()))?;

    let (text, _, _) = encoding.decode(&raw_data);
    Ok(text.into_owned())
}
