/*!
 * Common test utilities for the subcue test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Two cues in the style of a real movie subtitle
pub const SAMPLE_SRT: &str = "1526
02:12:21,051 --> 02:12:22,951
This is the path
you've chosen, is it?

1527
02:12:26,757 --> 02:12:28,952
The <i>Black Pearl</i> is yours.
";

/// Initialize a test logger, safe to call from every test
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    create_test_file_bytes(dir, filename, content.as_bytes())
}

/// Creates a test file with raw bytes, for encodings other than UTF-8
pub fn create_test_file_bytes(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}
