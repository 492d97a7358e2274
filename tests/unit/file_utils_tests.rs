/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use ttmlconv::file_utils::FileManager;
use crate::common;

/// Test that the default output path appends the SRT extension
#[test]
fn test_defaultOutputPath_shouldAppendSrtExtension() {
    let output = FileManager::default_output_path(Path::new("/tmp/input/show.ttml"));
    assert_eq!(output, Path::new("/tmp/input/show.ttml.srt"));
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_fileExists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.ttml"));
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_writeToFile_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("nested").join("out.srt");

    FileManager::write_to_file(&target, "1\n")?;

    assert!(FileManager::file_exists(&target));
    assert_eq!(fs::read_to_string(&target)?, "1\n");
    Ok(())
}

/// Test that invalid UTF-8 is replaced instead of failing
#[test]
fn test_readToString_withInvalidUtf8_shouldReplaceBytes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("latin1.ttml");
    fs::write(&path, b"caf\xe9")?;

    let content = FileManager::read_to_string(&path)?;
    assert_eq!(content, "caf\u{FFFD}");
    Ok(())
}

/// Test that reading a missing file fails
#[test]
fn test_readToString_withMissingFile_shouldFail() {
    assert!(FileManager::read_to_string("does/not/exist.ttml").is_err());
}
