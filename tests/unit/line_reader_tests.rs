/*!
 * Tests for encoding resolution and reading subtitle files as lines
 */

use anyhow::Result;
use encoding_rs::{UTF_16LE, UTF_8, WINDOWS_1252};
use subcue::errors::SubtitleParseError;
use subcue::line_reader::{read_lines, resolve_encoding};
use subcue::srt_parser::SrtParser;
use crate::common;

const LATIN1_SRT: &[u8] = b"1\n00:00:01,000 --> 00:00:02,000\nCaf\xE9 cr\xE8me\n";

#[test]
fn test_readLines_withDeclaredWindows1252_shouldDecode() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file_bytes(temp_dir.path(), "latin.srt", LATIN1_SRT)?;

    let lines = read_lines(&path, WINDOWS_1252)?;

    assert_eq!(lines, vec!["1", "00:00:01,000 --> 00:00:02,000", "Café crème"]);
    Ok(())
}

#[test]
fn test_readLines_withWrongEncoding_shouldFailWithDecodeError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file_bytes(temp_dir.path(), "latin.srt", LATIN1_SRT)?;

    let result = SrtParser::parse(&path, UTF_8);

    match result {
        Err(error @ SubtitleParseError::Decode { .. }) => {
            assert!(error.to_string().contains("at offset 35"), "{}", error);
            assert!(matches!(error, SubtitleParseError::Decode { encoding: "UTF-8", offset: 35, .. }));
        }
        other => panic!("Expected a decode error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_readLines_withUtf8ByteOrderMark_shouldStripIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = format!("\u{FEFF}{}", common::SAMPLE_SRT);
    let path = common::create_test_file(temp_dir.path(), "bom.srt", &content)?;

    let cues = SrtParser::parse(&path, UTF_8)?;

    assert_eq!(cues[0].index(), 1526);
    Ok(())
}

#[test]
fn test_readLines_withUtf16File_shouldDecode() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let bytes: Vec<u8> = format!("\u{FEFF}{}", common::SAMPLE_SRT)
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .collect();
    let path = common::create_test_file_bytes(temp_dir.path(), "wide.srt", &bytes)?;

    let cues = SrtParser::parse(&path, resolve_encoding("utf-16le"))?;

    assert_eq!(resolve_encoding("utf-16le"), UTF_16LE);
    assert_eq!(cues.len(), 2);
    assert_eq!(cues[1].text(), "The Black Pearl is yours.");
    Ok(())
}

#[test]
fn test_readLines_withMissingFile_shouldFailWithoutLineNumber() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let error = read_lines(temp_dir.path().join("nope.srt"), UTF_8).unwrap_err();

    assert!(matches!(error, SubtitleParseError::FileNotFound(_)));
    assert_eq!(error.line_number(), None);
    Ok(())
}
