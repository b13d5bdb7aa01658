/*!
 * Integration tests for loading, writing back and re-parsing subtitles
 */

use std::path::PathBuf;
use anyhow::Result;

use subcue::cue::{StyledTextRun, SubtitleCue, SubtitleLine, TextStyle};
use subcue::subtitle_processor::SubtitleCollection;
use crate::common;

/// Test that a parsed file written back as SRT parses to the same cues
#[test]
fn test_subtitle_workflow_withWriteBack_shouldReparseEqualCues() -> Result<()> {
    common::init_logger();
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_subtitle(temp_dir.path(), "movie.srt")?;

    let collection = SubtitleCollection::load(&source, "utf-8")?;
    let written = temp_dir.path().join("out").join("movie.copy.srt");
    collection.write_to_srt(&written)?;

    let reloaded = SubtitleCollection::load(&written, "utf-8")?;

    assert_eq!(reloaded.cues, collection.cues);
    assert_eq!(std::fs::read_to_string(&written)?, common::SAMPLE_SRT);
    Ok(())
}

/// Test rendering hand built cues
#[test]
fn test_toSrtString_withStyledCue_shouldRenderTags() {
    let collection = SubtitleCollection::from_cues(PathBuf::from("lorem.srt"), vec![SubtitleCue::new(
        1,
        30000,
        48100,
        vec![SubtitleLine::new(vec![StyledTextRun::new("lorem", TextStyle::Italic)])],
    )]);

    assert_eq!(collection.to_srt_string(), "1\n00:00:30,000 --> 00:00:48,100\n<i>lorem</i>\n");
}

/// Test collection lookups and diagnostics
#[test]
fn test_collection_queries_withLoadedFile_shouldReportCorrectly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "overlap.srt",
        "1\n00:00:01,000 --> 00:00:05,000\nA\n\n2\n00:00:04,000 --> 00:00:06,000\nB\n\n3\n00:00:07,000 --> 00:00:08,000\nC\n",
    )?;

    let collection = SubtitleCollection::load(&path, "")?;

    assert_eq!(collection.len(), 3);
    assert!(!collection.is_empty());
    assert_eq!(collection.overlap_count(), 1);
    assert_eq!(collection.find(2).map(SubtitleCue::text), Some("B".to_string()));
    assert!(collection.find(9).is_none());
    assert_eq!(collection.encoding, "UTF-8");

    let summary = collection.to_string();
    assert!(summary.contains("Encoding: UTF-8"));
    assert!(summary.contains("Cues: 3"));
    Ok(())
}

/// Test that encoding labels are resolved leniently when loading
#[test]
fn test_load_withEncodingLabels_shouldResolveOrFallBack() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let latin = common::create_test_file_bytes(
        temp_dir.path(),
        "latin.srt",
        b"1\n00:00:01,000 --> 00:00:02,000\nGar\xE7on\n",
    )?;
    let utf8 = common::create_test_subtitle(temp_dir.path(), "utf8.srt")?;

    let collection = SubtitleCollection::load(&latin, "ISO-8859-1")?;
    assert_eq!(collection.cues[0].text(), "Garçon");
    assert_eq!(collection.encoding, "windows-1252");

    let fallback = SubtitleCollection::load(&utf8, "not-an-encoding")?;
    assert_eq!(fallback.encoding, "UTF-8");
    assert_eq!(fallback.len(), 2);

    assert!(SubtitleCollection::load(&latin, "utf-8").is_err());
    Ok(())
}
