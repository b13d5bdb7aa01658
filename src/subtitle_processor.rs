use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;

use crate::cue::SubtitleCue;
use crate::errors::SubtitleParseError;
use crate::line_reader;
use crate::srt_parser::SrtParser;

// @module: Parsed subtitle files and writing them back

/// Collection of parsed cues with the file they came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// Name of the encoding the file was decoded with
    pub encoding: String,

    /// Cues in file order
    pub cues: Vec<SubtitleCue>,
}

impl SubtitleCollection {
    /// Wrap already parsed cues
    pub fn from_cues(source_file: PathBuf, cues: Vec<SubtitleCue>) -> Self {
        SubtitleCollection {
            source_file,
            encoding: encoding_rs::UTF_8.name().to_string(),
            cues,
        }
    }

    /// Load and parse an SRT file.
    ///
    /// The encoding label is resolved leniently: empty or unknown labels
    /// decode the file as UTF-8.
    pub fn load<P: AsRef<Path>>(path: P, encoding_label: &str) -> Result<Self, SubtitleParseError> {
        let path = path.as_ref();
        let encoding = line_reader::resolve_encoding(encoding_label);
        let cues = SrtParser::parse(path, encoding)?;

        if cues.is_empty() {
            warn!("No subtitle cues found in {:?}", path);
        }

        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            encoding: encoding.name().to_string(),
            cues,
        })
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Find the first cue declaring the given index
    pub fn find(&self, index: u64) -> Option<&SubtitleCue> {
        self.cues.iter().find(|cue| cue.index() == index)
    }

    /// Number of cues whose time range overlaps the next cue in file order
    pub fn overlap_count(&self) -> usize {
        self.cues
            .windows(2)
            .filter(|pair| pair[0].end_time_ms() > pair[1].start_time_ms())
            .count()
    }

    /// Render all cues as SRT text, blocks separated by a blank line
    pub fn to_srt_string(&self) -> String {
        self.cues
            .iter()
            .map(|cue| cue.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write subtitles to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;
        file.write_all(self.to_srt_string().as_bytes())
            .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;

        debug!("Wrote {} cues to {}", self.cues.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Encoding: {}", self.encoding)?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}
