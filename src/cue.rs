/*!
 * Subtitle cue model.
 *
 * A parsed SRT file is an ordered list of [`SubtitleCue`]s. Each cue holds one
 * [`SubtitleLine`] per physical text line, and each line is split into
 * [`StyledTextRun`]s carrying at most one inline style.
 */

use std::fmt;

use serde::Serialize;

use crate::style;
use crate::timecode;

/// Inline style of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    #[default]
    Plain,
    Italic,
    Bold,
    Underline,
}

impl TextStyle {
    /// Map a single-letter SRT tag name to its style.
    /// Unknown letters are plain text.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "i" => Self::Italic,
            "b" => Self::Bold,
            "u" => Self::Underline,
            _ => Self::Plain,
        }
    }

    /// The SRT tag name of this style, `None` for plain text.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Italic => Some("i"),
            Self::Bold => Some("b"),
            Self::Underline => Some("u"),
        }
    }
}

/// A contiguous span of text with at most one style applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledTextRun {
    text: String,
    style: TextStyle,
}

impl StyledTextRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::Plain)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn italic(&self) -> bool {
        self.style == TextStyle::Italic
    }

    pub fn bold(&self) -> bool {
        self.style == TextStyle::Bold
    }

    pub fn underline(&self) -> bool {
        self.style == TextStyle::Underline
    }
}

/// One physical text line of a cue
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubtitleLine {
    runs: Vec<StyledTextRun>,
}

impl SubtitleLine {
    pub fn new(runs: Vec<StyledTextRun>) -> Self {
        Self { runs }
    }

    pub fn runs(&self) -> &[StyledTextRun] {
        &self.runs
    }

    /// The line text with all markup removed
    pub fn text(&self) -> String {
        self.runs.iter().map(StyledTextRun::text).collect()
    }
}

/// One timed subtitle entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleCue {
    index: u64,
    start_time_ms: u64,
    end_time_ms: u64,
    lines: Vec<SubtitleLine>,
}

impl SubtitleCue {
    pub fn new(index: u64, start_time_ms: u64, end_time_ms: u64, lines: Vec<SubtitleLine>) -> Self {
        Self {
            index,
            start_time_ms,
            end_time_ms,
            lines,
        }
    }

    /// The sequence number as declared in the source file
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn start_time_ms(&self) -> u64 {
        self.start_time_ms
    }

    pub fn end_time_ms(&self) -> u64 {
        self.end_time_ms
    }

    pub fn lines(&self) -> &[SubtitleLine] {
        &self.lines
    }

    /// Display duration, zero when the end lies before the start
    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms.saturating_sub(self.start_time_ms)
    }

    /// Plain text of all lines joined with newlines
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(SubtitleLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SubtitleCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(
            f,
            "{} --> {}",
            timecode::format_time_code(self.start_time_ms),
            timecode::format_time_code(self.end_time_ms)
        )?;
        for line in &self.lines {
            writeln!(f, "{}", style::to_line_string(line))?;
        }
        Ok(())
    }
}
