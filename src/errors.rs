/*!
 * Error types for subtitle parsing.
 *
 * Reading failures and structural failures share one error type so callers
 * only have to handle a single "this file is unusable" case, using the
 * thiserror crate for ergonomic error definitions.
 */

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or parsing a subtitle file.
///
/// Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum SubtitleParseError {
    /// The subtitle file does not exist
    #[error("Failed to parse subtitle file, file \"{}\" does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// The subtitle file could not be read
    #[error("Failed to read subtitle file \"{}\": {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The file content is not valid for the declared encoding
    #[error(
        "Failed to decode subtitle file \"{}\" as {encoding}, malformed byte sequence at offset {offset}",
        .path.display()
    )]
    Decode {
        /// File that was being decoded
        path: PathBuf,
        /// Name of the declared encoding
        encoding: &'static str,
        /// Byte offset of the first malformed sequence
        offset: usize,
    },

    /// An index line without any digits
    #[error("Failed to read subtitle index at line {line}, \"{content}\" has no index number")]
    MissingIndex {
        /// Line number of the offending line
        line: usize,
        /// Raw content of the offending line
        content: String,
    },

    /// An index line whose number cannot be represented
    #[error("Failed to parse subtitle index at line {line}, {source}")]
    InvalidIndex {
        /// Line number of the offending line
        line: usize,
        /// Raw content of the offending line
        content: String,
        /// Integer conversion failure
        source: ParseIntError,
    },

    /// A time line that doesn't match `HH:MM:SS,mmm --> HH:MM:SS,mmm`
    #[error("Failed to parse subtitle time at line {line}, invalid time line format \"{content}\"")]
    InvalidTime {
        /// Line number of the offending line
        line: usize,
        /// Raw content of the offending line
        content: String,
    },
}

impl SubtitleParseError {
    /// Line number of a structural error, `None` for reading failures.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::MissingIndex { line, .. }
            | Self::InvalidIndex { line, .. }
            | Self::InvalidTime { line, .. } => Some(*line),
            Self::FileNotFound(_) | Self::Io { .. } | Self::Decode { .. } => None,
        }
    }

    /// Whether the failure comes from the file content rather than from reading it.
    pub fn is_structural(&self) -> bool {
        self.line_number().is_some()
    }
}
