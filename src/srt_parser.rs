/*!
 * SubRip (`.srt`) parser.
 *
 * The parser walks the file line by line through a four stage cycle per
 * block: index, time, text and finish. A blank line always finishes the
 * current block, and the block in progress is carried through the loop as a
 * value so a cue is only built once its index and time are known.
 *
 * Parsing is all or nothing. A block without an index number or with a
 * malformed time line fails the whole file.
 */

use std::path::Path;

use encoding_rs::Encoding;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue::{SubtitleCue, SubtitleLine};
use crate::errors::SubtitleParseError;
use crate::line_reader;
use crate::style;
use crate::timecode;

// @const: First run of digits on an index line
static INDEX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Stage of the per block state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Index,
    Time,
    Text,
    Finish,
}

impl Stage {
    pub(crate) fn next(self) -> Stage {
        match self {
            Stage::Index => Stage::Time,
            Stage::Time => Stage::Text,
            Stage::Text => Stage::Finish,
            Stage::Finish => Stage::Index,
        }
    }
}

/// The block currently being read
#[derive(Debug, PartialEq)]
enum Block {
    Empty,
    Indexed {
        index: u64,
    },
    Timed {
        index: u64,
        start_time_ms: u64,
        end_time_ms: u64,
        lines: Vec<SubtitleLine>,
    },
}

impl Block {
    /// Stage that reads the next non blank line of this block.
    fn stage(&self) -> Stage {
        match self {
            Block::Empty => Stage::Index,
            Block::Indexed { .. } => Stage::Time,
            Block::Timed { .. } => Stage::Text,
        }
    }

    /// Turn the block into a cue once both index and time are known.
    fn finish(self) -> Option<SubtitleCue> {
        match self {
            Block::Empty => None,
            Block::Indexed { index } => {
                warn!("Dropping subtitle {} as it has no time line", index);
                None
            }
            Block::Timed {
                index,
                start_time_ms,
                end_time_ms,
                lines,
            } => Some(SubtitleCue::new(index, start_time_ms, end_time_ms, lines)),
        }
    }
}

/// Parser for SubRip subtitle files
#[derive(Debug, Clone, Copy, Default)]
pub struct SrtParser;

impl SrtParser {
    /// Parse the subtitle file at `path`, decoded with `encoding`.
    pub fn parse<P: AsRef<Path>>(
        path: P,
        encoding: &'static Encoding,
    ) -> Result<Vec<SubtitleCue>, SubtitleParseError> {
        let path = path.as_ref();
        let lines = line_reader::read_lines(path, encoding)?;
        let cues = Self::parse_lines(&lines)?;

        debug!("Parsed {} subtitle cues from {:?}", cues.len(), path);
        Ok(cues)
    }

    /// Parse SRT content that is already in memory.
    pub fn parse_string(content: &str) -> Result<Vec<SubtitleCue>, SubtitleParseError> {
        Self::parse_lines(line_reader::split_lines(content))
    }

    /// Parse a sequence of lines without terminators.
    pub fn parse_lines<I, S>(lines: I) -> Result<Vec<SubtitleCue>, SubtitleParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cues = Vec::new();
        let mut stage = Stage::Index;
        let mut block = Block::Empty;

        for (offset, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();

            // a blank line always ends the current block
            if line.trim().is_empty() {
                stage = Stage::Finish;
            }

            (stage, block) = Self::step(stage, block, offset + 1, line, &mut cues)?;
        }

        // the last block might not be followed by a blank line
        Self::step(Stage::Finish, block, 0, "", &mut cues)?;

        Ok(cues)
    }

    fn step(
        stage: Stage,
        block: Block,
        line_number: usize,
        line: &str,
        cues: &mut Vec<SubtitleCue>,
    ) -> Result<(Stage, Block), SubtitleParseError> {
        // outside FINISH the stage follows from the block in progress
        let stage = match stage {
            Stage::Finish => Stage::Finish,
            _ => block.stage(),
        };
        trace!("Line {} in stage {:?}", line_number, stage);

        let block = match (stage, block) {
            (Stage::Finish, block) => {
                if let Some(cue) = block.finish() {
                    cues.push(cue);
                }
                Block::Empty
            }
            (_, Block::Empty) => Block::Indexed {
                index: Self::read_index(line_number, line)?,
            },
            (_, Block::Indexed { index }) => {
                let (start_time_ms, end_time_ms) = timecode::parse_time_line(line).ok_or_else(|| {
                    SubtitleParseError::InvalidTime {
                        line: line_number,
                        content: line.to_string(),
                    }
                })?;

                Block::Timed {
                    index,
                    start_time_ms,
                    end_time_ms,
                    lines: Vec::new(),
                }
            }
            (_, Block::Timed { index, start_time_ms, end_time_ms, mut lines }) => {
                lines.push(style::parse_line_style(line));

                return Ok((
                    Stage::Text,
                    Block::Timed {
                        index,
                        start_time_ms,
                        end_time_ms,
                        lines,
                    },
                ));
            }
        };

        Ok((stage.next(), block))
    }

    fn read_index(line_number: usize, line: &str) -> Result<u64, SubtitleParseError> {
        let digits = INDEX_REGEX
            .find(line)
            .ok_or_else(|| SubtitleParseError::MissingIndex {
                line: line_number,
                content: line.to_string(),
            })?;

        digits
            .as_str()
            .parse::<u64>()
            .map_err(|source| SubtitleParseError::InvalidIndex {
                line: line_number,
                content: line.to_string(),
                source,
            })
    }
}
