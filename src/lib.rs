/*!
 * # subcue - SubRip subtitle cue parser
 *
 * A Rust library for reading SubRip (`.srt`) subtitle files into timed,
 * styled cues for a subtitle overlay to render.
 *
 * ## Features
 *
 * - Line oriented parsing of index, time and text blocks
 * - Caller supplied text encoding (UTF-8, UTF-16, windows-125x, ...)
 * - Inline `<i>`, `<b>` and `<u>` styling split into styled runs
 * - Whole-or-nothing errors carrying the offending line number
 * - Writing parsed cues back to SRT
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `srt_parser`: The per block state machine
 * - `timecode`: `HH:MM:SS,mmm` conversion from and to milliseconds
 * - `style`: Inline style tokenizer
 * - `line_reader`: Encoding resolution and line splitting
 * - `cue`: The cue, line and styled run model
 * - `subtitle_processor`: Parsed files and writing them back
 * - `app_config`, `app_controller`, `file_utils`: Command line tool support
 * - `errors`: Custom error types for parsing
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cue;
pub mod errors;
pub mod file_utils;
pub mod line_reader;
pub mod srt_parser;
pub mod style;
pub mod subtitle_processor;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::Config;
pub use cue::{StyledTextRun, SubtitleCue, SubtitleLine, TextStyle};
pub use errors::SubtitleParseError;
pub use srt_parser::SrtParser;
pub use subtitle_processor::SubtitleCollection;
