/*!
 * SRT time code parsing and formatting.
 *
 * Time codes have the form `H{1,2}:MM:SS,mmm`. They are converted to
 * milliseconds from the start of the file with a plain linear sum, so hours
 * never wrap around at a day boundary.
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between the start and end time code of a cue
pub const TIME_SEPARATOR: &str = "-->";

// @const: Full time line, surrounding whitespace tolerated
static TIME_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,2}:\d{2}:\d{2},\d{3}) --> (\d{1,2}:\d{2}:\d{2},\d{3})\s*$").unwrap()
});

// @const: Single time code split into its components
static TIME_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

/// Parse a single `H{1,2}:MM:SS,mmm` time code to milliseconds.
///
/// Returns `None` when the value is malformed or when the minutes or
/// seconds are out of range.
pub fn parse_time_code(value: &str) -> Option<u64> {
    let caps = TIME_CODE_REGEX.captures(value)?;
    let component = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<u64>().ok());

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;
    let millis = component(4)?;

    if minutes >= 60 || seconds >= 60 {
        trace!("Time code {} has out of range components", value);
        return None;
    }

    Some((((hours * 60 + minutes) * 60 + seconds) * 1000) + millis)
}

/// Parse a `start --> end` time line into start and end milliseconds.
pub fn parse_time_line(line: &str) -> Option<(u64, u64)> {
    let caps = TIME_LINE_REGEX.captures(line)?;
    let start = parse_time_code(caps.get(1)?.as_str())?;
    let end = parse_time_code(caps.get(2)?.as_str())?;

    Some((start, end))
}

/// Format milliseconds as an SRT time code (`HH:MM:SS,mmm`).
pub fn format_time_code(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Format a full `start --> end` time line.
pub fn format_time_line(start_ms: u64, end_ms: u64) -> String {
    format!(
        "{} {} {}",
        format_time_code(start_ms),
        TIME_SEPARATOR,
        format_time_code(end_ms)
    )
}
