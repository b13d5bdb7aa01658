/*!
 * Inline style tokenizer for SRT text lines.
 *
 * SRT styling is expressed with single-letter pseudo tags such as
 * `<i>...</i>`. Each match of the run pattern becomes one
 * [`StyledTextRun`]; the tag letter decides its style. Anything between
 * matches stays in the line as plain text.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue::{StyledTextRun, SubtitleLine, TextStyle};

// @const: Optional open tag, text without '<', optional close tag
static RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(<([a-z])>)?([^<]+)(</([a-z])>)?").unwrap()
});

/// Split a text line into styled runs.
///
/// The style letter is read from the opening tag, or from the closing tag
/// when the run has no opening tag. Letters other than `i`, `b` and `u`
/// produce plain runs. Text the run pattern can't take, such as a `<` that
/// doesn't open a tag, is kept as plain text and merged into the
/// neighbouring plain runs.
pub fn parse_line_style(line: &str) -> SubtitleLine {
    let mut runs = Vec::new();
    let mut last_end = 0;
    let mut after_gap = false;

    for caps in RUN_REGEX.captures_iter(line) {
        let (Some(whole), Some(text)) = (caps.get(0), caps.get(3)) else {
            continue;
        };

        if whole.start() > last_end {
            push_plain(&mut runs, &line[last_end..whole.start()], true);
            after_gap = true;
        }

        let style = caps
            .get(2)
            .or_else(|| caps.get(5))
            .map(|tag| TextStyle::from_tag(tag.as_str()))
            .unwrap_or_default();

        if style == TextStyle::Plain {
            push_plain(&mut runs, text.as_str(), after_gap);
        } else {
            runs.push(StyledTextRun::new(text.as_str(), style));
        }

        after_gap = false;
        last_end = whole.end();
    }

    if last_end < line.len() {
        push_plain(&mut runs, &line[last_end..], true);
    }

    SubtitleLine::new(runs)
}

// Append plain text, joining it with a preceding plain run when either side is unmatched text
fn push_plain(runs: &mut Vec<StyledTextRun>, text: &str, merge: bool) {
    match runs.last() {
        Some(last) if merge && last.style() == TextStyle::Plain => {
            let joined = format!("{}{}", last.text(), text);
            runs.pop();
            runs.push(StyledTextRun::plain(joined));
        }
        _ => runs.push(StyledTextRun::plain(text)),
    }
}

/// Render a line back to SRT text, wrapping styled runs in their tags.
pub fn to_line_string(line: &SubtitleLine) -> String {
    line.runs()
        .iter()
        .map(|run| match run.style().tag() {
            Some(tag) => format!("<{tag}>{}</{tag}>", run.text()),
            None => run.text().to_string(),
        })
        .collect()
}
