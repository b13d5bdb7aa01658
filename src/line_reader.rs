/*!
 * Reading subtitle files as lines under a declared encoding.
 *
 * Subtitle files come in all kinds of legacy encodings, so the encoding is
 * always supplied by the caller. Decoding is strict: bytes that are invalid
 * for the declared encoding fail the read instead of being replaced.
 */

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use encoding_rs::{DecoderResult, Encoding, UTF_8};
use log::{debug, warn};

use crate::errors::SubtitleParseError;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Resolve an encoding label such as `"utf-8"` or `"windows-1252"`.
///
/// Empty labels resolve to UTF-8. Unknown labels are logged and also fall
/// back to UTF-8.
pub fn resolve_encoding(label: &str) -> &'static Encoding {
    if label.trim().is_empty() {
        return UTF_8;
    }

    lookup_encoding(label).unwrap_or_else(|| {
        warn!("Unknown subtitle encoding \"{}\", falling back to {}", label, UTF_8.name());
        UTF_8
    })
}

/// Strict label lookup, `None` for labels that aren't known.
pub fn lookup_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Read the file at `path` and split it into lines.
pub fn read_lines<P: AsRef<Path>>(
    path: P,
    encoding: &'static Encoding,
) -> Result<Vec<String>, SubtitleParseError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SubtitleParseError::FileNotFound(path.to_path_buf()),
        _ => SubtitleParseError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let content = decode_strict(&bytes, encoding).map_err(|offset| SubtitleParseError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
        offset,
    })?;
    debug!("Read {} bytes from {:?} as {}", bytes.len(), path, encoding.name());

    Ok(split_lines(&content).into_iter().map(str::to_string).collect())
}

/// Decode `bytes` without replacement, returning the byte offset of the
/// first malformed sequence on failure.
pub fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Result<String, usize> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut content = String::new();
    let mut read = 0;

    loop {
        let remaining = bytes.len() - read;
        content.reserve(
            decoder
                .max_utf8_buffer_length_without_replacement(remaining)
                .unwrap_or(remaining),
        );

        let (result, consumed) =
            decoder.decode_to_string_without_replacement(&bytes[read..], &mut content, true);
        read += consumed;

        match result {
            DecoderResult::InputEmpty => return Ok(content),
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(malformed, after) => {
                return Err(read - after as usize - malformed as usize);
            }
        }
    }
}

/// Split text on `\r\n`, `\n` or `\r`, dropping the terminators.
///
/// A leading byte order mark is removed and a trailing terminator doesn't
/// produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}
