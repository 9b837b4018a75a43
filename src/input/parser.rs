//! Reference string and frame size parsing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Error, PageId, Result};

/// Parse a reference string such as `"7 0 1 2"` or `"7, 0, 1, 2"`.
///
/// Tokens are separated by whitespace, commas, or both. Empty text is an
/// empty (but valid) sequence.
///
/// # Errors
/// - `Error::InvalidPage` for the first token that is not a non-negative
///   integer fitting in a `u32`
///
/// # Example
/// ```
/// use pagesim::{input::parse_sequence, pages};
///
/// assert_eq!(parse_sequence("7 0, 1").unwrap(), pages(&[7, 0, 1]));
/// assert!(parse_sequence("7 x").is_err());
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<PageId>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<u32>().map(PageId::new).map_err(|_| Error::InvalidPage {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

/// Parse a frame count.
///
/// # Errors
/// - `Error::InvalidFrameSizeInput` if the text is not an integer
/// - `Error::InvalidFrameSize` if the integer is 0 or negative
pub fn parse_frame_size(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidFrameSizeInput(trimmed.to_string()))?;

    if value <= 0 {
        return Err(Error::InvalidFrameSize(value));
    }

    usize::try_from(value).map_err(|_| Error::InvalidFrameSize(value))
}

/// Pick the reference string from exactly one of two sources.
///
/// `pages` is inline text as for [`parse_sequence`]; `input` is a file as
/// for [`load_sequence`].
///
/// # Errors
/// - `Error::ConflictingInput` if both are given
/// - `Error::MissingInput` if neither is given
/// - whatever the chosen source fails with
pub fn select_sequence(pages: Option<&str>, input: Option<&Path>) -> Result<Vec<PageId>> {
    match (pages, input) {
        (Some(_), Some(_)) => Err(Error::ConflictingInput),
        (Some(text), None) => parse_sequence(text),
        (None, Some(path)) => load_sequence(path),
        (None, None) => Err(Error::MissingInput),
    }
}

/// Read a reference string from a file.
///
/// Same format as [`parse_sequence`], across any number of lines. Lines
/// whose first non-blank character is `#` are skipped.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::InvalidPage` as for [`parse_sequence`]; positions count from
///   the start of the file
pub fn load_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let body: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect();

    let sequence = parse_sequence(&body.join("\n"))?;
    debug!(path = %path.display(), references = sequence.len(), "loaded reference string");
    Ok(sequence)
}
