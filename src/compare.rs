//! Lockstep line comparison.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use thiserror::Error;
use tracing::debug;

use crate::error::CompareError;

/// Outcome of a completed comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Identical,
    /// The first pair of lines that differ. `at_line` is 1-based and both
    /// contents have their line terminator removed.
    Differ {
        at_line: usize,
        left: String,
        right: String,
    },
    /// Every shared line matched but one input has more lines.
    LengthMismatch,
}

impl Comparison {
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A read failure from one of the two sources passed to [`compare_readers`].
#[derive(Debug, Error)]
#[error("{side:?} input, line {line}: {source}")]
pub struct ReadFailure {
    pub side: Side,
    pub line: usize,
    #[source]
    pub source: io::Error,
}

/// Compares the files at `left` and `right` line by line.
///
/// Lines are compared including their terminator, so `"a\n"` and `"a"` are
/// different and so are `"a\r\n"` and `"a\n"`. Scanning stops at the first
/// difference. Both files are closed before this returns.
pub fn compare(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
) -> Result<Comparison, CompareError> {
    let (left, right) = (left.as_ref(), right.as_ref());
    let left_file = open(left)?;
    let right_file = open(right)?;

    let res = compare_readers(BufReader::new(left_file), BufReader::new(right_file)).map_err(
        |e| CompareError::Read {
            path: match e.side {
                Side::Left => left.to_path_buf(),
                Side::Right => right.to_path_buf(),
            },
            line: e.line,
            source: e.source,
        },
    )?;
    debug!(left = %left.display(), right = %right.display(), result = ?res, "line comparison done");
    Ok(res)
}

/// Same as [`compare`], over two arbitrary buffered sources. Input must be
/// UTF-8; anything else fails with [`io::ErrorKind::InvalidData`].
pub fn compare_readers(
    mut left: impl BufRead,
    mut right: impl BufRead,
) -> Result<Comparison, ReadFailure> {
    let mut left_line = String::new();
    let mut right_line = String::new();
    let mut line = 0usize;

    loop {
        line += 1;
        left_line.clear();
        right_line.clear();

        let left_len = left.read_line(&mut left_line).map_err(|source| ReadFailure {
            side: Side::Left,
            line,
            source,
        })?;
        let right_len = right.read_line(&mut right_line).map_err(|source| ReadFailure {
            side: Side::Right,
            line,
            source,
        })?;

        match (left_len, right_len) {
            (0, 0) => return Ok(Comparison::Identical),
            (0, _) | (_, 0) => return Ok(Comparison::LengthMismatch),
            _ if left_line != right_line => {
                return Ok(Comparison::Differ {
                    at_line: line,
                    left: strip_terminator(&left_line).to_string(),
                    right: strip_terminator(&right_line).to_string(),
                });
            }
            _ => {}
        }
    }
}

fn open(path: &Path) -> Result<File, CompareError> {
    File::open(path).map_err(|source| CompareError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Removes a trailing `\n` or `\r\n`. A lone `\r` is content.
fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn cmp(a: &str, b: &str) -> Comparison {
        compare_readers(Cursor::new(a), Cursor::new(b)).unwrap()
    }

    fn differ(at_line: usize, left: &str, right: &str) -> Comparison {
        Comparison::Differ {
            at_line,
            left: left.into(),
            right: right.into(),
        }
    }

    #[test]
    fn identical_inputs() {
        assert_eq!(cmp("a\nb\nc\n", "a\nb\nc\n"), Comparison::Identical);
        assert_eq!(cmp("", ""), Comparison::Identical);
        assert_eq!(cmp("no newline", "no newline"), Comparison::Identical);
    }

    #[test]
    fn reports_first_differing_line() {
        assert_eq!(cmp("a\nb\nc\n", "a\nX\nc\n"), differ(2, "b", "X"));
        assert_eq!(cmp("a\nb\nc\n", "a\nX\nY\n"), differ(2, "b", "X"));
        assert_eq!(cmp("x\n", "y\n"), differ(1, "x", "y"));
    }

    #[test]
    fn extra_lines_are_a_length_mismatch() {
        assert_eq!(cmp("a\nb\n", "a\nb\nc\n"), Comparison::LengthMismatch);
        assert_eq!(cmp("a\nb\nc\n", "a\nb\n"), Comparison::LengthMismatch);
        assert_eq!(cmp("", "a\n"), Comparison::LengthMismatch);
    }

    #[test]
    fn terminators_are_significant() {
        assert_eq!(cmp("a\n", "a"), differ(1, "a", "a"));
        assert_eq!(cmp("a\r\n", "a\n"), differ(1, "a", "a"));
        // Without a following newline a carriage return is shown as-is.
        assert_eq!(cmp("a\r", "a"), differ(1, "a\r", "a"));
        // A blank trailing line is still a line.
        assert_eq!(cmp("a\n", "a\n\n"), Comparison::LengthMismatch);
    }

    #[test]
    fn keeps_inner_whitespace_in_report() {
        assert_eq!(cmp("  a \t\n", "  b \t\n"), differ(1, "  a \t", "  b \t"));
    }

    #[test]
    fn invalid_utf8_is_a_read_failure() {
        let err = compare_readers(Cursor::new(b"ok\n\xff\xfe\n".to_vec()), Cursor::new("ok\nok\n"))
            .unwrap_err();
        assert_eq!(err.side, Side::Left);
        assert_eq!(err.line, 2);
        assert_eq!(err.source.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn strips_only_the_terminator() {
        assert_eq!(strip_terminator("a\r\n"), "a");
        assert_eq!(strip_terminator("a\n"), "a");
        assert_eq!(strip_terminator("a\r"), "a\r");
        assert_eq!(strip_terminator("a\r\r\n"), "a\r");
        assert_eq!(strip_terminator("a\n\n"), "a\n");
        assert_eq!(strip_terminator(" a "), " a ");
    }
}
