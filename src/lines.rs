//! Line-at-a-time processing over any [`BufRead`].
//!
//! One line buffer is reused for the whole stream. Line terminators (`\n` or
//! `\r\n`) are stripped before the line is handed out; a final line without a
//! terminator is still delivered.

use crate::convert::FromBytes;
use crate::errors::ParseError;
use crate::parse::{FieldTuple, parse};
use std::io::{self, BufRead};
use tracing::debug;

/// Outcome of [`for_each_parsed_line`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineStats {
    /// Lines handed to the callback.
    pub parsed: usize,
    /// Lines that failed to parse and were skipped.
    pub failed: usize,
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Calls `f(line_number, line)` for every line of `reader`.
///
/// Line numbers start at 0. The callback returns `false` to stop early.
/// Returns the number of lines delivered.
///
/// ```
/// # use strkit::process_lines;
/// let mut total = 0u64;
/// let lines = process_lines(&b"1\r\n2\n3"[..], |_, line| {
///     total += strkit::read_u64(line).unwrap_or(0);
///     true
/// })
/// .unwrap();
/// assert_eq!((lines, total), (3, 6));
/// ```
pub fn process_lines<R, F>(mut reader: R, mut f: F) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(usize, &[u8]) -> bool,
{
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).inspect_err(|error| {
            debug!(line = line_no, %error, "line read failed");
        })?;
        if read == 0 {
            return Ok(line_no);
        }
        let keep_going = f(line_no, strip_terminator(&buf));
        line_no += 1;
        if !keep_going {
            return Ok(line_no);
        }
    }
}

/// Parses every line of `reader` into `T` and hands it to `f`.
///
/// Lines that fail to parse are skipped and counted in [`LineStats::failed`].
pub fn for_each_parsed_line<T, R, F>(
    reader: R,
    delimiters: &[u8],
    mut f: F,
) -> io::Result<LineStats>
where
    T: FieldTuple,
    R: BufRead,
    F: FnMut(usize, T),
{
    let mut stats = LineStats::default();
    process_lines(reader, |line_no, line| {
        match parse::<T>(line, delimiters) {
            Ok(values) => {
                stats.parsed += 1;
                f(line_no, values);
            }
            Err(error) => {
                debug!(line = line_no, %error, "skipping unparsable line");
                stats.failed += 1;
            }
        }
        true
    })?;
    Ok(stats)
}

/// Converts every line of `reader` to `T`, stopping at the first failure.
///
/// On failure the returned error holds the offending line number as the
/// field index.
pub fn read_lines_as<T: FromBytes, R: BufRead>(
    reader: R,
) -> io::Result<Result<Vec<T>, ParseError>> {
    let mut values = Vec::new();
    let mut failure = None;
    process_lines(reader, |line_no, line| match T::from_bytes(line) {
        Ok(value) => {
            values.push(value);
            true
        }
        Err(source) => {
            failure = Some(ParseError::Field {
                index: line_no,
                source,
            });
            false
        }
    })?;
    Ok(match failure {
        Some(error) => Err(error),
        None => Ok(values),
    })
}
