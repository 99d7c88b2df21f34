//! Whitespace-separated numeric text: single lines and whole tables.

use std::path::Path;

use crate::error::{Result, XvgError};
use crate::matrix::DataMatrix;

/// Characters that start a non-data region in an xvg file.
pub const XVG_COMMENTS: [char; 3] = ['#', '@', '&'];

/// Read a whole file into memory.
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| XvgError::io(path, e))
}

/// The part of `line` before the first of `comments`.
pub fn strip_comment<'a>(line: &'a str, comments: &[char]) -> &'a str {
    match line.find(comments) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse every whitespace-separated token of `line` as `f64`.
///
/// `line_number` is only used for error reporting.
pub fn parse_numeric_line(line: &str, line_number: usize) -> Result<Vec<f64>> {
    line.split_ascii_whitespace()
        .map(|tok| {
            tok.parse::<f64>().map_err(|_| XvgError::InvalidNumber {
                line: line_number,
                token: tok.to_string(),
            })
        })
        .collect()
}

/// How [`load_table`] reads a block of text.
#[derive(Debug, Clone, Copy)]
pub struct TableOptions<'a> {
    /// Everything from the first of these characters to end-of-line is dropped.
    pub comments: &'a [char],
    /// Physical lines skipped before parsing starts.
    pub skip_rows: usize,
    /// Column subset in output order; `None` keeps every column.
    pub columns: Option<&'a [usize]>,
}

impl Default for TableOptions<'_> {
    fn default() -> Self {
        Self {
            comments: &XVG_COMMENTS,
            skip_rows: 0,
            columns: None,
        }
    }
}

/// Load a rectangular numeric table from `text`.
pub fn load_table(text: &str, opts: &TableOptions<'_>) -> Result<DataMatrix> {
    let mut rows = Vec::new();
    let mut width = None;

    for (index, raw) in text.lines().enumerate().skip(opts.skip_rows) {
        let line_number = index + 1;
        let content = strip_comment(raw, opts.comments);
        if content.trim().is_empty() {
            continue;
        }
        let values = parse_numeric_line(content, line_number)?;

        match width {
            None => width = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(XvgError::RaggedRow {
                    line: line_number,
                    expected,
                    found: values.len(),
                });
            }
            Some(_) => {}
        }

        let row = match opts.columns {
            None => values,
            Some(columns) => columns
                .iter()
                .map(|&c| {
                    values.get(c).copied().ok_or(XvgError::IndexOutOfRange {
                        index: c,
                        columns: values.len(),
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        };
        rows.push(row);
    }

    DataMatrix::from_rows(rows).map_err(|e| XvgError::malformed(e.to_string()))
}

/// Read `path` and load it with [`load_table`].
pub fn read_table(path: &Path, opts: &TableOptions<'_>) -> Result<DataMatrix> {
    let text = read_to_string(path)?;
    load_table(&text, opts)
}
