use serde::Serialize;

use crate::error::{Result, XvgError};
use crate::header::FirstDataLine;
use crate::text::{parse_numeric_line, strip_comment, XVG_COMMENTS};

/// Physical arrangement of the data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layout {
    /// One column per variable on every data line.
    Uniform { column_count: usize },
    /// One `x y` block per series, separated by `&` lines.
    MultiBlock,
}

impl Layout {
    /// Compare the width of the first data line against the number of
    /// resolved variables.
    pub fn detect(first: &FirstDataLine, variable_count: usize) -> Result<Self> {
        let columns = column_count(first)?;
        Ok(if columns == variable_count {
            Layout::Uniform {
                column_count: columns,
            }
        } else {
            Layout::MultiBlock
        })
    }
}

/// How dependent variables are named in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// `x y` data; the y column is named by the y axis label.
    TwoColumn,
    /// `x y0 y1 ...` data; columns are named by series legends.
    MultiColumn,
}

impl FileKind {
    pub fn detect(first: &FirstDataLine) -> Result<Self> {
        match column_count(first)? {
            found @ 0..=1 => Err(XvgError::TooFewColumns { found }),
            2 => Ok(FileKind::TwoColumn),
            _ => Ok(FileKind::MultiColumn),
        }
    }
}

fn column_count(first: &FirstDataLine) -> Result<usize> {
    let content = strip_comment(&first.text, &XVG_COMMENTS);
    Ok(parse_numeric_line(content, first.index + 1)?.len())
}
