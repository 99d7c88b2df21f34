//! Multi-block files: one `x y` block per series, each opened by a
//! `@target` directive and closed by an `&` line.
//!
//! ```text
//! @target G0.S0        Idle ──@target──▶ Collecting(series, skip)
//! 0 5                                       │ data lines
//! 1 6                  Idle ◀──── & ────────┘
//! &
//! ```
//!
//! Every series shares the same x samples, so the output matrix takes its
//! independent column from the first captured block.

use std::path::Path;

use log::trace;

use crate::directive::Directive;
use crate::error::{Result, XvgError};
use crate::line::LineKind;
use crate::matrix::DataMatrix;
use crate::text::{parse_numeric_line, read_to_string, strip_comment, XVG_COMMENTS};

/// Samples of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBlock {
    /// `M` from `@target G?.SM`.
    pub index: i64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

enum State {
    Idle,
    Collecting {
        series: i64,
        skip: bool,
        x: Vec<f64>,
        y: Vec<f64>,
    },
}

impl State {
    /// Close the open series, keeping it unless it was skipped.
    fn finish(self, out: &mut Vec<SeriesBlock>) {
        if let State::Collecting {
            series,
            skip: false,
            x,
            y,
        } = self
        {
            trace!("series {series}: {} samples", x.len());
            out.push(SeriesBlock {
                index: series,
                x,
                y,
            });
        }
    }
}

/// Collect series blocks from `text`.
///
/// With `requested` physical column indices, only series whose dependent
/// column (`M + 1`) is requested are kept. If column 0 is requested the
/// first series is kept as well, as the source of the shared x samples.
pub fn scan_blocks(text: &str, requested: Option<&[usize]>) -> Result<Vec<SeriesBlock>> {
    let wants = |column: i64| match requested {
        None => true,
        Some(indices) => indices.iter().any(|&i| i64::try_from(i) == Ok(column)),
    };

    let mut blocks = Vec::new();
    let mut state = State::Idle;

    for (index, line) in text.lines().enumerate() {
        match LineKind::classify(line) {
            LineKind::Comment | LineKind::Blank => {}
            LineKind::Directive => {
                if let Some(Directive::Target { series, .. }) = Directive::parse(line) {
                    std::mem::replace(&mut state, State::Idle).finish(&mut blocks);
                    let column = series.checked_add(1).ok_or_else(|| {
                        XvgError::malformed(format!(
                            "line {}: series index {series} is too large",
                            index + 1
                        ))
                    })?;
                    let keep = wants(column) || (wants(0) && blocks.is_empty());
                    state = State::Collecting {
                        series,
                        skip: !keep,
                        x: Vec::new(),
                        y: Vec::new(),
                    };
                }
            }
            LineKind::SeriesBoundary => {
                std::mem::replace(&mut state, State::Idle).finish(&mut blocks);
            }
            LineKind::Data => {
                if let State::Collecting {
                    series,
                    skip: false,
                    x,
                    y,
                } = &mut state
                {
                    let content = strip_comment(line, &XVG_COMMENTS);
                    let values = parse_numeric_line(content, index + 1)?;
                    let &[xv, yv] = values.as_slice() else {
                        return Err(XvgError::malformed(format!(
                            "line {}: expected 2 values in series {series}, found {}",
                            index + 1,
                            values.len()
                        )));
                    };
                    x.push(xv);
                    y.push(yv);
                }
            }
        }
    }
    state.finish(&mut blocks);

    Ok(blocks)
}

/// Arrange captured blocks into a matrix.
///
/// Without `requested`, column 0 holds the x samples of the first block
/// followed by the y samples of every block in capture order.
/// `variable_count` is the number of variables the file declares and is
/// reported when a requested series has no block.
pub fn assemble(
    blocks: &[SeriesBlock],
    requested: Option<&[usize]>,
    variable_count: usize,
) -> Result<DataMatrix> {
    let first = || {
        blocks
            .first()
            .ok_or_else(|| XvgError::malformed("no series blocks found"))
    };

    let columns: Vec<&[f64]> = match requested {
        Some(indices) => indices
            .iter()
            .map(|&i| {
                if i == 0 {
                    return first().map(|b| b.x.as_slice());
                }
                blocks
                    .iter()
                    .find(|b| i64::try_from(i - 1) == Ok(b.index))
                    .map(|b| b.y.as_slice())
                    .ok_or(XvgError::IndexOutOfRange {
                        index: i,
                        columns: variable_count,
                    })
            })
            .collect::<Result<_>>()?,
        None => std::iter::once(first()?.x.as_slice())
            .chain(blocks.iter().map(|b| b.y.as_slice()))
            .collect(),
    };

    DataMatrix::from_columns(&columns).map_err(|e| {
        XvgError::malformed(format!(
            "column {} has {} samples, expected {}",
            e.position, e.found, e.expected
        ))
    })
}

/// Scan and assemble in one step.
pub fn load_blocks(
    text: &str,
    requested: Option<&[usize]>,
    variable_count: usize,
) -> Result<DataMatrix> {
    let blocks = scan_blocks(text, requested)?;
    assemble(&blocks, requested, variable_count)
}

/// Read `path` in a fresh pass and load its blocks.
pub fn read_blocks(
    path: &Path,
    requested: Option<&[usize]>,
    variable_count: usize,
) -> Result<DataMatrix> {
    let text = read_to_string(path)?;
    load_blocks(&text, requested, variable_count)
}
