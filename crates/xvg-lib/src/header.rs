use std::path::Path;

use serde::Serialize;

use crate::error::{Result, XvgError};
use crate::line::LineKind;

/// First numeric line of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirstDataLine {
    /// 0-based physical line index.
    pub index: usize,
    pub text: String,
}

/// Comment and directive lines collected from the top of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    /// `#` lines in file order.
    pub comments: Vec<String>,
    /// `@` lines in file order, marker included.
    pub directives: Vec<String>,
    pub first_data: Option<FirstDataLine>,
}

impl Header {
    /// Scan the lines of `text`.
    ///
    /// With `header_on_top` the scan stops at the first data line; otherwise
    /// it continues to end-of-file, collecting every comment and directive.
    /// A `&` line anywhere in the scanned region is rejected.
    pub fn scan(text: &str, header_on_top: bool) -> Result<Self> {
        let mut header = Header::default();
        for (index, line) in text.lines().enumerate() {
            match LineKind::classify(line) {
                LineKind::Comment => header.comments.push(line.to_string()),
                LineKind::Directive => header.directives.push(line.to_string()),
                LineKind::SeriesBoundary => {
                    return Err(XvgError::UnsupportedFormat { line: index + 1 });
                }
                LineKind::Blank => {}
                LineKind::Data => {
                    if header.first_data.is_none() {
                        header.first_data = Some(FirstDataLine {
                            index,
                            text: line.to_string(),
                        });
                    }
                    if header_on_top {
                        break;
                    }
                }
            }
        }
        Ok(header)
    }

    /// Read `path` and scan its header.
    pub fn read(path: &Path, header_on_top: bool) -> Result<Self> {
        let text = crate::text::read_to_string(path)?;
        Header::scan(&text, header_on_top)
    }

    /// The first data line, or `NoDataFound` for a header-only file.
    pub fn require_first_data(&self, path: &Path) -> Result<&FirstDataLine> {
        self.first_data.as_ref().ok_or_else(|| XvgError::NoDataFound {
            path: path.to_path_buf(),
        })
    }
}
