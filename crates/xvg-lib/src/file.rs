use std::path::{Path, PathBuf};

use log::debug;

use crate::blocks;
use crate::error::{Result, XvgError};
use crate::header::Header;
use crate::layout::{FileKind, Layout};
use crate::matrix::DataMatrix;
use crate::options::{ReadOptions, UnknownVariablePolicy};
use crate::text::{self, TableOptions, XVG_COMMENTS};
use crate::variables::Variables;

/// An xvg file with its header parsed and data loaded on first access.
#[derive(Debug, Clone)]
pub struct XvgFile {
    path: PathBuf,
    options: ReadOptions,
    header: Header,
    variables: Variables,
    data: Option<DataMatrix>,
}

impl XvgFile {
    /// Scan the header of `path` and resolve its variable names.
    ///
    /// Data is not read until [`XvgFile::data`] is called, so a header-only
    /// file opens fine and only fails with `NoDataFound` at that point.
    pub fn open(path: impl AsRef<Path>, options: ReadOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let header = Header::read(&path, options.header_on_top)?;
        let variables = Variables::resolve(&header.directives);
        debug!(
            "{}: {} comments, {} directives, variables {:?}",
            path.display(),
            header.comments.len(),
            header.directives.len(),
            variables.names
        );
        Ok(Self {
            path,
            options,
            header,
            variables,
            data: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn title(&self) -> Option<&str> {
        self.variables.title.as_deref()
    }

    pub fn xaxis_label(&self) -> Option<&str> {
        self.variables.xaxis_label.as_deref()
    }

    pub fn yaxis_label(&self) -> Option<&str> {
        self.variables.yaxis_label.as_deref()
    }

    /// Variable names in physical column order.
    pub fn variables(&self) -> &[String] {
        &self.variables.names
    }

    pub fn layout(&self) -> Result<Layout> {
        let first = self.header.require_first_data(&self.path)?;
        Layout::detect(first, self.variables.len())
    }

    pub fn kind(&self) -> Result<FileKind> {
        FileKind::detect(self.header.require_first_data(&self.path)?)
    }

    /// Physical column indices for the requested variables, in request order.
    ///
    /// `None` when no variables were requested.
    pub fn column_indices(&self) -> Result<Option<Vec<usize>>> {
        let Some(names) = &self.options.variables else {
            return Ok(None);
        };
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            match self.variables.position(name) {
                Some(index) => indices.push(index),
                None => match self.options.unknown_variables {
                    UnknownVariablePolicy::Ignore => {
                        debug!("{}: dropping unknown variable '{name}'", self.path.display());
                    }
                    UnknownVariablePolicy::Error => {
                        return Err(XvgError::UnknownVariable { name: name.clone() });
                    }
                },
            }
        }
        Ok(Some(indices))
    }

    /// The data matrix, loaded and cached on first call.
    pub fn data(&mut self) -> Result<&DataMatrix> {
        let data = match self.data.take() {
            Some(data) => data,
            None => self.load_data()?,
        };
        Ok(&*self.data.insert(data))
    }

    /// Consume the file, returning its data matrix.
    pub fn into_data(mut self) -> Result<DataMatrix> {
        match self.data.take() {
            Some(data) => Ok(data),
            None => self.load_data(),
        }
    }

    fn load_data(&self) -> Result<DataMatrix> {
        let indices = self.column_indices()?;
        let first = self.header.require_first_data(&self.path)?;
        let layout = Layout::detect(first, self.variables.len())?;
        debug!("{}: {layout:?}, columns {indices:?}", self.path.display());

        match layout {
            Layout::Uniform { .. } => text::read_table(
                &self.path,
                &TableOptions {
                    comments: &XVG_COMMENTS,
                    skip_rows: first.index,
                    columns: indices.as_deref(),
                },
            ),
            Layout::MultiBlock => {
                blocks::read_blocks(&self.path, indices.as_deref(), self.variables.len())
            }
        }
    }
}
