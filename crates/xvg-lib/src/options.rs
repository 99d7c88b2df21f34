use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XvgError};

/// What to do with a requested variable name the file does not define.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownVariablePolicy {
    /// Leave the name out of the result.
    #[default]
    Ignore,
    /// Fail with `UnknownVariable`.
    Error,
}

/// Options for reading an xvg file.
///
/// Can be loaded from TOML:
///
/// ```toml
/// variables = ["Coil", "Time (ps)"]
/// unpack = true
/// unknown_variables = "error"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Variables to load, in output order. `None` loads every column.
    pub variables: Option<Vec<String>>,
    /// Transpose the result so each variable is a row.
    pub unpack: bool,
    pub unknown_variables: UnknownVariablePolicy,
    /// Stop the header scan at the first data line.
    pub header_on_top: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            variables: None,
            unpack: false,
            unknown_variables: UnknownVariablePolicy::Ignore,
            header_on_top: true,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_unpack(mut self, unpack: bool) -> Self {
        self.unpack = unpack;
        self
    }

    /// Fail on unknown variable names instead of dropping them.
    pub fn strict(mut self) -> Self {
        self.unknown_variables = UnknownVariablePolicy::Error;
        self
    }

    pub fn with_header_on_top(mut self, header_on_top: bool) -> Self {
        self.header_on_top = header_on_top;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| XvgError::Config(e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = crate::text::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
