//! Error handling for csvtex
//!
//! This module provides the fatal error type shared by the library and the
//! CLI, plus the warning and output types produced by the renderer.

use std::fmt;

/// Fatal error type
///
/// Every variant aborts the run; non-fatal issues are carried separately as
/// [`RenderWarning`]s inside [`RenderOutput`].
#[derive(Debug, Clone)]
pub enum CsvTexError {
    /// Invalid or conflicting configuration
    InvalidConfig { message: String },
    /// IO error (file open/read/write)
    Io { message: String },
    /// CSV reader failure
    Csv { message: String },
}

impl fmt::Display for CsvTexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvTexError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            CsvTexError::Io { message } => write!(f, "IO error: {}", message),
            CsvTexError::Csv { message } => write!(f, "CSV error: {}", message),
        }
    }
}

impl std::error::Error for CsvTexError {}

impl From<std::io::Error> for CsvTexError {
    fn from(err: std::io::Error) -> Self {
        CsvTexError::Io {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for CsvTexError {
    fn from(err: csv::Error) -> Self {
        CsvTexError::Csv {
            message: err.to_string(),
        }
    }
}

// Convenience constructors
impl CsvTexError {
    pub fn config(message: impl Into<String>) -> Self {
        CsvTexError::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        CsvTexError::Io {
            message: message.into(),
        }
    }
}

/// Result type for csvtex operations
pub type CsvTexResult<T> = Result<T, CsvTexError>;

/// Non-fatal issue reported during rendering
///
/// Warnings never abort a run; the CLI prints them to stderr and continues.
#[derive(Debug, Clone)]
pub struct RenderWarning {
    pub message: String,
}

impl RenderWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WARNING: {}", self.message)
    }
}

/// Renderer output with warnings and diagnostic context
#[derive(Debug, Clone, Default)]
pub struct RenderOutput {
    /// The rendered LaTeX tabular environment
    pub content: String,
    /// Any warnings generated while resolving the column selection
    pub warnings: Vec<RenderWarning>,
    /// The resolved column indices, in output order
    pub selected_columns: Vec<usize>,
    /// The header titles (leading whitespace stripped); empty when the
    /// first row is treated as data
    pub headers: Vec<String>,
}

impl RenderOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
