//! # csvtex
//!
//! Create LaTeX `tabular` environments from CSV data.
//!
//! ## Features
//!
//! - **Column reordering**: select output columns by index or header name,
//!   duplicates allowed
//! - **Escaping control**: headers and cells are LaTeX-escaped by default,
//!   either can be passed through verbatim
//! - **Ragged input**: rows of differing widths render with empty cells,
//!   never an error
//! - **Document wrapping**: optional compilable document with preamble and
//!   user pre/post text
//! - **Encodings**: input and output encodings selectable by label
//!
//! ## Usage Examples
//!
//! ### Rendering a CSV string
//!
//! ```rust
//! use csvtex::{csv_to_tabular, CsvFormat, RenderOptions};
//!
//! let output = csv_to_tabular(
//!     "Name,Age\nAnn,30\n",
//!     CsvFormat::default(),
//!     &RenderOptions::default(),
//! )
//! .unwrap();
//! assert!(output.content.starts_with("\\begin{tabular}{cc}"));
//! assert!(output.content.ends_with("\\end{tabular}\n"));
//! ```
//!
//! ### Reordering columns by header name
//!
//! ```rust
//! use csvtex::{csv_to_tabular, ColumnSelection, CsvFormat, RenderOptions};
//!
//! let options = RenderOptions {
//!     columns: ColumnSelection::parse_names("Age,Name"),
//!     ..Default::default()
//! };
//! let output = csv_to_tabular("Name,Age\nAnn,30\n", CsvFormat::default(), &options).unwrap();
//! assert_eq!(output.selected_columns, vec![1, 0]);
//! ```

/// Core rendering modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export core types and functions
pub use crate::core::columns::{resolve_columns, ColumnSelection};
pub use crate::core::document::{compose, DocumentOptions};
pub use crate::core::escape::escape_latex;
pub use crate::core::render::{render, RenderOptions};

// Re-export utilities
pub use crate::utils::encoding::EncodingPair;
pub use crate::utils::error::{CsvTexError, CsvTexResult, RenderOutput, RenderWarning};
pub use crate::utils::files::{read_rows, CsvFormat, InputSource, OutputTarget};

/// Render already-parsed rows into a LaTeX `tabular` environment
///
/// # Arguments
/// * `rows` - table rows, ragged widths tolerated
/// * `options` - rendering configuration
///
/// # Returns
/// The rendered environment plus any column-resolution warnings
pub fn rows_to_tabular(
    rows: &[Vec<String>],
    options: &RenderOptions,
) -> CsvTexResult<RenderOutput> {
    render(rows, options)
}

/// Parse CSV text and render it into a LaTeX `tabular` environment
pub fn csv_to_tabular(
    text: &str,
    format: CsvFormat,
    options: &RenderOptions,
) -> CsvTexResult<RenderOutput> {
    let rows = read_rows(text, format)?;
    render(&rows, options)
}

/// Parse CSV text and render a complete output stream, including document
/// wrapping and pre/post text
pub fn csv_to_document(
    text: &str,
    format: CsvFormat,
    options: &RenderOptions,
    document: &DocumentOptions,
) -> CsvTexResult<RenderOutput> {
    let mut output = csv_to_tabular(text, format, options)?;
    output.content = compose(&output.content, document);
    Ok(output)
}
