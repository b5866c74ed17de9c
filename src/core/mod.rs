//! Core rendering modules
//!
//! This module contains the table rendering engine:
//! - `escape`: LaTeX special-character escaping
//! - `columns`: column selection and header-name resolution
//! - `render`: the tabular renderer
//! - `document`: full-document wrapping and pre/post text composition

pub mod columns;
pub mod document;
pub mod escape;
pub mod render;

// Re-export main types and functions
pub use columns::{resolve_columns, ColumnSelection};
pub use document::{compose, DocumentOptions};
pub use escape::escape_latex;
pub use render::{render, RenderOptions};
