//! Utility modules
//!
//! This module contains the plumbing around the renderer:
//! - Error and warning types
//! - Encoding selection and transcoding
//! - File/stdio shims and CSV input

pub mod encoding;
pub mod error;
pub mod files;

// Re-export commonly used items
pub use encoding::EncodingPair;
pub use error::{CsvTexError, CsvTexResult, RenderOutput, RenderWarning};
pub use files::{read_rows, CsvFormat, InputSource, OutputTarget};
