//! Input/output shims for the CLI
//!
//! Everything here is thin plumbing around the renderer: reading whole
//! files (or stdin) through a configurable encoding, parsing the decoded
//! text as CSV, and writing the LaTeX result to a file or stdout.

use std::fs;
use std::io::{self, Read, Write};

use encoding_rs::Encoding;

use super::encoding;
use super::error::{CsvTexError, CsvTexResult};

/// CSV dialect: single-byte delimiter and quote characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvFormat {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvFormat {
    /// Build from a 1-2 character specification `<delimiter><quotechar>`.
    /// Missing positions keep their defaults; further characters are
    /// ignored.
    pub fn from_spec(spec: &str) -> CsvTexResult<Self> {
        let mut format = Self::default();
        let mut chars = spec.chars();
        if let Some(delimiter) = chars.next() {
            format.delimiter = single_byte(delimiter)?;
        }
        if let Some(quote) = chars.next() {
            format.quote = single_byte(quote)?;
        }
        Ok(format)
    }
}

fn single_byte(ch: char) -> CsvTexResult<u8> {
    if ch.is_ascii() {
        Ok(ch as u8)
    } else {
        Err(CsvTexError::config(format!(
            "delimiter and quote characters must be single-byte, got '{}'",
            ch
        )))
    }
}

/// Parse decoded CSV text into rows.
///
/// Rows keep whatever width the input gives them; blank lines yield no
/// row at all.
pub fn read_rows(text: &str, format: CsvFormat) -> CsvTexResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .quote(format.quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Where table input comes from.
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(String),
}

impl InputSource {
    /// `-` or an absent argument selects stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_string()),
        }
    }

    /// Read and decode the whole input.
    pub fn read_to_string(&self, enc: &'static Encoding) -> CsvTexResult<String> {
        let bytes = match self {
            InputSource::Stdin => {
                let mut buffer = Vec::new();
                io::stdin()
                    .read_to_end(&mut buffer)
                    .map_err(|e| CsvTexError::io(format!("could not read stdin: {}", e)))?;
                buffer
            }
            InputSource::File(path) => fs::read(path).map_err(|e| {
                CsvTexError::io(format!("could not open input file '{}': {}", path, e))
            })?,
        };
        Ok(encoding::decode(&bytes, enc))
    }
}

/// Where the LaTeX output goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    /// `-` or an absent argument selects stdout.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => OutputTarget::Stdout,
            Some(path) => OutputTarget::File(path.to_string()),
        }
    }

    /// Encode and write the whole output.
    pub fn write_all(&self, text: &str, enc: &'static Encoding) -> CsvTexResult<()> {
        let bytes = encoding::encode(text, enc);
        match self {
            OutputTarget::Stdout => io::stdout()
                .write_all(&bytes)
                .map_err(|e| CsvTexError::io(format!("could not write to stdout: {}", e))),
            OutputTarget::File(path) => fs::write(path, &bytes).map_err(|e| {
                CsvTexError::io(format!("could not open output file '{}': {}", path, e))
            }),
        }
    }
}
