//! Text encoding selection for input and output streams
//!
//! Encodings are chosen by WHATWG label (`utf-8`, `latin1`, `shift_jis`,
//! ...) via `encoding_rs`. The CLI accepts an `in[,out]` pair; a single
//! label selects the same encoding for both directions.

use encoding_rs::Encoding;

use super::error::{CsvTexError, CsvTexResult};

/// Resolved input/output encoding pair.
#[derive(Debug, Clone, Copy)]
pub struct EncodingPair {
    pub input: &'static Encoding,
    pub output: &'static Encoding,
}

impl Default for EncodingPair {
    fn default() -> Self {
        Self {
            input: encoding_rs::UTF_8,
            output: encoding_rs::UTF_8,
        }
    }
}

impl EncodingPair {
    /// Parse an `<in>[,<out>]` encoding specification.
    pub fn parse(spec: &str) -> CsvTexResult<Self> {
        let mut labels = spec.splitn(2, ',');
        let input = resolve(labels.next().unwrap_or("").trim())?;
        let output = match labels.next() {
            Some(label) => resolve(label.trim())?,
            None => input,
        };
        Ok(Self { input, output })
    }
}

fn resolve(label: &str) -> CsvTexResult<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| CsvTexError::config(format!("unknown encoding '{}'", label)))
}

/// Decode raw input bytes. Malformed sequences are replaced rather than
/// rejected.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> String {
    encoding.decode(bytes).0.into_owned()
}

/// Encode output text; characters unmappable in the target encoding become
/// numeric character references.
pub fn encode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    encoding.encode(text).0.into_owned()
}
