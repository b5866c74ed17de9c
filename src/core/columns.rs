//! Column selection and header-name resolution

use fxhash::FxHashMap;

use crate::utils::error::{CsvTexError, CsvTexResult, RenderWarning};

/// Which source columns appear in the output, and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnSelection {
    /// Every column of the first row, in source order.
    #[default]
    All,
    /// Explicit 0-based indices. Duplicates and out-of-range indices are
    /// legal; cells beyond a row's width render empty.
    Indices(Vec<usize>),
    /// Header names, resolved against the whitespace-stripped header row.
    /// Unknown names produce a warning and are dropped from the selection.
    Names(Vec<String>),
}

impl ColumnSelection {
    /// Parse a comma-separated list of column indices, e.g. `1,0,0,2`.
    pub fn parse_indices(spec: &str) -> CsvTexResult<Self> {
        let mut indices = Vec::new();
        for part in spec.split(',') {
            let index: usize = part.trim().parse().map_err(|_| {
                CsvTexError::config(
                    "column order must be a comma separated list of nonnegative integers",
                )
            })?;
            indices.push(index);
        }
        Ok(ColumnSelection::Indices(indices))
    }

    /// Parse a comma-separated list of header names, e.g. `name,title,name`.
    /// Names are taken verbatim, including any embedded spaces.
    pub fn parse_names(spec: &str) -> Self {
        ColumnSelection::Names(spec.split(',').map(str::to_string).collect())
    }
}

/// Build the name -> first-occurrence index map from the header row.
fn header_index_map(headers: &[String]) -> FxHashMap<&str, usize> {
    let mut map = FxHashMap::default();
    for (index, title) in headers.iter().enumerate() {
        map.entry(title.as_str()).or_insert(index);
    }
    map
}

/// Resolve a selection into concrete column indices.
///
/// `headers` is the whitespace-stripped header row, or `None` when the
/// first row is data. Name-based selection without a header row is a
/// configuration error; a name missing from the header row only shrinks
/// the selection and yields a warning.
pub fn resolve_columns(
    selection: &ColumnSelection,
    headers: Option<&[String]>,
    first_row_width: usize,
) -> CsvTexResult<(Vec<usize>, Vec<RenderWarning>)> {
    match selection {
        ColumnSelection::All => Ok(((0..first_row_width).collect(), Vec::new())),
        ColumnSelection::Indices(indices) => Ok((indices.clone(), Vec::new())),
        ColumnSelection::Names(names) => {
            let headers = headers.ok_or_else(|| {
                CsvTexError::config("column order by header name requires a header row")
            })?;
            let index_map = header_index_map(headers);
            let mut selected = Vec::with_capacity(names.len());
            let mut warnings = Vec::new();
            for name in names {
                match index_map.get(name.as_str()) {
                    Some(&index) => selected.push(index),
                    None => warnings.push(RenderWarning::new(format!(
                        "column with header '{}' not found!",
                        name
                    ))),
                }
            }
            Ok((selected, warnings))
        }
    }
}
