//! The tabular renderer
//!
//! Turns in-memory CSV rows into a `\begin{tabular}...\end{tabular}` block.
//! Rows may be ragged: a selected index beyond a row's width renders as an
//! empty cell with its `&` separator kept, so the emitted column count
//! always matches the declared column specification.

use std::fmt::Write;

use super::columns::{resolve_columns, ColumnSelection};
use super::escape::escape_latex;
use crate::utils::error::{CsvTexResult, RenderOutput};

/// Immutable rendering configuration.
///
/// Constructed once from parsed arguments and passed by reference into
/// [`render`]; nothing here is mutated while rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Column selection and output order.
    pub columns: ColumnSelection,
    /// Argument to the tabular environment. `None` emits one `c` per
    /// selected column.
    pub tabular_arg: Option<String>,
    /// Escape LaTeX specials in header cells.
    pub escape_headers: bool,
    /// Escape LaTeX specials in data cells.
    pub escape_cells: bool,
    /// Vertical space appended to every row terminator, e.g. `4pt`.
    pub vspace: Option<String>,
    /// Emit `\hline` after the header row.
    pub header_line: bool,
    /// Treat the first row as a header row.
    pub has_header: bool,
    /// Text appended after the header line block.
    pub header_suffix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            columns: ColumnSelection::All,
            tabular_arg: None,
            escape_headers: true,
            escape_cells: true,
            vspace: None,
            header_line: false,
            has_header: true,
            header_suffix: String::new(),
        }
    }
}

/// Render CSV rows into a LaTeX `tabular` environment.
///
/// An empty table, or a selection that resolves to zero columns, renders
/// as the empty string. Empty data rows are skipped entirely.
pub fn render(rows: &[Vec<String>], options: &RenderOptions) -> CsvTexResult<RenderOutput> {
    if rows.is_empty() {
        return Ok(RenderOutput::empty());
    }

    let headers: Vec<String> = if options.has_header {
        rows[0].iter().map(|t| t.trim_start().to_string()).collect()
    } else {
        Vec::new()
    };

    let header_row = options.has_header.then(|| headers.as_slice());
    let (selected, warnings) = resolve_columns(&options.columns, header_row, rows[0].len())?;

    if selected.is_empty() {
        return Ok(RenderOutput {
            content: String::new(),
            warnings,
            selected_columns: selected,
            headers,
        });
    }

    let terminator = match &options.vspace {
        Some(unit) => format!("\\\\[{}]", unit),
        None => "\\\\".to_string(),
    };

    let mut output = String::with_capacity(rows.len() * 32);

    output.push_str("\\begin{tabular}{");
    match &options.tabular_arg {
        Some(arg) => output.push_str(arg),
        None => {
            for _ in 0..selected.len() {
                output.push('c');
            }
        }
    }
    output.push_str("}\n");

    if options.has_header {
        push_cells(&mut output, &headers, &selected, options.escape_headers);
        output.push_str(&terminator);
        if options.header_line {
            output.push_str("\n\t\\hline");
            // The rule adds its own vertical gap; compensate with a blank
            // row carrying the negated unit.
            if let Some(unit) = &options.vspace {
                for _ in 1..selected.len() {
                    output.push_str("& ");
                }
                let _ = write!(output, "\\\\[-{}]", unit);
            }
        }
        output.push_str(&options.header_suffix);
        output.push_str("\n\n");
    }

    let data_rows = if options.has_header {
        &rows[1..]
    } else {
        rows
    };
    for row in data_rows {
        if row.is_empty() {
            continue;
        }
        push_cells(&mut output, row, &selected, options.escape_cells);
        output.push_str(&terminator);
        output.push('\n');
    }

    output.push_str("\\end{tabular}\n");

    Ok(RenderOutput {
        content: output,
        warnings,
        selected_columns: selected,
        headers,
    })
}

/// Emit one `&`-separated cell line for the selected indices.
///
/// A selected index beyond the row's width keeps its column position but
/// contributes no content (and no trailing tab).
fn push_cells(output: &mut String, row: &[String], selected: &[usize], escape: bool) {
    output.push('\t');
    if let Some(cell) = row.get(selected[0]) {
        push_cell(output, cell, escape);
    }
    output.push('\t');
    for &index in &selected[1..] {
        output.push_str("&\t");
        if let Some(cell) = row.get(index) {
            push_cell(output, cell, escape);
            output.push('\t');
        }
    }
}

fn push_cell(output: &mut String, cell: &str, escape: bool) {
    if escape {
        output.push_str(&escape_latex(cell));
    } else {
        output.push_str(cell);
    }
}
