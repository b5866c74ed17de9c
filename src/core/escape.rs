//! LaTeX special-character escaping

use phf::phf_map;

/// Replacement table for characters with special meaning in LaTeX text mode.
static LATEX_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '&' => "\\&",
    '%' => "\\%",
    '$' => "\\$",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '~' => "\\textasciitilde{}",
    '^' => "\\^{}",
    '\\' => "\\textbackslash{}",
    '<' => "\\textless{}",
    '>' => "\\textgreater{}",
};

/// Escape special LaTeX characters so plain text renders literally.
///
/// The input is scanned in a single pass and every source character is
/// replaced at most once, so backslashes introduced by a replacement are
/// never escaped again: `100%` becomes `100\%`, not `100\textbackslash{}%`.
pub fn escape_latex(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match LATEX_ESCAPES.get(&ch) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(ch),
        }
    }
    output
}
