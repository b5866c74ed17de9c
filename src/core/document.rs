//! Full-document wrapping around the tabular output

/// Pre/post text and full-document wrapping.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Wrap the output in a minimal compilable LaTeX document.
    pub full_document: bool,
    /// Text placed before `\begin{tabular}` (after the preamble in full
    /// document mode).
    pub pretext: String,
    /// Text placed after `\end{tabular}` (before `\end{document}` in full
    /// document mode).
    pub posttext: String,
}

/// Compose the final output stream from the rendered tabular body.
///
/// The emitted stream is pretext (plus a newline when non-empty), the
/// tabular body, then posttext. Full-document mode contributes the
/// preamble in front of the user pretext and `\end{document}` behind the
/// user posttext.
pub fn compose(tabular: &str, options: &DocumentOptions) -> String {
    let mut pretext = String::new();
    if options.full_document {
        pretext.push_str("\\documentclass{article}\\begin{document}\n");
    }
    pretext.push_str(&options.pretext);

    let mut posttext = options.posttext.clone();
    if options.full_document {
        posttext.push_str("\\end{document}\n");
    }

    let mut output = String::with_capacity(pretext.len() + tabular.len() + posttext.len() + 1);
    output.push_str(&pretext);
    if !pretext.is_empty() {
        output.push('\n');
    }
    output.push_str(tabular);
    output.push_str(&posttext);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_output_untouched() {
        let options = DocumentOptions::default();
        assert_eq!(compose("TAB\n", &options), "TAB\n");
    }

    #[test]
    fn test_pretext_gets_trailing_newline() {
        let options = DocumentOptions {
            pretext: "\\centering".to_string(),
            ..Default::default()
        };
        assert_eq!(compose("TAB\n", &options), "\\centering\nTAB\n");
    }

    #[test]
    fn test_posttext_appended_verbatim() {
        let options = DocumentOptions {
            posttext: "\\caption{t}".to_string(),
            ..Default::default()
        };
        assert_eq!(compose("TAB\n", &options), "TAB\n\\caption{t}");
    }

    #[test]
    fn test_full_document_wrapping() {
        let options = DocumentOptions {
            full_document: true,
            ..Default::default()
        };
        assert_eq!(
            compose("TAB\n", &options),
            "\\documentclass{article}\\begin{document}\n\nTAB\n\\end{document}\n"
        );
    }

    #[test]
    fn test_full_document_with_pre_and_posttext() {
        let options = DocumentOptions {
            full_document: true,
            pretext: "\\centering".to_string(),
            posttext: "post".to_string(),
        };
        // User pretext follows the preamble; user posttext precedes
        // \end{document}.
        assert_eq!(
            compose("TAB\n", &options),
            "\\documentclass{article}\\begin{document}\n\\centering\nTAB\npost\\end{document}\n"
        );
    }
}
