//! The functional core: brace-delimited lines in, indented document out.
pub mod document;
pub mod lexer;
pub mod line;

use tracing::{debug, info};

use crate::error::TransformError;
use crate::model::{LineOutcome, TransformReport};
use lexer::Lexer;
use line::{DEFAULT_MODIFIERS, LineModifier};

/// One transform run over one document.
///
/// Holds the single lexer whose quoting state and depth carry across every
/// line of the document.
pub struct Transformer<'m> {
    lexer: Lexer,
    modifiers: &'m [LineModifier],
}

impl Default for Transformer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer<'static> {
    pub fn new() -> Self {
        Self::with_modifiers(DEFAULT_MODIFIERS)
    }
}

impl<'m> Transformer<'m> {
    pub fn with_modifiers(modifiers: &'m [LineModifier]) -> Self {
        Self {
            lexer: Lexer::new(),
            modifiers,
        }
    }

    pub fn reset(&mut self) {
        self.lexer.reset();
    }

    /// Render every line in order. Nothing is returned unless the whole
    /// document transforms cleanly.
    pub fn render_lines<S: AsRef<str>>(
        &mut self,
        lines: &[S],
    ) -> Result<Vec<LineOutcome>, TransformError> {
        let mut rendered = Vec::with_capacity(lines.len());
        for (i, raw) in lines.iter().enumerate() {
            let outcome = line::render_line(&mut self.lexer, raw.as_ref(), i + 1, self.modifiers)?;
            rendered.push(outcome);
        }
        self.lexer.finish()?;
        Ok(rendered)
    }

    pub fn run<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<TransformReport, TransformError> {
        let rendered = self.render_lines(lines)?;
        let lines_dropped = rendered
            .iter()
            .filter(|o| **o == LineOutcome::Drop)
            .count();
        let report = TransformReport {
            lines_read: lines.len(),
            lines_emitted: rendered.len() - lines_dropped,
            lines_dropped,
            max_depth: self.lexer.max_depth(),
            output: document::assemble(rendered),
        };
        debug!(
            read = report.lines_read,
            emitted = report.lines_emitted,
            dropped = report.lines_dropped,
            "document assembled"
        );
        Ok(report)
    }
}

/// Transform `lines` with a fresh engine and return the summary report.
pub fn run<S: AsRef<str>>(lines: &[S]) -> Result<TransformReport, TransformError> {
    info!(lines = lines.len(), "transforming document");
    Transformer::new().run(lines)
}

/// Transform `lines` into the indented document.
pub fn transform<S: AsRef<str>>(lines: &[S]) -> Result<String, TransformError> {
    run(lines).map(|report| report.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_block() {
        let out = transform(&["foo {", "bar;", "}"]).unwrap();
        assert_eq!(out, "foo :\n    bar");
    }

    #[test]
    fn test_report_counts() {
        let report = run(&["a {", "b {", "c;", "}", "}", "d;"]).unwrap();
        assert_eq!(report.output, "a :\n    b :\n        c\nd");
        assert_eq!(report.lines_read, 6);
        assert_eq!(report.lines_emitted, 4);
        assert_eq!(report.lines_dropped, 2);
        assert_eq!(report.max_depth, 2);
    }

    #[test]
    fn test_quote_spans_lines() {
        let out = transform(&[r#"s = "a {"#, r#"} b";"#]).unwrap();
        assert_eq!(out, "s = \"a {\n} b\"");
    }

    #[test]
    fn test_error_aborts_whole_document() {
        let err = transform(&["ok;", "fine;", "}"]).unwrap_err();
        assert_eq!(err, TransformError::UnbalancedClose { line: 3 });
    }

    #[test]
    fn test_custom_modifiers() {
        fn keep(line: &str) -> String {
            line.to_string()
        }
        let mods: &[LineModifier] = &[keep];
        let mut t = Transformer::with_modifiers(mods);
        assert_eq!(t.run(&["x;;"]).unwrap().output, "x;;");
    }

    #[test]
    fn test_reset_between_documents() {
        let mut t = Transformer::new();
        assert!(t.run(&["open {"]).is_err());
        t.reset();
        assert_eq!(t.run(&["x;"]).unwrap().output, "x");
    }
}
