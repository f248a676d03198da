//! Renders one input line: indent prefix, classified characters, then the
//! line-modifier pipeline.

use tracing::{debug, trace};

use super::lexer::{Lexer, Symbol};
use crate::error::TransformError;
use crate::model::{INDENT_UNIT, LineOutcome, TERMINATOR};

/// A pure text rewrite applied to every rendered line.
pub type LineModifier = fn(&str) -> String;

/// Modifiers run by default, in order.
pub const DEFAULT_MODIFIERS: &[LineModifier] = &[strip_terminator];

/// Remove one trailing statement terminator, if present.
pub fn strip_terminator(line: &str) -> String {
    line.strip_suffix(TERMINATOR).unwrap_or(line).to_string()
}

pub fn apply_modifiers(line: &str, modifiers: &[LineModifier]) -> String {
    modifiers
        .iter()
        .fold(line.to_string(), |acc, modifier| modifier(&acc))
}

/// Render `raw` (the `line_no`-th line, 1-based) through `lexer`.
///
/// The indent prefix uses the depth standing *before* the line's own braces
/// are classified. A line whose only effect was closing blocks becomes
/// [`LineOutcome::Drop`].
pub fn render_line(
    lexer: &mut Lexer,
    raw: &str,
    line_no: usize,
    modifiers: &[LineModifier],
) -> Result<LineOutcome, TransformError> {
    lexer.begin_line(line_no);
    let mut rendered = INDENT_UNIT.repeat(lexer.depth());
    let mut closed = false;

    for c in raw.trim().chars() {
        let sym = lexer.classify(c)?;
        match sym {
            Symbol::Open => debug!(line = line_no, depth = lexer.depth(), "block opened"),
            Symbol::Close => {
                debug!(line = line_no, depth = lexer.depth(), "block closed");
                closed = true;
            }
            Symbol::Verbatim(_) => {}
        }
        if let Some(out) = sym.rendered() {
            rendered.push(out);
        }
    }

    let rendered = apply_modifiers(&rendered, modifiers);
    if closed && rendered.trim().is_empty() {
        debug!(line = line_no, "dropping close-only line");
        return Ok(LineOutcome::Drop);
    }

    trace!(line = line_no, text = %rendered, "rendered");
    Ok(LineOutcome::Content(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lexer: &mut Lexer, raw: &str) -> LineOutcome {
        render_line(lexer, raw, 1, DEFAULT_MODIFIERS).unwrap()
    }

    fn content(s: &str) -> LineOutcome {
        LineOutcome::Content(s.to_string())
    }

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator("bar;"), "bar");
        assert_eq!(strip_terminator("bar;;"), "bar;");
        assert_eq!(strip_terminator("bar"), "bar");
        assert_eq!(strip_terminator(""), "");
    }

    #[test]
    fn test_modifiers_run_in_order() {
        fn shout(line: &str) -> String {
            line.to_uppercase()
        }
        fn exclaim(line: &str) -> String {
            format!("{line}!")
        }
        assert_eq!(apply_modifiers("hi;", &[strip_terminator, shout, exclaim]), "HI!");
        assert_eq!(apply_modifiers("hi;", &[exclaim, strip_terminator]), "hi;!");
        assert_eq!(apply_modifiers("hi;", &[]), "hi;");
    }

    #[test]
    fn test_prefix_uses_depth_before_line() {
        let mut lexer = Lexer::new();
        assert_eq!(render(&mut lexer, "foo {"), content("foo :"));
        assert_eq!(render(&mut lexer, "  bar;  "), content("    bar"));
        assert_eq!(render(&mut lexer, "}"), LineOutcome::Drop);
        assert_eq!(lexer.depth(), 0);
    }

    #[test]
    fn test_close_with_terminator_is_dropped() {
        let mut lexer = Lexer::new();
        render(&mut lexer, "{");
        render(&mut lexer, "{");
        assert_eq!(render(&mut lexer, "}};"), LineOutcome::Drop);
    }

    #[test]
    fn test_close_then_reopen_keeps_content() {
        let mut lexer = Lexer::new();
        render(&mut lexer, "if (a) {");
        assert_eq!(render(&mut lexer, "} else {"), content("     else :"));
        assert_eq!(lexer.depth(), 1);
    }

    #[test]
    fn test_blank_line_is_kept() {
        let mut lexer = Lexer::new();
        render(&mut lexer, "{");
        assert_eq!(render(&mut lexer, "   "), content("    "));
    }

    #[test]
    fn test_quoted_terminator_before_close_quote() {
        let mut lexer = Lexer::new();
        assert_eq!(render(&mut lexer, r#"s = "a;";"#), content(r#"s = "a;""#));
    }
}
