use serde::Serialize;

/// One level of indentation in the rendered output.
pub const INDENT_UNIT: &str = "    ";

// recognised literal tokens
pub const QUOTE: char = '"';
pub const ESCAPE: char = '\\';
pub const BLOCK_OPEN: char = '{';
pub const BLOCK_CLOSE: char = '}';
pub const TERMINATOR: char = ';';

/// What a structural `{` is rendered as.
pub const BLOCK_MARKER: char = ':';

/// Quoting/escaping mode of the character classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexState {
    /// Not inside a string literal.
    #[default]
    Outsider,
    /// Between an opening and a closing `"`.
    InQuote,
    /// Right after a `\` inside a string; the next character is taken verbatim.
    InEscape,
}

/// Result of rendering a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Content(String),
    /// The line did nothing but close blocks.
    Drop,
}

/// Summary of one transform run, handed to the writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    pub output: String,
    pub lines_read: usize,
    pub lines_emitted: usize,
    pub lines_dropped: usize,
    /// Deepest block nesting seen anywhere in the document.
    pub max_depth: usize,
}
