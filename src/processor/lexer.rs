//! Character classifier for brace-delimited source.
//!
//! Every character of the document goes through one `Lexer`, in document
//! order, so quoting state carries over line boundaries. Only braces seen
//! outside a string literal count as structure:
//!
//! ```text
//!      '"'          toggles Outsider <-> InQuote
//!      '\\'         InQuote -> InEscape (next char taken verbatim)
//!      '{' outside  depth += 1, rendered as ':'
//!      '}' outside  depth -= 1, rendered as nothing
//! ```
//!
//! There is no lookahead; each decision uses the current state and the
//! current character only.

use crate::error::TransformError;
use crate::model::{BLOCK_CLOSE, BLOCK_MARKER, BLOCK_OPEN, ESCAPE, LexState, QUOTE};

/// What the classifier made of one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Emit this character unchanged.
    Verbatim(char),
    /// A structural `{`.
    Open,
    /// A structural `}`.
    Close,
}

impl Symbol {
    /// Text this symbol contributes to the rendered line.
    pub fn rendered(self) -> Option<char> {
        match self {
            Symbol::Verbatim(c) => Some(c),
            Symbol::Open => Some(BLOCK_MARKER),
            Symbol::Close => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lexer {
    state: LexState,
    depth: usize,
    max_depth: usize,
    line: usize,
    quote_line: usize,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to `Outsider` at depth 0, ready for another document.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn state(&self) -> LexState {
        self.state
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Record the 1-based number of the line about to be classified.
    pub fn begin_line(&mut self, line: usize) {
        self.line = line;
    }

    pub fn classify(&mut self, c: char) -> Result<Symbol, TransformError> {
        if self.state == LexState::InEscape {
            return self.escaped(c);
        }
        let sym = match c {
            ESCAPE => self.backslash(c),
            QUOTE => self.quote(c),
            BLOCK_OPEN => self.open(c),
            BLOCK_CLOSE => self.close(c)?,
            c => Symbol::Verbatim(c),
        };
        Ok(sym)
    }

    /// Check that the document did not end inside a string or a block.
    pub fn finish(&self) -> Result<(), TransformError> {
        if self.state != LexState::Outsider {
            return Err(TransformError::UnterminatedQuote {
                line: self.quote_line,
            });
        }
        if self.depth > 0 {
            return Err(TransformError::UnclosedBlock { depth: self.depth });
        }
        Ok(())
    }

    fn escaped(&mut self, c: char) -> Result<Symbol, TransformError> {
        if self.state != LexState::InEscape {
            return Err(TransformError::EscapeOutsideQuote { line: self.line });
        }
        self.state = LexState::InQuote;
        Ok(Symbol::Verbatim(c))
    }

    fn backslash(&mut self, c: char) -> Symbol {
        if self.state == LexState::InQuote {
            self.state = LexState::InEscape;
        }
        Symbol::Verbatim(c)
    }

    fn quote(&mut self, c: char) -> Symbol {
        self.state = match self.state {
            LexState::InQuote => LexState::Outsider,
            _ => {
                self.quote_line = self.line;
                LexState::InQuote
            }
        };
        Symbol::Verbatim(c)
    }

    fn open(&mut self, c: char) -> Symbol {
        if self.state != LexState::Outsider {
            return Symbol::Verbatim(c);
        }
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Symbol::Open
    }

    fn close(&mut self, c: char) -> Result<Symbol, TransformError> {
        if self.state != LexState::Outsider {
            return Ok(Symbol::Verbatim(c));
        }
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or(TransformError::UnbalancedClose { line: self.line })?;
        Ok(Symbol::Close)
    }
}
