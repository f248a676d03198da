//! Error types for loading and transforming source documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the transform engine.
///
/// Line numbers are 1-based and refer to the input document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The escape continuation ran while the lexer was not escaping.
    /// Indicates a broken state machine, never bad input.
    #[error("internal error: escaped character handled outside an escape on line {line}")]
    EscapeOutsideQuote { line: usize },

    /// A `}` closed more blocks than were open.
    #[error("unbalanced `}}` on line {line}: no open block to close")]
    UnbalancedClose { line: usize },

    /// Input ended inside a string literal.
    #[error("unterminated string literal starting on line {line}")]
    UnterminatedQuote { line: usize },

    /// Input ended with blocks still open.
    #[error("{depth} block(s) left open at end of input")]
    UnclosedBlock { depth: usize },
}

/// Errors raised while reading a source file into lines.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
