//! Lexer diagnostics.
//!
//! A [`LexError`] records one malformed construct: WHERE it was found
//! (`position`, from the start of the construct to the point of failure)
//! and WHAT went wrong (`kind`). Errors are data: the scanner records them
//! and keeps going.

use yamak_ir::{Position, Span};

/// A recoverable lexical error.
///
/// Renders as `[file:line:column] message`, using the start of the
/// offending construct.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error(
    "[{}:{}:{}] {}",
    .position.file(),
    .position.start_line(),
    .position.start_column(),
    .kind
)]
pub struct LexError {
    /// WHERE the error occurred.
    pub position: Position,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred. `Display` is the user-facing message.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Opening `"` with no closing `"` before end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// `#{` whose nesting never returns to zero before end of input.
    #[error("block comment reached end of file")]
    UnterminatedBlockComment,
    /// Exponent digits (or the scale they imply) exceed a 32-bit signed integer.
    #[error("exponent is too large to fit in a 32-bit signed integer")]
    ExponentOverflow,
    /// A character that starts no known construct.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
}

impl LexError {
    pub fn new(position: Position, kind: LexErrorKind) -> Self {
        LexError { position, kind }
    }

    /// File the error was found in.
    pub fn file(&self) -> &str {
        self.position.file()
    }

    /// Byte span of the offending text.
    pub fn span(&self) -> Span {
        self.position.span()
    }

    /// The message without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The full `[file:line:column] message` form.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
