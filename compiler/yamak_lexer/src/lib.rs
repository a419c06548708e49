//! Lexer for Yamak.
//!
//! [`lex`] turns one source file into a flat token sequence terminated by a
//! single `Eof` token, plus any diagnostics found along the way. Malformed
//! constructs are reported as [`LexError`]s and skipped; the scan always
//! runs to the end of the input.
//!
//! # Architecture
//!
//! - `yamak_lexer_core` provides the sentinel-terminated buffer and the
//!   line/column-tracking cursor.
//! - [`Scanner`] classifies lexemes by their first byte and owns the
//!   token and diagnostic accumulators.
//! - Numeric literals are evaluated exactly into a `BigDecimal`.
//! - Reserved words come from a process-wide read-only table.

mod keywords;
mod lex_error;
mod number;
mod scanner;

use yamak_ir::Token;
use yamak_lexer_core::SourceBuffer;

pub use keywords::{is_reserved, reserved_words};
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

/// Everything a scan produces.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order. Always ends with exactly one `Eof` token.
    pub tokens: Vec<Token>,
    /// Diagnostics in detection order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// `true` if the scan recorded any diagnostic.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens with comments filtered out.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.kind.is_comment())
    }
}

/// Scan `source` in one pass.
///
/// `file` only labels positions and diagnostics.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn lex(file: &str, source: &str) -> LexOutput {
    let buf = SourceBuffer::new(source);
    let output = Scanner::new(file, buf.cursor()).scan();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scan complete"
    );
    output
}
