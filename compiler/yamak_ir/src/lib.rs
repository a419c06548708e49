//! Intermediate representation shared by the Yamak front end.
//!
//! Currently holds the leaf data model produced by the lexer:
//! - [`Span`]: byte range into a source file
//! - [`Position`]: span plus file name and 1-based line/column bounds
//! - [`Token`], [`TokenKind`], [`Literal`]: classified lexemes
//!
//! Everything here is immutable once constructed. Later stages (parser,
//! type checker) consume these types without depending on the lexer.

mod position;
mod span;
mod token;

pub use position::{LineCol, Position};
pub use span::Span;
pub use token::{Literal, Token, TokenKind};

/// Arbitrary-precision decimal used for numeric literal values.
pub use bigdecimal::BigDecimal;
