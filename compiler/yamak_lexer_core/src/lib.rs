//! Low-level scanning primitives for the Yamak lexer.
//!
//! - [`SourceBuffer`]: owns a copy of the source followed by a `0x00`
//!   sentinel and zero padding, so lookahead never needs a bounds check.
//! - [`Cursor`]: walks the buffer byte-by-byte and keeps the 1-based
//!   line/column of the next character up to date.
//!
//! The scanner engine in `yamak_lexer` is built on top of these; nothing
//! here knows about tokens or keywords.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
