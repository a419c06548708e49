//! File-qualified source positions.
//!
//! A [`Position`] bounds a token or diagnostic: the byte [`Span`] it covers
//! plus the 1-based line/column of its first character and of the first
//! character after it.

use std::fmt;
use std::sync::Arc;

use crate::Span;

/// A 1-based line/column pair.
///
/// The column counts characters, not bytes, and resets to 1 after every
/// consumed newline.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    /// Line 1, column 1.
    pub const START: LineCol = LineCol { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        LineCol { line, column }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        LineCol::START
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end of a lexeme within a named file.
///
/// `end` is the line/column just past the lexeme, so an empty position has
/// `start == end`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    file: Arc<str>,
    span: Span,
    start: LineCol,
    end: LineCol,
}

impl Position {
    pub fn new(file: Arc<str>, span: Span, start: LineCol, end: LineCol) -> Self {
        Position {
            file,
            span,
            start,
            end,
        }
    }

    /// Zero-width position at `offset`, e.g. for the end-of-input token.
    pub fn empty_at(file: Arc<str>, offset: u32, at: LineCol) -> Self {
        Position::new(file, Span::point(offset), at, at)
    }

    /// File identifier this position refers to.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn start(&self) -> LineCol {
        self.start
    }

    #[inline]
    pub fn end(&self) -> LineCol {
        self.end
    }

    #[inline]
    pub fn start_line(&self) -> u32 {
        self.start.line
    }

    #[inline]
    pub fn start_column(&self) -> u32 {
        self.start.column
    }

    #[inline]
    pub fn end_line(&self) -> u32 {
        self.end.line
    }

    #[inline]
    pub fn end_column(&self) -> u32 {
        self.end.column
    }

    /// `true` when the position covers no source bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Renders as `file:line:column` of the start.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.start)
    }
}
