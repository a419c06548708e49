//! Position-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the source length. An interior null byte (`pos < source_len`)
//! is ordinary input and is left for the scanner to reject.
//!
//! # Line and Column
//!
//! Every consuming method keeps `line`/`column` pointing at the next
//! character: a consumed `\n` moves to the next line and resets the column
//! to 1, any other character advances the column by one. Columns count
//! characters, so UTF-8 continuation bytes are not counted.

use yamak_ir::LineCol;

/// Returns `true` for UTF-8 continuation bytes (`0b10xx_xxxx`).
#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Number of bytes in the UTF-8 character starting with `byte`.
#[inline]
fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Number of characters (not bytes) in a UTF-8 byte slice.
#[allow(
    clippy::cast_possible_truncation,
    reason = "slices come from a buffer whose length fits in u32"
)]
fn char_count(bytes: &[u8]) -> u32 {
    bytes.iter().filter(|&&b| !is_continuation(b)).count() as u32
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`, with at
/// least two padding bytes past the sentinel. `pos <= source_len` always
/// holds and `pos` is on a UTF-8 boundary whenever a scanning method
/// returns.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str, buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 2 < buf.len(),
            "sentinel and lookahead padding must be within buffer bounds"
        );
        Self {
            source,
            buf,
            pos: 0,
            source_len,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Decodes the character at the current position.
    ///
    /// Returns `None` at EOF.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos as usize..)?.chars().next()
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Line/column of the next character to be consumed.
    #[inline]
    pub fn location(&self) -> LineCol {
        LineCol::new(self.line, self.column)
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Consume one byte, updating line/column. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        let b = self.current();
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_continuation(b) {
            self.column += 1;
        }
    }

    /// Consume the next byte if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.current() == expected && !self.is_eof() {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume one full UTF-8 character.
    pub fn advance_char(&mut self) {
        let width = utf8_char_width(self.current());
        for _ in 0..width {
            self.advance();
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred` should only accept ASCII bytes, so the cursor never stops in
    /// the middle of a multi-byte character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Skip any run of whitespace characters, including newlines.
    ///
    /// ASCII is classified directly; other characters are decoded and
    /// checked with [`char::is_whitespace`].
    pub fn eat_whitespace(&mut self) {
        loop {
            match self.current() {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => self.advance(),
                0x80..=0xFF if self.current_char().is_some_and(char::is_whitespace) => {
                    self.advance_char();
                }
                _ => break,
            }
        }
    }

    /// Source text from `start` to the current position.
    ///
    /// Returns an empty string if `start` is past the cursor or not on a
    /// character boundary.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.source
            .get(start as usize..self.pos as usize)
            .unwrap_or_default()
    }

    /// Advance to the next `\n` byte (not consumed) or EOF.
    ///
    /// Used by the line comment scanner. No newline is crossed, so only the
    /// column moves.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let target = match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.offset_from_pos(offset),
            None => self.source_len,
        };
        self.bump_to(target);
    }

    /// Advance past ordinary string content to the next `"` or `\`.
    /// Returns the byte found (not consumed), or 0 for EOF.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr2(b'"', b'\\', remaining) {
            Some(offset) => {
                let target = self.offset_from_pos(offset);
                self.bump_to(target);
                self.current()
            }
            None => {
                self.bump_to(self.source_len);
                0
            }
        }
    }

    /// Advance past block comment text to the next `#`.
    /// Returns `b'#'` (not consumed), or 0 for EOF.
    pub fn skip_to_hash(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(b'#', remaining) {
            Some(offset) => {
                let target = self.offset_from_pos(offset);
                self.bump_to(target);
                b'#'
            }
            None => {
                self.bump_to(self.source_len);
                0
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset is within remaining source, which fits in u32"
    )]
    fn offset_from_pos(&self, offset: usize) -> u32 {
        self.pos + offset as u32
    }

    /// Jump forward to `target`, deriving line/column from the skipped bytes.
    fn bump_to(&mut self, target: u32) {
        let target = target.min(self.source_len);
        if target <= self.pos {
            return;
        }
        let skipped = &self.buf[self.pos as usize..target as usize];
        if let Some(last) = memchr::memrchr(b'\n', skipped) {
            let crossed = memchr::memchr_iter(b'\n', skipped).count();
            self.line = self
                .line
                .saturating_add(u32::try_from(crossed).unwrap_or(u32::MAX));
            self.column = 1 + char_count(&skipped[last + 1..]);
        } else {
            self.column += char_count(skipped);
        }
        self.pos = target;
    }
}
