//! The scanning engine.
//!
//! [`Scanner`] walks a [`Cursor`] once, front to back, and classifies each
//! lexeme by its first byte. Every attempt yields a [`Lexeme`]: a token, or
//! a diagnostic for a malformed construct. Diagnostics never stop the scan;
//! the cursor has already moved past the bad text, so the loop simply
//! continues with the next lexeme.
//!
//! After input is exhausted a single [`TokenKind::Eof`] token is appended
//! with an empty position at the end of the file.

use std::sync::Arc;

use yamak_ir::{LineCol, Literal, Position, Span, Token, TokenKind};
use yamak_lexer_core::Cursor;

use crate::keywords;
use crate::number::{self, Exponent, NumberParts, Radix};
use crate::{LexError, LexErrorKind, LexOutput};

/// Outcome of scanning one lexeme.
enum Lexeme {
    Token(TokenKind),
    Literal(TokenKind, Literal),
    Error(LexErrorKind),
}

/// Single-pass scanner over one source file.
///
/// One instance scans exactly one file. All state is owned, so scanners for
/// different files can run on different threads.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    file: Arc<str>,
    /// Byte offset where the current lexeme began.
    start: u32,
    /// Line/column where the current lexeme began.
    start_loc: LineCol,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `cursor`.
    pub fn new(file: impl Into<Arc<str>>, cursor: Cursor<'a>) -> Self {
        let start_loc = cursor.location();
        Self {
            cursor,
            file: file.into(),
            start: cursor.pos(),
            start_loc,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// `true` once any diagnostic has been recorded.
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Scan the whole input and return the tokens (ending in `Eof`) and
    /// diagnostics, each in source order.
    pub fn scan(mut self) -> LexOutput {
        while self.scan_next() {}
        self.finish()
    }

    /// Skip whitespace and scan one lexeme.
    ///
    /// Returns `false` without consuming anything once input is exhausted.
    pub fn scan_next(&mut self) -> bool {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return false;
        }
        self.start = self.cursor.pos();
        self.start_loc = self.cursor.location();
        match self.lexeme() {
            Lexeme::Token(kind) => self.push_token(kind, None),
            Lexeme::Literal(kind, literal) => self.push_token(kind, Some(literal)),
            Lexeme::Error(kind) => self.push_error(kind),
        }
        true
    }

    /// Append the end-of-input token and hand over the results.
    ///
    /// Any input not yet scanned is ignored.
    pub fn finish(mut self) -> LexOutput {
        let position = Position::empty_at(
            Arc::clone(&self.file),
            self.cursor.source_len(),
            self.end_location(),
        );
        self.tokens.push(Token::new(TokenKind::Eof, "", None, position));
        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn end_location(&self) -> LineCol {
        let mut cursor = self.cursor;
        while !cursor.is_eof() {
            cursor.advance();
        }
        cursor.location()
    }

    fn lexeme(&mut self) -> Lexeme {
        match self.cursor.current() {
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            b'.' => self.single(TokenKind::Dot),
            b';' => self.single(TokenKind::Semicolon),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'=' => self.equal(),
            b'<' => self.less(),
            b'>' => self.greater(),
            b':' => self.colon(),
            b'"' => self.string(),
            b'#' => self.hash(),
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            _ => self.unexpected(),
        }
    }

    // ─── Results ────────────────────────────────────────────────────

    fn position(&self) -> Position {
        Position::new(
            Arc::clone(&self.file),
            Span::new(self.start, self.cursor.pos()),
            self.start_loc,
            self.cursor.location(),
        )
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(self.start);
        tracing::trace!(?kind, lexeme, "token");
        let token = Token::new(kind, lexeme, literal, self.position());
        self.tokens.push(token);
    }

    fn push_error(&mut self, kind: LexErrorKind) {
        let error = LexError::new(self.position(), kind);
        tracing::debug!(error = %error, "lex error");
        self.errors.push(error);
    }

    // ─── Operators ──────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, kind: TokenKind) -> Lexeme {
        self.cursor.advance();
        Lexeme::Token(kind)
    }

    fn equal(&mut self) -> Lexeme {
        self.cursor.advance(); // consume '='
        match self.cursor.current() {
            b'=' => self.single(TokenKind::EqualEqual),
            _ => Lexeme::Token(TokenKind::Equal),
        }
    }

    fn less(&mut self) -> Lexeme {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'=' => self.single(TokenKind::LessEqual),
            b'<' => self.single(TokenKind::LessLess),
            b'>' => self.single(TokenKind::LessGreater),
            _ => Lexeme::Token(TokenKind::Less),
        }
    }

    fn greater(&mut self) -> Lexeme {
        self.cursor.advance(); // consume '>'
        match self.cursor.current() {
            b'=' => self.single(TokenKind::GreaterEqual),
            b'>' => self.single(TokenKind::GreaterGreater),
            b'<' => self.single(TokenKind::GreaterLess),
            _ => Lexeme::Token(TokenKind::Greater),
        }
    }

    fn colon(&mut self) -> Lexeme {
        self.cursor.advance(); // consume ':'
        match self.cursor.current() {
            b'=' => self.single(TokenKind::ColonEqual),
            b':' => self.single(TokenKind::ColonColon),
            _ => Lexeme::Token(TokenKind::Colon),
        }
    }

    // ─── Strings ────────────────────────────────────────────────────

    /// `"..."` with backslash escapes kept verbatim in the literal.
    fn string(&mut self) -> Lexeme {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    let content = self.cursor.slice_from(self.start + 1);
                    self.cursor.advance();
                    return Lexeme::Literal(TokenKind::String, Literal::String(content.to_owned()));
                }
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        break;
                    }
                    self.cursor.advance_char();
                }
                _ => break,
            }
        }
        Lexeme::Error(LexErrorKind::UnterminatedString)
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn hash(&mut self) -> Lexeme {
        self.cursor.advance(); // consume '#'
        if self.cursor.eat(b'{') {
            return self.block_comment();
        }
        self.cursor.eat_until_newline_or_eof();
        Lexeme::Token(TokenKind::CommentLine)
    }

    /// Body of a `#{ ... #}` comment. Nested pairs must balance.
    fn block_comment(&mut self) -> Lexeme {
        let mut depth: u32 = 1;
        while self.cursor.skip_to_hash() == b'#' {
            match self.cursor.peek() {
                b'}' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth -= 1;
                    if depth == 0 {
                        return Lexeme::Token(TokenKind::CommentBlock);
                    }
                }
                b'{' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth += 1;
                }
                _ => self.cursor.advance(),
            }
        }
        Lexeme::Error(LexErrorKind::UnterminatedBlockComment)
    }

    // ─── Numbers ────────────────────────────────────────────────────

    fn number(&mut self) -> Lexeme {
        let mut radix = Radix::Decimal;
        if self.cursor.current() == b'0' {
            if let Some(prefixed) = Radix::from_prefix(self.cursor.peek()) {
                if prefixed.is_digit(self.cursor.peek2()) {
                    radix = prefixed;
                    self.cursor.advance();
                    self.cursor.advance();
                }
            }
        }

        let integral = self.digits(radix);

        let fraction = if self.cursor.current() == b'.' && radix.is_digit(self.cursor.peek()) {
            self.cursor.advance(); // consume '.'
            Some(self.digits(radix))
        } else {
            None
        };

        let exponent = self.exponent(radix);

        let parts = NumberParts {
            radix,
            integral,
            fraction,
            exponent,
        };
        match number::evaluate(&parts) {
            Ok(value) => Lexeme::Literal(TokenKind::Number, Literal::Number(value)),
            Err(kind) => Lexeme::Error(kind),
        }
    }

    /// `p`/`P`, an optional `-`, then at least one digit. Anything else
    /// leaves the marker for the next lexeme.
    fn exponent(&mut self, radix: Radix) -> Option<Exponent<'a>> {
        if !matches!(self.cursor.current(), b'p' | b'P') {
            return None;
        }
        let negative = self.cursor.peek() == b'-';
        let first = if negative {
            self.cursor.peek2()
        } else {
            self.cursor.peek()
        };
        if !radix.is_digit(first) {
            return None;
        }
        self.cursor.advance(); // consume 'p'
        if negative {
            self.cursor.advance();
        }
        Some(Exponent {
            negative,
            digits: self.digits(radix),
        })
    }

    fn digits(&mut self, radix: Radix) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.eat_while(|b| radix.is_digit(b));
        self.cursor.slice_from(start)
    }

    // ─── Identifiers ────────────────────────────────────────────────

    fn identifier(&mut self) -> Lexeme {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.start);
        Lexeme::Token(keywords::lookup(text).unwrap_or(TokenKind::Identifier))
    }

    // ─── Errors ─────────────────────────────────────────────────────

    fn unexpected(&mut self) -> Lexeme {
        let found = self.cursor.current_char().unwrap_or('\0');
        self.cursor.advance_char();
        Lexeme::Error(LexErrorKind::UnexpectedCharacter { found })
    }
}

/// Lookup table for identifier continuation bytes (`[a-zA-Z0-9_]`).
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_');
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}
