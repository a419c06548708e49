//! Token types for the Yamak lexer.
//!
//! A [`Token`] is one classified lexeme: its [`TokenKind`], the exact source
//! text consumed, an optional decoded [`Literal`], and its [`Position`].

use std::fmt;

use bigdecimal::BigDecimal;

use crate::Position;

/// A classified lexeme with its location in the source.
///
/// # Invariant
///
/// `lexeme` is exactly `source[position.span().to_range()]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        position: Position,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            position,
        }
    }

    /// Decoded numeric value, if this is a number token.
    pub fn number(&self) -> Option<&BigDecimal> {
        match &self.literal {
            Some(Literal::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Raw string contents (between the quotes), if this is a string token.
    pub fn string(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::String(s)) => Some(s),
            _ => None,
        }
    }
}

/// Renders as `Kind "lexeme"`, followed by the literal value when present.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} \"{}\"", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}

/// Decoded value carried by literal tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Literal {
    /// Exact value of a numeric literal.
    Number(BigDecimal),
    /// String contents with escapes left unresolved.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// Token kinds for Yamak.
///
/// Closed set: every lexeme the scanner accepts maps to exactly one of these.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Semicolon,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // `<` / `>` family
    Less,
    LessEqual,
    /// `<<`
    LessLess,
    /// `<>`
    LessGreater,
    Greater,
    GreaterEqual,
    /// `>>`
    GreaterGreater,
    /// `><`
    GreaterLess,

    // `:` / `=` family
    Colon,
    ColonColon,
    /// `:=`
    ColonEqual,
    Equal,
    EqualEqual,

    // Literals
    Identifier,
    String,
    Number,
    True,
    False,

    // Comments
    CommentLine,
    CommentBlock,

    // Keywords
    With,
    Return,
    Defer,
    If,
    Else,
    Match,
    While,
    Break,
    Continue,
    Label,
    Type,
    Func,
    Var,
    Let,
    Struct,
    Union,
    Tagged,
    Enum,
    Collect,
    And,
    Or,
    Not,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Human-readable name: the spelling for fixed tokens, a category word
    /// for tokens whose text varies.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::LessLess => "<<",
            TokenKind::LessGreater => "<>",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::GreaterGreater => ">>",
            TokenKind::GreaterLess => "><",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::ColonEqual => ":=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::CommentLine => "line comment",
            TokenKind::CommentBlock => "block comment",
            TokenKind::With => "with",
            TokenKind::Return => "return",
            TokenKind::Defer => "defer",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Match => "match",
            TokenKind::While => "while",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Label => "label",
            TokenKind::Type => "type",
            TokenKind::Func => "func",
            TokenKind::Var => "var",
            TokenKind::Let => "let",
            TokenKind::Struct => "struct",
            TokenKind::Union => "union",
            TokenKind::Tagged => "tagged",
            TokenKind::Enum => "enum",
            TokenKind::Collect => "collect",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Eof => "end of file",
        }
    }

    /// `true` for reserved words, including `true`/`false`.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::True
                | TokenKind::False
                | TokenKind::With
                | TokenKind::Return
                | TokenKind::Defer
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Match
                | TokenKind::While
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Label
                | TokenKind::Type
                | TokenKind::Func
                | TokenKind::Var
                | TokenKind::Let
                | TokenKind::Struct
                | TokenKind::Union
                | TokenKind::Tagged
                | TokenKind::Enum
                | TokenKind::Collect
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
        )
    }

    /// `true` for line and block comments.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::CommentLine | TokenKind::CommentBlock)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
