//! Reserved word table.
//!
//! Built once on first use and shared read-only by every scan, so
//! concurrent lexers on separate threads need no synchronization beyond
//! the one-time initialization.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use yamak_ir::TokenKind;

/// Every reserved spelling and the token kind it produces.
const RESERVED: [(&str, TokenKind); 24] = [
    ("with", TokenKind::With),
    ("return", TokenKind::Return),
    ("defer", TokenKind::Defer),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("match", TokenKind::Match),
    ("while", TokenKind::While),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("label", TokenKind::Label),
    ("type", TokenKind::Type),
    ("func", TokenKind::Func),
    ("var", TokenKind::Var),
    ("let", TokenKind::Let),
    ("struct", TokenKind::Struct),
    ("union", TokenKind::Union),
    ("tagged", TokenKind::Tagged),
    ("enum", TokenKind::Enum),
    ("collect", TokenKind::Collect),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| RESERVED.iter().copied().collect());

/// Look up a reserved word by its exact, case-sensitive spelling.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Returns `true` if `text` is reserved and cannot be used as an identifier.
pub fn is_reserved(text: &str) -> bool {
    lookup(text).is_some()
}

/// Iterate over all reserved spellings in declaration order.
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    RESERVED.iter().map(|&(word, _)| word)
}
