//! Define the reserved-word vocabulary for the Triangle language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const table ([`KEYWORDS`]) mapping it to its canonical spelling.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - [`KEYWORDS`] is ordered by [`KeywordId`] discriminant. That order *is* the keyword block of the
//!   canonical token numbering (see [`crate::lang::tokens`]), so entries must never be reordered
//!   without bumping the table version.
//!
//! ## Examples
//! ```rust
//! use triangle_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("loop"), Some(KeywordId::Loop));
//! assert_eq!(keywords::as_str(KeywordId::Private), "private");
//! assert_eq!(keywords::from_str("Loop"), None);
//! ```

/// Stable identifier for every reserved word.
///
/// ## Notes
/// - Discriminants are explicit and dense (`0..KEYWORDS.len()`).
/// - `and` is last: it was appended by the extension, after the classic alphabetical block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KeywordId {
    Array = 0,
    Const = 1,
    Do = 2,
    Else = 3,
    Elsif = 4,
    End = 5,
    For = 6,
    Func = 7,
    If = 8,
    In = 9,
    Let = 10,
    Loop = 11,
    Nothing = 12,
    Of = 13,
    Private = 14,
    Proc = 15,
    Rec = 16,
    Record = 17,
    Then = 18,
    To = 19,
    Type = 20,
    Until = 21,
    Var = 22,
    While = 23,
    And = 24,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
}

/// Registry of all reserved words, in [`KeywordId`] order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Array, "array"),
    info(KeywordId::Const, "const"),
    info(KeywordId::Do, "do"),
    info(KeywordId::Else, "else"),
    info(KeywordId::Elsif, "elsif"),
    info(KeywordId::End, "end"),
    info(KeywordId::For, "for"),
    info(KeywordId::Func, "func"),
    info(KeywordId::If, "if"),
    info(KeywordId::In, "in"),
    info(KeywordId::Let, "let"),
    info(KeywordId::Loop, "loop"),
    info(KeywordId::Nothing, "nothing"),
    info(KeywordId::Of, "of"),
    info(KeywordId::Private, "private"),
    info(KeywordId::Proc, "proc"),
    info(KeywordId::Rec, "rec"),
    info(KeywordId::Record, "record"),
    info(KeywordId::Then, "then"),
    info(KeywordId::To, "to"),
    info(KeywordId::Type, "type"),
    info(KeywordId::Until, "until"),
    info(KeywordId::Var, "var"),
    info(KeywordId::While, "while"),
    info(KeywordId::And, "and"),
];

/// Canonical spelling.
///
/// ## Examples
/// ```rust
/// use triangle_core::lang::keywords::{self, KeywordId};
///
/// assert_eq!(keywords::as_str(KeywordId::Until), "until");
/// ```
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Notes
/// - O(1): the table is indexed by discriminant. The registry guardrail tests keep the table in
///   discriminant order.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word, `None` otherwise (the caller then treats it as an
///   identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo { id, canonical }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_discriminant_order() {
        for (index, k) in KEYWORDS.iter().enumerate() {
            assert_eq!(k.id as usize, index, "keyword {:?} is out of order", k.id);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("while"), Some(KeywordId::While));
        assert_eq!(from_str("While"), None);
        assert_eq!(from_str("begin"), None);
    }
}
