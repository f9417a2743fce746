//! Punctuation vocabulary.
//!
//! This module defines the canonical set of punctuation tokens used by the scanner and parser:
//! separators, access markers, the `:=` and `~` binders, and the three bracket pairs.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - Operators (`+`, `<=`, `\/`, ...) are *not* punctuation: Triangle treats every operator as an
//!   `Operator` token whose meaning comes from its spelling.
//!
//! ## Examples
//! ```rust
//! use triangle_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("~"), Some(PunctuationId::Is));
//! assert_eq!(punctuation::as_str(PunctuationId::LCurly), "{");
//! ```

/// Stable identifier for punctuation tokens, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PunctuationId {
    Dot = 0,
    DotDot = 1,
    Colon = 2,
    Semicolon = 3,
    Comma = 4,
    Becomes = 5,
    Is = 6,
    LParen = 7,
    RParen = 8,
    LBracket = 9,
    RBracket = 10,
    LCurly = 11,
    RCurly = 12,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
}

/// Registry of all punctuation tokens, in [`PunctuationId`] order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Dot, "."),
    info(PunctuationId::DotDot, ".."),
    info(PunctuationId::Colon, ":"),
    info(PunctuationId::Semicolon, ";"),
    info(PunctuationId::Comma, ","),
    info(PunctuationId::Becomes, ":="),
    info(PunctuationId::Is, "~"),
    info(PunctuationId::LParen, "("),
    info(PunctuationId::RParen, ")"),
    info(PunctuationId::LBracket, "["),
    info(PunctuationId::RBracket, "]"),
    info(PunctuationId::LCurly, "{"),
    info(PunctuationId::RCurly, "}"),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, canonical }
}
