//! The canonical token-kind numbering.
//!
//! Scanner, parser, and tooling share exactly one numbering of token kinds. It is laid out in five
//! contiguous blocks:
//!
//! | Ordinals | Block |
//! |---|---|
//! | 0–3 | literal classes: integer, character, identifier, operator |
//! | 4–28 | reserved words, in [`KeywordId`] order |
//! | 29–35 | punctuation `. .. : ; , := ~` |
//! | 36–41 | brackets `( ) [ ] { }` |
//! | 42–43 | sentinels: end-of-text, error |
//!
//! ## Notes
//! - The derived `Ord` on [`TokenKind`] agrees with [`TokenKind::ordinal`].
//! - Any change that moves an existing ordinal must bump [`TOKEN_TABLE_VERSION`].
//!
//! ## Examples
//! ```rust
//! use triangle_core::lang::punctuation::PunctuationId;
//! use triangle_core::lang::tokens::{self, TokenKind};
//!
//! let kind = TokenKind::Punctuation(PunctuationId::Becomes);
//! assert_eq!(kind.ordinal(), 34);
//! assert_eq!(tokens::from_ordinal(34), Some(kind));
//! assert_eq!(tokens::spell(kind), ":=");
//! ```

use super::keywords::{self, KEYWORDS, KeywordId};
use super::punctuation::{self, PUNCTUATION, PunctuationId};

/// Revision of the numbering below.
pub const TOKEN_TABLE_VERSION: u16 = 1;

/// Ordinal of the first reserved word.
pub const FIRST_KEYWORD: u8 = 4;
/// Ordinal of the first punctuation token.
pub const FIRST_PUNCTUATION: u8 = FIRST_KEYWORD + KEYWORDS.len() as u8;
/// Ordinal of the end-of-text sentinel.
pub const END_OF_TEXT: u8 = FIRST_PUNCTUATION + PUNCTUATION.len() as u8;
/// Number of token kinds.
pub const KIND_COUNT: usize = END_OF_TEXT as usize + 2;

/// Kind of a token.
///
/// ## Notes
/// - Literal classes carry no payload; the token's spelling holds the text.
/// - Reserved words and punctuation carry their registry ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    IntLiteral,
    CharLiteral,
    Identifier,
    Operator,
    Keyword(KeywordId),
    Punctuation(PunctuationId),
    EndOfText,
    Error,
}

impl TokenKind {
    /// Position of this kind in the canonical numbering.
    pub const fn ordinal(self) -> u8 {
        match self {
            TokenKind::IntLiteral => 0,
            TokenKind::CharLiteral => 1,
            TokenKind::Identifier => 2,
            TokenKind::Operator => 3,
            TokenKind::Keyword(id) => FIRST_KEYWORD + id as u8,
            TokenKind::Punctuation(id) => FIRST_PUNCTUATION + id as u8,
            TokenKind::EndOfText => END_OF_TEXT,
            TokenKind::Error => END_OF_TEXT + 1,
        }
    }

    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }
}

/// Inverse of [`TokenKind::ordinal`].
pub fn from_ordinal(ordinal: u8) -> Option<TokenKind> {
    match ordinal {
        0 => Some(TokenKind::IntLiteral),
        1 => Some(TokenKind::CharLiteral),
        2 => Some(TokenKind::Identifier),
        3 => Some(TokenKind::Operator),
        n if n < FIRST_PUNCTUATION => KEYWORDS
            .get(usize::from(n - FIRST_KEYWORD))
            .map(|k| TokenKind::Keyword(k.id)),
        n if n < END_OF_TEXT => PUNCTUATION
            .get(usize::from(n - FIRST_PUNCTUATION))
            .map(|p| TokenKind::Punctuation(p.id)),
        n if n == END_OF_TEXT => Some(TokenKind::EndOfText),
        n if n == END_OF_TEXT + 1 => Some(TokenKind::Error),
        _ => None,
    }
}

/// Every token kind, in canonical order.
pub fn all() -> impl Iterator<Item = TokenKind> {
    (0..KIND_COUNT as u8).filter_map(from_ordinal)
}

/// Spelling used for a kind in diagnostics (`"end" expected here`).
///
/// ## Notes
/// - Reserved words and punctuation spell as written; literal classes and sentinels use a
///   descriptive placeholder.
pub fn spell(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::IntLiteral => "<int>",
        TokenKind::CharLiteral => "<char>",
        TokenKind::Identifier => "<identifier>",
        TokenKind::Operator => "<operator>",
        TokenKind::Keyword(id) => keywords::as_str(id),
        TokenKind::Punctuation(id) => punctuation::as_str(id),
        TokenKind::EndOfText => "end-of-text",
        TokenKind::Error => "<error>",
    }
}

/// Classify an identifier-shaped spelling: a reserved word if registered, else an identifier.
pub fn classify_word(spelling: &str) -> TokenKind {
    keywords::from_str(spelling).map_or(TokenKind::Identifier, TokenKind::Keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_have_documented_boundaries() {
        assert_eq!(FIRST_PUNCTUATION, 29);
        assert_eq!(END_OF_TEXT, 42);
        assert_eq!(KIND_COUNT, 44);
        assert_eq!(TokenKind::Keyword(KeywordId::And).ordinal(), 28);
        assert_eq!(TokenKind::Punctuation(PunctuationId::Is).ordinal(), 35);
        assert_eq!(TokenKind::Punctuation(PunctuationId::LParen).ordinal(), 36);
        assert_eq!(TokenKind::Punctuation(PunctuationId::RCurly).ordinal(), 41);
        assert_eq!(TokenKind::Error.ordinal(), 43);
    }

    #[test]
    fn numbering_round_trips() {
        let kinds: Vec<TokenKind> = all().collect();
        assert_eq!(kinds.len(), KIND_COUNT);
        for (index, kind) in kinds.iter().enumerate() {
            assert_eq!(usize::from(kind.ordinal()), index);
            assert_eq!(from_ordinal(kind.ordinal()), Some(*kind));
        }
        assert_eq!(from_ordinal(KIND_COUNT as u8), None);
    }

    #[test]
    fn derived_order_matches_ordinals() {
        let kinds: Vec<TokenKind> = all().collect();
        for pair in kinds.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should sort before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn words_are_classified_through_the_registry() {
        assert_eq!(classify_word("rec"), TokenKind::Keyword(KeywordId::Rec));
        assert_eq!(classify_word("recursive"), TokenKind::Identifier);
        assert_eq!(classify_word("begin"), TokenKind::Identifier);
    }
}
