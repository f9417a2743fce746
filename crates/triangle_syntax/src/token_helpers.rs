//! Small helper APIs for working with `Token`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens. The `TokenKind` counterparts live in `triangle_core`.

use crate::lexer::{Token, TokenKind};
use triangle_core::lang::keywords::KeywordId;
use triangle_core::lang::punctuation::PunctuationId;
use triangle_core::lang::tokens;

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind.is_keyword(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind.is_punctuation(id)
    }

    /// Spelling as shown in diagnostics: the literal text, or `end-of-text` for the sentinel.
    pub fn display_spelling(&self) -> &str {
        match self.kind {
            TokenKind::EndOfText => tokens::spell(TokenKind::EndOfText),
            _ => &self.spelling,
        }
    }
}
