//! Property tests for the token-kind numbering.

use proptest::prelude::*;
use triangle_core::lang::keywords;
use triangle_core::lang::tokens::{self, TokenKind};

proptest! {
    /// Every ordinal in range names exactly one kind, and the kind maps back to it.
    #[test]
    fn ordinals_round_trip(ordinal in 0u8..tokens::KIND_COUNT as u8) {
        let kind = tokens::from_ordinal(ordinal);
        prop_assert!(kind.is_some());
        prop_assert_eq!(kind.map(TokenKind::ordinal), Some(ordinal));
    }

    /// Nothing outside the table decodes.
    #[test]
    fn out_of_range_ordinals_are_rejected(ordinal in tokens::KIND_COUNT as u8..=u8::MAX) {
        prop_assert_eq!(tokens::from_ordinal(ordinal), None);
    }

    /// Lowercase words classify as a keyword exactly when the registry knows them.
    #[test]
    fn classify_word_agrees_with_registry(word in "[a-z][a-z0-9]{0,8}") {
        let kind = tokens::classify_word(&word);
        match keywords::from_str(&word) {
            Some(id) => prop_assert_eq!(kind, TokenKind::Keyword(id)),
            None => prop_assert_eq!(kind, TokenKind::Identifier),
        }
    }
}
