//! Vocabulary of the extended Triangle language.
//!
//! Reserved words and punctuation have stable ids ([`keywords::KeywordId`],
//! [`punctuation::PunctuationId`]) backed by `const` tables; [`tokens::TokenKind`] adds the
//! literal and sentinel classes and fixes the numbering. Nothing here knows about source text
//! beyond single spellings.
//!
//! ```rust
//! use triangle_core::lang::keywords::KeywordId;
//! use triangle_core::lang::punctuation::{self, PunctuationId};
//! use triangle_core::lang::tokens::{classify_word, TokenKind};
//!
//! assert_eq!(punctuation::from_str(":="), Some(PunctuationId::Becomes));
//! assert_eq!(classify_word("while"), TokenKind::Keyword(KeywordId::While));
//! ```

pub mod keywords;
pub mod punctuation;
pub mod tokens;
