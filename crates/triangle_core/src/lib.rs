//! Canonical language vocabulary for the Triangle front end.
//!
//! This crate is intentionally tiny and dependency-free. It owns the one token-kind numbering that
//! the scanner, the parser, and any downstream tooling agree on, together with the keyword and
//! punctuation registries that back it.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, no AST types.
//! - All tables are `const` data, so they exist before any parse begins and can never change
//!   during one.
//!
//! ## Examples
//! ```rust
//! use triangle_core::lang::keywords::{self, KeywordId};
//! use triangle_core::lang::tokens::TokenKind;
//!
//! assert_eq!(keywords::from_str("elsif"), Some(KeywordId::Elsif));
//! assert_eq!(TokenKind::Keyword(KeywordId::Array).ordinal(), 4);
//! ```

pub mod lang;
