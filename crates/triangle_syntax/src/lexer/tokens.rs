//! Token types for the Triangle scanner.
//!
//! Token kinds are the canonical, registry-backed [`TokenKind`] from `triangle_core::lang::tokens`;
//! a token adds the literal spelling and the source span.
//!
//! ## Notes
//! - The parser pulls tokens one at a time through [`TokenSource`], so it never needs the whole
//!   stream in memory.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
pub use triangle_core::lang::tokens::TokenKind;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// A token with its kind, spelling and source span.
///
/// ## Notes
/// - Character literals are spelled with their quotes.
/// - The end-of-text token has an empty spelling and a zero-width span at the end of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, spelling: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            span,
        }
    }

    /// The end-of-text sentinel at `offset`.
    pub fn end_of_text(offset: usize) -> Self {
        Self::new(TokenKind::EndOfText, "", Span::empty_at(offset))
    }
}

// ============================================================================
// TOKEN SOURCES
// ============================================================================

/// A pull-based token stream with one-token lookahead on the consumer side.
///
/// ## Notes
/// - Once the stream is exhausted it must keep returning an end-of-text token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// A [`TokenSource`] over an already-scanned token slice.
///
/// Yields the slice in order, then repeats its final end-of-text token. A slice that does not end
/// with end-of-text behaves as if one followed its last token.
#[derive(Debug, Clone)]
pub struct TokenSlice<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenSlice<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn trailing_end_of_text(&self) -> Token {
        match self.tokens.last() {
            Some(last) if last.kind == TokenKind::EndOfText => last.clone(),
            Some(last) => Token::end_of_text(last.span.end),
            None => Token::end_of_text(0),
        }
    }
}

impl TokenSource for TokenSlice<'_> {
    fn next_token(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => self.trailing_end_of_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_repeats_end_of_text() {
        let tokens = vec![
            Token::new(TokenKind::Identifier, "x", Span::new(0, 1)),
            Token::end_of_text(1),
        ];
        let mut source = TokenSlice::new(&tokens);
        assert_eq!(source.next_token().spelling, "x");
        for _ in 0..3 {
            assert_eq!(source.next_token(), Token::end_of_text(1));
        }
    }

    #[test]
    fn slice_without_sentinel_synthesizes_one() {
        let tokens = vec![Token::new(TokenKind::IntLiteral, "42", Span::new(2, 4))];
        let mut source = TokenSlice::new(&tokens);
        source.next_token();
        assert_eq!(source.next_token(), Token::end_of_text(4));
        assert_eq!(TokenSlice::new(&[]).next_token(), Token::end_of_text(0));
    }
}
