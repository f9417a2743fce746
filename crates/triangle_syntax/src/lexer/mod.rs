//! Scanner for extended Triangle.
//!
//! Handles tokenization including:
//! - Reserved words and identifiers (classified through `triangle_core::lang::keywords`)
//! - Integer and character literals
//! - Operators (maximal runs of operator characters)
//! - Punctuation and brackets
//! - `!` comments and whitespace
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (`Token`, `TokenSource`, `TokenSlice`)
//!
//! ## Notes
//! - The scanner never fails. A character that cannot start a token, or an unterminated
//!   character literal, becomes an [`TokenKind::Error`] token and scanning continues; the parser
//!   reports it as the offending token.

pub mod tokens;

pub use tokens::{Token, TokenKind, TokenSlice, TokenSource};

use crate::ast::Span;
use triangle_core::lang::punctuation::PunctuationId;
use triangle_core::lang::tokens::classify_word;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Pull-based scanner over Triangle source text.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
        }
    }

    /// Scan the whole input, ending with exactly one end-of-text token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token();
            let done = token.kind == TokenKind::EndOfText;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skip whitespace and `!` comments (to end of line).
    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '!' => self.advance_while(|c| c != '\n'),
                _ => return,
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Token {
        self.skip_separators();
        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return Token::end_of_text(self.current_pos);
        };

        let kind = match c {
            c if c.is_ascii_alphabetic() => {
                self.advance_while(|c| c.is_ascii_alphanumeric());
                classify_word(&self.source[start..self.current_pos])
            }
            c if c.is_ascii_digit() => {
                self.advance_while(|c| c.is_ascii_digit());
                TokenKind::IntLiteral
            }
            c if is_operator_char(c) => {
                self.advance_while(is_operator_char);
                TokenKind::Operator
            }
            '\'' => self.scan_character_literal(),
            '.' => self.punct_or(PunctuationId::Dot, '.', PunctuationId::DotDot),
            ':' => self.punct_or(PunctuationId::Colon, '=', PunctuationId::Becomes),
            ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            '~' => TokenKind::Punctuation(PunctuationId::Is),
            '(' => TokenKind::Punctuation(PunctuationId::LParen),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '[' => TokenKind::Punctuation(PunctuationId::LBracket),
            ']' => TokenKind::Punctuation(PunctuationId::RBracket),
            '{' => TokenKind::Punctuation(PunctuationId::LCurly),
            '}' => TokenKind::Punctuation(PunctuationId::RCurly),
            _ => TokenKind::Error,
        };

        Token::new(kind, &self.source[start..self.current_pos], Span::new(start, self.current_pos))
    }

    /// Single-character punctuation, or the two-character form when `next` follows.
    fn punct_or(&mut self, single: PunctuationId, next: char, double: PunctuationId) -> TokenKind {
        if self.match_char(next) {
            TokenKind::Punctuation(double)
        } else {
            TokenKind::Punctuation(single)
        }
    }

    /// Scan the rest of a character literal after its opening quote.
    fn scan_character_literal(&mut self) -> TokenKind {
        match self.peek() {
            Some(c) if is_graphic(c) => {
                self.advance();
            }
            _ => return TokenKind::Error,
        }
        if self.match_char('\'') {
            TokenKind::CharLiteral
        } else {
            TokenKind::Error
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        self.scan_token()
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '=' | '<' | '>' | '\\' | '&' | '@' | '%' | '^' | '?')
}

/// Characters allowed between the quotes of a character literal.
fn is_graphic(c: char) -> bool {
    c == '\t' || (' '..='~').contains(&c)
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).tokenize();
    tracing::trace!(token_count = tokens.len(), "scanned");
    tokens
}

// ============================================================================
// TESTS
// ============================================================================
