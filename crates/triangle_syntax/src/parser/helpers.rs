// Token-stream helpers and error construction.
//
// This chunk contains the low-level primitives used throughout parsing:
// - Position tracking (`start`, `finish`)
// - Consuming tokens (`accept_it`, `accept_keyword`, `accept_punct`)
// - Checking the lookahead (`check_keyword`, `check_punct`)
// - Building syntax errors against the lookahead token
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Positions
    // ========================================================================

    /// Start offset of the lookahead token.
    fn start(&self) -> usize {
        self.current.span.start
    }

    /// Span from `start` to the end of the last consumed token.
    ///
    /// ## Notes
    /// - A production that consumed nothing gets a zero-width span at `start`.
    fn finish(&self, start: usize) -> Span {
        Span::new(start, self.previous.end.max(start))
    }

    // ========================================================================
    // Consuming tokens
    // ========================================================================

    /// Consume the lookahead unconditionally and return it.
    fn accept_it(&mut self) -> Token {
        let next = self.source.next_token();
        let token = std::mem::replace(&mut self.current, next);
        self.previous = token.span;
        token
    }

    /// Consume the lookahead if it has kind `kind`, else fail naming `kind`.
    fn accept(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.current.kind == kind {
            Ok(self.accept_it())
        } else {
            Err(self.expected(kind))
        }
    }

    fn accept_keyword(&mut self, id: KeywordId) -> Result<Token, SyntaxError> {
        self.accept(TokenKind::Keyword(id))
    }

    fn accept_punct(&mut self, id: PunctuationId) -> Result<Token, SyntaxError> {
        self.accept(TokenKind::Punctuation(id))
    }

    /// Consume the lookahead if it is `id`; report whether it did.
    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.accept_it();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Lookahead
    // ========================================================================

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.current.is_punctuation(id)
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// A syntax error at the lookahead token; `template` holds one `%` for its spelling.
    fn error(&self, template: &str) -> SyntaxError {
        SyntaxError::new(template, self.current.display_spelling(), self.current.span)
    }

    /// `"<kind>" expected here, found "%"`.
    fn expected(&self, kind: TokenKind) -> SyntaxError {
        self.error(&format!("\"{}\" expected here, found \"%\"", tokens::spell(kind)))
    }
}
