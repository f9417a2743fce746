// Miscellaneous parser utilities.
//
// This chunk contains terminal parsing (identifiers, literals, operators), value-or-variable
// names, and the right fold that turns a parsed list into a cons chain.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Terminals
    // ========================================================================

    fn identifier(&mut self) -> Result<Identifier, SyntaxError> {
        let token = self.terminal(TokenKind::Identifier, "identifier expected here, found \"%\"")?;
        Ok(Identifier::new(token.spelling, token.span))
    }

    fn integer_literal(&mut self) -> Result<IntegerLiteral, SyntaxError> {
        let token = self.terminal(TokenKind::IntLiteral, "integer literal expected here, found \"%\"")?;
        Ok(IntegerLiteral::new(token.spelling, token.span))
    }

    fn character_literal(&mut self) -> Result<CharacterLiteral, SyntaxError> {
        let token = self.terminal(TokenKind::CharLiteral, "character literal expected here, found \"%\"")?;
        Ok(CharacterLiteral::new(token.spelling, token.span))
    }

    fn operator(&mut self) -> Result<Operator, SyntaxError> {
        let token = self.terminal(TokenKind::Operator, "operator expected here, found \"%\"")?;
        Ok(Operator::new(token.spelling, token.span))
    }

    fn terminal(&mut self, kind: TokenKind, template: &str) -> Result<Token, SyntaxError> {
        if self.current.kind == kind {
            Ok(self.accept_it())
        } else {
            Err(self.error(template))
        }
    }

    // ========================================================================
    // Value-or-variable names
    // ========================================================================

    fn vname(&mut self) -> Result<Spanned<Vname>, SyntaxError> {
        let start = self.start();
        let name = self.identifier()?;
        self.rest_of_vname(name, start)
    }

    /// Field selections and subscripts following an already-consumed identifier.
    fn rest_of_vname(&mut self, name: Identifier, start: usize) -> Result<Spanned<Vname>, SyntaxError> {
        let mut vname = Spanned::new(Vname::Simple(SimpleVname { name }), self.finish(start));
        loop {
            if self.match_punct(PunctuationId::Dot) {
                let field = self.identifier()?;
                vname = Spanned::new(
                    Vname::Dot(DotVname {
                        record: Box::new(vname),
                        field,
                    }),
                    self.finish(start),
                );
            } else if self.match_punct(PunctuationId::LBracket) {
                let index = self.expression()?;
                self.accept_punct(PunctuationId::RBracket)?;
                vname = Spanned::new(
                    Vname::Subscript(SubscriptVname {
                        array: Box::new(vname),
                        index: Box::new(index),
                    }),
                    self.finish(start),
                );
            } else {
                return Ok(vname);
            }
        }
    }

    // ========================================================================
    // Cons lists
    // ========================================================================

    /// Fold `head` and `rest` (each with its start offset) from the right into a cons chain.
    ///
    /// ## Notes
    /// - Every link spans from its own element to the end of the last consumed token, so the
    ///   outermost link covers the whole list.
    fn cons_list<T, N>(
        &self,
        head: (usize, T),
        rest: Vec<(usize, T)>,
        single: impl Fn(T) -> N,
        multiple: impl Fn(T, Box<Spanned<N>>) -> N,
    ) -> Spanned<N> {
        let end = self.previous.end;
        let link = |start: usize, item: T, next: Option<Spanned<N>>| {
            let node = match next {
                Some(next) => multiple(item, Box::new(next)),
                None => single(item),
            };
            Spanned::new(node, Span::new(start, end.max(start)))
        };

        let mut chain = None;
        for (start, item) in rest.into_iter().rev() {
            chain = Some(link(start, item, chain));
        }
        let (start, item) = head;
        link(start, item, chain)
    }
}
