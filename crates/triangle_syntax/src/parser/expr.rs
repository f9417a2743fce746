// Expression parsing methods.
//
// Binary operators are all at one level: `a + b * c` is `(a + b) * c`. Operator precedence is
// left to later passes.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expression>, SyntaxError> {
        let start = self.start();

        let expr = match self.current.kind {
            TokenKind::Keyword(KeywordId::Let) => {
                self.accept_it();
                let declaration = self.declaration()?;
                self.accept_keyword(KeywordId::In)?;
                let body = self.expression()?;
                Expression::Let(LetExpression {
                    declaration: Box::new(declaration),
                    body: Box::new(body),
                })
            }
            TokenKind::Keyword(KeywordId::If) => {
                self.accept_it();
                let condition = self.expression()?;
                self.accept_keyword(KeywordId::Then)?;
                let consequent = self.expression()?;
                self.accept_keyword(KeywordId::Else)?;
                let alternative = self.expression()?;
                Expression::If(IfExpression {
                    condition: Box::new(condition),
                    consequent: Box::new(consequent),
                    alternative: Box::new(alternative),
                })
            }
            _ => return self.secondary_expression(),
        };

        Ok(Spanned::new(expr, self.finish(start)))
    }

    /// `PrimaryExpression (Operator PrimaryExpression)*`, left-associated.
    fn secondary_expression(&mut self) -> Result<Spanned<Expression>, SyntaxError> {
        let start = self.start();
        let mut expr = self.primary_expression()?;
        while self.current.kind == TokenKind::Operator {
            let operator = self.operator()?;
            let right = self.primary_expression()?;
            expr = Spanned::new(
                Expression::Binary(BinaryExpression {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                }),
                self.finish(start),
            );
        }
        Ok(expr)
    }

    fn primary_expression(&mut self) -> Result<Spanned<Expression>, SyntaxError> {
        let start = self.start();

        let expr = match self.current.kind {
            TokenKind::IntLiteral => Expression::Integer(IntegerExpression {
                literal: self.integer_literal()?,
            }),
            TokenKind::CharLiteral => Expression::Character(CharacterExpression {
                literal: self.character_literal()?,
            }),
            TokenKind::Punctuation(PunctuationId::LBracket) => {
                self.accept_it();
                let aggregate = self.array_aggregate()?;
                self.accept_punct(PunctuationId::RBracket)?;
                Expression::Array(ArrayExpression {
                    aggregate: Box::new(aggregate),
                })
            }
            TokenKind::Punctuation(PunctuationId::LCurly) => {
                self.accept_it();
                let aggregate = self.record_aggregate()?;
                self.accept_punct(PunctuationId::RCurly)?;
                Expression::Record(RecordExpression {
                    aggregate: Box::new(aggregate),
                })
            }
            TokenKind::Identifier => {
                let name = self.identifier()?;
                if self.check_punct(PunctuationId::LParen) {
                    let args = self.parenthesized_actuals()?;
                    Expression::Call(CallExpression {
                        callee: name,
                        args: Box::new(args),
                    })
                } else {
                    let vname = self.rest_of_vname(name, start)?;
                    Expression::Vname(VnameExpression { vname: Box::new(vname) })
                }
            }
            TokenKind::Operator => {
                let operator = self.operator()?;
                let operand = self.primary_expression()?;
                Expression::Unary(UnaryExpression {
                    operator,
                    operand: Box::new(operand),
                })
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.accept_it();
                let inner = self.expression()?;
                self.accept_punct(PunctuationId::RParen)?;
                // Re-stamp so the node covers its parentheses.
                inner.node
            }
            _ => return Err(self.error("\"%\" cannot start an expression")),
        };

        Ok(Spanned::new(expr, self.finish(start)))
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// `Expression ("," Expression)*` as a right-nested chain.
    fn array_aggregate(&mut self) -> Result<Spanned<ArrayAggregate>, SyntaxError> {
        let head = (self.start(), self.expression()?);
        let mut rest = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            rest.push((self.start(), self.expression()?));
        }
        Ok(self.cons_list(
            head,
            rest,
            |element| {
                ArrayAggregate::Single(SingleArrayAggregate {
                    element: Box::new(element),
                })
            },
            |element, rest| {
                ArrayAggregate::Multiple(MultipleArrayAggregate {
                    element: Box::new(element),
                    rest,
                })
            },
        ))
    }

    /// `I ~ E ("," I ~ E)*` as a right-nested chain.
    fn record_aggregate(&mut self) -> Result<Spanned<RecordAggregate>, SyntaxError> {
        let head = (self.start(), self.record_field()?);
        let mut rest = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            rest.push((self.start(), self.record_field()?));
        }
        Ok(self.cons_list(
            head,
            rest,
            |(field, value)| {
                RecordAggregate::Single(SingleRecordAggregate {
                    field,
                    value: Box::new(value),
                })
            },
            |(field, value), rest| {
                RecordAggregate::Multiple(MultipleRecordAggregate {
                    field,
                    value: Box::new(value),
                    rest,
                })
            },
        ))
    }

    fn record_field(&mut self) -> Result<(Identifier, Spanned<Expression>), SyntaxError> {
        let field = self.identifier()?;
        self.accept_punct(PunctuationId::Is)?;
        let value = self.expression()?;
        Ok((field, value))
    }
}
