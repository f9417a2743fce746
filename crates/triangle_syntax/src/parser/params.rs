// Parameter parsing methods.
//
// Formal and actual parameter sequences are right-nested cons lists. An empty sequence is
// recognized only when the closing `)` follows immediately.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Formal parameters
    // ========================================================================

    /// `( FPS )`
    fn parenthesized_formals(&mut self) -> Result<Spanned<FormalParameterSequence>, SyntaxError> {
        self.accept_punct(PunctuationId::LParen)?;
        let params = self.formal_parameter_sequence()?;
        self.accept_punct(PunctuationId::RParen)?;
        Ok(params)
    }

    fn formal_parameter_sequence(&mut self) -> Result<Spanned<FormalParameterSequence>, SyntaxError> {
        if self.check_punct(PunctuationId::RParen) {
            return Ok(Spanned::new(FormalParameterSequence::Empty, Span::empty_at(self.start())));
        }

        let first = self.formal_parameter()?;
        let mut rest = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            let param = self.formal_parameter()?;
            rest.push((param.span.start, param));
        }
        Ok(self.cons_list(
            (first.span.start, first),
            rest,
            |param| {
                FormalParameterSequence::Single(SingleFormalParameterSequence {
                    parameter: Box::new(param),
                })
            },
            |param, rest| {
                FormalParameterSequence::Multiple(MultipleFormalParameterSequence {
                    parameter: Box::new(param),
                    rest,
                })
            },
        ))
    }

    fn formal_parameter(&mut self) -> Result<Spanned<FormalParameter>, SyntaxError> {
        let start = self.start();

        let param = match self.current.kind {
            TokenKind::Identifier => {
                let name = self.identifier()?;
                self.accept_punct(PunctuationId::Colon)?;
                let ty = self.type_denoter()?;
                FormalParameter::Const(ConstFormalParameter { name, ty: Box::new(ty) })
            }
            TokenKind::Keyword(KeywordId::Var) => {
                self.accept_it();
                let name = self.identifier()?;
                self.accept_punct(PunctuationId::Colon)?;
                let ty = self.type_denoter()?;
                FormalParameter::Var(VarFormalParameter { name, ty: Box::new(ty) })
            }
            TokenKind::Keyword(KeywordId::Proc) => {
                self.accept_it();
                let name = self.identifier()?;
                let params = self.parenthesized_formals()?;
                FormalParameter::Proc(ProcFormalParameter {
                    name,
                    params: Box::new(params),
                })
            }
            TokenKind::Keyword(KeywordId::Func) => {
                self.accept_it();
                let name = self.identifier()?;
                let params = self.parenthesized_formals()?;
                self.accept_punct(PunctuationId::Colon)?;
                let result_type = self.type_denoter()?;
                FormalParameter::Func(FuncFormalParameter {
                    name,
                    params: Box::new(params),
                    result_type: Box::new(result_type),
                })
            }
            _ => return Err(self.error("\"%\" cannot start a formal parameter")),
        };

        Ok(Spanned::new(param, self.finish(start)))
    }

    // ========================================================================
    // Actual parameters
    // ========================================================================

    /// `( APS )`
    fn parenthesized_actuals(&mut self) -> Result<Spanned<ActualParameterSequence>, SyntaxError> {
        self.accept_punct(PunctuationId::LParen)?;
        let args = self.actual_parameter_sequence()?;
        self.accept_punct(PunctuationId::RParen)?;
        Ok(args)
    }

    fn actual_parameter_sequence(&mut self) -> Result<Spanned<ActualParameterSequence>, SyntaxError> {
        if self.check_punct(PunctuationId::RParen) {
            return Ok(Spanned::new(ActualParameterSequence::Empty, Span::empty_at(self.start())));
        }

        let first = self.actual_parameter()?;
        let mut rest = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            let arg = self.actual_parameter()?;
            rest.push((arg.span.start, arg));
        }
        Ok(self.cons_list(
            (first.span.start, first),
            rest,
            |arg| {
                ActualParameterSequence::Single(SingleActualParameterSequence {
                    parameter: Box::new(arg),
                })
            },
            |arg, rest| {
                ActualParameterSequence::Multiple(MultipleActualParameterSequence {
                    parameter: Box::new(arg),
                    rest,
                })
            },
        ))
    }

    fn actual_parameter(&mut self) -> Result<Spanned<ActualParameter>, SyntaxError> {
        let start = self.start();

        let arg = match self.current.kind {
            TokenKind::Keyword(KeywordId::Var) => {
                self.accept_it();
                let vname = self.vname()?;
                ActualParameter::Var(VarActualParameter { vname: Box::new(vname) })
            }
            TokenKind::Keyword(KeywordId::Proc) => {
                self.accept_it();
                ActualParameter::Proc(ProcActualParameter {
                    name: self.identifier()?,
                })
            }
            TokenKind::Keyword(KeywordId::Func) => {
                self.accept_it();
                ActualParameter::Func(FuncActualParameter {
                    name: self.identifier()?,
                })
            }
            TokenKind::IntLiteral
            | TokenKind::CharLiteral
            | TokenKind::Identifier
            | TokenKind::Operator
            | TokenKind::Keyword(KeywordId::Let | KeywordId::If)
            | TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LCurly) => {
                let value = self.expression()?;
                ActualParameter::Const(ConstActualParameter { value: Box::new(value) })
            }
            _ => return Err(self.error("\"%\" cannot start an actual parameter")),
        };

        Ok(Spanned::new(arg, self.finish(start)))
    }
}
