// Declaration parsing methods.
//
// This chunk parses declaration sequences, the compound forms (`rec` groups and `private`
// scopes), and the single declarations: `const`, `var`, `proc`, `func` and `type`.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `CompoundDeclaration (";" CompoundDeclaration)*`, left-associated.
    fn declaration(&mut self) -> Result<Spanned<Declaration>, SyntaxError> {
        let start = self.start();
        let mut declaration = self.compound_declaration()?;
        while self.match_punct(PunctuationId::Semicolon) {
            let second = self.compound_declaration()?;
            declaration = Spanned::new(
                Declaration::Sequential(SequentialDeclaration {
                    first: Box::new(declaration),
                    second: Box::new(second),
                }),
                self.finish(start),
            );
        }
        Ok(declaration)
    }

    fn compound_declaration(&mut self) -> Result<Spanned<Declaration>, SyntaxError> {
        let start = self.start();

        let declaration = match self.current.kind {
            TokenKind::Keyword(KeywordId::Rec) => {
                self.accept_it();
                let group = self.proc_funcs()?;
                self.accept_keyword(KeywordId::End)?;
                Declaration::Rec(RecDeclaration { group: Box::new(group) })
            }
            TokenKind::Keyword(KeywordId::Private) => {
                self.accept_it();
                let local = self.declaration()?;
                self.accept_keyword(KeywordId::In)?;
                let body = self.declaration()?;
                self.accept_keyword(KeywordId::End)?;
                Declaration::Private(PrivateDeclaration {
                    local: Box::new(local),
                    body: Box::new(body),
                })
            }
            _ => return self.single_declaration(),
        };

        Ok(Spanned::new(declaration, self.finish(start)))
    }

    fn single_declaration(&mut self) -> Result<Spanned<Declaration>, SyntaxError> {
        let start = self.start();

        let declaration = match self.current.kind {
            TokenKind::Keyword(KeywordId::Const) => {
                self.accept_it();
                let name = self.identifier()?;
                self.accept_punct(PunctuationId::Is)?;
                let value = self.expression()?;
                Declaration::Const(ConstDeclaration {
                    name,
                    value: Box::new(value),
                })
            }
            TokenKind::Keyword(KeywordId::Var) => {
                self.accept_it();
                let name = self.identifier()?;
                match self.current.kind {
                    TokenKind::Punctuation(PunctuationId::Colon) => {
                        self.accept_it();
                        let ty = self.type_denoter()?;
                        Declaration::Var(VarDeclaration { name, ty: Box::new(ty) })
                    }
                    TokenKind::Punctuation(PunctuationId::Becomes) => {
                        self.accept_it();
                        let value = self.expression()?;
                        Declaration::VarInitialized(VarInitializedDeclaration {
                            name,
                            value: Box::new(value),
                        })
                    }
                    _ => return Err(self.error("\"%\" cannot follow a variable name, \":\" or \":=\" expected")),
                }
            }
            TokenKind::Keyword(KeywordId::Proc) => {
                let (name, params) = self.proc_heading()?;
                let body = self.command()?;
                self.accept_keyword(KeywordId::End)?;
                Declaration::Proc(ProcDeclaration {
                    name,
                    params,
                    body: Box::new(body),
                })
            }
            TokenKind::Keyword(KeywordId::Func) => Declaration::Func(self.func_declaration()?),
            TokenKind::Keyword(KeywordId::Type) => {
                self.accept_it();
                let name = self.identifier()?;
                self.accept_punct(PunctuationId::Is)?;
                let ty = self.type_denoter()?;
                Declaration::Type(TypeDeclaration { name, ty: Box::new(ty) })
            }
            _ => return Err(self.error("\"%\" cannot start a declaration")),
        };

        Ok(Spanned::new(declaration, self.finish(start)))
    }

    /// `proc I ( FPS ) ~`; the caller parses the body.
    fn proc_heading(&mut self) -> Result<(Identifier, Box<Spanned<FormalParameterSequence>>), SyntaxError> {
        self.accept_keyword(KeywordId::Proc)?;
        let name = self.identifier()?;
        let params = self.parenthesized_formals()?;
        self.accept_punct(PunctuationId::Is)?;
        Ok((name, Box::new(params)))
    }

    /// `func I ( FPS ) : T ~ E`
    fn func_declaration(&mut self) -> Result<FuncDeclaration, SyntaxError> {
        self.accept_keyword(KeywordId::Func)?;
        let name = self.identifier()?;
        let params = self.parenthesized_formals()?;
        self.accept_punct(PunctuationId::Colon)?;
        let result_type = self.type_denoter()?;
        self.accept_punct(PunctuationId::Is)?;
        let body = self.expression()?;
        Ok(FuncDeclaration {
            name,
            params: Box::new(params),
            result_type: Box::new(result_type),
            body: Box::new(body),
        })
    }

    // ========================================================================
    // Recursive groups
    // ========================================================================

    /// `ProcFunc "and" ProcFunc ("and" ProcFunc)*` as a right-nested chain.
    ///
    /// ## Notes
    /// - The second member is required before the loop condition is checked, so a group of one
    ///   fails with `"and" expected here`.
    fn proc_funcs(&mut self) -> Result<Spanned<ProcFuncs>, SyntaxError> {
        let first = self.proc_func()?;
        self.accept_keyword(KeywordId::And)?;
        let mut last = self.proc_func()?;
        let mut middle = Vec::new();
        while self.check_keyword(KeywordId::And) {
            self.accept_it();
            let next = self.proc_func()?;
            middle.push(std::mem::replace(&mut last, next));
        }

        let end = self.previous.end;
        let mut tail = ProcFuncsTail::Last(Box::new(last));
        for member in middle.into_iter().rev() {
            let start = member.span.start;
            tail = ProcFuncsTail::More(Box::new(Spanned::new(
                ProcFuncs {
                    head: Box::new(member),
                    tail,
                },
                Span::new(start, end.max(start)),
            )));
        }
        let start = first.span.start;
        Ok(Spanned::new(
            ProcFuncs {
                head: Box::new(first),
                tail,
            },
            Span::new(start, end.max(start)),
        ))
    }

    /// A `rec` group member: a `proc` whose body is a single command, or a `func`.
    fn proc_func(&mut self) -> Result<Spanned<ProcFunc>, SyntaxError> {
        let start = self.start();

        let member = match self.current.kind {
            TokenKind::Keyword(KeywordId::Proc) => {
                let (name, params) = self.proc_heading()?;
                let body = self.single_command()?;
                ProcFunc::Proc(ProcDeclaration {
                    name,
                    params,
                    body: Box::new(body),
                })
            }
            TokenKind::Keyword(KeywordId::Func) => ProcFunc::Func(self.func_declaration()?),
            _ => return Err(self.error("\"%\" cannot start a recursive declaration member")),
        };

        Ok(Spanned::new(member, self.finish(start)))
    }
}
