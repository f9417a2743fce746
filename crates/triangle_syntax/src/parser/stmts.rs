// Command parsing methods.
//
// This chunk parses command forms: sequencing, assignment and calls, `let`, `if` with its
// `elsif` chain, and the four `loop` forms.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Commands
    // ========================================================================

    /// `Command ::= SingleCommand (";" SingleCommand)*`, left-associated.
    fn command(&mut self) -> Result<Spanned<Command>, SyntaxError> {
        let start = self.start();
        let mut command = self.single_command()?;
        while self.match_punct(PunctuationId::Semicolon) {
            let second = self.single_command()?;
            command = Spanned::new(
                Command::Sequential(SequentialCommand {
                    first: Box::new(command),
                    second: Box::new(second),
                }),
                self.finish(start),
            );
        }
        Ok(command)
    }

    fn single_command(&mut self) -> Result<Spanned<Command>, SyntaxError> {
        let start = self.start();

        let command = match self.current.kind {
            TokenKind::Identifier => {
                let name = self.identifier()?;
                if self.check_punct(PunctuationId::LParen) {
                    let args = self.parenthesized_actuals()?;
                    Command::Call(CallCommand { callee: name, args })
                } else {
                    let target = self.rest_of_vname(name, start)?;
                    self.accept_punct(PunctuationId::Becomes)?;
                    let value = self.expression()?;
                    Command::Assign(AssignCommand { target, value })
                }
            }
            TokenKind::Keyword(KeywordId::Loop) => return self.loop_command(),
            TokenKind::Keyword(KeywordId::Let) => {
                self.accept_it();
                let declaration = self.declaration()?;
                self.accept_keyword(KeywordId::In)?;
                let body = self.command()?;
                self.accept_keyword(KeywordId::End)?;
                Command::Let(LetCommand {
                    declaration: Box::new(declaration),
                    body: Box::new(body),
                })
            }
            TokenKind::Keyword(KeywordId::If) => {
                self.accept_it();
                let condition = self.expression()?;
                self.accept_keyword(KeywordId::Then)?;
                let then_branch = self.command()?;
                let alternative = self.else_branch()?;
                self.accept_keyword(KeywordId::End)?;
                Command::If(IfCommand {
                    condition,
                    then_branch: Box::new(then_branch),
                    alternative,
                })
            }
            TokenKind::Keyword(KeywordId::Nothing) => {
                self.accept_it();
                Command::Nothing
            }
            // The empty command: only where a command may legitimately be absent.
            TokenKind::Punctuation(PunctuationId::Semicolon)
            | TokenKind::Keyword(KeywordId::End | KeywordId::Else | KeywordId::In)
            | TokenKind::EndOfText => return Ok(Spanned::new(Command::Nothing, Span::empty_at(start))),
            _ => return Err(self.error("\"%\" cannot start a command")),
        };

        Ok(Spanned::new(command, self.finish(start)))
    }

    /// The `elsif ... else C` continuation of an if command, up to its closing `end`.
    ///
    /// ## Notes
    /// - Arms are collected in source order, then folded from the right so the first
    ///   condition is outermost.
    fn else_branch(&mut self) -> Result<ElseBranch, SyntaxError> {
        let mut arms = Vec::new();
        loop {
            if self.check_keyword(KeywordId::Elsif) {
                let start = self.start();
                self.accept_it();
                let condition = self.expression()?;
                self.accept_keyword(KeywordId::Then)?;
                let then_branch = self.command()?;
                arms.push((start, condition, then_branch));
            } else if self.check_keyword(KeywordId::Else) {
                self.accept_it();
                break;
            } else {
                return Err(self.error("\"%\" cannot continue an if command, \"elsif\" or \"else\" expected"));
            }
        }

        let otherwise = self.command()?;
        let end = self.previous.end;
        let mut branch = ElseBranch::Else(Box::new(otherwise));
        for (start, condition, then_branch) in arms.into_iter().rev() {
            branch = ElseBranch::Elsif(Box::new(Spanned::new(
                ElsifCommand {
                    condition,
                    then_branch: Box::new(then_branch),
                    alternative: branch,
                },
                Span::new(start, end.max(start)),
            )));
        }
        Ok(branch)
    }

    /// `loop` followed by one of the `while`, `until`, `do` or `for` forms.
    fn loop_command(&mut self) -> Result<Spanned<Command>, SyntaxError> {
        let start = self.start();
        self.accept_keyword(KeywordId::Loop)?;

        let command = match self.current.kind {
            TokenKind::Keyword(KeywordId::While) => {
                self.accept_it();
                let condition = self.expression()?;
                let body = self.loop_body()?;
                Command::While(WhileCommand { condition, body })
            }
            TokenKind::Keyword(KeywordId::Until) => {
                self.accept_it();
                let condition = self.expression()?;
                let body = self.loop_body()?;
                Command::Until(UntilCommand { condition, body })
            }
            TokenKind::Keyword(KeywordId::Do) => {
                self.accept_it();
                let body = Box::new(self.command()?);
                let command = match self.current.kind {
                    TokenKind::Keyword(KeywordId::While) => {
                        self.accept_it();
                        let condition = self.expression()?;
                        Command::DoWhile(DoWhileCommand { body, condition })
                    }
                    TokenKind::Keyword(KeywordId::Until) => {
                        self.accept_it();
                        let condition = self.expression()?;
                        Command::DoUntil(DoUntilCommand { body, condition })
                    }
                    _ => return Err(self.error("\"%\" cannot end a do loop, \"while\" or \"until\" expected")),
                };
                self.accept_keyword(KeywordId::End)?;
                command
            }
            TokenKind::Keyword(KeywordId::For) => {
                self.accept_it();
                let variable = self.identifier()?;
                self.accept_punct(PunctuationId::Becomes)?;
                let from = self.expression()?;
                self.accept_keyword(KeywordId::To)?;
                let to = self.expression()?;
                let body = self.loop_body()?;
                Command::For(ForCommand { variable, from, to, body })
            }
            _ => return Err(self.error("\"%\" cannot start a loop command")),
        };

        Ok(Spanned::new(command, self.finish(start)))
    }

    /// `do C end`
    fn loop_body(&mut self) -> Result<Box<Spanned<Command>>, SyntaxError> {
        self.accept_keyword(KeywordId::Do)?;
        let body = self.command()?;
        self.accept_keyword(KeywordId::End)?;
        Ok(Box::new(body))
    }
}
