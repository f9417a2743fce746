// Type denoter parsing methods.
//
// `array N of T` and `array N..M of T` share a prefix and are told apart by the token after
// the first integer literal.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_denoter(&mut self) -> Result<Spanned<TypeDenoter>, SyntaxError> {
        let start = self.start();

        let ty = match self.current.kind {
            TokenKind::Identifier => TypeDenoter::Simple(SimpleTypeDenoter {
                name: self.identifier()?,
            }),
            TokenKind::Keyword(KeywordId::Array) => {
                self.accept_it();
                let length = self.integer_literal()?;
                match self.current.kind {
                    TokenKind::Keyword(KeywordId::Of) => {
                        self.accept_it();
                        let element = self.type_denoter()?;
                        TypeDenoter::ArrayDynamic(ArrayTypeDenoter {
                            length,
                            element: Box::new(element),
                        })
                    }
                    TokenKind::Punctuation(PunctuationId::DotDot) => {
                        self.accept_it();
                        let upper = self.integer_literal()?;
                        self.accept_keyword(KeywordId::Of)?;
                        let element = self.type_denoter()?;
                        TypeDenoter::ArrayStatic(StaticArrayTypeDenoter {
                            lower: length,
                            upper,
                            element: Box::new(element),
                        })
                    }
                    _ => return Err(self.error("\"%\" cannot follow an array length, \"of\" or \"..\" expected")),
                }
            }
            TokenKind::Keyword(KeywordId::Record) => {
                self.accept_it();
                let fields = self.field_type_denoter()?;
                self.accept_keyword(KeywordId::End)?;
                TypeDenoter::Record(RecordTypeDenoter {
                    fields: Box::new(fields),
                })
            }
            _ => return Err(self.error("\"%\" cannot start a type denoter")),
        };

        Ok(Spanned::new(ty, self.finish(start)))
    }

    /// `I : T ("," I : T)*` as a right-nested chain.
    fn field_type_denoter(&mut self) -> Result<Spanned<FieldTypeDenoter>, SyntaxError> {
        let head = (self.start(), self.field_type()?);
        let mut rest = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            rest.push((self.start(), self.field_type()?));
        }
        Ok(self.cons_list(
            head,
            rest,
            |(name, ty)| FieldTypeDenoter::Single(SingleFieldTypeDenoter { name, ty: Box::new(ty) }),
            |(name, ty), rest| {
                FieldTypeDenoter::Multiple(MultipleFieldTypeDenoter {
                    name,
                    ty: Box::new(ty),
                    rest,
                })
            },
        ))
    }

    fn field_type(&mut self) -> Result<(Identifier, Spanned<TypeDenoter>), SyntaxError> {
        let name = self.identifier()?;
        self.accept_punct(PunctuationId::Colon)?;
        let ty = self.type_denoter()?;
        Ok((name, ty))
    }
}
