/// Parse a token stream into an AST [`Program`], reporting the first syntax error to `sink`.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Any [`TokenSource`], e.g. a [`Lexer`] or a [`TokenSlice`].
/// - `sink`: Receives exactly one diagnostic if parsing fails, none otherwise.
///
/// ## Errors
/// Returns [`ParseFailure`] once the diagnostic has been reported.
#[tracing::instrument(skip_all)]
pub fn parse_program<S, D>(tokens: S, sink: &mut D) -> Result<Program, ParseFailure>
where
    S: TokenSource,
    D: DiagnosticSink + ?Sized,
{
    Parser::new(tokens).parse_program(sink)
}

/// Parse an already-scanned token slice, returning the syntax error as a value.
///
/// ## Errors
/// Returns the first [`SyntaxError`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    Parser::new(TokenSlice::new(tokens)).parse()
}

/// Scan and parse `source` in one pass.
///
/// ## Errors
/// Returns the first [`SyntaxError`].
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    Parser::new(Lexer::new(source)).parse()
}
