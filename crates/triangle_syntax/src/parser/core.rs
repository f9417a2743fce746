// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type and its top-level `parse()` / `parse_program()`
// entrypoints.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// Parser state: the lookahead token and the span of the last consumed token.
///
/// ## Notes
/// - A parser is one-shot: both entrypoints take `self` by value.
/// - Every routine captures its start offset from the lookahead, and stamps its node with
///   `finish` once its last token is consumed.
pub struct Parser<S: TokenSource> {
    source: S,
    current: Token,
    previous: Span,
}

impl<S: TokenSource> Parser<S> {
    /// Create a new parser, pulling the first lookahead token from `source`.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let previous = Span::empty_at(current.span.start);
        Self {
            source,
            current,
            previous,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`]; no partial tree is produced.
    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        let start = self.start();
        let command = self.command()?;
        if self.current.kind != TokenKind::EndOfText {
            return Err(self.error("\"%\" not expected after end of program"));
        }
        Ok(Program {
            command,
            span: self.finish(start),
        })
    }

    /// Parse the entire token stream, reporting the first syntax error to `sink`.
    ///
    /// ## Errors
    /// Returns [`ParseFailure`] after exactly one `report_error` call on `sink`.
    pub fn parse_program<D: DiagnosticSink + ?Sized>(self, sink: &mut D) -> Result<Program, ParseFailure> {
        self.parse().map_err(|err| {
            tracing::debug!(span = %err.span, spelling = %err.spelling, "parse aborted");
            sink.report_error(&err.template, &err.spelling, err.span);
            ParseFailure
        })
    }
}
