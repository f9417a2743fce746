//! Syntax diagnostics: the error value, the sink protocol, and two sink implementations.
//!
//! A diagnostic is a message *template* with one `%` placeholder, the offending token's spelling,
//! and the offending token's span. The parser produces at most one per parse.
//!
//! ## Examples
//! ```rust
//! use triangle_syntax::ast::Span;
//! use triangle_syntax::diagnostics::{CollectingSink, DiagnosticSink};
//!
//! let mut sink = CollectingSink::new();
//! sink.report_error("\"%\" cannot start a command", "then", Span::new(4, 8));
//! assert_eq!(sink.diagnostics()[0].message, "\"then\" cannot start a command");
//! ```

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};

use crate::ast::Span;

/// Placeholder replaced by the offending spelling.
pub const PLACEHOLDER: char = '%';

/// Substitute `spelling` for the placeholder in `template`.
pub fn fill_template(template: &str, spelling: &str) -> String {
    template.replacen(PLACEHOLDER, spelling, 1)
}

// ============================================================================
// Error values
// ============================================================================

/// The single syntax error kind: the first malformed construct aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", fill_template(.template, .spelling))]
pub struct SyntaxError {
    pub template: String,
    pub spelling: String,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(template: impl Into<String>, spelling: impl Into<String>, span: Span) -> Self {
        Self {
            template: template.into(),
            spelling: spelling.into(),
            span,
        }
    }

    /// The rendered message.
    pub fn message(&self) -> String {
        fill_template(&self.template, &self.spelling)
    }

    /// Attach source text so the error can be rendered by `miette`.
    pub fn with_source(&self, name: &str, source: &str) -> SourceDiagnostic {
        SourceDiagnostic::new(name, source, self.message(), self.span)
    }
}

/// Returned by `parse_program` once its one diagnostic has been handed to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("syntax error (reported)")]
pub struct ParseFailure;

/// A syntax diagnostic with its source attached, rendered through `miette`.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
#[diagnostic(code(triangle::syntax))]
pub struct SourceDiagnostic {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
}

impl SourceDiagnostic {
    pub fn new(name: &str, source: &str, message: String, span: Span) -> Self {
        Self {
            message,
            source_code: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from((span.start, span.len())),
        }
    }

    /// Render without colors, suitable for logs and tests.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        if handler.render_report(&mut out, self).is_err() {
            // Fall back to the bare message if the handler cannot lay out the snippet.
            out = self.message.clone();
        }
        out
    }
}

// ============================================================================
// Sinks
// ============================================================================

/// Receiver of syntax diagnostics.
pub trait DiagnosticSink {
    /// Report one error; `template` contains a single `%` for `spelling`.
    fn report_error(&mut self, template: &str, spelling: &str, span: Span);
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &mut D {
    fn report_error(&mut self, template: &str, spelling: &str, span: Span) {
        (**self).report_error(template, spelling, span);
    }
}

/// One collected diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub template: String,
    pub spelling: String,
    pub span: Span,
}

/// A sink that keeps every reported diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report_error(&mut self, template: &str, spelling: &str, span: Span) {
        self.diagnostics.push(Diagnostic {
            message: fill_template(template, spelling),
            template: template.to_string(),
            spelling: spelling.to_string(),
            span,
        });
    }
}

/// A sink that renders each diagnostic against the source text with `miette`.
#[derive(Debug)]
pub struct RenderingSink<'a> {
    name: &'a str,
    source: &'a str,
    rendered: String,
    errors: usize,
}

impl<'a> RenderingSink<'a> {
    pub fn new(name: &'a str, source: &'a str) -> Self {
        Self {
            name,
            source,
            rendered: String::new(),
            errors: 0,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Everything rendered so far.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn into_rendered(self) -> String {
        self.rendered
    }
}

impl DiagnosticSink for RenderingSink<'_> {
    fn report_error(&mut self, template: &str, spelling: &str, span: Span) {
        let report = SourceDiagnostic::new(self.name, self.source, fill_template(template, spelling), span);
        self.rendered.push_str(&report.render());
        self.errors += 1;
    }
}
