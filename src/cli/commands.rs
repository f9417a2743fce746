//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io;

use crate::format::{PrintConfig, print_program};
use crate::frontend::ast::Program;
use crate::frontend::diagnostics::RenderingSink;
use crate::frontend::lexer::{self, Lexer, Token};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB) to prevent memory exhaustion
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Failure to load a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Cannot access file '{path}': {source}")]
    Access { path: String, source: io::Error },
    #[error("Source file '{path}' is too large ({size} bytes, max {max} bytes)", max = MAX_SOURCE_SIZE)]
    TooLarge { path: String, size: u64 },
    #[error("Error reading file '{path}': {source}")]
    Read { path: String, source: io::Error },
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Read a source file with size validation.
///
/// Returns an error if:
/// - The file cannot be accessed
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> Result<String, SourceError> {
    let path = file_path.to_string();
    let metadata = fs::metadata(file_path).map_err(|source| SourceError::Access {
        path: path.clone(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path,
            size: metadata.len(),
        });
    }

    fs::read_to_string(file_path).map_err(|source| SourceError::Read { path, source })
}

/// One line per token: span, kind, spelling.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        out.push_str(&format!(
            "{:<10} {:<22} {}\n",
            tok.span.to_string(),
            format!("{:?}", tok.kind),
            tok.display_spelling()
        ));
    }
    out
}

/// Parse `source`, rendering the diagnostic (if any) against `name`.
///
/// ## Errors
/// Returns the rendered report when the source does not parse.
pub fn parse_named(name: &str, source: &str) -> Result<Program, String> {
    let mut sink = RenderingSink::new(name, source);
    let parsed = crate::frontend::parser::parse_program(Lexer::new(source), &mut sink);
    tracing::debug!(file = name, errors = sink.error_count(), "parse finished");
    parsed.map_err(|_| sink.into_rendered())
}

/// Tokenize and print the token stream.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);
    for tok in &tokens {
        tracing::trace!(kind = ?tok.kind, spelling = %tok.spelling, span = %tok.span, "token");
    }
    print!("{}", render_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Parse and print the syntax tree.
pub fn parse_file(file_path: &str, config: &PrintConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let program = parse_named(file_path, &source).map_err(|report| CliError::failure(report.trim_end()))?;
    print!("{}", print_program(&program, config));
    Ok(ExitCode::SUCCESS)
}

/// Syntax check a file.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    parse_named(file_path, &source).map_err(|report| CliError::failure(report.trim_end()))?;
    println!("✓ Syntax check passed!");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tokens_one_line_per_token() {
        let rendered = render_tokens(&lexer::lex("x := 'a'"));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("0..1"));
        assert!(lines[0].ends_with(" x"));
        assert!(lines[2].ends_with(" 'a'"));
        assert!(lines[3].ends_with(" end-of-text"));
    }

    #[test]
    fn test_render_tokens_layout() {
        let rendered = render_tokens(&lexer::lex("x"));
        insta::assert_snapshot!(rendered.lines().next().unwrap(), @"0..1       Identifier             x");
    }

    #[test]
    fn test_parse_named_ok() {
        let program = parse_named("ok.tri", "total := 1").unwrap();
        assert_eq!(program.span.start, 0);
    }

    #[test]
    fn test_parse_named_renders_one_report() {
        let report = parse_named("bad.tri", "x := ;").unwrap_err();
        assert!(report.contains("bad.tri"));
        assert!(report.contains("\";\" cannot start an expression"));
        assert_eq!(report.matches("cannot start").count(), 1);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.tri").unwrap_err();
        assert!(matches!(err, SourceError::Access { .. }));

        let cli_err = CliError::from(err);
        assert_eq!(cli_err.exit_code, ExitCode::FAILURE);
        assert!(cli_err.message.starts_with("Cannot access file 'definitely/not/here.tri'"));
    }
}
