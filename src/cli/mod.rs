//! `trianglec`: command-line driver over the scanner, parser and tree printer.
//!
//! ```text
//! trianglec <FILE>           check syntax, report the first error
//! trianglec --lex <FILE>     list tokens with spans
//! trianglec --parse <FILE>   print the syntax tree
//! ```
//!
//! Commands return [`CliResult`]; [`run`] is the only place that prints a failure and exits.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::format::PrintConfig;
use crate::version::TRIANGLE_VERSION;

/// Process status handed back to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A failed command: text for stderr plus the status to exit with.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Shorthand for [`ExitCode::FAILURE`].
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, CliError>;

/// Scanner and parser for the extended Triangle language
#[derive(Parser, Debug)]
#[command(name = "trianglec")]
#[command(version = TRIANGLE_VERSION)]
#[command(about = "Scanner and parser for the extended Triangle language", long_about = None)]
pub struct Cli {
    /// File to syntax check (default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse and print the syntax tree
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Omit byte spans from the printed tree
    #[arg(long = "no-spans", requires = "parse_file")]
    pub no_spans: bool,

    /// Spaces per nesting level in the printed tree
    #[arg(long = "indent", value_name = "N", default_value_t = 2)]
    pub indent: usize,
}

impl Cli {
    /// Tree printing options selected on the command line.
    pub fn print_config(&self) -> PrintConfig {
        PrintConfig::new().with_indent_width(self.indent).with_spans(!self.no_spans)
    }
}

/// Parse `std::env::args`, run the selected command and exit on failure.
pub fn run() {
    let status = match execute(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            if !err.message.is_empty() {
                eprintln!("{err}");
            }
            err.exit_code
        }
    };
    if status != ExitCode::SUCCESS {
        process::exit(status.0);
    }
}

/// Dispatch a parsed command line.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(&file.to_string_lossy(), &cli.print_config());
    }

    match &cli.file {
        Some(file) => commands::check_file(&file.to_string_lossy()),
        None => Err(CliError::failure("Usage: trianglec [--lex | --parse] <FILE>")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["trianglec", "prog.tri"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("prog.tri")));
        assert!(cli.lex_file.is_none());
        assert!(cli.parse_file.is_none());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["trianglec", "--lex", "prog.tri"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["trianglec", "--parse", "prog.tri"]).unwrap();
        assert!(cli.parse_file.is_some());
    }

    #[test]
    fn test_cli_print_options() {
        let cli = Cli::try_parse_from(["trianglec", "--parse", "prog.tri", "--no-spans", "--indent", "4"]).unwrap();
        let config = cli.print_config();
        assert!(!config.show_spans);
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_cli_no_spans_requires_parse() {
        assert!(Cli::try_parse_from(["trianglec", "prog.tri", "--no-spans"]).is_err());
    }

    #[test]
    fn test_cli_lex_conflicts_with_file() {
        assert!(Cli::try_parse_from(["trianglec", "a.tri", "--lex", "b.tri"]).is_err());
    }

    #[test]
    fn test_execute_without_input_fails() {
        let cli = Cli::try_parse_from(["trianglec"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_cli_error_display() {
        let err = CliError::failure("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
