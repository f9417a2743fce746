//! Triangle Tree Printer
//!
//! Renders a parsed [`Program`] as an indented outline, one node per line:
//! - node kind (`AssignCommand`, `SimpleVname`, ...)
//! - terminal spelling (identifiers, literals, operators)
//! - half-open byte span `start..end`

mod config;
mod printer;
mod writer;

pub use config::PrintConfig;
pub use printer::TreePrinter;
pub use writer::FormatWriter;

use crate::frontend::ast::Program;
use crate::frontend::diagnostics::SyntaxError;
use crate::frontend::parser;
use crate::frontend::visitor::Visitable;

/// Print an already-parsed program
pub fn print_program(program: &Program, config: &PrintConfig) -> String {
    let mut writer = FormatWriter::new(config.clone());
    program.accept(&mut TreePrinter, &mut writer);
    writer.finish()
}

/// Parse `source` and print the resulting tree
///
/// ## Errors
/// Returns the first [`SyntaxError`] if `source` does not parse.
pub fn print_source(source: &str, config: &PrintConfig) -> Result<String, SyntaxError> {
    let program = parser::parse_source(source)?;
    Ok(print_program(&program, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(source: &str) -> String {
        print_source(source, &PrintConfig::default()).unwrap()
    }

    #[test]
    fn test_print_assignment() {
        let expected = [
            "Program 0..6",
            "  AssignCommand 0..6",
            "    SimpleVname 0..1",
            "      Identifier x 0..1",
            "    IntegerExpression 5..6",
            "      IntegerLiteral 1 5..6",
            "",
        ]
        .join("\n");
        assert_eq!(outline("x := 1"), expected);
    }

    #[test]
    fn test_print_without_spans() {
        let config = PrintConfig::new().with_spans(false);
        let expected = [
            "Program",
            "  CallCommand",
            "    Identifier putint",
            "    SingleActualParameterSequence",
            "      ConstActualParameter",
            "        BinaryExpression",
            "          VnameExpression",
            "            SimpleVname",
            "              Identifier n",
            "          Operator +",
            "          IntegerExpression",
            "            IntegerLiteral 1",
            "",
        ]
        .join("\n");
        assert_eq!(print_source("putint(n + 1)", &config).unwrap(), expected);
    }

    #[test]
    fn test_print_empty_command_and_parameters() {
        let config = PrintConfig::new().with_spans(false).with_spellings(false);
        let expected = [
            "Program",
            "  LetCommand",
            "    ProcDeclaration",
            "      Identifier",
            "      EmptyFormalParameterSequence",
            "      NothingCommand",
            "    CallCommand",
            "      Identifier",
            "      EmptyActualParameterSequence",
            "",
        ]
        .join("\n");
        let source = "let proc p () ~ nothing end in p() end";
        assert_eq!(print_source(source, &config).unwrap(), expected);
    }

    #[test]
    fn test_print_elsif_chain_nests_arms() {
        let config = PrintConfig::new().with_spans(false).with_indent_width(1);
        let printed = print_source("if a then nothing elsif b then nothing else nothing end", &config).unwrap();
        let kinds: Vec<&str> = printed.lines().map(str::trim_start).filter(|l| l.ends_with("Command")).collect();
        assert_eq!(
            kinds,
            ["IfCommand", "NothingCommand", "ElsifCommand", "NothingCommand", "NothingCommand"]
        );
        assert!(printed.contains("\n  ElsifCommand\n"));
    }

    #[test]
    fn test_print_source_propagates_syntax_error() {
        let err = print_source("x :=", &PrintConfig::default()).unwrap_err();
        assert_eq!(err.message(), "\"end-of-text\" cannot start an expression");
    }
}
