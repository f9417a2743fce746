//! Syntax front end for the extended Triangle language: scanner, parser, AST, diagnostics.
//!
//! The crate turns source text (or any pull-based token stream) into an abstract syntax tree,
//! or stops at the first malformed construct with exactly one located diagnostic.
//!
//! ## Notes
//! - This crate is “syntax-only”: no scope checks, no type checks, no code generation. Downstream
//!   passes consume the tree through [`visitor::Visitor`].
//! - Vocabulary identity (reserved words, punctuation, the token-kind numbering) comes from
//!   `triangle_core::lang`.
//!
//! ## Examples
//! ```rust
//! use triangle_syntax::ast::Command;
//! use triangle_syntax::diagnostics::CollectingSink;
//! use triangle_syntax::{lexer::Lexer, parser};
//!
//! let source = "let var n : Integer in n := 3 end";
//! let mut sink = CollectingSink::new();
//! let program = parser::parse_program(Lexer::new(source), &mut sink).unwrap();
//! assert!(matches!(program.command.node, Command::Let(_)));
//! assert_eq!(&source[program.span.start..program.span.end], source);
//! assert_eq!(sink.error_count(), 0);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod visitor;
