//! Recursive-descent parser for extended Triangle.
//!
//! One routine per grammar nonterminal, one token of lookahead, no backtracking. The first
//! mismatch aborts the whole parse with a single [`SyntaxError`]; there is no recovery.
//!
//! ## Examples
//!
//! ```rust
//! use triangle_syntax::ast::{Command, ElseBranch};
//! use triangle_syntax::{lexer, parser};
//!
//! let source = "if a then x := 1 elsif b then x := 2 else nothing end";
//! let tokens = lexer::lex(source);
//! let program = parser::parse(&tokens).unwrap();
//! let Command::If(command) = &program.command.node else { panic!("expected an if command") };
//! assert!(matches!(command.alternative, ElseBranch::Elsif(_)));
//! ```

use crate::ast::*;
use crate::diagnostics::{DiagnosticSink, ParseFailure, SyntaxError};
use crate::lexer::{Lexer, Token, TokenKind, TokenSlice, TokenSource};
use triangle_core::lang::keywords::KeywordId;
use triangle_core::lang::punctuation::PunctuationId;
use triangle_core::lang::tokens;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/decl.rs");
include!("parser/params.rs");
include!("parser/types.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
