//! Triangle Front End
//!
//! This module re-exports the syntax components:
//! - `lexer`: scanning source text into tokens
//! - `parser`: recursive descent from tokens to AST
//! - `ast`: abstract syntax tree definitions
//! - `visitor`: double-dispatch traversal over the tree
//! - `diagnostics`: syntax errors and reporting sinks

// Syntax components are provided by the shared triangle_syntax crate.
pub use triangle_syntax::{ast, diagnostics, lexer, parser, token_helpers, visitor};
