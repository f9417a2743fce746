#![forbid(unsafe_code)]
//! Triangle front-end toolchain
//!
//! This crate wires the syntax front end (`triangle_syntax`) into a small command-line tool,
//! `trianglec`, that scans, parses, and pretty-prints extended Triangle programs.
//!
//! ## Errors and panics
//!
//! Nothing outside tests unwraps. Malformed source is ordinary input: it yields one diagnostic and
//! a `ParseFailure`, never a panic. The `cli` module denies `clippy::unwrap_used` and
//! `clippy::expect_used` to keep it that way.

pub mod cli;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::{ast, diagnostics, lexer, parser, visitor};

pub use format::{PrintConfig, print_program, print_source};
