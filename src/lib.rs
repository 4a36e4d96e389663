//! # sprig
//!
//! sprig is a tokenizer, parser and tree-walking interpreter for a tiny
//! C-like language. A program is a list of top-level declarations; its
//! `main` function runs and may call the `printf` built-in:
//!
//! ```text
//! i32 answer = 42;
//!
//! main() {
//!     printf("hello, world\n");
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    error::Error,
    io::{self, Write},
};

use tracing::debug;

use crate::{
    arena::Arena,
    error::RuntimeError,
    interpreter::{
        environment::Environment, evaluator::core::Interpreter, lexer::Tokenizer, parser::Parser,
    },
};

/// Region allocation for syntax trees.
///
/// All nodes produced by a parse live in one arena and are released
/// together.
pub mod arena;
/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents a program as a tree.
/// The tree is built by the parser, printed by the AST dump and executed by
/// the interpreter.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines parse errors carrying the expected and actual token.
/// - Defines the runtime errors the interpreter reports.
/// - Renders positioned diagnostics as `<file>:<line>:<col>: error: ...`.
pub mod error;
/// Orchestrates the tokenizer, parser and evaluator.
pub mod interpreter;

/// What to do with a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print one token label per line.
    LexDump,
    /// Print one syntax tree per top-level node.
    AstDump,
    /// Run the program.
    #[default]
    Interpret,
}

/// Writes the label of every token in `source` to `out`, one per line.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// sprig::dump_tokens("demo.sprig", "main(){}", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "symbol(main)\n'('\n')'\n'{'\n'}'\n");
/// ```
pub fn dump_tokens(file: &str, source: &str, out: &mut impl Write) -> io::Result<()> {
    for token in Tokenizer::new(file, source) {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

/// Parses `source` and writes each top-level node to `out` as it is parsed.
///
/// # Errors
/// Returns a [`Diagnostic`](error::Diagnostic) for the first parse error;
/// nodes parsed before it have already been written.
pub fn dump_ast(file: &str, source: &str, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let arena = Arena::new();
    let mut parser = Parser::new(Tokenizer::new(file, source), &arena);

    loop {
        match parser.parse_next() {
            Ok(Some(node)) => writeln!(out, "{node}")?,
            Ok(None) => return Ok(()),
            Err(e) => return Err(Box::new(parser.diagnostic(&e))),
        }
    }
}

/// Parses all of `source`, then runs it.
///
/// Program output goes to `out`, runtime errors to `diagnostics`. Nothing
/// runs if the program does not parse.
///
/// # Returns
/// The runtime errors that were reported.
///
/// # Errors
/// Returns a [`Diagnostic`](error::Diagnostic) for a parse error, or an I/O
/// error if writing output fails.
///
/// # Examples
/// ```
/// let (mut out, mut diagnostics) = (Vec::new(), Vec::new());
/// let reported = sprig::interpret("demo.sprig",
///                                 "main() { printf(\"a\\nb\"); }",
///                                 &mut out,
///                                 &mut diagnostics).unwrap();
///
/// assert!(reported.is_empty());
/// assert_eq!(out, b"a\nb");
/// assert!(diagnostics.is_empty());
///
/// // A syntax error stops everything before execution.
/// let err = sprig::interpret("demo.sprig", "main(", Vec::new(), Vec::new()).unwrap_err();
/// assert!(err.to_string().contains("Expected ')'"));
/// ```
pub fn interpret(file: &str,
                 source: &str,
                 out: impl Write,
                 diagnostics: impl Write)
                 -> Result<Vec<RuntimeError>, Box<dyn Error>> {
    let mut arena = Arena::new();

    let reported = {
        let mut parser = Parser::new(Tokenizer::new(file, source), &arena);
        let nodes = parser.parse_all().map_err(|e| parser.diagnostic(&e))?;

        let mut env = Environment::new();
        Interpreter::new(out, diagnostics).run(nodes, &mut env)?
    };

    debug!(bytes = arena.allocated_bytes(), "releasing syntax tree");
    arena.free_all();

    Ok(reported)
}

/// Processes `source` according to `mode`.
///
/// This is the single entry point used by the command-line driver.
pub fn run(file: &str,
           source: &str,
           mode: Mode,
           mut out: impl Write,
           diagnostics: impl Write)
           -> Result<(), Box<dyn Error>> {
    match mode {
        Mode::LexDump => dump_tokens(file, source, &mut out)?,
        Mode::AstDump => dump_ast(file, source, &mut out)?,
        Mode::Interpret => {
            interpret(file, source, &mut out, diagnostics)?;
        },
    }

    out.flush()?;
    Ok(())
}
