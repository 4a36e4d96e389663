/// Parser state, the top-level dispatch and token expectations.
///
/// Holds the tokenizer and the single token of lookahead, and decides from
/// that token which construct comes next.
pub mod core;

/// Block parsing.
///
/// Parses `{ ... }` scopes into lists of statements.
mod block;

/// Declaration and statement parsing.
///
/// Implements the `main` entry point, `i32` variable declarations and
/// function call statements.
mod statement;

pub use self::core::{ParseResult, Parser};
