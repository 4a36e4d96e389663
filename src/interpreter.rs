/// Name bindings for a run.
///
/// The environment maps function names to definitions and variable names to
/// their initializer nodes. It is created by the caller and passed into the
/// evaluator, so separate runs never share state.
pub mod environment;
/// The evaluator module executes AST nodes.
///
/// The evaluator walks the top-level nodes, registers functions and
/// variables, runs `main` and dispatches built-in calls. It reports runtime
/// errors and keeps going.
///
/// # Responsibilities
/// - Executes scopes, declarations and calls.
/// - Resolves calls to built-ins and registered functions.
/// - Reports undefined functions, malformed built-in calls and a missing
///   entry point.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens on
/// demand: symbols, literals, the `i32` keyword and single punctuation
/// characters. It tracks lines and columns for diagnostics.
///
/// # Responsibilities
/// - Skips whitespace and `//` and `/* */` comments.
/// - Resolves escape sequences in string literals.
/// - Offers one token of lookahead without consuming it.
/// - Formats token labels and positioned error messages.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the tokenizer and builds one top-level node
/// per call, allocating the tree in an arena. It stops at the first grammar
/// violation and returns it as a typed error.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting the expected and actual token with
///   its position.
pub mod parser;
