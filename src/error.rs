/// Positioned diagnostics.
///
/// A diagnostic pairs a message with the file, line and column it refers to
/// and renders as `<file>:<line>:<col>: error: <message>`. The tokenizer
/// builds them; the library entry points return them for parse failures.
pub mod diagnostic;
/// Parsing errors.
///
/// Defines the errors raised when the token stream does not match the
/// grammar. Parsing stops at the first one.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors the interpreter reports while executing a program.
/// None of them stop execution; they are written to the diagnostic stream
/// and collected for the caller.
pub mod runtime_error;

pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
