/// Core execution logic.
///
/// Contains the interpreter, its statement dispatch and the reporting of
/// runtime errors.
pub mod core;

/// Built-in functions.
///
/// Functions with native behavior that are resolved before user
/// definitions.
pub mod builtin;
