#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the interpreter reports while running a program.
pub enum RuntimeError {
    /// Called a function that is neither built in nor registered.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// The first argument of `printf` was not a string literal.
    PrintfExpectsStringLiteral,
    /// No `main` function was registered by the end of the run.
    MissingEntryPoint,
    /// A node that cannot be executed as a statement.
    UnknownNode {
        /// Human-readable name of the node's variant.
        kind: &'static str,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedFunction { name } => write!(f, "Undefined function '{name}'"),
            Self::PrintfExpectsStringLiteral => {
                write!(f, "printf expects string literal as first argument")
            },
            Self::MissingEntryPoint => write!(f, "Missing entry point main."),
            Self::UnknownNode { kind } => write!(f, "Unknown AST node kind: {kind}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
