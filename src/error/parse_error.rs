#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A specific token was required but another one was found.
    UnexpectedToken {
        /// Label of what the grammar required, e.g. `')'`.
        expected: String,
        /// Label of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        col:      usize,
    },
    /// A token that cannot start any construct.
    UnhandledToken {
        /// Label of the token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
        /// The source column where the error occurred.
        col:   usize,
    },
}

impl ParseError {
    /// Line and column of the offending token.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedToken { line, col, .. } | Self::UnhandledToken { line, col, .. } => {
                (*line, *col)
            },
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "Expected {expected} but got {found}")
            },
            Self::UnhandledToken { token, .. } => write!(f, "Unhandled token {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
