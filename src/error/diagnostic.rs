use std::fmt;

/// A message tied to a position in a source file.
///
/// # Example
/// ```
/// use sprig::error::Diagnostic;
///
/// let diagnostic = Diagnostic { file:    "hello.sprig".to_string(),
///                               line:    3,
///                               col:     7,
///                               message: "Expected ';' but got '}'".to_string(), };
///
/// assert_eq!(diagnostic.to_string(),
///            "hello.sprig:3:7: error: Expected ';' but got '}'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the source file, or `<unknown>`.
    pub file:    String,
    /// 1-based line.
    pub line:    usize,
    /// 1-based column.
    pub col:     usize,
    /// What went wrong.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: error: {}", self.file, self.line, self.col, self.message)
    }
}

impl std::error::Error for Diagnostic {}
