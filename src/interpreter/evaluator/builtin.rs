use std::io::{self, Write};

use crate::{ast::Node, error::RuntimeError};

/// Functions implemented by the interpreter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `printf("text");`
    Printf,
}

impl Builtin {
    /// Looks up a built-in by the name it is called with.
    ///
    /// ## Example
    /// ```
    /// use sprig::interpreter::evaluator::builtin::Builtin;
    ///
    /// assert_eq!(Builtin::lookup("printf"), Some(Builtin::Printf));
    /// assert_eq!(Builtin::lookup("puts"), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "printf" => Some(Self::Printf),
            _ => None,
        }
    }

    /// Runs the built-in with the given argument nodes.
    ///
    /// # Returns
    /// The error to report when the call is malformed.
    ///
    /// # Errors
    /// Fails only if writing to `out` fails.
    pub fn invoke(self, arguments: &[&Node<'_>], out: &mut impl Write) -> io::Result<Option<RuntimeError>> {
        match self {
            Self::Printf => printf(arguments, out),
        }
    }
}

/// Writes the text of a string literal to `out`, verbatim.
///
/// The first argument must be a string literal; it is not treated as a
/// format string, and further arguments are ignored. A call without
/// arguments does nothing.
///
/// # Example
/// ```
/// use sprig::{ast::Node, interpreter::evaluator::builtin::printf};
///
/// let mut out = Vec::new();
/// let text = Node::StringLiteral("100%\n");
///
/// assert!(printf(&[&text], &mut out).unwrap().is_none());
/// assert_eq!(out, b"100%\n");
/// ```
pub fn printf(arguments: &[&Node<'_>], out: &mut impl Write) -> io::Result<Option<RuntimeError>> {
    match arguments.first() {
        None => Ok(None),
        Some(Node::StringLiteral(text)) => {
            out.write_all(text.as_bytes())?;
            Ok(None)
        },
        Some(_) => Ok(Some(RuntimeError::PrintfExpectsStringLiteral)),
    }
}
