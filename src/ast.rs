use std::fmt;

/// The declared type of a variable.
///
/// The language only knows one type keyword so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// `i32`
    I32,
}

/// A named function together with its parameters and body.
///
/// Shared by [`Node::FunctionDefinition`] and [`Node::MainFunction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDef<'a> {
    /// The name of the function.
    pub name:   &'a str,
    /// Parameter nodes, in declaration order.
    pub params: &'a [&'a Node<'a>],
    /// The body, usually a [`Node::Scope`]. Absent when the source ends right
    /// after the signature.
    pub body:   Option<&'a Node<'a>>,
}

/// An abstract syntax tree (AST) node.
///
/// Every node, its strings and its child lists live in an
/// [`Arena`](crate::arena::Arena) and are immutable once the parser has built
/// them, so nodes are plain `Copy` views into the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// A string literal such as `"hi"`, with escapes already resolved.
    StringLiteral(&'a str),
    /// An integer literal such as `42`.
    IntegerLiteral(i64),
    /// A `{ ... }` block of statements.
    Scope(&'a [&'a Node<'a>]),
    /// `i32 x = <expr>;`
    VariableDeclaration {
        /// Declared type.
        ty:    TypeTag,
        /// Name of the variable.
        name:  &'a str,
        /// The initializer expression, kept unevaluated.
        value: &'a Node<'a>,
    },
    /// `f(a, b);`
    FunctionCall {
        /// Name of the function being called.
        name:      &'a str,
        /// Arguments to the function.
        arguments: &'a [&'a Node<'a>],
    },
    /// A user function.
    FunctionDefinition(FunctionDef<'a>),
    /// The `main` entry point.
    MainFunction(FunctionDef<'a>),
}

impl Node<'_> {
    /// A short human-readable name for the node's variant.
    ///
    /// ## Example
    /// ```
    /// use sprig::ast::Node;
    ///
    /// assert_eq!(Node::IntegerLiteral(7).kind_name(), "integer literal");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::StringLiteral(_) => "string literal",
            Self::IntegerLiteral(_) => "integer literal",
            Self::Scope(_) => "scope",
            Self::VariableDeclaration { .. } => "variable declaration",
            Self::FunctionCall { .. } => "function call",
            Self::FunctionDefinition(_) => "function definition",
            Self::MainFunction(_) => "main function",
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Self::StringLiteral(text) => write!(f, "(str {text})"),
            Self::IntegerLiteral(value) => write!(f, "(i32 {value})"),
            Self::Scope(statements) => {
                write!(f, "(scope")?;
                for statement in *statements {
                    write!(f, "\n{:width$}", "", width = (depth + 1) * 2)?;
                    statement.fmt_indented(f, depth + 1)?;
                }
                write!(f, ")")
            },
            Self::VariableDeclaration { name, value, .. } => {
                write!(f, "(vdef {name} ")?;
                value.fmt_indented(f, depth)?;
                write!(f, ")")
            },
            Self::FunctionCall { name, arguments } => {
                write!(f, "(call {name}")?;
                for argument in *arguments {
                    write!(f, " ")?;
                    argument.fmt_indented(f, depth)?;
                }
                write!(f, ")")
            },
            Self::FunctionDefinition(def) | Self::MainFunction(def) => {
                write!(f, "(fdef {} (", def.name)?;
                for (i, param) in def.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    param.fmt_indented(f, depth)?;
                }
                write!(f, ") ")?;
                match def.body {
                    Some(body) => body.fmt_indented(f, depth)?,
                    None => write!(f, "nil")?,
                }
                write!(f, ")")
            },
        }
    }
}

/// Renders the node as an S-expression.
///
/// Scope statements are placed on their own lines, indented two spaces per
/// nesting level. Variable declarations leave out their type tag.
///
/// ## Example
/// ```
/// use sprig::ast::Node;
///
/// let hi = Node::StringLiteral("hi");
/// let args = [&hi];
/// let call = Node::FunctionCall { name:      "printf",
///                                 arguments: &args, };
///
/// assert_eq!(call.to_string(), "(call printf (str hi))");
/// ```
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
