use std::fmt::Display;

use tracing::{debug, trace};

use crate::{
    arena::Arena,
    ast::Node,
    error::{Diagnostic, ParseError},
    interpreter::lexer::{Position, Token, TokenKind, Tokenizer},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser producing one top-level node per call.
///
/// The parser looks at exactly one token at a time and never backtracks.
/// Every node, name and list it builds is placed in the arena it was given,
/// so the tree outlives the parser and the source text.
///
/// # Example
/// ```
/// use sprig::{
///     arena::Arena,
///     interpreter::{lexer::Tokenizer, parser::Parser},
/// };
///
/// let arena = Arena::new();
/// let mut parser = Parser::new(Tokenizer::new("demo.sprig", "main(){printf(\"hi\");}"),
///                              &arena);
///
/// let main = parser.parse_next().unwrap().unwrap();
/// assert_eq!(main.to_string(), "(fdef main () (scope\n  (call printf (str hi))))");
/// assert!(parser.parse_next().unwrap().is_none());
/// ```
pub struct Parser<'src, 'a> {
    pub(super) tokens:  Tokenizer<'src>,
    pub(super) arena:   &'a Arena,
    pub(super) current: Token<'src>,
}

impl<'src, 'a> Parser<'src, 'a> {
    /// Creates a parser and reads the first token.
    pub fn new(mut tokens: Tokenizer<'src>, arena: &'a Arena) -> Self {
        let current = tokens.next_token();
        Self { tokens,
               arena,
               current }
    }

    /// Parses the next top-level node.
    ///
    /// Dispatches on the current token, in this order:
    /// - string literal → [`Node::StringLiteral`]
    /// - integer literal → [`Node::IntegerLiteral`]
    /// - the symbol `main` → [`Node::MainFunction`]
    /// - `{` → [`Node::Scope`]
    /// - `i32` → [`Node::VariableDeclaration`]
    /// - any other symbol → [`Node::FunctionCall`]
    ///
    /// # Returns
    /// `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    /// - `UnexpectedToken` when a required token is missing.
    /// - `UnhandledToken` when the current token cannot start a construct.
    pub fn parse_next(&mut self) -> ParseResult<Option<&'a Node<'a>>> {
        let arena = self.arena;

        let node = match &self.current {
            Token::EndOfInput => return Ok(None),
            Token::Str(text) => {
                let text = arena.alloc_str(text);
                self.advance();
                Node::StringLiteral(text)
            },
            Token::Integer(value) => {
                let value = *value;
                self.advance();
                Node::IntegerLiteral(value)
            },
            Token::Symbol("main") => self.parse_main()?,
            Token::Punct('{') => self.parse_scope()?,
            Token::I32 => self.parse_variable_declaration()?,
            Token::Symbol(_) => self.parse_function_call()?,
            Token::Punct(_) => return Err(self.unhandled()),
        };

        trace!(kind = node.kind_name(), "parsed node");
        Ok(Some(arena.alloc(node)))
    }

    /// Parses nodes until the input is exhausted.
    ///
    /// # Errors
    /// Stops at and returns the first parse error.
    pub fn parse_all(&mut self) -> ParseResult<&'a [&'a Node<'a>]> {
        let arena = self.arena;
        let mut nodes = arena.new_vec();

        while let Some(node) = self.parse_next()? {
            nodes.push(node);
        }

        debug!(count = nodes.len(), "parsed program");
        Ok(nodes.into_bump_slice())
    }

    /// Turns a parse error into a diagnostic for this parser's file.
    #[must_use]
    pub fn diagnostic(&self, error: &ParseError) -> Diagnostic {
        let (line, col) = error.position();
        self.tokens.diagnostic(Position { line, col }, error)
    }

    /// Moves to the next token, returning the one that was current.
    pub(super) fn advance(&mut self) -> Token<'src> {
        let next = self.tokens.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Checks that the current token is of the given kind.
    pub(super) fn expect(&self, kind: TokenKind) -> ParseResult<()> {
        if self.current.kind() == kind {
            Ok(())
        } else {
            Err(self.unexpected(kind))
        }
    }

    /// Advances, then checks that the new current token is of the given kind.
    pub(super) fn expect_next(&mut self, kind: TokenKind) -> ParseResult<()> {
        self.advance();
        self.expect(kind)
    }

    /// Copies the current symbol's text into the arena.
    pub(super) fn expect_symbol(&self) -> ParseResult<&'a str> {
        match self.current {
            Token::Symbol(name) => Ok(self.arena.alloc_str(name)),
            _ => Err(self.unexpected(TokenKind::Symbol)),
        }
    }

    /// Parses a node that the grammar requires at this point. Running out of
    /// input reports `expected` as the missing token.
    pub(super) fn parse_operand(&mut self, expected: impl Display) -> ParseResult<&'a Node<'a>> {
        self.parse_next()?.ok_or_else(|| self.unexpected(expected))
    }

    pub(super) fn unexpected(&self, expected: impl Display) -> ParseError {
        let Position { line, col } = self.tokens.position();
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found: self.current.to_string(),
                                      line,
                                      col }
    }

    fn unhandled(&self) -> ParseError {
        let Position { line, col } = self.tokens.position();
        ParseError::UnhandledToken { token: self.current.to_string(),
                                     line,
                                     col }
    }
}
