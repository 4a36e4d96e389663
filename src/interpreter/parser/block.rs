use crate::{
    ast::Node,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl<'a> Parser<'_, 'a> {
    /// Parses a scope delimited by braces.
    ///
    /// Grammar: `scope := "{" statement* "}"`
    ///
    /// Each statement is whatever [`Parser::parse_next`] produces; the
    /// closing brace is consumed.
    ///
    /// # Errors
    /// `UnexpectedToken` if the input ends before the closing `}`.
    pub(super) fn parse_scope(&mut self) -> ParseResult<Node<'a>> {
        let arena = self.arena;
        let mut statements = arena.new_vec();
        self.advance();

        loop {
            match self.current {
                Token::Punct('}') => break,
                Token::EndOfInput => return Err(self.unexpected(TokenKind::Punct('}'))),
                _ => statements.push(self.parse_operand(TokenKind::Punct('}'))?),
            }
        }
        self.advance();

        Ok(Node::Scope(statements.into_bump_slice()))
    }
}
