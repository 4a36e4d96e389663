use crate::{
    ast::{FunctionDef, Node, TypeTag},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl<'a> Parser<'_, 'a> {
    /// Parses the `main` entry point.
    ///
    /// Grammar: `main_decl := "main" "(" ")" scope`
    ///
    /// Both parentheses are required and no parameters are accepted. The
    /// body is the next node, usually a scope; it is absent if the input ends
    /// right after the parentheses.
    pub(super) fn parse_main(&mut self) -> ParseResult<Node<'a>> {
        let name = self.expect_symbol()?;
        self.expect_next(TokenKind::Punct('('))?;
        self.expect_next(TokenKind::Punct(')'))?;
        self.advance();

        let body = self.parse_next()?;

        Ok(Node::MainFunction(FunctionDef { name,
                                            params: &[],
                                            body }))
    }

    /// Parses a variable declaration.
    ///
    /// Grammar: `var_decl := "i32" SYMBOL "=" expr ";"`
    ///
    /// The initializer is stored as parsed and never evaluated here.
    pub(super) fn parse_variable_declaration(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let name = self.expect_symbol()?;
        self.expect_next(TokenKind::Punct('='))?;
        self.advance();

        let value = self.parse_operand(TokenKind::Punct(';'))?;
        self.expect(TokenKind::Punct(';'))?;
        self.advance();

        Ok(Node::VariableDeclaration { ty: TypeTag::I32,
                                       name,
                                       value })
    }

    /// Parses a function call statement.
    ///
    /// Grammar: `funcall_stmt := SYMBOL "(" (expr ("," expr)*)? ")" ";"`
    ///
    /// Each argument is whatever [`Parser::parse_next`] produces. A trailing
    /// comma before `)` is tolerated.
    pub(super) fn parse_function_call(&mut self) -> ParseResult<Node<'a>> {
        let arena = self.arena;
        let name = self.expect_symbol()?;
        self.expect_next(TokenKind::Punct('('))?;
        self.advance();

        let mut arguments = arena.new_vec();
        while self.current != Token::Punct(')') {
            arguments.push(self.parse_operand(TokenKind::Punct(')'))?);

            match self.current {
                Token::Punct(',') => {
                    self.advance();
                },
                Token::Punct(')') => {},
                _ => return Err(self.unexpected("',' or ')'")),
            }
        }

        self.expect_next(TokenKind::Punct(';'))?;
        self.advance();

        Ok(Node::FunctionCall { name,
                                arguments: arguments.into_bump_slice() })
    }
}
