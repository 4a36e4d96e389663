use std::{fmt, io};

use logos::{Lexer, Logos, Skip};
use tracing::{trace, warn};

use crate::error::Diagnostic;

/// Raw lexemes as recognised by logos.
///
/// Whitespace and comments never leave the lexer; the [`Tokenizer`] turns
/// the remaining lexemes into [`Token`]s.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LineCursor)]
enum Lexeme<'src> {
    /// `i32`
    #[token("i32")]
    I32,
    /// Identifiers such as `main` or `printf`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Symbol(&'src str),
    /// `"..."`, with escapes resolved.
    #[token("\"", lex_string)]
    Str(String),
    /// Decimal integers such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Single punctuation characters.
    #[regex(r"[(){}\[\]<>.,;:=+\-*/!&|]", |lex| lex.slice().chars().next())]
    Punct(char),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    LineComment,
    /// `/* Block comments. */`
    #[token("/*", skip_block_comment)]
    BlockComment,
    #[regex(r"[ \t\r\n\f\x0B]+", logos::skip)]
    Whitespace,
}

impl<'src> Lexeme<'src> {
    fn into_token(self) -> Token<'src> {
        match self {
            Self::I32 => Token::I32,
            Self::Symbol(name) => Token::Symbol(name),
            Self::Str(text) => Token::Str(text),
            Self::Integer(value) => Token::Integer(value),
            Self::Punct(ch) => Token::Punct(ch),
            Self::LineComment | Self::BlockComment | Self::Whitespace => {
                unreachable!("skipped lexemes never reach the tokenizer")
            },
        }
    }
}

/// Parses a decimal integer literal. Literals that do not fit in an `i64`
/// are rejected.
fn parse_integer<'src>(lex: &Lexer<'src, Lexeme<'src>>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Scans the body of a string literal after its opening quote.
///
/// Recognised escapes are `\n`, `\t`, `\r`, `\\` and `\"`; any other escaped
/// character is kept as is. A missing closing quote ends the literal at the
/// end of the input.
fn lex_string<'src>(lex: &mut Lexer<'src, Lexeme<'src>>) -> String {
    let rest = lex.remainder();
    let mut text = String::new();
    let mut consumed = rest.len();
    let mut chars = rest.char_indices();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => {
                consumed = i + 1;
                break;
            },
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    text.push(unescape(escaped));
                }
            },
            _ => text.push(ch),
        }
    }

    lex.bump(consumed);
    text
}

const fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

/// Skips to the end of a block comment, or to the end of the input when the
/// comment is never closed.
fn skip_block_comment<'src>(lex: &mut Lexer<'src, Lexeme<'src>>) -> Skip {
    let rest = lex.remainder();
    let consumed = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(consumed);
    Skip
}

/// Tracks line boundaries between token starts.
///
/// Carried along as the lexer's extras so that cloning the lexer for a peek
/// also snapshots the line counters.
#[derive(Debug, Clone, Copy)]
struct LineCursor {
    offset:     usize,
    line:       usize,
    line_start: usize,
}

impl Default for LineCursor {
    fn default() -> Self {
        Self { offset:     0,
               line:       1,
               line_start: 0, }
    }
}

impl LineCursor {
    /// Moves the cursor forward to `offset`, counting the newlines passed on
    /// the way, and returns the position of `offset`.
    fn advance_to(&mut self, source: &str, offset: usize) -> Position {
        for (i, _) in source[self.offset..offset].match_indices('\n') {
            self.line += 1;
            self.line_start = self.offset + i + 1;
        }
        self.offset = offset;

        Position { line: self.line,
                   col:  source[self.line_start..offset].chars().count() + 1, }
    }
}

/// A line and column in the source, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Source line.
    pub line: usize,
    /// Source column, counted in characters.
    pub col:  usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

/// A lexical token.
///
/// Symbol text borrows from the source; string literal text is owned since
/// escapes have been resolved. The parser copies whatever it keeps into the
/// arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// One of `(){}[]<>.,;:=+-*/!&|`.
    Punct(char),
    /// End of the input. Returned again on every later call.
    EndOfInput,
    /// An identifier.
    Symbol(&'src str),
    /// A string literal.
    Str(String),
    /// An integer literal.
    Integer(i64),
    /// The `i32` type keyword.
    I32,
}

impl Token<'_> {
    /// The token's kind, without its payload.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Punct(ch) => TokenKind::Punct(*ch),
            Self::EndOfInput => TokenKind::EndOfInput,
            Self::Symbol(_) => TokenKind::Symbol,
            Self::Str(_) => TokenKind::Str,
            Self::Integer(_) => TokenKind::Integer,
            Self::I32 => TokenKind::I32,
        }
    }
}

/// Labels used in token dumps and diagnostics.
///
/// ## Example
/// ```
/// use sprig::interpreter::lexer::Token;
///
/// assert_eq!(Token::Punct('(').to_string(), "'('");
/// assert_eq!(Token::Symbol("main").to_string(), "symbol(main)");
/// assert_eq!(Token::Str("a\nb".to_string()).to_string(), r#"string("a\nb")"#);
/// assert_eq!(Token::Integer(42).to_string(), "integer(42)");
/// ```
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => write!(f, "symbol({name})"),
            Self::Str(text) => write!(f, "string({text:?})"),
            Self::Integer(value) => write!(f, "integer({value})"),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// The kind of a token, used where a token is required but its payload is
/// irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A specific punctuation character.
    Punct(char),
    /// End of the input.
    EndOfInput,
    /// Any identifier.
    Symbol,
    /// Any string literal.
    Str,
    /// Any integer literal.
    Integer,
    /// `i32`
    I32,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Punct(ch) => write!(f, "'{ch}'"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::Symbol => write!(f, "symbol"),
            Self::Str => write!(f, "string literal"),
            Self::Integer => write!(f, "integer literal"),
            Self::I32 => write!(f, "i32"),
        }
    }
}

/// Pulls tokens out of a source text one at a time.
///
/// The tokenizer never fails. Input it does not understand, such as a stray
/// `#` or an integer too large for 64 bits, ends the token stream and is
/// logged as a warning.
///
/// # Example
/// ```
/// use sprig::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokens = Tokenizer::new("demo.sprig", "i32 x = 5;");
///
/// assert_eq!(tokens.peek(), Token::I32);
/// assert_eq!(tokens.next_token(), Token::I32);
/// assert_eq!(tokens.next_token(), Token::Symbol("x"));
/// assert_eq!(tokens.position().col, 5);
/// ```
pub struct Tokenizer<'src> {
    file:      String,
    lexer:     Lexer<'src, Lexeme<'src>>,
    position:  Position,
    exhausted: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source`. `file` is only used to label
    /// diagnostics.
    #[must_use]
    pub fn new(file: &str, source: &'src str) -> Self {
        let file = if file.is_empty() { "<unknown>" } else { file };
        Self { file:      file.to_string(),
               lexer:     Lexeme::lexer(source),
               position:  Position::default(),
               exhausted: false, }
    }

    /// Position of the most recently returned token.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.exhausted {
            return Token::EndOfInput;
        }

        let (scanned, position) = scan(&mut self.lexer);
        self.position = position;

        match scanned {
            Ok(token) => {
                trace!(%token, line = position.line, col = position.col, "token");
                if token == Token::EndOfInput {
                    self.exhausted = true;
                }
                token
            },
            Err(text) => {
                warn!(file = %self.file,
                      line = position.line,
                      col = position.col,
                      text,
                      "unrecognized input, treating it as end of input");
                self.exhausted = true;
                Token::EndOfInput
            },
        }
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Token<'src> {
        if self.exhausted {
            return Token::EndOfInput;
        }

        let mut lexer = self.lexer.clone();
        scan(&mut lexer).0.unwrap_or(Token::EndOfInput)
    }

    /// Builds a diagnostic for `position` in this tokenizer's file.
    pub fn diagnostic(&self, position: Position, message: impl fmt::Display) -> Diagnostic {
        Diagnostic { file:    self.file.clone(),
                     line:    position.line,
                     col:     position.col,
                     message: message.to_string(), }
    }

    /// Writes `<file>:<line>:<col>: error: <message>` to `out`.
    ///
    /// # Errors
    /// Fails only if writing to `out` fails.
    pub fn report_error(&self,
                        out: &mut impl io::Write,
                        position: Position,
                        message: impl fmt::Display)
                        -> io::Result<()> {
        writeln!(out, "{}", self.diagnostic(position, message))
    }
}

/// Yields tokens up to, but not including, the end of the input.
impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::EndOfInput => None,
            token => Some(token),
        }
    }
}

/// Reads one lexeme and works out where it starts. Unrecognised input comes
/// back as `Err` with the offending text.
fn scan<'src>(lexer: &mut Lexer<'src, Lexeme<'src>>) -> (Result<Token<'src>, &'src str>, Position) {
    let next = lexer.next();
    let source = lexer.source();
    let start = if next.is_some() { lexer.span().start } else { source.len() };
    let position = lexer.extras.advance_to(source, start);

    let scanned = match next {
        Some(Ok(lexeme)) => Ok(lexeme.into_token()),
        Some(Err(())) => Err(lexer.slice()),
        None => Ok(Token::EndOfInput),
    };
    (scanned, position)
}
