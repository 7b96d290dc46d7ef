use std::fmt;

use logos::{Lexer, Logos};
use tracing::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The closed set of lexical categories.
///
/// Literal variants only classify the lexeme; the exact text is kept on the
/// [`Token`] so the parser can re-read it in the right base.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// The source is exhausted. Never matched by the lexer itself; the
    /// [`Scanner`] synthesizes it.
    EndOfInput,
    /// Function or constant names such as `sqrt` or `pi`.
    #[regex(r"\p{L}[\p{L}\p{N}]*")]
    Identifier,
    /// Decimal integer literals such as `42`.
    #[regex(r"[0-9]+")]
    IntLiteral,
    /// Decimal fractional literals such as `3.25`.
    #[regex(r"[0-9]+\.[0-9]+")]
    FloatLiteral,
    /// Hexadecimal literals such as `0x1F`.
    #[regex(r"0x[0-9a-fA-F]*")]
    HexLiteral,
    /// Binary literals such as `0b101`.
    #[regex(r"0b[01]*")]
    BinLiteral,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Amp,
    /// `|`
    #[token("|")]
    Pipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `// Comments` running to the end of the line.
    #[token("//", skip_line_comment)]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so tokens and
/// errors can report a line and column.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A classified lexeme.
///
/// `text` is the exact slice of source that was matched. `line` and `column`
/// are 1-based; the column counts characters, not bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The lexical category.
    pub kind:   TokenKind,
    /// The matched lexeme. Empty for [`TokenKind::EndOfInput`].
    pub text:   &'src str,
    /// Source line of the first character.
    pub line:   usize,
    /// Source column of the first character.
    pub column: usize,
}

/// Pulls tokens out of a source text on demand.
///
/// Whitespace and `//` comments are skipped between tokens. Once the source is
/// exhausted every further call to [`Scanner::next_token`] returns a
/// [`TokenKind::EndOfInput`] token.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("0x1F + pi");
///
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::HexLiteral);
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Plus);
/// assert_eq!(scanner.next_token().unwrap().text, "pi");
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EndOfInput);
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
pub struct Scanner<'src> {
    lexer:     Lexer<'src, TokenKind>,
    exhausted: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:     TokenKind::lexer_with_extras(source, LexerExtras::default()),
               exhausted: false, }
    }

    /// Scans the next token.
    ///
    /// # Errors
    /// Returns [`ParseError::UnknownCharacter`] when the input contains a
    /// character that starts no token.
    pub fn next_token(&mut self) -> ParseResult<Token<'src>> {
        if self.exhausted {
            return Ok(self.end_of_input());
        }

        match self.lexer.next() {
            Some(Ok(kind)) => {
                let token = self.token(kind, self.lexer.slice(), self.lexer.span().start);
                trace!(kind = %token.kind, text = token.text, line = token.line, "scanned token");
                Ok(token)
            },
            Some(Err(())) => {
                let (line, column) = self.line_column(self.lexer.span().start);
                Err(ParseError::UnknownCharacter { character: self.lexer
                                                                   .slice()
                                                                   .chars()
                                                                   .next()
                                                                   .unwrap_or_default(),
                                                   line,
                                                   column })
            },
            None => {
                self.exhausted = true;
                Ok(self.end_of_input())
            },
        }
    }

    fn end_of_input(&self) -> Token<'src> {
        self.token(TokenKind::EndOfInput, "", self.lexer.source().len())
    }

    fn token(&self, kind: TokenKind, text: &'src str, offset: usize) -> Token<'src> {
        let (line, column) = self.line_column(offset);
        Token { kind,
                text,
                line,
                column }
    }

    /// Line and column of a byte offset on the current line.
    fn line_column(&self, offset: usize) -> (usize, usize) {
        let extras = &self.lexer.extras;
        let column = self.lexer
                         .source()
                         .get(extras.line_start..offset)
                         .map_or(0, |prefix| prefix.chars().count())
                     + 1;
        (extras.line, column)
    }
}

/// Yields every token up to, but not including, [`TokenKind::EndOfInput`].
impl<'src> Iterator for Scanner<'src> {
    type Item = ParseResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => None,
            other => Some(other),
        }
    }
}

/// Consumes the remainder of a `//` comment up to, but not including, the
/// newline.
fn skip_line_comment(lex: &mut Lexer<TokenKind>) -> logos::Skip {
    let remainder = lex.remainder();
    let length = remainder.find('\n').unwrap_or(remainder.len());
    lex.bump(length);
    logos::Skip
}
