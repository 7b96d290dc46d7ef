use std::collections::VecDeque;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Scanner, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many atomic expressions (negations, groups, calls) may be open at once.
pub const MAX_NESTING: usize = 128;

/// A recursive-descent parser over a lazily scanned token stream.
///
/// Tokens are pulled from the [`Scanner`] only when a lookahead needs them and
/// are kept in a small pending queue until consumed. The grammar never looks
/// further than two tokens ahead.
pub struct Parser<'src> {
    scanner:          Scanner<'src>,
    pending:          VecDeque<Token<'src>>,
    pub(crate) depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::from_scanner(Scanner::new(source))
    }

    /// Creates a parser that pulls tokens from an existing scanner.
    #[must_use]
    pub const fn from_scanner(scanner: Scanner<'src>) -> Self {
        Self { scanner,
               pending: VecDeque::new(),
               depth: 0 }
    }

    /// Parses the whole input as a single expression.
    ///
    /// Grammar: `input := expression EOF`
    ///
    /// # Errors
    /// Returns the first scanning or grammar error. Tokens left over after a
    /// complete expression produce
    /// [`ParseError::UnexpectedTrailingTokens`].
    ///
    /// # Example
    /// ```
    /// use reckon::{error::ParseError, interpreter::parser::core::Parser};
    ///
    /// assert!(Parser::new("2 (3 + 4)").parse().is_ok());
    /// assert!(matches!(Parser::new("2 3").parse(),
    ///                  Err(ParseError::UnexpectedTrailingTokens { .. })));
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        let next = self.current()?;
        if next.kind != TokenKind::EndOfInput {
            return Err(ParseError::UnexpectedTrailingTokens { token: next.text.to_string(),
                                                              line:  next.line, });
        }

        debug!(tree = ?expr, "parsed expression");
        Ok(expr)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing, also used for
    /// parenthesized groups and call arguments. It begins at the
    /// lowest-precedence level, bitwise OR.
    ///
    /// Grammar: `expression := bitwise_or`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_bitwise_or()
    }

    /// Makes sure at least `count` tokens are buffered.
    fn fill(&mut self, count: usize) -> ParseResult<()> {
        while self.pending.len() < count {
            let token = self.scanner.next_token()?;
            self.pending.push_back(token);
        }
        Ok(())
    }

    /// Returns the token `offset` positions ahead without consuming it.
    pub(crate) fn peek_nth(&mut self, offset: usize) -> ParseResult<Token<'src>> {
        self.fill(offset + 1)?;
        Ok(self.pending[offset])
    }

    /// Returns the next token without consuming it.
    pub(crate) fn current(&mut self) -> ParseResult<Token<'src>> {
        self.peek_nth(0)
    }

    /// Consumes and returns the next token.
    pub(crate) fn advance(&mut self) -> ParseResult<Token<'src>> {
        let token = self.current()?;
        self.pending.pop_front();
        Ok(token)
    }

    /// Whether the next token is of `kind`.
    pub(crate) fn see(&mut self, kind: TokenKind) -> ParseResult<bool> {
        Ok(self.current()?.kind == kind)
    }

    /// Consumes the next token if it is of `kind`.
    pub(crate) fn have(&mut self, kind: TokenKind) -> ParseResult<Option<Token<'src>>> {
        if self.see(kind)? {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }
}
