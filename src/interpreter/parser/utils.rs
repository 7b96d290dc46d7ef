use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions up to a closing `)`.
    ///
    /// Must be called with the opening `(` already consumed. An immediately
    /// encountered `)` produces an empty list.
    ///
    /// Grammar (simplified): `arguments := (expression ("," expression)*)? ")"`
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an argument fails to parse,
    /// - something other than `,` or `)` follows an argument,
    /// - the input ends before the closing `)`.
    pub(crate) fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();
        if self.have(TokenKind::RParen)?.is_some() {
            return Ok(items);
        }
        loop {
            items.push(self.parse_expression()?);

            let token = self.advance()?;
            match token.kind {
                TokenKind::Comma => {},
                TokenKind::RParen => break,
                TokenKind::EndOfInput => {
                    return Err(ParseError::ExpectedClosingParen { line: token.line });
                },
                _ => {
                    return Err(ParseError::UnexpectedToken { token: token.text.to_string(),
                                                             line:  token.line, });
                },
            }
        }
        Ok(items)
    }
}
