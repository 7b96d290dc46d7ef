use crate::{
    ast::{Expr, NumericType, UnaryOperator},
    error::ParseError,
    interpreter::{
        builtin::{lookup_constant, lookup_function},
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING, ParseResult, Parser},
    },
    util::num::u64_to_f64,
};

impl<'src> Parser<'src> {
    /// Parses an atomic expression.
    ///
    /// Atomic expressions form the base of the expression grammar. Negation
    /// binds tighter than every binary operator, so `-2 ^ 2` is `4`.
    ///
    /// Grammar:
    /// ```text
    ///     atomic := "-" atomic
    ///             | "(" expression ")"
    ///             | identifier_expression
    ///             | number
    /// ```
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] once more than
    /// [`MAX_NESTING`] atomic expressions are open at the same time.
    pub(crate) fn parse_atomic(&mut self) -> ParseResult<Expr> {
        let token = self.current()?;
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { line: token.line });
        }

        self.depth += 1;
        let result = self.parse_atomic_token(token);
        self.depth -= 1;
        result
    }

    fn parse_atomic_token(&mut self, token: Token<'src>) -> ParseResult<Expr> {
        match token.kind {
            TokenKind::Minus => {
                self.advance()?;
                let operand = self.parse_atomic()?;
                Ok(Expr::Unary { op:      UnaryOperator::Negate,
                                 operand: Box::new(operand),
                                 line:    token.line, })
            },
            TokenKind::LParen => self.parse_grouping(),
            TokenKind::Identifier => self.parse_identifier_expression(),
            TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::HexLiteral
            | TokenKind::BinLiteral => self.parse_number(),
            TokenKind::EndOfInput => Err(ParseError::UnexpectedEndOfInput { line: token.line }),
            _ => Err(ParseError::UnexpectedToken { token: token.text.to_string(),
                                                   line:  token.line, }),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.advance()?;
        let expr = self.parse_expression()?;

        if self.have(TokenKind::RParen)?.is_none() {
            return Err(ParseError::ExpectedClosingParen { line: self.current()?.line });
        }
        Ok(expr)
    }

    /// Parses an identifier as either a function call or a constant.
    ///
    /// An identifier immediately followed by `(` is a call; anything else is a
    /// constant. Names missing from the builtin tables are rejected here.
    ///
    /// Grammar:
    /// ```text
    ///     identifier_expression := IDENTIFIER "(" arguments ")"
    ///                            | IDENTIFIER
    /// ```
    fn parse_identifier_expression(&mut self) -> ParseResult<Expr> {
        let name = self.advance()?;

        if self.see(TokenKind::LParen)? {
            return self.parse_call(name);
        }

        let constant =
            lookup_constant(name.text).ok_or_else(|| unknown_identifier(name))?;
        Ok(Expr::Constant { name:         constant.name,
                            value:        constant.value,
                            numeric_type: constant.numeric_type,
                            line:         name.line, })
    }

    /// Parses the argument list of a call to the builtin `name`.
    ///
    /// Any number of arguments is accepted here, including none; the analysis
    /// pass checks the count against the builtin's arity.
    fn parse_call(&mut self, name: Token<'src>) -> ParseResult<Expr> {
        let function = lookup_function(name.text).ok_or_else(|| unknown_identifier(name))?;

        self.advance()?;
        let arguments = self.parse_arguments()?;

        Ok(Expr::Call { function,
                        arguments,
                        line: name.line })
    }

    /// Parses a numeric literal.
    ///
    /// - `FloatLiteral`: base 10, typed `Float`.
    /// - `IntLiteral`: base 10, typed `Integer`.
    /// - `HexLiteral` / `BinLiteral`: the digits after the `0x` / `0b` prefix
    ///   in base 16 / base 2, typed `Integer`.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidNumber`] when the digits overflow a `u64`
    /// (or, for a float, the `f64` range) or the prefix carries no digits.
    fn parse_number(&mut self) -> ParseResult<Expr> {
        let token = self.advance()?;

        let parsed = match token.kind {
            TokenKind::FloatLiteral => {
                token.text
                     .parse::<f64>()
                     .ok()
                     .filter(|value| value.is_finite())
                     .map(|value| (value, NumericType::Float))
            },
            TokenKind::IntLiteral => parse_integer(token.text, 10),
            TokenKind::HexLiteral => token.text
                                          .strip_prefix("0x")
                                          .and_then(|digits| parse_integer(digits, 16)),
            TokenKind::BinLiteral => token.text
                                          .strip_prefix("0b")
                                          .and_then(|digits| parse_integer(digits, 2)),
            _ => {
                return Err(ParseError::UnexpectedToken { token: token.text.to_string(),
                                                         line:  token.line, });
            },
        };

        let (value, numeric_type) =
            parsed.ok_or_else(|| ParseError::InvalidNumber { literal: token.text.to_string(),
                                                             line:    token.line, })?;

        Ok(Expr::Literal { value,
                           numeric_type,
                           line: token.line })
    }
}

/// Parses unsigned integer digits in `radix` into an `Integer`-typed value.
fn parse_integer(digits: &str, radix: u32) -> Option<(f64, NumericType)> {
    u64::from_str_radix(digits, radix).ok()
                                      .map(|value| (u64_to_f64(value), NumericType::Integer))
}

fn unknown_identifier(name: Token<'_>) -> ParseError {
    ParseError::UnknownIdentifier { name: name.text.to_string(),
                                    line: name.line, }
}
