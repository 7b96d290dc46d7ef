use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses bitwise OR expressions.
    ///
    /// The rule is: `bitwise_or := bitwise_and ("|" bitwise_and)*`
    pub(crate) fn parse_bitwise_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_bitwise_and()?;
        while let Some(token) = self.have(TokenKind::Pipe)? {
            let right = self.parse_bitwise_and()?;
            left = Expr::binary(BinaryOperator::BitOr, left, right, token.line);
        }
        Ok(left)
    }

    /// Parses bitwise AND expressions.
    ///
    /// The rule is: `bitwise_and := additive ("&" additive)*`
    ///
    /// There is no exclusive-or level between this one and bitwise OR.
    pub(crate) fn parse_bitwise_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_additive()?;
        while let Some(token) = self.have(TokenKind::Amp)? {
            let right = self.parse_additive()?;
            left = Expr::binary(BinaryOperator::BitAnd, left, right, token.line);
        }
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let token = self.current()?;
            if let Some(op) = token_to_binary_operator(token.kind)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                self.advance()?;
                let right = self.parse_multiplicative()?;
                left = Expr::binary(op, left, right, token.line);
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*`, `/` and `%`, plus implicit
    /// multiplication: when an identifier or `(` directly follows an operand,
    /// it is multiplied with the next atomic expression, so `2(3 + 4)` and
    /// `2pi` need no `*`. The implicit operand takes no exponent: `2 pi ^ 2`
    /// leaves `^ 2` behind as trailing input.
    ///
    /// The rule is: `multiplicative := power (("*" | "/" | "%") power | atomic)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_power()?;
        loop {
            let token = self.current()?;
            if let Some(op) = token_to_binary_operator(token.kind)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
            {
                self.advance()?;
                let right = self.parse_power()?;
                left = Expr::binary(op, left, right, token.line);
                continue;
            }
            if matches!(token.kind, TokenKind::Identifier | TokenKind::LParen) {
                let right = self.parse_atomic()?;
                left = Expr::binary(BinaryOperator::Mul, left, right, token.line);
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// Exponentiation folds to the left: `a ^ b ^ c` parses as `(a ^ b) ^ c`,
    /// so `2 ^ 3 ^ 2` is `64`, not `512`.
    ///
    /// The rule is: `power := atomic ("^" atomic)*`
    pub(crate) fn parse_power(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_atomic()?;
        while let Some(token) = self.have(TokenKind::Caret)? {
            let right = self.parse_atomic()?;
            left = Expr::binary(BinaryOperator::Pow, left, right, token.line);
        }
        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        TokenKind::Amp => Some(BinaryOperator::BitAnd),
        TokenKind::Pipe => Some(BinaryOperator::BitOr),
        _ => None,
    }
}
