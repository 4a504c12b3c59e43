use crate::{
    ast::{Expr, ProductOperator, SumOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `sum := product (("+" | "-") product)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::Sum` tree, or the single product when no operator follows.
pub fn parse_sum(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_product(tokens)?;
    while let Some(lexeme) = tokens.peek()
          && let Some(op) = token_to_sum_operator(&lexeme.token)
    {
        tokens.next();
        let right = parse_product(tokens)?;
        left = Expr::Sum { left: Box::new(left),
                           op,
                           right: Box::new(right),
                           position: lexeme.position };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `product := power (("*" | "/" | "%") power)*`
pub fn parse_product(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_power(tokens)?;
    while let Some(lexeme) = tokens.peek()
          && let Some(op) = token_to_product_operator(&lexeme.token)
    {
        tokens.next();
        let right = parse_power(tokens)?;
        left = Expr::Product { left: Box::new(left),
                               op,
                               right: Box::new(right),
                               position: lexeme.position };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. Each
/// nested exponent counts toward the parser's nesting limit.
///
/// The rule is: `power := unary ["^" power]`
pub fn parse_power(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let base = parse_unary(tokens)?;
    let Some(caret) = tokens.peek().filter(|l| l.token == Token::Caret) else {
        return Ok(base);
    };
    tokens.next();

    tokens.descend(caret.position)?;
    let exponent = parse_power(tokens)?;
    tokens.ascend();

    Ok(Expr::Power { base:     Box::new(base),
                     exponent: Box::new(exponent),
                     position: caret.position, })
}

/// Maps a token to a `sum` operator, if it is one.
///
/// # Example
/// ```
/// use ratcalc::{
///     ast::SumOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_sum_operator},
/// };
///
/// assert_eq!(token_to_sum_operator(&Token::Minus), Some(SumOperator::Sub));
/// assert_eq!(token_to_sum_operator(&Token::Star), None);
/// ```
#[must_use]
pub fn token_to_sum_operator(token: &Token) -> Option<SumOperator> {
    match token {
        Token::Plus => Some(SumOperator::Add),
        Token::Minus => Some(SumOperator::Sub),
        _ => None,
    }
}

/// Maps a token to a `product` operator, if it is one.
#[must_use]
pub fn token_to_product_operator(token: &Token) -> Option<ProductOperator> {
    match token {
        Token::Star => Some(ProductOperator::Mul),
        Token::Slash => Some(ProductOperator::Div),
        Token::Percent => Some(ProductOperator::Rem),
        _ => None,
    }
}
