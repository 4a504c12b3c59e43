use crate::{
    ast::{Expr, Sign},
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_sum,
            core::{ParseResult, TokenStream},
            utils::{expect, parse_arguments},
        },
    },
};

/// Parses a unary expression.
///
/// At most one prefix sign is accepted, and it binds tighter than `^`, so
/// `-2 ^ 2` is `(-2) ^ 2` and `--2` is rejected.
///
/// Grammar:
/// ```text
///     unary := ["+" | "-"] primary
/// ```
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let sign = match tokens.peek().map(|l| (&l.token, l.position)) {
        Some((Token::Plus, position)) => Some((Sign::Plus, position)),
        Some((Token::Minus, position)) => Some((Sign::Minus, position)),
        _ => None,
    };

    let Some((sign, position)) = sign else {
        return parse_primary(tokens);
    };
    tokens.next();
    let operand = parse_primary(tokens)?;
    Ok(Expr::Unary { sign,
                     operand: Box::new(operand),
                     position })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" sum ")"
///              | function_call
/// ```
/// A parenthesised sum does not get a node of its own; the grouping is
/// already expressed by the tree's shape.
///
/// # Errors
/// `UnexpectedToken` for anything else, `UnexpectedEnd` when the input runs
/// out, `TooDeep` past the nesting limit.
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some(lexeme) = tokens.next() else {
        return Err(tokens.unexpected(None));
    };

    match &lexeme.token {
        Token::Number(value) => Ok(Expr::Number { value:    value.clone(),
                                                  position: lexeme.position, }),
        Token::LParen => {
            tokens.descend(lexeme.position)?;
            let inner = parse_sum(tokens)?;
            expect(tokens, &Token::RParen)?;
            tokens.ascend();
            Ok(inner)
        },
        Token::Identifier(name) => parse_function_call(tokens, name, lexeme.position),
        _ => Err(tokens.unexpected(Some(lexeme))),
    }
}

/// Parses the remainder of a function call after its name.
///
/// There are no variables in the language, so a name must be followed by an
/// argument list. Whether the name is actually registered is decided at
/// evaluation time.
///
/// Grammar: `function_call := NAME "(" [sum ("," sum)*] ")"`
fn parse_function_call(tokens: &mut TokenStream<'_>,
                       name: &str,
                       position: usize)
                       -> ParseResult<Expr> {
    let open = expect(tokens, &Token::LParen)?;

    tokens.descend(open.position)?;
    let arguments = parse_arguments(tokens)?;
    tokens.ascend();

    Ok(Expr::FunctionCall { name: name.to_string(),
                            arguments,
                            position })
}
