use crate::{
    ast::Argument,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            binary::parse_sum,
            core::{ParseResult, TokenStream},
        },
    },
};

/// Consumes the next lexeme, which must be `expected`.
///
/// # Errors
/// `UnexpectedToken` or `UnexpectedEnd` otherwise.
pub(in crate::interpreter::parser) fn expect<'a>(tokens: &mut TokenStream<'a>,
                                                 expected: &Token)
                                                 -> ParseResult<&'a Lexeme> {
    match tokens.next() {
        Some(lexeme) if &lexeme.token == expected => Ok(lexeme),
        other => Err(tokens.unexpected(other)),
    }
}

/// Parses a comma-separated argument list up to and including `)`.
///
/// The opening `(` has already been consumed. An immediately encountered `)`
/// produces an empty list. Each argument keeps the source text it was parsed
/// from.
///
/// Grammar (simplified): `arguments := [sum ("," sum)*] ")"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - something other than `,` or `)` follows an argument,
/// - the input ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_arguments(tokens: &mut TokenStream<'_>)
                                                      -> ParseResult<Vec<Argument>> {
    let mut arguments = Vec::new();
    if let Some(lexeme) = tokens.peek()
       && lexeme.token == Token::RParen
    {
        tokens.next();
        return Ok(arguments);
    }

    loop {
        let start = tokens.peek()
                          .map(|l| l.span.start)
                          .ok_or_else(|| tokens.unexpected(None))?;
        let expr = parse_sum(tokens)?;

        match tokens.next() {
            Some(lexeme) if matches!(lexeme.token, Token::Comma | Token::RParen) => {
                let text = tokens.slice(start, lexeme.span.start).to_string();
                arguments.push(Argument { expr, text });
                if lexeme.token == Token::RParen {
                    break;
                }
            },
            other => return Err(tokens.unexpected(other)),
        }
    }
    Ok(arguments)
}
