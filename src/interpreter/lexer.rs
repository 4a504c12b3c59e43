use std::{fmt, ops::Range};

use logos::Logos;

use crate::{error::LexError, interpreter::value::core::Number};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(Number),
    /// Function names such as `sqrt` or `deg_to_rad`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
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
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// Failure reported by a token callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFault {
    /// No pattern matched.
    #[default]
    UnexpectedCharacter,
    /// A numeric literal's exponent is out of range.
    LiteralTooLarge,
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token.
    pub token:    Token,
    /// Byte range in the source.
    pub span:     Range<usize>,
    /// 0-based character offset in the source.
    pub position: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(Number)`: The exact value of the literal.
/// - `Err(LexFault::LiteralTooLarge)`: If the exponent is out of range.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<Number, LexFault> {
    Number::from_literal(lex.slice()).ok_or(LexFault::LiteralTooLarge)
}

/// Splits `source` into lexemes.
///
/// Whitespace is skipped. Lexing stops at the first character no token
/// accepts.
///
/// # Errors
/// - `LexError::UnexpectedCharacter` naming the character and its position.
/// - `LexError::LiteralTooLarge` for a literal with an out-of-range exponent.
///
/// # Example
/// ```
/// use ratcalc::{
///     error::LexError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let lexemes = tokenize("2 + x").unwrap();
/// assert_eq!(lexemes[1].token, Token::Plus);
/// assert_eq!(lexemes[2].position, 4);
///
/// let err = tokenize("5 $ 3").unwrap_err();
/// assert_eq!(err,
///            LexError::UnexpectedCharacter { character: '$',
///                                            position:  2, });
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, LexError> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut chars_seen = 0;
    let mut bytes_seen = 0;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        chars_seen += source[bytes_seen..span.start].chars().count();
        bytes_seen = span.start;
        let position = chars_seen;

        match token {
            Ok(token) => lexemes.push(Lexeme { token,
                                               span,
                                               position }),
            Err(LexFault::LiteralTooLarge) => {
                return Err(LexError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                       position });
            },
            Err(LexFault::UnexpectedCharacter) => {
                let character = source[span.start..].chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character,
                                                           position });
            },
        }
    }

    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|l| l.token).collect()
    }

    #[test]
    fn recognises_every_token() {
        assert_eq!(tokens("log(8, 2) % 3 ^ -1.5 * .5 / 2."),
                   vec![Token::Identifier("log".to_string()),
                        Token::LParen,
                        Token::Number(Number::from(8)),
                        Token::Comma,
                        Token::Number(Number::from(2)),
                        Token::RParen,
                        Token::Percent,
                        Token::Number(Number::from(3)),
                        Token::Caret,
                        Token::Minus,
                        Token::Number(Number::from_literal("1.5").unwrap()),
                        Token::Star,
                        Token::Number(Number::from_literal("0.5").unwrap()),
                        Token::Slash,
                        Token::Number(Number::from(2)),]);
    }

    #[test]
    fn positions_count_characters_not_bytes() {
        let err = tokenize("π + 1 $").unwrap_err();
        assert_eq!(err,
                   LexError::UnexpectedCharacter { character: 'π',
                                                   position:  0, });

        let lexemes = tokenize("1 +\t\n 22").unwrap();
        assert_eq!(lexemes[2].position, 6);
        assert_eq!(lexemes[2].span, 6..8);
    }

    #[test]
    fn oversized_literal_is_rejected() {
        assert!(matches!(tokenize("1 + 1e20000"),
                         Err(LexError::LiteralTooLarge { position: 4, .. })));
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
