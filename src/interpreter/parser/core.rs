use std::{iter::Peekable, slice};

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{
        lexer::{Lexeme, tokenize},
        parser::binary::parse_sum,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Most tokens accepted in one expression. Operator chains become deep
/// trees, so this also bounds the depth of the tree the evaluator walks.
pub const MAX_LEXEMES: usize = 2048;

/// Deepest nesting of parentheses, argument lists and `^` chains accepted.
pub const MAX_NESTING: usize = 256;

/// Lexemes being consumed by the parser, with access to the source they
/// were cut from.
pub struct TokenStream<'a> {
    source:  &'a str,
    lexemes: Peekable<slice::Iter<'a, Lexeme>>,
    depth:   usize,
}

impl<'a> TokenStream<'a> {
    #[must_use]
    pub fn new(source: &'a str, lexemes: &'a [Lexeme]) -> Self {
        Self { source,
               lexemes: lexemes.iter().peekable(),
               depth: 0 }
    }

    /// Looks at the next lexeme without consuming it.
    pub fn peek(&mut self) -> Option<&'a Lexeme> {
        self.lexemes.peek().copied()
    }

    /// Consumes the next lexeme.
    pub fn next(&mut self) -> Option<&'a Lexeme> {
        self.lexemes.next()
    }

    /// The source text of a lexeme.
    #[must_use]
    pub fn text(&self, lexeme: &Lexeme) -> &'a str {
        &self.source[lexeme.span.clone()]
    }

    /// The source text between two byte offsets, trimmed.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source[start..end].trim()
    }

    /// Character offset just past the last character of the source.
    #[must_use]
    pub fn end_position(&self) -> usize {
        self.source.chars().count()
    }

    /// Builds the error for an unexpected lexeme, or for running out of
    /// input when there is none.
    #[must_use]
    pub fn unexpected(&self, lexeme: Option<&Lexeme>) -> ParseError {
        match lexeme {
            Some(lexeme) => ParseError::UnexpectedToken { token:    self.text(lexeme).to_string(),
                                                          position: lexeme.position, },
            None => ParseError::UnexpectedEnd { position: self.end_position() },
        }
    }

    /// Enters one level of nesting.
    ///
    /// # Errors
    /// `ParseError::TooDeep` once `MAX_NESTING` levels are open.
    pub fn descend(&mut self, position: usize) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep { position });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting.
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses a complete expression.
///
/// This is the entry point for parsing. It tokenizes `source`, begins at the
/// lowest-precedence production, `sum`, and requires that every token is
/// consumed. Parsing performs no evaluation.
///
/// Grammar: `expression := sum`
///
/// # Errors
/// - `Error::Lex` for characters the lexer rejects.
/// - `Error::Parse` for token sequences the grammar cannot reduce, or input
///   longer than `MAX_LEXEMES` tokens.
///
/// # Example
/// ```
/// use ratcalc::{
///     ast::{Expr, ProductOperator},
///     interpreter::parser::core::parse,
/// };
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// let Expr::Sum { right, .. } = tree else { panic!("expected a sum") };
/// assert!(matches!(*right,
///                  Expr::Product { op: ProductOperator::Mul,
///                                  .. }));
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    let lexemes = tokenize(source)?;
    if lexemes.len() > MAX_LEXEMES {
        return Err(ParseError::TooLong { length: lexemes.len(),
                                         limit:  MAX_LEXEMES, }.into());
    }
    let mut stream = TokenStream::new(source, &lexemes);

    let expr = parse_sum(&mut stream)?;

    if let Some(extra) = stream.next() {
        return Err(ParseError::TrailingInput { token:    stream.text(extra).to_string(),
                                               position: extra.position, }.into());
    }
    Ok(expr)
}
