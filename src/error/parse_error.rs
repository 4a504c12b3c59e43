use thiserror::Error;

/// Errors raised while splitting the input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that no token pattern accepts.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// 0-based character offset into the input.
        position:  usize,
    },
    /// A numeric literal whose decimal exponent is out of range.
    #[error("Literal '{literal}' at position {position} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// 0-based character offset into the input.
        position: usize,
    },
}

/// Errors raised when the token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that no production can accept here.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// 0-based character offset of the token.
        position: usize,
    },
    /// Reached the end of input in the middle of an expression.
    #[error("Unexpected end of input at position {position}.")]
    UnexpectedEnd {
        /// 0-based character offset of the end of input.
        position: usize,
    },
    /// A complete expression was parsed but tokens remain.
    #[error("Extra input after expression: '{token}' at position {position}.")]
    TrailingInput {
        /// The first token left over.
        token:    String,
        /// 0-based character offset of the token.
        position: usize,
    },
    /// Parentheses or function calls nested beyond the parser's limit.
    #[error("Expression nested too deeply at position {position}.")]
    TooDeep {
        /// 0-based character offset where the limit was hit.
        position: usize,
    },
    /// More tokens than the parser accepts in one expression.
    #[error("Expression is too long: {length} tokens, at most {limit} allowed.")]
    TooLong {
        /// Number of tokens in the input.
        length: usize,
        /// The maximum accepted.
        limit:  usize,
    },
}
