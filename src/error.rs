use crate::parse::{LexError, ParseError};
use crate::roll::{RollError, ValidationError};

/// Everything that can go wrong between reading an expression and
/// producing its value.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot divide by zero")]
    DivisionByZero,
}

impl Error {
    /// Whether the input was rejected before evaluation, because it is not
    /// well-formed dice notation.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Lex(_) | Self::Parse(_))
    }
}

impl From<RollError> for Error {
    fn from(e: RollError) -> Self {
        match e {
            RollError::Validation(e) => Self::Validation(e),
            RollError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
