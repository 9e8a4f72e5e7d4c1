use logos::Span;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized input at position {offset}: {slice:?}")]
pub struct LexError {
    pub offset: usize,
    pub slice: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub slice: String,
}

impl ParseError {
    pub(crate) fn input_too_long(len: usize, max: usize) -> Self {
        Self {
            kind: ParseErrorKind::InputTooLong { max },
            span: max..len,
            slice: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Empty,
    UnexpectedToken { expected: Vec<Expected> },
    UnexpectedEnd { expected: Vec<Expected> },
    UnclosedParen,
    UnmatchedParen,
    TooDeep { max: usize },
    InputTooLong { max: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty expression"),
            Self::UnexpectedToken { expected } => {
                f.write_str("unexpected token, expected ")?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedEnd { expected } => {
                f.write_str("unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::UnclosedParen => f.write_str("'(' is never closed"),
            Self::UnmatchedParen => f.write_str("')' has no matching '('"),
            Self::TooDeep { max } => write!(f, "parentheses nested deeper than {}", max),
            Self::InputTooLong { max } => write!(f, "expression longer than {} bytes", max),
        }
    }
}

/// What the parser was looking for when it failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expected {
    Integer,
    LeftParen,
    RightParen,
    Operator,
}

impl Expected {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "<integer>",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Operator => "<operator>",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn fmt_expected(expected: &[Expected], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => f.write_str(a.as_str()),
        [a, b] => write!(f, "{} or {}", a, b),
        [rest @ .., last] => {
            for exp in rest {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}
