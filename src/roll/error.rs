use super::num::Number;
use crate::common::*;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot divide by zero")]
    DivisionByZero,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("dice count must be at least 1, found {0}")]
    CountTooSmall(Number),
    #[error("dice count must be at most {max}, found {value}")]
    CountTooLarge { value: Number, max: UInt },
    #[error("dice must have at least 1 face, found {0}")]
    FacesTooSmall(Number),
    #[error("dice must have at most {max} faces, found {value}")]
    FacesTooLarge { value: Number, max: UInt },
    #[error("{arg} must be a whole number, found {value}")]
    NotAnInteger { arg: DiceArg, value: Number },
    #[error("{value} is larger than {max}")]
    NumberTooLarge { value: UInt, max: UInt },
    #[error("too many dice rolled, at most {max} per expression")]
    TooManyRolls { max: usize },
    #[error("result is too large to represent")]
    Overflow,
}

/// Which side of a dice term a value was resolved for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DiceArg {
    Count,
    Faces,
}

impl fmt::Display for DiceArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Count => "dice count",
            Self::Faces => "face count",
        })
    }
}
