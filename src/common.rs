use std::fmt::{self, Write};
use std::num::NonZeroU64;
pub use vec1::vec1;

pub type Int = i64;
pub type UInt = u64;

pub type Float = f64;

/// The number of faces on a die.
pub type Faces = NonZeroU64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Largest integer magnitude an expression may name, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: UInt = (1 << 53) - 1;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        };
        f.write_char(c)
    }
}

/// The letter separating a dice count from its faces, `d` or `r`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Separator {
    D,
    R,
}

impl Separator {
    pub(crate) fn from_slice(s: &str) -> Option<Self> {
        match s {
            "d" | "D" => Some(Self::D),
            "r" | "R" => Some(Self::R),
            _ => None,
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::D => 'd',
            Self::R => 'r',
        };
        f.write_char(c)
    }
}
