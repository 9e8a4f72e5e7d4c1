use crate::common::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(UInt),
    Dice(Dice),
    Binary(Box<Node>, BinaryOperator, Box<Node>),
    Group(Box<Node>),
    Neg(Box<Node>),
}

impl Node {
    pub fn new_literal(x: UInt) -> Self {
        Self::Literal(x)
    }

    pub fn new_dice(count: Node, separator: Separator, faces: Node) -> Self {
        Self::Dice(Dice::new(count, separator, faces))
    }

    pub fn new_binary(left: Node, op: BinaryOperator, right: Node) -> Self {
        Self::Binary(Box::new(left), op, Box::new(right))
    }

    pub fn new_group(inner: Node) -> Self {
        Self::Group(Box::new(inner))
    }

    pub fn new_neg(inner: Node) -> Self {
        Self::Neg(Box::new(inner))
    }
}

/// Renders the expression back to notation with whitespace removed.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(x) => write!(f, "{}", x),
            Self::Dice(dice) => write!(f, "{}", dice),
            Self::Binary(l, op, r) => write!(f, "{}{}{}", l, op, r),
            Self::Group(inner) => write!(f, "({})", inner),
            Self::Neg(inner) => write!(f, "-{}", inner),
        }
    }
}

/// A dice term whose count and faces are each an integer or a
/// parenthesized expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dice {
    pub count: Box<Node>,
    pub separator: Separator,
    pub faces: Box<Node>,
}

impl Dice {
    pub fn new(count: Node, separator: Separator, faces: Node) -> Self {
        Self {
            count: Box::new(count),
            separator,
            faces: Box::new(faces),
        }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.count, self.separator, self.faces)
    }
}
