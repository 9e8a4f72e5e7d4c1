use super::{
    error::{RollError, ValidationError},
    num::Number,
    RResult,
};
use crate::common::*;

#[enum_dispatch::enum_dispatch]
pub trait Eval {
    fn total(&self) -> RResult<Number>;
}

/// An evaluated expression: the normalized notation it came from, the tree
/// of resolved rolls and the final value.
#[derive(Debug, Clone, PartialEq)]
pub struct Roll {
    pub(crate) expression: String,
    pub(crate) tree: RollNode,
    total: Number,
}

impl Roll {
    pub(crate) fn new(expression: String, tree: RollNode) -> RResult<Self> {
        let total = tree.total()?;
        Ok(Self {
            expression,
            tree,
            total,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn tree(&self) -> &RollNode {
        &self.tree
    }

    pub fn total(&self) -> Number {
        self.total
    }

    /// Every roll made, in the order the dice were rolled. Dice nested in a
    /// count or face expression come before the dice they sized.
    pub fn records(&self) -> Vec<&RollRecord> {
        let mut out = Vec::new();
        self.tree.collect_records(&mut out);
        out
    }

    pub fn has_dice(&self) -> bool {
        self.tree.has_dice()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch::enum_dispatch(Eval)]
pub enum RollNode {
    Literal(Literal),
    Dice(Dice),
    Binary(Binary),
    Grouping(Grouping),
    Negation(Negation),
}

impl RollNode {
    pub fn has_dice(&self) -> bool {
        match self {
            Self::Literal(_) => false,
            Self::Dice(_) => true,
            Self::Binary(bin) => bin.left.has_dice() || bin.right.has_dice(),
            Self::Grouping(Grouping(inner)) | Self::Negation(Negation(inner)) => inner.has_dice(),
        }
    }

    fn collect_records<'a>(&'a self, out: &mut Vec<&'a RollRecord>) {
        match self {
            Self::Literal(_) => {}
            Self::Dice(dice) => {
                dice.count.collect_records(out);
                dice.faces.collect_records(out);
                out.push(&dice.record);
            }
            Self::Binary(bin) => {
                bin.left.collect_records(out);
                bin.right.collect_records(out);
            }
            Self::Grouping(Grouping(inner)) | Self::Negation(Negation(inner)) => {
                inner.collect_records(out)
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Literal {
    pub value: Number,
}

impl Literal {
    pub fn new(value: Number) -> Self {
        Self { value }
    }
}

impl Eval for Literal {
    fn total(&self) -> RResult<Number> {
        Ok(self.value)
    }
}

/// The outcome of rolling one dice term. Never changes once rolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollRecord {
    faces: Faces,
    values: NonEmpty<UInt>,
}

impl RollRecord {
    pub fn new(faces: Faces, values: NonEmpty<UInt>) -> Self {
        Self { faces, values }
    }

    pub fn faces(&self) -> Faces {
        self.faces
    }

    pub fn values(&self) -> &[UInt] {
        self.values.as_slice()
    }

    pub fn total(&self) -> Number {
        self.values.iter().map(|&v| Number::Int(v as Int)).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dice {
    pub count: Box<RollNode>,
    pub separator: Separator,
    pub faces: Box<RollNode>,
    pub record: RollRecord,
}

impl Dice {
    pub fn new(count: RollNode, separator: Separator, faces: RollNode, record: RollRecord) -> Self {
        Self {
            count: Box::new(count),
            separator,
            faces: Box::new(faces),
            record,
        }
    }
}

impl Eval for Dice {
    fn total(&self) -> RResult<Number> {
        Ok(self.record.total())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Box<RollNode>,
    pub op: BinaryOperator,
    pub right: Box<RollNode>,
}

impl Binary {
    pub fn new(left: RollNode, op: BinaryOperator, right: RollNode) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

impl Eval for Binary {
    fn total(&self) -> RResult<Number> {
        use BinaryOperator::*;

        let left = self.left.total()?;
        let right = self.right.total()?;
        let value = match self.op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left
                .checked_div(right)
                .ok_or(RollError::DivisionByZero)?,
        };
        if !value.is_finite() {
            return Err(ValidationError::Overflow.into());
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grouping(pub(crate) Box<RollNode>);

impl Grouping {
    pub fn new(inner: RollNode) -> Self {
        Self(Box::new(inner))
    }
}

impl Eval for Grouping {
    fn total(&self) -> RResult<Number> {
        self.0.total()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Negation(pub(crate) Box<RollNode>);

impl Negation {
    pub fn new(inner: RollNode) -> Self {
        Self(Box::new(inner))
    }
}

impl Eval for Negation {
    fn total(&self) -> RResult<Number> {
        Ok(-self.0.total()?)
    }
}
