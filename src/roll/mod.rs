mod ctx;
mod error;
mod num;
mod roller;
mod stringify;
mod tree;
mod visit;

use crate::limits::Limits;
use crate::parse::ast;

type RResult<T> = Result<T, RollError>;

pub use ctx::RollContext;
pub use error::{DiceArg, RollError, ValidationError};
pub use num::Number;
pub use roller::{RollIter, Roller, SecureRoller};
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
pub use tree::{Binary, Dice, Eval, Grouping, Literal, Negation, Roll, RollNode, RollRecord};
pub use visit::{AcceptRoll, VisitRoll};

#[cfg(test)]
pub(crate) use roller::StepRoller;

/// Rolls every dice term of `node` and computes its value.
pub fn eval<R: Roller>(node: &ast::Node, roller: &mut R, limits: Limits) -> RResult<Roll> {
    RollContext::new(limits, roller).eval(node)
}
