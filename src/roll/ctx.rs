use super::{error::*, num::Number, roller::Roller, tree::*, RResult};
use crate::common::*;
use crate::limits::Limits;
use crate::parse::{
    ast,
    visit::{self, Accept},
};
use tracing::{debug, trace};

/// Per-evaluation state: the limits in force, the dice rolled so far and
/// the source of rolls.
pub struct RollContext<'r, R> {
    limits: Limits,
    rolls: usize,
    roller: &'r mut R,
}

impl<'r, R: Roller> RollContext<'r, R> {
    pub fn new(limits: Limits, roller: &'r mut R) -> Self {
        Self {
            limits,
            rolls: 0,
            roller,
        }
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.rolls > self.limits.max_rolls {
            debug!(
                rolls = self.rolls,
                max = self.limits.max_rolls,
                "roll limit exceeded"
            );
            Err(ValidationError::TooManyRolls {
                max: self.limits.max_rolls,
            }
            .into())
        } else {
            Ok(())
        }
    }

    fn resolve_count(&self, value: Number) -> RResult<usize> {
        let n = value.as_integer().ok_or(ValidationError::NotAnInteger {
            arg: DiceArg::Count,
            value,
        })?;
        if n < 1 {
            return Err(ValidationError::CountTooSmall(value).into());
        }
        let max = self.limits.max_count;
        if n as UInt > max {
            debug!(count = %value, max, "dice count over limit");
            return Err(ValidationError::CountTooLarge { value, max }.into());
        }
        Ok(n as usize)
    }

    fn resolve_faces(&self, value: Number) -> RResult<Faces> {
        let n = value.as_integer().ok_or(ValidationError::NotAnInteger {
            arg: DiceArg::Faces,
            value,
        })?;
        let max = self.limits.max_faces.min(MAX_SAFE_INTEGER);
        if n > 0 && n as UInt > max {
            debug!(faces = %value, max, "face count over limit");
            return Err(ValidationError::FacesTooLarge { value, max }.into());
        }
        Faces::new(n.max(0) as UInt).ok_or_else(|| ValidationError::FacesTooSmall(value).into())
    }

    /// Rolls `num` dice with `faces` faces, counting them against the limit
    /// before anything is drawn.
    pub fn roll(&mut self, num: usize, faces: Faces) -> RResult<RollRecord> {
        self.count_rolls(num)?;

        let mut rolls = self.roller.roll_iter(num, faces);
        let first = rolls
            .next()
            .ok_or(ValidationError::CountTooSmall(Number::ZERO))?;
        let mut values = vec1![first];
        for value in rolls {
            values.push(value);
        }

        trace!(faces = faces.get(), values = ?values.as_slice(), "rolled");
        Ok(RollRecord::new(faces, values))
    }

    pub fn eval(&mut self, node: &ast::Node) -> RResult<Roll> {
        let tree = node.accept(self)?;
        let roll = Roll::new(node.to_string(), tree)?;
        debug!(
            expression = roll.expression(),
            total = %roll.total(),
            rolls = self.rolls,
            "evaluated"
        );
        Ok(roll)
    }
}

impl<R: Roller> visit::AstVisitor for RollContext<'_, R> {
    type Output = RResult<RollNode>;

    fn visit_literal(&mut self, x: UInt) -> Self::Output {
        if x > MAX_SAFE_INTEGER {
            return Err(ValidationError::NumberTooLarge {
                value: x,
                max: MAX_SAFE_INTEGER,
            }
            .into());
        }
        Ok(Literal::new(Number::Int(x as Int)).into())
    }

    fn visit_dice(&mut self, dice: &ast::Dice) -> Self::Output {
        let count = dice.count.accept(self)?;
        let num = self.resolve_count(count.total()?)?;
        let faces = dice.faces.accept(self)?;
        let sides = self.resolve_faces(faces.total()?)?;

        let record = self.roll(num, sides)?;
        Ok(Dice::new(count, dice.separator, faces, record).into())
    }

    fn visit_binary(&mut self, l: &ast::Node, op: BinaryOperator, r: &ast::Node) -> Self::Output {
        let left = l.accept(self)?;
        let right = r.accept(self)?;
        Ok(Binary::new(left, op, right).into())
    }

    fn visit_group(&mut self, inner: &ast::Node) -> Self::Output {
        let inner = inner.accept(self)?;
        Ok(Grouping::new(inner).into())
    }

    fn visit_neg(&mut self, inner: &ast::Node) -> Self::Output {
        let inner = inner.accept(self)?;
        Ok(Negation::new(inner).into())
    }
}
