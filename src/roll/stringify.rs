use super::num::Number;
use super::tree::*;
use super::visit::{AcceptRoll, VisitRoll};
use crate::common::{Faces, UInt};

/// Renders an evaluated roll as `<expression> --> <breakdown> --> <value>`.
///
/// The breakdown mirrors the expression with every dice term replaced by
/// its total and, when more than one die was rolled, the individual dice:
/// `2d6+3 --> 9[4,5] +3 --> 12`. A term whose count or faces rolled dice
/// of its own keeps that breakdown in front of its result:
/// `(1d2)d6 --> (2)d6:7[3,4] --> 7`. A roll without dice collapses to
/// `<expression> --> <value>`.
pub trait Stringify {
    fn stringify<A: AcceptRoll + ?Sized>(&mut self, a: &A) -> String {
        a.accept(self)
    }

    fn str_roll(&mut self, roll: &Roll) -> String {
        let value = self.str_value(roll.total());
        if roll.has_dice() {
            let breakdown = self.stringify(&roll.tree);
            format!("{} --> {} --> {}", roll.expression, breakdown, value)
        } else {
            format!("{} --> {}", roll.expression, value)
        }
    }

    fn str_value(&mut self, value: Number) -> String {
        value.to_string()
    }

    fn str_literal(&mut self, lit: &Literal) -> String {
        lit.value.to_string()
    }

    fn str_dice(&mut self, dice: &Dice) -> String {
        let faces = dice.record.faces();
        let rolled = match dice.record.values() {
            [value] => self.str_die(*value, faces),
            values => {
                let the_dice = values
                    .iter()
                    .map(|&v| self.str_die(v, faces))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{}[{}]", dice.record.total(), the_dice)
            }
        };
        if dice.count.has_dice() || dice.faces.has_dice() {
            let count = self.stringify(&*dice.count);
            let sides = self.stringify(&*dice.faces);
            format!("{}{}{}:{}", count, dice.separator, sides, rolled)
        } else {
            rolled
        }
    }

    fn str_die(&mut self, value: UInt, _faces: Faces) -> String {
        value.to_string()
    }

    fn str_binary(&mut self, bin: &Binary) -> String {
        let l = self.stringify(&*bin.left);
        let r = self.stringify(&*bin.right);
        format!("{} {}{}", l, bin.op, r)
    }

    fn str_grouping(&mut self, g: &Grouping) -> String {
        format!("({})", self.stringify(&*g.0))
    }

    fn str_negation(&mut self, n: &Negation) -> String {
        format!("-{}", self.stringify(&*n.0))
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}

/// Chat-flavoured output: natural minimums and maximums in bold, the final
/// value in a code span.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for MarkdownStringifier {
    fn str_value(&mut self, value: Number) -> String {
        format!("`{}`", value)
    }

    fn str_die(&mut self, value: UInt, faces: Faces) -> String {
        if value == 1 || value == faces.get() {
            format!("**{}**", value)
        } else {
            value.to_string()
        }
    }
}

impl<S: ?Sized> VisitRoll for S
where
    S: Stringify,
{
    type Output = String;

    fn visit_roll(&mut self, x: &Roll) -> Self::Output {
        self.str_roll(x)
    }

    fn visit_literal(&mut self, x: &Literal) -> Self::Output {
        self.str_literal(x)
    }

    fn visit_dice(&mut self, x: &Dice) -> Self::Output {
        self.str_dice(x)
    }

    fn visit_binary(&mut self, x: &Binary) -> Self::Output {
        self.str_binary(x)
    }

    fn visit_grouping(&mut self, x: &Grouping) -> Self::Output {
        self.str_grouping(x)
    }

    fn visit_negation(&mut self, x: &Negation) -> Self::Output {
        self.str_negation(x)
    }
}
