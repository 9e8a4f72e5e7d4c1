use super::tree::*;

pub trait VisitRoll {
    type Output;

    fn visit<A: AcceptRoll + ?Sized>(&mut self, a: &A) -> Self::Output {
        a.accept(self)
    }

    fn visit_roll(&mut self, x: &Roll) -> Self::Output;

    fn visit_literal(&mut self, x: &Literal) -> Self::Output;

    fn visit_dice(&mut self, x: &Dice) -> Self::Output;

    fn visit_binary(&mut self, x: &Binary) -> Self::Output;

    fn visit_grouping(&mut self, x: &Grouping) -> Self::Output;

    fn visit_negation(&mut self, x: &Negation) -> Self::Output;
}

pub trait AcceptRoll {
    fn accept<V: VisitRoll + ?Sized>(&self, v: &mut V) -> V::Output;
}

impl AcceptRoll for Roll {
    fn accept<V: VisitRoll + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_roll(self)
    }
}

impl AcceptRoll for RollNode {
    fn accept<V: VisitRoll + ?Sized>(&self, v: &mut V) -> V::Output {
        match self {
            Self::Literal(x) => v.visit_literal(x),
            Self::Dice(x) => v.visit_dice(x),
            Self::Binary(x) => v.visit_binary(x),
            Self::Grouping(x) => v.visit_grouping(x),
            Self::Negation(x) => v.visit_negation(x),
        }
    }
}
