use crate::common::*;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_literal(&mut self, x: UInt) -> Self::Output;

    fn visit_dice(&mut self, dice: &ast::Dice) -> Self::Output;

    fn visit_binary(&mut self, l: &ast::Node, op: BinaryOperator, r: &ast::Node) -> Self::Output;

    fn visit_group(&mut self, inner: &ast::Node) -> Self::Output;

    fn visit_neg(&mut self, inner: &ast::Node) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Node {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Literal(x) => v.visit_literal(*x),
            Self::Dice(dice) => v.visit_dice(dice),
            Self::Binary(l, op, r) => v.visit_binary(l, *op, r),
            Self::Group(inner) => v.visit_group(inner),
            Self::Neg(inner) => v.visit_neg(inner),
        }
    }
}
