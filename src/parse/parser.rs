use super::{ast::*, error::*, lexer::*};
use crate::common::*;
use logos::Span;
use std::iter::Peekable;
use std::vec;

type PResult<T = Node> = Result<T, ParseError>;

pub struct Parser<'a> {
    source: &'a str,
    tokens: Peekable<vec::IntoIter<Token>>,
    span: Span,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    const ADDITION_OPS: &'static [BinaryOperator] = &[BinaryOperator::Add, BinaryOperator::Sub];

    const MULTIPLICATION_OPS: &'static [BinaryOperator] =
        &[BinaryOperator::Mul, BinaryOperator::Div];

    pub fn new(source: &'a str, tokens: Vec<Token>, max_depth: usize) -> Self {
        Self {
            source,
            tokens: tokens.into_iter().peekable(),
            span: 0..0,
            depth: 0,
            max_depth,
        }
    }

    pub fn parse(mut self) -> PResult {
        if self.tokens.peek().is_none() {
            return self.error(ParseErrorKind::Empty);
        }

        let node = self.parse_expression()?;
        match self.advance() {
            None => Ok(node),
            Some(TokenKind::RightParen) => self.error(ParseErrorKind::UnmatchedParen),
            Some(_) => self.error(ParseErrorKind::UnexpectedToken {
                expected: vec![Expected::Operator],
            }),
        }
    }

    fn advance(&mut self) -> Option<TokenKind> {
        let token = self.tokens.next()?;
        self.span = token.span;
        Some(token.kind)
    }

    fn peek(&mut self) -> Option<TokenKind> {
        self.tokens.peek().map(|token| token.kind)
    }

    fn next_operator(&mut self, options: &[BinaryOperator]) -> Option<BinaryOperator> {
        match self.peek() {
            Some(TokenKind::Operator(op)) if options.contains(&op) => {
                self.advance();
                Some(op)
            }
            _ => None,
        }
    }

    fn at_end(&mut self) {
        let end = self.source.len();
        self.span = end..end;
    }

    fn error<T>(&self, kind: ParseErrorKind) -> PResult<T> {
        let slice = self.source.get(self.span.clone()).unwrap_or_default();
        Err(ParseError {
            kind,
            span: self.span.clone(),
            slice: slice.to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: Vec<Expected>) -> PResult<T> {
        if self.advance().is_some() {
            self.error(ParseErrorKind::UnexpectedToken { expected })
        } else {
            self.at_end();
            self.error(ParseErrorKind::UnexpectedEnd { expected })
        }
    }

    fn parse_expression(&mut self) -> PResult {
        // The first term's implicit operator is '+'
        let negate = self.next_operator(Self::ADDITION_OPS) == Some(BinaryOperator::Sub);
        let first = self.parse_term()?;
        let mut lhs = if negate { Node::new_neg(first) } else { first };

        while let Some(op) = self.next_operator(Self::ADDITION_OPS) {
            let rhs = self.parse_term()?;
            lhs = Node::new_binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> PResult {
        let mut lhs = self.parse_factor()?;

        while let Some(op) = self.next_operator(Self::MULTIPLICATION_OPS) {
            let rhs = self.parse_factor()?;
            lhs = Node::new_binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> PResult {
        let count = self.parse_dice_arg()?;

        if let Some(TokenKind::Dice(separator)) = self.peek() {
            self.advance();
            let faces = self.parse_dice_arg()?;
            Ok(Node::new_dice(count, separator, faces))
        } else {
            Ok(count)
        }
    }

    fn parse_dice_arg(&mut self) -> PResult {
        match self.peek() {
            Some(TokenKind::Number { value, .. }) => {
                self.advance();
                Ok(Node::new_literal(value))
            }
            Some(TokenKind::LeftParen) => {
                self.advance();
                self.parse_group()
            }
            _ => self.unexpected_token(vec![Expected::Integer, Expected::LeftParen]),
        }
    }

    fn parse_group(&mut self) -> PResult {
        if self.depth >= self.max_depth {
            return self.error(ParseErrorKind::TooDeep {
                max: self.max_depth,
            });
        }

        self.depth += 1;
        let inner = self.parse_expression()?;
        self.depth -= 1;

        match self.advance() {
            Some(TokenKind::RightParen) => Ok(Node::new_group(inner)),
            Some(_) => self.error(ParseErrorKind::UnexpectedToken {
                expected: vec![Expected::Operator, Expected::RightParen],
            }),
            None => {
                self.at_end();
                self.error(ParseErrorKind::UnclosedParen)
            }
        }
    }
}
