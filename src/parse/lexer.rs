use super::error::LexError;
use crate::common::*;
use logos::{Lexer as LogosLexer, Logos, Span};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r"[dDrR]")]
    Dice,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[error]
    Error,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer literal. `implicit` is set on the count the lexer inserts
    /// before a dice separator written without one.
    Number { value: UInt, implicit: bool },
    Dice(Separator),
    Operator(BinaryOperator),
    LeftParen,
    RightParen,
}

impl TokenKind {
    const fn is_operand_end(&self) -> bool {
        matches!(self, Self::Number { .. } | Self::RightParen)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{}", value),
            Self::Dice(sep) => write!(f, "'{}'", sep),
            Self::Operator(op) => write!(f, "'{}'", op),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

pub(crate) struct Lexer<'a> {
    inner: PeekableLexer<'a, LogosLexer<'a, Lexeme>, Lexeme>,
    after_operand: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            inner: Lexeme::lexer(s).peekable_lexer(),
            after_operand: false,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        // `d6`, `(d4)` and `2+d8` all roll a single die
        if !self.after_operand && matches!(self.inner.peek(), Some(Lexeme::Dice)) {
            self.after_operand = true;
            let at = self.inner.span().end;
            let kind = TokenKind::Number {
                value: 1,
                implicit: true,
            };
            return Some(Ok(Token::new(kind, at..at)));
        }

        let lexeme = self.inner.next()?;
        let span = self.inner.span();
        let slice = self.inner.slice();

        let kind = match lexeme {
            // Digits only, so parsing can fail on overflow alone; the
            // saturated value is rejected by magnitude validation.
            Lexeme::Integer => TokenKind::Number {
                value: slice.parse().unwrap_or(UInt::MAX),
                implicit: false,
            },
            Lexeme::Dice => match Separator::from_slice(slice) {
                Some(sep) => TokenKind::Dice(sep),
                None => return Some(Err(lex_error(span, slice))),
            },
            Lexeme::LeftParen => TokenKind::LeftParen,
            Lexeme::RightParen => TokenKind::RightParen,
            Lexeme::Plus => TokenKind::Operator(BinaryOperator::Add),
            Lexeme::Minus => TokenKind::Operator(BinaryOperator::Sub),
            Lexeme::Star => TokenKind::Operator(BinaryOperator::Mul),
            Lexeme::Slash => TokenKind::Operator(BinaryOperator::Div),
            Lexeme::Error => return Some(Err(lex_error(span, slice))),
        };

        self.after_operand = kind.is_operand_end();
        Some(Ok(Token::new(kind, span)))
    }
}

fn lex_error(span: Span, slice: &str) -> LexError {
    LexError {
        offset: span.start,
        slice: slice.to_string(),
    }
}

/// Splits `s` into tokens, stopping at the first unrecognized character.
pub fn tokenize(s: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn num(value: UInt) -> TokenKind {
        TokenKind::Number {
            value,
            implicit: false,
        }
    }

    fn implicit() -> TokenKind {
        TokenKind::Number {
            value: 1,
            implicit: true,
        }
    }

    #[test]
    fn test_lex_arithmetic() {
        use BinaryOperator::*;
        assert_eq!(
            kinds("1 + 2*3 - 4 / 5"),
            vec![
                num(1),
                TokenKind::Operator(Add),
                num(2),
                TokenKind::Operator(Mul),
                num(3),
                TokenKind::Operator(Sub),
                num(4),
                TokenKind::Operator(Div),
                num(5),
            ]
        );
    }

    #[test]
    fn test_lex_dice() {
        assert_eq!(
            kinds("2d6"),
            vec![num(2), TokenKind::Dice(Separator::D), num(6)]
        );
        assert_eq!(
            kinds("3R20"),
            vec![num(3), TokenKind::Dice(Separator::R), num(20)]
        );
    }

    #[test]
    fn test_lex_implicit_count() {
        assert_eq!(
            kinds("d6"),
            vec![implicit(), TokenKind::Dice(Separator::D), num(6)]
        );
        assert_eq!(
            kinds("(D4)"),
            vec![
                TokenKind::LeftParen,
                implicit(),
                TokenKind::Dice(Separator::D),
                num(4),
                TokenKind::RightParen,
            ]
        );
        assert_eq!(
            kinds("-r8"),
            vec![
                TokenKind::Operator(BinaryOperator::Sub),
                implicit(),
                TokenKind::Dice(Separator::R),
                num(8),
            ]
        );
        // a group is a count, so nothing is inserted after ')'
        assert_eq!(
            kinds("(1+2)d6")[5..],
            [TokenKind::Dice(Separator::D), num(6)]
        );
    }

    #[test]
    fn test_implicit_count_span_is_empty() {
        let tokens = tokenize("1+d6").unwrap();
        assert_eq!(tokens[2].span, 2..2);
        assert_eq!(tokens[3].span, 2..3);
    }

    #[test]
    fn test_lex_huge_integer_saturates() {
        assert_eq!(kinds("99999999999999999999999"), vec![num(UInt::MAX)]);
    }

    #[test]
    fn test_lex_error() {
        assert_eq!(
            tokenize("abc"),
            Err(LexError {
                offset: 0,
                slice: "a".to_string()
            })
        );
        assert_eq!(tokenize("2d6 + x").unwrap_err().offset, 6);
        assert_eq!(tokenize("1 % 2").unwrap_err().offset, 2);
    }

    #[test]
    fn test_lex_empty() {
        assert_eq!(kinds("   "), vec![]);
    }
}
