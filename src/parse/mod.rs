pub mod ast;
mod error;
mod lexer;
mod parser;
pub(crate) mod visit;

pub use error::{Expected, LexError, ParseError, ParseErrorKind};
pub use lexer::{tokenize, Token, TokenKind};

/// Builds an expression tree from the tokens of `source`.
pub fn parse(source: &str, tokens: Vec<Token>, max_depth: usize) -> Result<ast::Node, ParseError> {
    parser::Parser::new(source, tokens, max_depth).parse()
}
