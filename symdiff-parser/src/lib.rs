//! Parsers for the two textual notations of `symdiff` expressions.
//!
//! Postfix notation lists the operands of an operator before the operator itself:
//!
//! ```
//! use symdiff_parser::parse_postfix;
//!
//! let expr = parse_postfix("2 x * 3 -").unwrap();
//! assert_eq!(expr.evaluate(&[4.0]), 5.0);
//! ```
//!
//! Prefix notation brackets every application, with the operator first:
//!
//! ```
//! use symdiff_parser::parse_prefix;
//!
//! let expr = parse_prefix("(- (* 2 x) 3)").unwrap();
//! assert_eq!(expr.to_string(), "2 x * 3 -");
//! ```
//!
//! Both parsers report failures as a [`symdiff_error::Error`], whose kind is one of the types in
//! [`parser::error::kind`], or a [`symdiff_compute::ArityError`] when an operator receives the wrong
//! number of operands.

pub mod parser;
pub mod tokenizer;

use log::debug;
use parser::{error::Error, Parser, PostfixExpr, PrefixExpr};
use symdiff_compute::Expr;

/// Parses an expression written in postfix notation.
pub fn parse_postfix(source: &str) -> Result<Expr, Error> {
    debug!("parsing postfix input {:?}", source);
    Parser::new(source)
        .try_parse_full::<PostfixExpr>()
        .map(|PostfixExpr(expr)| expr)
}

/// Parses an expression written in fully parenthesized prefix notation.
pub fn parse_prefix(source: &str) -> Result<Expr, Error> {
    debug!("parsing prefix input {:?}", source);
    Parser::new(source)
        .try_parse_full::<PrefixExpr>()
        .map(|PrefixExpr(expr)| expr)
}
