//! Postfix (reverse Polish) notation, such as `2 x * 3 -`.
//!
//! Tokens are read left to right. Numbers and variables are pushed on an operand stack; an
//! operator pops as many operands as its arity, the older operand first, and pushes its
//! application. The input is valid if exactly one operand is left on the stack at the end.
//!
//! The depth of each operand is tracked as it is built, so an input that nests operators deeper
//! than [`MAX_DEPTH`] is rejected without recursing.

use log::trace;
use std::ops::Range;
use super::{
    error::{kind::{NoValidTokens, UnusedOperands}, Error},
    literal::parse_int,
    too_deep,
    unexpected_token,
    Parse,
    Parser,
    MAX_DEPTH,
};
use crate::tokenizer::{Token, TokenKind};
use symdiff_compute::{registry, Expr, Operator};

/// An expression in postfix notation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr(pub Expr);

/// An operand on the stack, with the region of the source it was parsed from.
struct Operand {
    expr: Expr,
    span: Range<usize>,

    /// The number of levels of the tree, counting the leaves.
    depth: usize,
}

/// Pops the operands of `token`'s operator off the stack and applies the operator.
///
/// If the stack holds fewer operands than the arity, all of them are used, and the construction
/// reports the mismatch.
fn apply(stack: &mut Vec<Operand>, token: &Token, op: &'static Operator) -> Result<Operand, Error> {
    let operands = stack.split_off(stack.len().saturating_sub(op.arity));
    let start = operands.first().map_or(token.span.start, |operand| operand.span.start);
    let depth = operands.iter().map(|operand| operand.depth).max().unwrap_or(0) + 1;

    let expr = Expr::apply(op, operands.into_iter().map(|operand| operand.expr).collect())
        .map_err(|err| Error::new(vec![token.span.clone()], err))?;
    if depth > MAX_DEPTH {
        return Err(too_deep(token.span.clone()));
    }

    Ok(Operand { expr, span: start..token.span.end, depth })
}

/// Parses a single token into an operand, using the stack for operators.
fn parse_token(stack: &mut Vec<Operand>, token: Token) -> Result<Operand, Error> {
    if token.kind != TokenKind::Word {
        return Err(unexpected_token(&token));
    }

    let op = registry::binary_operator(token.lexeme)
        .or_else(|| registry::unary_operator(token.lexeme));
    if let Some(op) = op {
        return apply(stack, &token, op);
    }

    let expr = Expr::variable(token.lexeme)
        .or_else(|| parse_int(token.lexeme).map(Expr::Constant))
        .ok_or_else(|| unexpected_token(&token))?;
    Ok(Operand { expr, span: token.span, depth: 1 })
}

impl Parse for PostfixExpr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let mut stack = Vec::new();

        while let Some(token) = input.next_token() {
            trace!("postfix token {:?} with {} operand(s) on the stack", token.lexeme, stack.len());
            let operand = parse_token(&mut stack, token)?;
            stack.push(operand);
        }

        let result = stack.pop()
            .ok_or_else(|| Error::new(vec![input.eof_span()], NoValidTokens))?;
        if !stack.is_empty() {
            return Err(Error::new(
                stack.iter().map(|operand| operand.span.clone()).collect(),
                UnusedOperands { count: stack.len() },
            ));
        }

        Ok(PostfixExpr(result.expr))
    }
}
