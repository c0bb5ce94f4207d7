//! Fully parenthesized prefix notation, such as `(- (* 2 x) 3)`.
//!
//! An operand is a number, a variable, or an operator application: an opening bracket, the symbol
//! of the operator, the operands, and a closing bracket. Every application is bracketed, so the
//! input is parsed by recursive descent without any precedence rules.
//!
//! Each nested application adds one level of recursion, so an application nested [`MAX_DEPTH`]
//! levels deep is rejected before its operands are parsed.

use log::trace;
use super::{
    error::{kind::{InvalidOperator, MissingClosingBracket}, Error},
    literal::parse_int,
    too_deep,
    unexpected_token,
    Parse,
    Parser,
    MAX_DEPTH,
};
use crate::tokenizer::{Token, TokenKind};
use symdiff_compute::{registry, Expr};

/// An expression in prefix notation.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr(pub Expr);

/// Parses an operator application. The opening bracket `open` has already been consumed.
///
/// `level` is the number of applications enclosing the operands, this one included.
fn parse_application(input: &mut Parser, open: Token, level: usize) -> Result<Expr, Error> {
    // the leaves under this application add one more level to the tree
    if level >= MAX_DEPTH {
        return Err(too_deep(open.span));
    }

    let name = input.next_token()
        .ok_or_else(|| Error::new(vec![open.span.clone()], MissingClosingBracket))?;
    let op = match name.kind {
        TokenKind::Word => registry::find_operator(name.lexeme),
        _ => None,
    }.ok_or_else(|| Error::new(
        vec![name.span.clone()],
        InvalidOperator { name: name.lexeme.to_string() },
    ))?;

    let mut operands = Vec::new();
    let close = loop {
        match input.current_token() {
            Some(token) if token.kind == TokenKind::CloseParen => {
                break input.next_token();
            },
            Some(_) => operands.push(parse_operand(input, level)?),
            None => return Err(Error::new(vec![open.span.clone()], MissingClosingBracket)),
        }
    };

    let end = close.map_or(open.span.end, |close| close.span.end);
    trace!("applying `{}` to {} operand(s)", op.name, operands.len());
    Expr::apply(op, operands)
        .map_err(|err| Error::new(vec![open.span.start..end], err))
}

/// Parses a single operand, enclosed in `level` applications.
fn parse_operand(input: &mut Parser, level: usize) -> Result<Expr, Error> {
    let token = input.next_token()
        .ok_or_else(|| Error::new(vec![input.eof_span()], MissingClosingBracket))?;
    trace!("prefix token {:?}", token.lexeme);

    match token.kind {
        TokenKind::OpenParen => parse_application(input, token, level + 1),
        TokenKind::Word => Expr::variable(token.lexeme)
            .or_else(|| parse_int(token.lexeme).map(Expr::Constant))
            .ok_or_else(|| unexpected_token(&token)),
        TokenKind::CloseParen | TokenKind::Whitespace => Err(unexpected_token(&token)),
    }
}

impl Parse for PrefixExpr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        parse_operand(input, 0).map(PrefixExpr)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symdiff_compute::{op::{ADD, COS, DIV, EXP, MUL, SUB}, ArityError};
    use crate::parser::error::kind::{NoValidTokens, TooDeep, TrailingTokens};
    use crate::parse_prefix;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    #[test]
    fn leaves() {
        assert_eq!(parse_prefix("12").unwrap(), Expr::Constant(12.0));
        assert_eq!(parse_prefix("-12").unwrap(), Expr::Constant(-12.0));
        assert_eq!(parse_prefix(" y ").unwrap(), var("y"));
    }

    #[test]
    fn nested() {
        assert_eq!(
            parse_prefix("(- (* 2 x) 3)").unwrap(),
            Expr::binary(
                &SUB,
                Expr::binary(&MUL, Expr::Constant(2.0), var("x")),
                Expr::Constant(3.0),
            ),
        );
        assert_eq!(
            parse_prefix("(/(exp x)(cos(+ y -1)))").unwrap(),
            Expr::binary(
                &DIV,
                Expr::unary(&EXP, var("x")),
                Expr::unary(&COS, Expr::binary(&ADD, var("y"), Expr::Constant(-1.0))),
            ),
        );
    }

    #[test]
    fn arity_error() {
        let err = parse_prefix("(+ 1)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArityError>(),
            Some(&ArityError { operator: "+", expected: 2, found: 1 }),
        );
        assert_eq!(err.to_string(), "Wrong number of arguments, 2 expected, 1 found");

        let err = parse_prefix("(negate 1 2)").unwrap_err();
        assert_eq!(err.to_string(), "Wrong number of arguments, 1 expected, 2 found");

        let err = parse_prefix("(sin)").unwrap_err();
        assert_eq!(err.to_string(), "Wrong number of arguments, 1 expected, 0 found");
    }

    #[test]
    fn missing_closing_bracket() {
        for source in ["(+ 1 2", "(* x (+ 1 2)", "(", "(sin (cos x"] {
            let err = parse_prefix(source).unwrap_err();
            assert_eq!(err.to_string(), "missing closing bracket", "for `{source}`");
        }
        assert_eq!(parse_prefix("(* x (+ 1 2)").unwrap_err().spans, vec![0..1]);
    }

    #[test]
    fn invalid_operator() {
        assert_eq!(parse_prefix("(foo 1 2)").unwrap_err().to_string(), "foo is not a valid operator");
        assert_eq!(parse_prefix("(x 1)").unwrap_err().to_string(), "x is not a valid operator");
        assert_eq!(parse_prefix("(1 2)").unwrap_err().to_string(), "1 is not a valid operator");
        assert_eq!(parse_prefix("()").unwrap_err().to_string(), ") is not a valid operator");
        assert_eq!(parse_prefix("((+ 1 2))").unwrap_err().to_string(), "( is not a valid operator");
        assert_eq!(parse_prefix("(SIN x)").unwrap_err().to_string(), "SIN is not a valid operator");
    }

    #[test]
    fn trailing_tokens() {
        let err = parse_prefix("(+ 1 2) 3").unwrap_err();
        assert!(err.is::<TrailingTokens>());
        assert_eq!(err.to_string(), "Unexpected end of string");

        assert!(parse_prefix("x y").unwrap_err().is::<TrailingTokens>());
        assert!(parse_prefix("(sin x))").unwrap_err().is::<TrailingTokens>());
    }

    #[test]
    fn no_valid_tokens() {
        let err = parse_prefix("").unwrap_err();
        assert!(err.is::<NoValidTokens>());
        assert_eq!(err.to_string(), "no valid tokens");
        assert!(parse_prefix(" \t ").unwrap_err().is::<NoValidTokens>());
    }

    #[test]
    fn unexpected_tokens() {
        assert_eq!(parse_prefix("(+ 1 +2)").unwrap_err().to_string(), "unexpected token +2");
        assert_eq!(parse_prefix("(+ 1 2.5)").unwrap_err().to_string(), "unexpected token 2.5");
        assert_eq!(parse_prefix("w").unwrap_err().to_string(), "unexpected token w");
        assert_eq!(parse_prefix(")").unwrap_err().to_string(), "unexpected token )");
        assert_eq!(parse_prefix("(* x sin)").unwrap_err().to_string(), "unexpected token sin");
    }

    #[test]
    fn first_error_wins() {
        // the unknown operator comes before the missing bracket
        assert_eq!(parse_prefix("(+ (foo 1) 2").unwrap_err().to_string(), "foo is not a valid operator");
        // the inner arity error comes before the trailing token
        assert!(parse_prefix("(+ (sin) 2) 4").unwrap_err().is::<ArityError>());
    }

    #[test]
    fn nesting_limit() {
        let nested = |levels: usize| {
            format!("{}x{}", "(negate ".repeat(levels), ")".repeat(levels))
        };

        let expr = parse_prefix(&nested(MAX_DEPTH - 1)).unwrap();
        assert_eq!(expr.evaluate(&[2.0]), if (MAX_DEPTH - 1) % 2 == 0 { 2.0 } else { -2.0 });

        let err = parse_prefix(&nested(MAX_DEPTH)).unwrap_err();
        assert_eq!(err.downcast_ref::<TooDeep>(), Some(&TooDeep { limit: MAX_DEPTH }));
        let start = "(negate ".len() * (MAX_DEPTH - 1);
        assert_eq!(err.spans, vec![start..start + 1]);

        assert!(parse_prefix(&nested(200_000)).unwrap_err().is::<TooDeep>());
    }
}
