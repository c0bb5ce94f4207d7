pub mod error;
pub mod literal;
pub mod postfix;
pub mod prefix;

use error::{Error, kind::{self, NoValidTokens, TooDeep, UnexpectedToken}};
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

pub use postfix::PostfixExpr;
pub use prefix::PrefixExpr;

/// The maximum depth of a parsed expression tree, counting the leaves as one level.
///
/// Evaluating, differentiating, simplifying and dropping an [`Expr`](symdiff_compute::Expr) all
/// recurse once per level, so both parsers reject deeper inputs with a [`TooDeep`] error rather
/// than build a tree that would overflow the stack when traversed.
pub const MAX_DEPTH: usize = 512;

/// A parser over the tokens of a single input. The notation is chosen by the type being parsed:
/// [`PostfixExpr`] or [`PrefixExpr`].
///
/// ```
/// use symdiff_parser::parser::{Parser, PrefixExpr};
///
/// let PrefixExpr(expr) = Parser::new("(- (* 2 x) 3)").try_parse_full().unwrap();
/// assert_eq!(expr.evaluate(&[5.0]), 7.0);
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The non-whitespace tokens of the input.
    tokens: Box<[Token<'source>]>,

    /// The length of the input, in bytes.
    source_len: usize,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            source_len: source.len(),
            cursor: 0,
        }
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Returns [`None`] if there
    /// are no more tokens.
    pub fn next_token(&mut self) -> Option<Token<'source>> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Returns the span covering every token that has not been parsed yet, or [`None`] if all of
    /// them were.
    fn remaining_span(&self) -> Option<Range<usize>> {
        let first = self.tokens.get(self.cursor)?;
        let last = self.tokens.last()?;
        Some(first.span.start..last.span.end)
    }

    /// Attempts to parse a value from the stream of tokens. The stream must contain at least one
    /// token, and all the tokens must be consumed by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        if self.tokens.is_empty() {
            return Err(Error::new(vec![0..self.source_len], NoValidTokens));
        }

        let value = T::parse(self)?;
        match self.remaining_span() {
            Some(span) => Err(Error::new(vec![span], kind::TrailingTokens)),
            None => Ok(value),
        }
    }
}

/// Builds the error for a token that cannot appear where it was found.
fn unexpected_token(token: &Token) -> Error {
    Error::new(vec![token.span.clone()], UnexpectedToken { token: token.lexeme.to_string() })
}

/// Builds the error for an operator that makes the tree deeper than [`MAX_DEPTH`].
fn too_deep(span: Range<usize>) -> Error {
    Error::new(vec![span], TooDeep { limit: MAX_DEPTH })
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use symdiff_compute::{ArityError, Expr, Prefix};
    use crate::{parse_postfix, parse_prefix};
    use super::*;

    /// Pairs of equivalent postfix and prefix sources.
    const EQUIVALENT: [(&str, &str); 7] = [
        ("2 x * 3 -", "(- (* 2 x) 3)"),
        ("x y z * +", "(+ x (* y z))"),
        ("x negate sin y cos /", "(/ (sin (negate x)) (cos y))"),
        ("x 1 + atan z exp *", "(* (atan (+ x 1)) (exp z))"),
        ("-3 x - y 2 ** +", "(+ (- -3 x) (** y 2))"),
        ("x abs 1 + log", "(log (+ (abs x) 1))"),
        ("x -4 % y z * %", "(% (% x -4) (* y z))"),
    ];

    const BINDINGS: [[f64; 3]; 3] = [
        [5.0, 0.0, 0.0],
        [-1.5, 2.0, 0.25],
        [0.1, -3.0, 10.0],
    ];

    #[test]
    fn postfix_and_prefix_agree() {
        for (postfix, prefix) in EQUIVALENT {
            let a = parse_postfix(postfix).unwrap();
            let b = parse_prefix(prefix).unwrap();
            assert_eq!(a, b);
            for bindings in BINDINGS {
                let (a, b) = (a.evaluate(&bindings), b.evaluate(&bindings));
                if a.is_nan() {
                    assert!(b.is_nan());
                } else {
                    assert_float_absolute_eq!(a, b, 1e-12);
                }
            }
        }
    }

    #[test]
    fn renderings_reparse() {
        for (postfix, prefix) in EQUIVALENT {
            let expr = parse_postfix(postfix).unwrap();
            assert_eq!(expr.to_string(), postfix);
            assert_eq!(expr.as_prefix().to_string(), prefix);
            assert_eq!(parse_postfix(&expr.to_string()).unwrap(), expr);
            assert_eq!(parse_prefix(&expr.as_prefix().to_string()).unwrap(), expr);
        }
    }

    #[test]
    fn end_to_end() {
        let d = parse_postfix("4 z *").unwrap().differentiate("x").simplify();
        assert_eq!(d.to_string(), "0");

        assert_eq!(parse_postfix("2 x * 3 -").unwrap().evaluate(&[5.0]), 7.0);
        assert_eq!(parse_prefix("(- (* 2 x) 3)").unwrap().evaluate(&[5.0]), 7.0);
        assert_eq!(parse_postfix("3 0 /").unwrap().evaluate(&[]), f64::INFINITY);
    }

    #[test]
    fn simplified_derivatives() {
        let d = parse_prefix("(* x x)").unwrap().differentiate("x").simplify();
        assert_eq!(d.as_prefix().to_string(), "(+ x x)");

        let d = parse_postfix("x sin").unwrap().differentiate("x").simplify();
        assert_eq!(d.to_string(), "x cos");

        let d = parse_postfix("x y - ").unwrap().differentiate("y").simplify();
        assert_eq!(d.to_string(), "-1");

        let d = parse_prefix("(+ (* 3 x) y)").unwrap().differentiate("x").simplify();
        assert_eq!(d, Expr::Constant(3.0));
    }

    #[test]
    fn identity_simplifications() {
        let e = parse_prefix("(sin (* x y))").unwrap();
        let plus_zero = parse_prefix("(+ (sin (* x y)) 0)").unwrap();
        let times_one = parse_prefix("(* (sin (* x y)) 1)").unwrap();
        let times_zero = parse_prefix("(* (sin (* x y)) 0)").unwrap();
        assert_eq!(plus_zero.simplify(), e.simplify());
        assert_eq!(times_one.simplify(), e.simplify());
        assert_eq!(times_zero.simplify(), Expr::Constant(0.0));
    }

    #[test]
    fn errors_carry_spans() {
        let err = parse_prefix("(+ 1)").unwrap_err();
        assert_eq!(err.downcast_ref::<ArityError>().map(|e| (e.expected, e.found)), Some((2, 1)));
        assert_eq!(err.spans, vec![0..5]);

        let err = parse_prefix("(+ 1 2) 3 4").unwrap_err();
        assert_eq!(err.spans, vec![8..11]);

        let err = parse_prefix("  ").unwrap_err();
        assert_eq!(err.spans, vec![0..2]);
    }
}
