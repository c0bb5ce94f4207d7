//! The binary arithmetic operators.

use crate::{expr::Expr, simplify::rules};
use super::{func::LOG, no_identities, Operator};

/// `a + b`
pub static ADD: Operator = Operator {
    name: "+",
    arity: 2,
    eval: |v| v[0] + v[1],
    derivative: sum_rule,
    simplify: rules::add,
};

/// `a - b`
pub static SUB: Operator = Operator {
    name: "-",
    arity: 2,
    eval: |v| v[0] - v[1],
    derivative: difference_rule,
    simplify: rules::subtract,
};

/// `a * b`
pub static MUL: Operator = Operator {
    name: "*",
    arity: 2,
    eval: |v| v[0] * v[1],
    derivative: product_rule,
    simplify: rules::multiply,
};

/// `a / b`. Division by zero follows IEEE-754 and produces an infinity or `NaN`.
pub static DIV: Operator = Operator {
    name: "/",
    arity: 2,
    eval: |v| v[0] / v[1],
    derivative: quotient_rule,
    simplify: rules::divide,
};

/// `a % b`, the remainder of the division truncated towards zero. It has the sign of `a`.
pub static MOD: Operator = Operator {
    name: "%",
    arity: 2,
    eval: |v| v[0] % v[1],
    derivative: remainder_rule,
    simplify: no_identities,
};

/// `a ** b`
pub static POW: Operator = Operator {
    name: "**",
    arity: 2,
    eval: |v| v[0].powf(v[1]),
    derivative: power_rule,
    simplify: no_identities,
};

/// `(f + g)' = f' + g'`
fn sum_rule(_: &[Expr], d: &[Expr]) -> Expr {
    d[0].clone() + d[1].clone()
}

/// `(f - g)' = f' - g'`
fn difference_rule(_: &[Expr], d: &[Expr]) -> Expr {
    d[0].clone() - d[1].clone()
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(args: &[Expr], d: &[Expr]) -> Expr {
    let (f, g) = (&args[0], &args[1]);
    d[0].clone() * g.clone() + f.clone() * d[1].clone()
}

/// `(f / g)' = (f' * g - f * g') / (g * g)`
fn quotient_rule(args: &[Expr], d: &[Expr]) -> Expr {
    let (f, g) = (&args[0], &args[1]);
    (d[0].clone() * g.clone() - f.clone() * d[1].clone()) / (g.clone() * g.clone())
}

/// `(f % g)' = f' - g' * trunc(f / g)`, where `trunc(f / g) = (f - f % g) / g`
fn remainder_rule(args: &[Expr], d: &[Expr]) -> Expr {
    let (f, g) = (&args[0], &args[1]);
    let quotient = (f.clone() - Expr::binary(&MOD, f.clone(), g.clone())) / g.clone();
    d[0].clone() - d[1].clone() * quotient
}

/// `(f ** g)' = g * f ** (g - 1) * f'` if `g` is constant with respect to the variable,
/// `(f ** g)' = f ** g * (g' * log(f) + g * f' / f)` otherwise
///
/// `log(f)` is `NaN` for a negative base, so the first form is used whenever `g'` is zero.
fn power_rule(args: &[Expr], d: &[Expr]) -> Expr {
    let (f, g) = (&args[0], &args[1]);
    if d[1].is_constant(0.0) {
        return g.clone()
            * Expr::binary(&POW, f.clone(), g.clone() - Expr::Constant(1.0))
            * d[0].clone();
    }

    Expr::binary(&POW, f.clone(), g.clone())
        * (d[1].clone() * Expr::unary(&LOG, f.clone()) + g.clone() * d[0].clone() / f.clone())
}
