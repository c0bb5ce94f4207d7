//! The unary operators.

use crate::expr::Expr;
use super::{no_identities, Operator};

/// `-a`
pub static NEGATE: Operator = Operator {
    name: "negate",
    arity: 1,
    eval: |v| -v[0],
    derivative: |_, d| -d[0].clone(),
    simplify: no_identities,
};

/// `sin(a)`
pub static SIN: Operator = Operator {
    name: "sin",
    arity: 1,
    eval: |v| v[0].sin(),
    derivative: |args, d| Expr::unary(&COS, args[0].clone()) * d[0].clone(),
    simplify: no_identities,
};

/// `cos(a)`
pub static COS: Operator = Operator {
    name: "cos",
    arity: 1,
    eval: |v| v[0].cos(),
    derivative: |args, d| -Expr::unary(&SIN, args[0].clone()) * d[0].clone(),
    simplify: no_identities,
};

/// `e^a`
pub static EXP: Operator = Operator {
    name: "exp",
    arity: 1,
    eval: |v| v[0].exp(),
    derivative: |args, d| Expr::unary(&EXP, args[0].clone()) * d[0].clone(),
    simplify: no_identities,
};

/// `arctan(a)`
pub static ATAN: Operator = Operator {
    name: "atan",
    arity: 1,
    eval: |v| v[0].atan(),
    derivative: |args, d| {
        let u = &args[0];
        d[0].clone() / (Expr::Constant(1.0) + u.clone() * u.clone())
    },
    simplify: no_identities,
};

/// `|a|`
pub static ABS: Operator = Operator {
    name: "abs",
    arity: 1,
    eval: |v| v[0].abs(),
    // the sign of `u` is `u / |u|`, undefined at zero like the derivative itself
    derivative: |args, d| {
        let u = &args[0];
        d[0].clone() * (u.clone() / Expr::unary(&ABS, u.clone()))
    },
    simplify: no_identities,
};

/// `ln(a)`
pub static LOG: Operator = Operator {
    name: "log",
    arity: 1,
    eval: |v| v[0].ln(),
    derivative: |args, d| d[0].clone() / args[0].clone(),
    simplify: no_identities,
};
