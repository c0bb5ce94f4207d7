//! Numerical evaluation of expressions.

use crate::expr::Expr;

impl Expr {
    /// Evaluates the expression, reading each variable from `bindings[slot]`.
    ///
    /// A variable whose slot is past the end of `bindings` evaluates to `NaN`. Evaluation never
    /// fails: division by zero and other edge cases produce infinities or `NaN` following IEEE-754,
    /// and those propagate through the rest of the tree.
    pub fn evaluate(&self, bindings: &[f64]) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Variable(var) => bindings.get(var.slot()).copied().unwrap_or(f64::NAN),
            Self::Apply(apply) => {
                let values = apply.operands()
                    .iter()
                    .map(|operand| operand.evaluate(bindings))
                    .collect::<Vec<_>>();
                (apply.op().eval)(&values)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::op::{ABS, ATAN, COS, EXP, LOG, MOD, POW, SIN};
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    #[test]
    fn arithmetic() {
        // 2 x * 3 -
        let expr = Expr::Constant(2.0) * var("x") - Expr::Constant(3.0);
        assert_eq!(expr.evaluate(&[5.0]), 7.0);

        // x y / z +
        let expr = var("x") / var("y") + var("z");
        assert_eq!(expr.evaluate(&[3.0, 4.0, 1.0]), 1.75);
        assert_eq!((-var("y")).evaluate(&[0.0, 2.5]), -2.5);
    }

    #[test]
    fn functions() {
        let x = var("x");
        assert_float_absolute_eq!(Expr::unary(&SIN, x.clone()).evaluate(&[1.0]), 1f64.sin(), 1e-12);
        assert_float_absolute_eq!(Expr::unary(&COS, x.clone()).evaluate(&[1.0]), 1f64.cos(), 1e-12);
        assert_float_absolute_eq!(Expr::unary(&EXP, x.clone()).evaluate(&[1.0]), std::f64::consts::E, 1e-12);
        assert_float_absolute_eq!(Expr::unary(&ATAN, x.clone()).evaluate(&[1.0]), std::f64::consts::FRAC_PI_4, 1e-12);
        assert_float_absolute_eq!(Expr::unary(&LOG, x.clone()).evaluate(&[std::f64::consts::E]), 1.0, 1e-12);
        assert_eq!(Expr::unary(&ABS, x.clone()).evaluate(&[-3.0]), 3.0);
        assert_eq!(Expr::binary(&POW, x, Expr::Constant(3.0)).evaluate(&[2.0]), 8.0);
    }

    #[test]
    fn truncated_remainder() {
        let rem = |a: f64, b: f64| Expr::binary(&MOD, Expr::Constant(a), Expr::Constant(b)).evaluate(&[]);
        assert_eq!(rem(7.0, 2.0), 1.0);
        assert_eq!(rem(-7.0, 2.0), -1.0);
        assert_eq!(rem(7.0, -2.0), 1.0);
        assert_eq!(rem(7.5, 2.0), 1.5);
        assert!(rem(7.0, 0.0).is_nan());
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        let div = |a: f64, b: f64| (Expr::Constant(a) / Expr::Constant(b)).evaluate(&[]);
        assert_eq!(div(3.0, 0.0), f64::INFINITY);
        assert_eq!(div(-3.0, 0.0), f64::NEG_INFINITY);
        assert!(div(0.0, 0.0).is_nan());

        // the infinity keeps propagating
        let expr = (Expr::Constant(1.0) / var("x")) * Expr::Constant(0.0);
        assert!(expr.evaluate(&[0.0]).is_nan());
    }

    #[test]
    fn missing_binding_is_nan() {
        assert!(var("z").evaluate(&[1.0, 2.0]).is_nan());
        assert_eq!(var("z").evaluate(&[1.0, 2.0, 3.0]), 3.0);
    }

    #[test]
    fn deterministic() {
        let expr = Expr::unary(&SIN, var("x") * var("y")) + Expr::unary(&EXP, var("z"));
        let bindings = [0.3, -1.2, 0.7];
        assert_eq!(expr.evaluate(&bindings), expr.evaluate(&bindings));
    }
}
