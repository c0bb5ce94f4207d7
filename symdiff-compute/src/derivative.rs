//! Symbolic differentiation.
//!
//! The derivative of an application is built by the differentiation rule of its operator, from
//! the original operands and their derivatives. The result is not simplified; combine with
//! [`Expr::simplify`] to clean it up.

use crate::expr::Expr;

impl Expr {
    /// Builds the derivative of the expression with respect to the variable with the given name.
    ///
    /// Every variable other than `with` is treated as a constant. A name that is not a recognized
    /// variable matches no variable, so the derivative is zero everywhere.
    pub fn differentiate(&self, with: &str) -> Expr {
        match self {
            Self::Constant(_) => Self::Constant(0.0),
            Self::Variable(var) => Self::Constant(if var.name() == with { 1.0 } else { 0.0 }),
            Self::Apply(apply) => {
                let derivatives = apply.operands()
                    .iter()
                    .map(|operand| operand.differentiate(with))
                    .collect::<Vec<_>>();
                (apply.op().derivative)(apply.operands(), &derivatives)
            },
        }
    }
}
