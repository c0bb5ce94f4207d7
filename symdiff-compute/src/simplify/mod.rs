//! Simplification of expressions.
//!
//! Simplification works bottom-up. The operands of an application are simplified first; then, if
//! every simplified operand is a constant, the whole application is evaluated and replaced by its
//! value (constant folding). Otherwise the simplification rule of the operator is applied to the
//! simplified operands, which either reduces the application using an identity such as `a*1 = a`,
//! or leaves it as it is.
//!
//! Constant folding always takes precedence over identities, so `0 0 /` simplifies to `NaN`, not
//! `0`.
//!
//! Simplifying is idempotent: simplifying an already simplified expression returns an equal
//! expression.

pub mod rules;
pub mod step;

use crate::{expr::{Apply, Expr}, step_collector::StepCollector};
use log::debug;
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let Expr::Apply(apply) = expr else {
        return expr.clone();
    };

    let operands = apply.operands()
        .iter()
        .map(|operand| inner_simplify(operand, step_collector))
        .collect::<Vec<_>>();

    let values = operands.iter()
        .map(Expr::as_constant)
        .collect::<Option<Vec<_>>>();
    if let Some(values) = values {
        let value = (apply.op().eval)(&values);
        debug!("folded `{}` applied to {:?} into {}", apply.op().name, values, value);
        step_collector.push(Step::FoldConstant);
        return Expr::Constant(value);
    }

    match (apply.op().simplify)(&operands, step_collector) {
        Some(reduced) => reduced,
        None => rebuild(apply, operands),
    }
}

/// Rebuilds an application with new operands. The operands come from the original application,
/// so the arity is unchanged.
fn rebuild(apply: &Apply, operands: Vec<Expr>) -> Expr {
    Expr::apply(apply.op(), operands)
        .unwrap_or_else(|_| unreachable!("simplification preserves the number of operands"))
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression, collecting the steps taken by the simplifier, in the order they
/// were applied. This is useful for debugging, and also for displaying the steps taken to the
/// user.
pub fn simplify_with_steps(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    inner_simplify(expr, step_collector)
}

impl Expr {
    /// Simplify the expression. See the [module-level documentation](self) for details.
    pub fn simplify(&self) -> Expr {
        simplify(self)
    }
}
