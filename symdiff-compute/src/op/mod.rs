//! Operator descriptors.
//!
//! Each operator is a `static` [`Operator`], shared by reference by every [`Apply`] node that uses
//! it. The descriptor holds everything the traversals need to know about the operator, so the tree
//! and the traversals themselves never match on specific operators.
//!
//! [`Apply`]: crate::expr::Apply

mod arith;
mod func;

use crate::{expr::Expr, simplify::step::Step, step_collector::StepCollector};
use std::fmt;

pub use arith::{ADD, DIV, MOD, MUL, POW, SUB};
pub use func::{ABS, ATAN, COS, EXP, LOG, NEGATE, SIN};

/// Computes the value of an operator from the values of its operands.
pub type EvalFn = fn(&[f64]) -> f64;

/// Builds the derivative of an operator application, given its original operands and the
/// derivatives of those operands, in the same order.
pub type DerivativeFn = fn(&[Expr], &[Expr]) -> Expr;

/// Applies the algebraic identities of an operator to its already simplified operands. Returns
/// `Some(expr)` with the reduced expression if an identity applies, recording it in the step
/// collector, or `None` if the application should be kept as is.
pub type SimplifyFn = fn(&[Expr], &mut dyn StepCollector<Step>) -> Option<Expr>;

/// The static description of an operator.
pub struct Operator {
    /// The symbol of the operator, used for rendering and as the parsers' lookup key.
    pub name: &'static str,

    /// The exact number of operands the operator takes.
    pub arity: usize,

    /// The numeric function of the operator.
    pub eval: EvalFn,

    /// The differentiation rule of the operator.
    pub derivative: DerivativeFn,

    /// The simplification rule of the operator.
    pub simplify: SimplifyFn,
}

/// Two operators are the same if they have the same symbol and arity. Symbols are unique within
/// each arity in the registry.
impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

impl Eq for Operator {}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Simplification rule for operators without identities.
pub(crate) fn no_identities(_: &[Expr], _: &mut dyn StepCollector<Step>) -> Option<Expr> {
    None
}

/// Every operator known to the registry.
pub static OPERATORS: &[&Operator] = &[
    &ADD,
    &SUB,
    &MUL,
    &DIV,
    &MOD,
    &POW,
    &NEGATE,
    &SIN,
    &COS,
    &EXP,
    &ATAN,
    &ABS,
    &LOG,
];
