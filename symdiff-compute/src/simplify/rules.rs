//! The algebraic identities used by the simplification rules of the arithmetic operators.
//!
//! Each identity is a function that takes the simplified operands of an application, and returns
//! `Some(expr)` with the reduced expression if the identity applies, or `None` if it does not. The
//! identities of an operator are tried in order, and the first one that applies wins.
//!
//! Operands that are both constants never reach these rules; they are folded first.

use crate::{expr::Expr, step_collector::StepCollector};
use super::step::Step;

/// If the application has two operands, calls the given identity with them.
///
/// Returns `Some(expr)` with the reduced expression if the identity applied.
fn do_binary(operands: &[Expr], f: impl FnOnce(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    match operands {
        [lhs, rhs] => f(lhs, rhs),
        _ => None,
    }
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(operands, |a, b| {
        if a.is_constant(0.0) {
            Some(b.clone())
        } else if b.is_constant(0.0) {
            Some(a.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `0-a = -a`
pub fn subtract_from_zero(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(operands, |a, b| {
        a.is_constant(0.0).then(|| -b.clone())
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(operands, |a, b| {
        b.is_constant(0.0).then(|| a.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(operands, |a, b| {
        if a.is_constant(1.0) {
            Some(b.clone())
        } else if b.is_constant(1.0) {
            Some(a.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(operands, |a, b| {
        (a.is_constant(0.0) || b.is_constant(0.0)).then_some(Expr::Constant(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `0/a = 0`
pub fn divide_zero(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(operands, |a, _| {
        a.is_constant(0.0).then_some(Expr::Constant(0.0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(operands, |a, b| {
        b.is_constant(1.0).then(|| a.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// Simplification rule of `+`.
pub fn add(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(operands, step_collector)
}

/// Simplification rule of `-`.
pub fn subtract(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    subtract_from_zero(operands, step_collector)
        .or_else(|| subtract_zero(operands, step_collector))
}

/// Simplification rule of `*`.
pub fn multiply(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_one(operands, step_collector)
        .or_else(|| multiply_zero(operands, step_collector))
}

/// Simplification rule of `/`.
pub fn divide(operands: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_zero(operands, step_collector)
        .or_else(|| divide_one(operands, step_collector))
}
