//! Lookup tables from token text to operators and variables.
//!
//! The tables are built once, on first use, from [`OPERATORS`] and [`VARIABLES`], and are never
//! modified afterwards. Lookups are exact and case-sensitive.

use crate::{expr::Variable, op::{Operator, OPERATORS}};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The recognized variable names, in slot order: `x` is read from binding 0, `y` from binding 1,
/// and `z` from binding 2.
pub const VARIABLES: [&str; 3] = ["x", "y", "z"];

/// Operators taking one operand, by symbol.
static UNARY: Lazy<HashMap<&'static str, &'static Operator>> = Lazy::new(|| by_arity(1));

/// Operators taking two operands, by symbol.
static BINARY: Lazy<HashMap<&'static str, &'static Operator>> = Lazy::new(|| by_arity(2));

/// Variable slots, by name.
static SLOTS: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    VARIABLES.iter()
        .enumerate()
        .map(|(slot, &name)| (name, slot))
        .collect()
});

fn by_arity(arity: usize) -> HashMap<&'static str, &'static Operator> {
    OPERATORS.iter()
        .filter(|op| op.arity == arity)
        .map(|&op| (op.name, op))
        .collect()
}

/// Returns the unary operator with the given symbol.
pub fn unary_operator(symbol: &str) -> Option<&'static Operator> {
    UNARY.get(symbol).copied()
}

/// Returns the binary operator with the given symbol.
pub fn binary_operator(symbol: &str) -> Option<&'static Operator> {
    BINARY.get(symbol).copied()
}

/// Returns the operator with the given symbol, whatever its arity.
///
/// The unary table is searched first.
pub fn find_operator(symbol: &str) -> Option<&'static Operator> {
    unary_operator(symbol).or_else(|| binary_operator(symbol))
}

/// Returns the variable with the given name.
pub fn variable(name: &str) -> Option<Variable> {
    SLOTS.get_key_value(name)
        .map(|(&name, &slot)| Variable::from_registry(name, slot))
}

#[cfg(test)]
mod tests {
    use crate::op::{ADD, ATAN, DIV, MOD, MUL, NEGATE, SUB};
    use super::*;

    #[test]
    fn lookup_by_arity() {
        assert_eq!(binary_operator("+"), Some(&ADD));
        assert_eq!(binary_operator("-"), Some(&SUB));
        assert_eq!(binary_operator("*"), Some(&MUL));
        assert_eq!(binary_operator("/"), Some(&DIV));
        assert_eq!(binary_operator("%"), Some(&MOD));
        assert_eq!(unary_operator("negate"), Some(&NEGATE));
        assert_eq!(unary_operator("+"), None);
        assert_eq!(binary_operator("atan"), None);
    }

    #[test]
    fn find_searches_both_tables() {
        assert_eq!(find_operator("atan"), Some(&ATAN));
        assert_eq!(find_operator("*"), Some(&MUL));
        assert_eq!(find_operator("foo"), None);
        assert_eq!(find_operator("Sin"), None);
    }

    #[test]
    fn variable_lookup() {
        let y = variable("y").unwrap();
        assert_eq!((y.name(), y.slot()), ("y", 1));
        assert!(variable("").is_none());
        assert!(variable("xy").is_none());
    }
}
