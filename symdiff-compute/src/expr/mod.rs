//! The expression tree.
//!
//! An [`Expr`] is a strict tree: every [`Apply`] node owns its operands, and nothing is shared
//! between nodes except the `'static` operator descriptors. Nodes cannot be modified after they
//! are built, which is what keeps the arity invariant of [`Apply`] valid: it is checked once, in
//! [`Expr::apply`], and never again.
//!
//! [`PartialEq`] compares trees structurally. Constants compare by their `f64` value, so a tree
//! containing `NaN` is not equal to itself.

mod iter;

use crate::{error::ArityError, op::{self, Operator}, registry};
use iter::ExprIter;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A reference to one of the recognized variables.
///
/// A [`Variable`] can only be created for a name in [`registry::VARIABLES`], so it always resolves
/// to an argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    name: &'static str,
    slot: usize,
}

impl Variable {
    /// Looks up the variable with the given name. Returns [`None`] if the name is not a recognized
    /// variable.
    pub fn new(name: &str) -> Option<Self> {
        registry::variable(name)
    }

    /// Creates the variable from its registry entry.
    pub(crate) const fn from_registry(name: &'static str, slot: usize) -> Self {
        Self { name, slot }
    }

    /// The name of the variable.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The index of the binding this variable reads when evaluated.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// An operator applied to its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Apply {
    op: &'static Operator,
    operands: Box<[Expr]>,
}

impl Apply {
    /// The operator being applied.
    pub fn op(&self) -> &'static Operator {
        self.op
    }

    /// The operands, in order. There are always exactly `self.op().arity` of them.
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }
}

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant, such as `2` or `-7`.
    Constant(f64),

    /// A variable, such as `x`.
    Variable(Variable),

    /// An operator applied to operands, such as `x 2 *`.
    Apply(Apply),
}

impl Expr {
    /// Creates a reference to the variable with the given name, or returns [`None`] if the name
    /// is not a recognized variable.
    pub fn variable(name: &str) -> Option<Self> {
        Variable::new(name).map(Self::Variable)
    }

    /// Applies the operator to the given operands.
    ///
    /// Returns an [`ArityError`] if the number of operands is not the arity of the operator. The
    /// operands are never truncated or padded.
    pub fn apply(op: &'static Operator, operands: Vec<Expr>) -> Result<Self, ArityError> {
        if operands.len() != op.arity {
            return Err(ArityError {
                operator: op.name,
                expected: op.arity,
                found: operands.len(),
            });
        }

        Ok(Self::Apply(Apply { op, operands: operands.into_boxed_slice() }))
    }

    /// Applies a unary operator to the operand.
    ///
    /// # Panics
    ///
    /// Panics if the operator is not unary. Use [`Expr::apply`] when the operator is not known in
    /// advance.
    pub fn unary(op: &'static Operator, operand: Expr) -> Self {
        assert_eq!(op.arity, 1, "`{}` is not a unary operator", op.name);
        Self::Apply(Apply { op, operands: Box::new([operand]) })
    }

    /// Applies a binary operator to the operands.
    ///
    /// # Panics
    ///
    /// Panics if the operator is not binary. Use [`Expr::apply`] when the operator is not known in
    /// advance.
    pub fn binary(op: &'static Operator, lhs: Expr, rhs: Expr) -> Self {
        assert_eq!(op.arity, 2, "`{}` is not a binary operator", op.name);
        Self::Apply(Apply { op, operands: Box::new([lhs, rhs]) })
    }

    /// Returns the value of the expression if it is a [`Expr::Constant`].
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a constant equal to `value`.
    ///
    /// The comparison is numeric, so `-0` is considered equal to `0`.
    pub fn is_constant(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the variables referenced anywhere in the expression, ordered by slot, without
    /// duplicates.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = self.post_order_iter()
            .filter_map(|expr| match expr {
                Self::Variable(var) => Some(*var),
                _ => None,
            })
            .collect::<Vec<_>>();
        vars.sort_by_key(Variable::slot);
        vars.dedup();
        vars
    }

    /// Returns true if the variable with the given name appears in the expression.
    pub fn depends_on(&self, name: &str) -> bool {
        self.post_order_iter()
            .any(|expr| matches!(expr, Self::Variable(var) if var.name == name))
    }

    /// Returns the number of nodes in the expression.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Self::Variable(var)
    }
}

/// Builds `self rhs +`.
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::binary(&op::ADD, self, rhs)
    }
}

/// Builds `self rhs -`.
impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::binary(&op::SUB, self, rhs)
    }
}

/// Builds `self rhs *`.
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::binary(&op::MUL, self, rhs)
    }
}

/// Builds `self rhs /`.
impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::binary(&op::DIV, self, rhs)
    }
}

/// Builds `self negate`.
impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::unary(&op::NEGATE, self)
    }
}
