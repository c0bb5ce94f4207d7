//! Expression trees over `f64`, with evaluation, symbolic differentiation and simplification.
//!
//! # Expression representation
//!
//! An expression is a tree of [`Expr`] nodes. Leaves are numeric constants and references to one
//! of the recognized variables (`x`, `y` and `z`, see [`registry::VARIABLES`]). Interior nodes,
//! [`Apply`], apply an [`Operator`] to a fixed number of operands.
//!
//! An [`Operator`] is a static descriptor: its symbol, its arity, how to compute it, how to
//! differentiate it, and which algebraic identities simplify it. Every node applying the same
//! operator points at the same descriptor, and adding an operator only means adding a descriptor
//! to [`op::OPERATORS`].
//!
//! ```
//! use symdiff_compute::{op::{ADD, MUL}, Expr};
//!
//! // 2 * x + 1
//! let x = Expr::variable("x").unwrap();
//! let expr = Expr::binary(&ADD, Expr::binary(&MUL, Expr::Constant(2.0), x), Expr::Constant(1.0));
//!
//! assert_eq!(expr.evaluate(&[5.0]), 11.0);
//! assert_eq!(expr.to_string(), "2 x * 1 +");
//! ```
//!
//! # Traversals
//!
//! - [`Expr::evaluate`] computes the value of the tree for the given variable bindings.
//! - [`Expr::differentiate`] builds the derivative of the tree with respect to a variable.
//! - [`Expr::simplify`] folds constant subtrees and applies identities such as `a+0 = a`.
//!
//! ```
//! use symdiff_compute::{op::MUL, Expr};
//!
//! // d/dx (4 * z) = 0*z + 4*0, which simplifies to 0
//! let expr = Expr::binary(&MUL, Expr::Constant(4.0), Expr::variable("z").unwrap());
//! assert_eq!(expr.differentiate("x").simplify(), Expr::Constant(0.0));
//! ```
//!
//! Trees are immutable once built; both [`Expr::differentiate`] and [`Expr::simplify`] return new
//! trees.

pub mod derivative;
pub mod error;
pub mod eval;
pub mod expr;
pub mod fmt;
pub mod op;
pub mod registry;
pub mod simplify;
pub mod step_collector;

pub use error::ArityError;
pub use expr::{Apply, Expr, Variable};
pub use fmt::Prefix;
pub use op::Operator;
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
