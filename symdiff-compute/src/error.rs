use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// An operator was applied to a number of operands different from its arity.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("Wrong number of arguments, {} expected, {} found", expected, found),
    labels = [format!("`{}` takes {} operand{}", operator, expected, if *expected == 1 { "" } else { "s" })],
    help = if found < expected {
        format!("add {} more {}", expected - found, "operand".fg(EXPR))
    } else {
        format!("remove {} {}", found - expected, "operand".fg(EXPR))
    },
)]
pub struct ArityError {
    /// The symbol of the operator being applied.
    pub operator: &'static str,

    /// The arity of the operator.
    pub expected: usize,

    /// The number of operands that were supplied.
    pub found: usize,
}
