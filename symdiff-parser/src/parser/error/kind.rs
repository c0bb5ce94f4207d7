use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// The source code contains no tokens at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "no valid tokens",
    labels = [format!("you might need to add an {} here", "expression".fg(EXPR))],
)]
pub struct NoValidTokens;

/// A token cannot start an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected token {}", token),
    labels = ["expected a number, a variable, or a parenthesized operator"],
    help = "numbers are integers such as `3` or `-12`, and the variables are `x`, `y`, and `z`",
)]
pub struct UnexpectedToken {
    /// The lexeme of the token that was found.
    pub token: String,
}

/// The name following an opening bracket is not an operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} is not a valid operator", name),
    labels = ["unknown operator"],
    help = format!(
        "the operators are: {}",
        symdiff_compute::op::OPERATORS.iter().map(|op| op.name).collect::<Vec<_>>().join(" ").fg(EXPR),
    ),
)]
pub struct InvalidOperator {
    /// The lexeme that was found instead of an operator.
    pub name: String,
}

/// An opening bracket was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing closing bracket",
    labels = ["this bracket is not closed"],
    help = "add a closing bracket `)` after the last operand",
)]
pub struct MissingClosingBracket;

/// A complete expression was parsed, but tokens remain after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Unexpected end of string",
    labels = [format!("I could not understand the remaining {} here", "tokens".fg(EXPR))],
    help = "an input must contain exactly one expression",
)]
pub struct TrailingTokens;

/// A postfix input left more than one operand on the stack, so some operands are never used by an
/// operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} operand{} never used by an operator", count, if *count == 1 { " is" } else { "s are" }),
    labels = std::iter::repeat("this operand is never used").take(*count),
    help = "add an operator after the operands, or remove the extra operands",
)]
pub struct UnusedOperands {
    /// The number of unused operands.
    pub count: usize,
}

/// An expression is nested deeper than the parsers accept.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expression is nested more than {} levels deep", limit),
    labels = ["this operator goes past the nesting limit"],
    help = "split the expression into smaller parts",
)]
pub struct TooDeep {
    /// The maximum depth of an expression tree.
    pub limit: usize,
}
