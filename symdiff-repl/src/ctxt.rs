use symdiff_compute::{registry::VARIABLES, Expr};
use symdiff_error::Error;
use symdiff_parser::{parse_postfix, parse_prefix};

/// The notation used to parse expression lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Prefix if the line starts with an opening bracket, postfix otherwise.
    Auto,
    Postfix,
    Prefix,
}

/// The state of a session, changed through `:` commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt {
    /// The values of `x`, `y` and `z`, in slot order.
    pub bindings: [f64; VARIABLES.len()],

    /// The variable that expressions are differentiated with respect to.
    pub diff: &'static str,

    /// The notation used to parse expressions.
    pub notation: Notation,

    /// Whether to print the steps taken by the simplifier.
    pub steps: bool,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            bindings: [0.0; VARIABLES.len()],
            diff: VARIABLES[0],
            notation: Notation::Auto,
            steps: false,
        }
    }
}

impl Ctxt {
    /// Parses an expression line using the current notation.
    pub fn parse(&self, input: &str) -> Result<Expr, Error> {
        match self.notation {
            Notation::Postfix => parse_postfix(input),
            Notation::Prefix => parse_prefix(input),
            Notation::Auto if input.trim_start().starts_with('(') => parse_prefix(input),
            Notation::Auto => parse_postfix(input),
        }
    }
}
