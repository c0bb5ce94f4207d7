//! Rendering expressions as text.
//!
//! The [`Display`] implementation of [`Expr`] renders postfix notation (`x 2 *`). The [`Prefix`]
//! trait renders fully parenthesized prefix notation (`(* x 2)`). Both output exactly the
//! operator symbols of the registry, so the output of either can be parsed back by the matching
//! parser.

use crate::expr::Expr;
use std::fmt::{Display, Formatter, Result};

/// Formats a constant.
///
/// Integral values are written without a fractional part, negative zero is written as `0`, and
/// infinities and `NaN` are written as `Infinity`, `-Infinity` and `NaN`. Magnitudes of at least
/// `1e21` or below `1e-6` are written with the shortest mantissa and a signed exponent, such as
/// `1e+21` or `-2.5e-7`; other values are written in plain decimal notation.
pub fn fmt_number(f: &mut Formatter, value: f64) -> Result {
    if value.is_nan() {
        write!(f, "NaN")
    } else if value.is_infinite() {
        write!(f, "{}Infinity", if value < 0.0 { "-" } else { "" })
    } else if value == 0.0 {
        write!(f, "0")
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let scientific = format!("{:e}", value);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            },
            _ => write!(f, "{}", scientific),
        }
    } else {
        write!(f, "{}", value)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Constant(value) => fmt_number(f, *value),
            Self::Variable(var) => write!(f, "{}", var.name()),
            Self::Apply(apply) => {
                for operand in apply.operands() {
                    write!(f, "{} ", operand)?;
                }
                write!(f, "{}", apply.op().name)
            },
        }
    }
}

/// A trait for types that can be formatted in prefix notation.
pub trait Prefix {
    /// Format the value in prefix notation.
    fn fmt_prefix(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`PrefixFormatter`], which implements [`Display`].
    fn as_prefix(&self) -> PrefixFormatter<'_, Self> {
        PrefixFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Prefix`].
pub struct PrefixFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for PrefixFormatter<'_, T>
where
    T: Prefix,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_prefix(f)
    }
}

impl Prefix for Expr {
    fn fmt_prefix(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Constant(_) | Self::Variable(_) => write!(f, "{}", self),
            Self::Apply(apply) => {
                write!(f, "({}", apply.op().name)?;
                for operand in apply.operands() {
                    write!(f, " ")?;
                    operand.fmt_prefix(f)?;
                }
                write!(f, ")")
            },
        }
    }
}
