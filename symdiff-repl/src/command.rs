//! Commands that change the session, written as a line starting with `:`.

use crate::ctxt::{Ctxt, Notation};
use std::fmt;
use symdiff_compute::registry;

/// Text printed by `:help`.
pub const HELP: &str = "\
Enter an expression in postfix (`2 x * 3 -`) or prefix (`(- (* 2 x) 3)`) notation.

Commands:
  :let <var> <number>               set the value of x, y or z
  :diff <var>                       differentiate with respect to x, y or z
  :notation auto|postfix|prefix     choose how expressions are parsed
  :steps on|off                     show the steps taken by the simplifier
  :help                             show this message";

/// A parsed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Let { name: &'static str, slot: usize, value: f64 },
    Diff(&'static str),
    Notation(Notation),
    Steps(bool),
    Help,
}

/// Error returned when a command line cannot be understood.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The command name is not known.
    Unknown(String),

    /// The arguments do not match the usage of the command.
    Usage(&'static str),

    /// The name is not one of the variables.
    UnknownVariable(String),

    /// The value of `:let` is not a number.
    InvalidNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown command `:{}`, try `:help`", name),
            Self::Usage(usage) => write!(f, "usage: {}", usage),
            Self::UnknownVariable(name) => write!(
                f,
                "`{}` is not a variable, expected one of: {}",
                name,
                registry::VARIABLES.join(", "),
            ),
            Self::InvalidNumber(value) => write!(f, "`{}` is not a number", value),
        }
    }
}

impl std::error::Error for CommandError {}

/// Looks up a variable by name.
fn variable(name: &str) -> Result<(&'static str, usize), CommandError> {
    registry::variable(name)
        .map(|var| (var.name(), var.slot()))
        .ok_or_else(|| CommandError::UnknownVariable(name.to_string()))
}

impl Command {
    /// Parses a command line. The leading `:` is optional.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.trim().trim_start_matches(':').split_whitespace();
        let name = words.next().unwrap_or_default();
        let args = words.collect::<Vec<_>>();

        match (name, args.as_slice()) {
            ("let", [var, value]) => {
                let (name, slot) = variable(var)?;
                let value = value.parse::<f64>()
                    .map_err(|_| CommandError::InvalidNumber(value.to_string()))?;
                Ok(Self::Let { name, slot, value })
            },
            ("let", _) => Err(CommandError::Usage(":let <var> <number>")),
            ("diff", [var]) => variable(var).map(|(name, _)| Self::Diff(name)),
            ("diff", _) => Err(CommandError::Usage(":diff <var>")),
            ("notation", ["auto"]) => Ok(Self::Notation(Notation::Auto)),
            ("notation", ["postfix"]) => Ok(Self::Notation(Notation::Postfix)),
            ("notation", ["prefix"]) => Ok(Self::Notation(Notation::Prefix)),
            ("notation", _) => Err(CommandError::Usage(":notation auto|postfix|prefix")),
            ("steps", ["on"]) => Ok(Self::Steps(true)),
            ("steps", ["off"]) => Ok(Self::Steps(false)),
            ("steps", _) => Err(CommandError::Usage(":steps on|off")),
            ("help", []) => Ok(Self::Help),
            ("help", _) => Err(CommandError::Usage(":help")),
            (name, _) => Err(CommandError::Unknown(name.to_string())),
        }
    }

    /// Applies the command to the context, returning the message to print.
    pub fn apply(self, ctxt: &mut Ctxt) -> String {
        match self {
            Self::Let { name, slot, value } => {
                ctxt.bindings[slot] = value;
                format!("{} = {}", name, value)
            },
            Self::Diff(name) => {
                ctxt.diff = name;
                format!("differentiating with respect to {}", name)
            },
            Self::Notation(notation) => {
                ctxt.notation = notation;
                format!("notation: {:?}", notation).to_lowercase()
            },
            Self::Steps(steps) => {
                ctxt.steps = steps;
                format!("steps: {}", if steps { "on" } else { "off" })
            },
            Self::Help => HELP.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(":let y -2.5"), Ok(Command::Let { name: "y", slot: 1, value: -2.5 }));
        assert_eq!(Command::parse(":diff z"), Ok(Command::Diff("z")));
        assert_eq!(Command::parse(":notation prefix"), Ok(Command::Notation(Notation::Prefix)));
        assert_eq!(Command::parse(":steps on"), Ok(Command::Steps(true)));
        assert_eq!(Command::parse("  :help  "), Ok(Command::Help));
    }

    #[test]
    fn bad_commands() {
        assert_eq!(Command::parse(":let w 1"), Err(CommandError::UnknownVariable("w".to_string())));
        assert_eq!(Command::parse(":let x one"), Err(CommandError::InvalidNumber("one".to_string())));
        assert_eq!(Command::parse(":let x"), Err(CommandError::Usage(":let <var> <number>")));
        assert_eq!(Command::parse(":steps maybe"), Err(CommandError::Usage(":steps on|off")));
        assert_eq!(Command::parse(":quit"), Err(CommandError::Unknown("quit".to_string())));
        assert_eq!(Command::parse(":"), Err(CommandError::Unknown(String::new())));
    }

    #[test]
    fn apply_commands() {
        let mut ctxt = Ctxt::default();
        assert_eq!(Command::Let { name: "z", slot: 2, value: 4.0 }.apply(&mut ctxt), "z = 4");
        assert_eq!(Command::Diff("y").apply(&mut ctxt), "differentiating with respect to y");
        assert_eq!(Command::Notation(Notation::Postfix).apply(&mut ctxt), "notation: postfix");
        Command::Steps(true).apply(&mut ctxt);

        assert_eq!(ctxt, Ctxt {
            bindings: [0.0, 0.0, 4.0],
            diff: "y",
            notation: Notation::Postfix,
            steps: true,
        });
    }

    #[test]
    fn unknown_variable_message() {
        assert_eq!(
            CommandError::UnknownVariable("w".to_string()).to_string(),
            "`w` is not a variable, expected one of: x, y, z",
        );
    }
}
