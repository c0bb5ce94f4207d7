use crate::command::CommandError;
use symdiff_error::Error as ExprError;

/// Utility enum to package errors that can occur while processing a line.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed.
    ExprError(ExprError),

    /// The command could not be understood.
    CommandError(CommandError),
}

impl Error {
    /// Report the error to stderr.
    ///
    /// Expression errors are rendered as a report pointing into the input; command
    /// errors are plain messages.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::ExprError(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("{}: {}", err, io_err);
                }
            },
            Self::CommandError(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<ExprError> for Error {
    fn from(err: ExprError) -> Self {
        Self::ExprError(err)
    }
}

impl From<CommandError> for Error {
    fn from(err: CommandError) -> Self {
        Self::CommandError(err)
    }
}
