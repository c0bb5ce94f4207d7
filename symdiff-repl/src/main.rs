mod command;
mod ctxt;
mod error;

use command::Command;
use ctxt::Ctxt;
use env_logger::Env;
use error::Error;
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fmt::Write, fs, io::{self, IsTerminal, Read}};
use symdiff_compute::{simplify_with_steps, Expr, Prefix};

/// Parses the given expression, then describes it: both renderings, the value at the current
/// bindings, the simplified form and the simplified derivative.
fn describe(input: &str, ctxt: &Ctxt) -> Result<String, Error> {
    let expr = ctxt.parse(input)?;
    let mut out = String::new();

    // writing to a `String` cannot fail
    let _ = writeln!(out, "postfix:    {}", expr);
    let _ = writeln!(out, "prefix:     {}", expr.as_prefix());
    let _ = writeln!(out, "value:      {}", Expr::Constant(expr.evaluate(&ctxt.bindings)));

    let mut steps = Vec::new();
    let simplified = simplify_with_steps(&expr, &mut steps);
    let _ = writeln!(out, "simplified: {}", simplified);
    if ctxt.steps {
        for step in &steps {
            let _ = writeln!(out, "  {:?}", step);
        }
    }

    let derivative = expr.differentiate(ctxt.diff).simplify();
    let _ = write!(out, "d/d{}:       {}", ctxt.diff, derivative);
    Ok(out)
}

/// Processes a single line: a command if it starts with `:`, an expression otherwise. Returns the
/// text to print.
fn process(input: &str, ctxt: &mut Ctxt) -> Result<String, Error> {
    if input.trim_start().starts_with(':') {
        let command = Command::parse(input)?;
        debug!("command {:?}", command);
        Ok(command.apply(ctxt))
    } else {
        describe(input, ctxt)
    }
}

/// Processes the given line and prints the output or the error.
fn read_eval(input: &str, ctxt: &mut Ctxt) {
    match process(input, ctxt) {
        Ok(out) => println!("{}", out),
        Err(err) => err.report_to_stderr(input),
    }
}

/// Processes every non-empty line of the given source, in order.
fn execute(source: &str) {
    let mut ctxt = Ctxt::default();
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        read_eval(line, &mut ctxt);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        info!("reading {}", filename);
        execute(&fs::read_to_string(filename)?);
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        execute(&input);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new()?;
        let mut ctxt = Ctxt::default();

        fn process_line(rl: &mut DefaultEditor, ctxt: &mut Ctxt) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            read_eval(&input, ctxt);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut ctxt) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    Ok(())
}
