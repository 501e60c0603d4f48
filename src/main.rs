//! CLI entry point for the `mathcount` tool.
//!
//! Evaluates each command-line argument, or each line of standard input when
//! no arguments are given, and prints the value or the failure. The exit
//! status is non-zero if any expression was rejected or the input could not
//! be read.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args_os().skip(1).map(lossy).collect();
    let mut out = io::stdout().lock();
    let mut diag = io::stderr().lock();
    let outcome = if args.is_empty() {
        let lines = io::stdin()
            .lock()
            .split(b'\n')
            .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()));
        report(lines, &mut out, &mut diag)
    } else {
        report(args.into_iter().map(Ok), &mut out, &mut diag)
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) | Err(_) => ExitCode::FAILURE,
    }
}

// Undecodable bytes become U+FFFD, which the evaluator rejects as a character.
fn lossy(arg: OsString) -> String {
    arg.to_string_lossy().into_owned()
}

/// Evaluates every non-blank input, writing one line per expression to `out`.
///
/// A read error is written to `diag` and ends the run.
///
/// # Errors
/// Returns an error if writing to `out` or `diag` fails.
fn report<I, W, D>(inputs: I, out: &mut W, diag: &mut D) -> io::Result<bool>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
    D: Write,
{
    let mut clean = true;
    for input in inputs {
        let input = match input {
            Ok(input) => input,
            Err(err) => {
                writeln!(diag, "mathcount: cannot read input: {err}")?;
                return Ok(false);
            }
        };
        let text = input.trim();
        if text.is_empty() {
            continue;
        }
        match mathcount::evaluate(text) {
            Ok(value) => writeln!(out, "{text} = {value}")?,
            Err(failure) => {
                clean = false;
                writeln!(out, "{text}: {failure}")?;
            }
        }
    }
    Ok(clean)
}
