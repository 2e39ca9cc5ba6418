//! Interactive mode.

use std::io::{self, BufRead, IsTerminal, Write};

use lisk_diagnostic::emitter::TerminalEmitter;
use tracing::debug;

use super::{report, stderr_emitter};
use crate::Session;

const PROMPT: &str = "> ";

/// Run the REPL on stdin until end of input.
///
/// The prompt is shown only when stdin is a terminal, so piped input
/// produces nothing but program output.
pub fn run_repl() {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut emitter = stderr_emitter().with_file_path("<stdin>");
    let mut session = Session::new();

    if let Err(err) = repl_loop(
        stdin.lock(),
        io::stdout(),
        interactive,
        &mut session,
        &mut emitter,
    ) {
        eprintln!("error: cannot read input: {err}");
        std::process::exit(1);
    }
}

/// Read lines from `input` and evaluate each in `session`.
///
/// Errors are reported through `emitter` against the physical input line,
/// blank lines included, and the loop continues. Returns the number of lines
/// that failed.
pub fn repl_loop<R, W, E>(
    mut input: R,
    mut out: W,
    prompt: bool,
    session: &mut Session,
    emitter: &mut TerminalEmitter<E>,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut failures = 0;
    let mut line_number = 0;
    let mut line = String::new();
    loop {
        if prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            if prompt {
                writeln!(out)?;
            }
            break;
        }
        line_number += 1;

        let text = line.trim_end_matches(['\n', '\r']);
        if text.trim().is_empty() {
            continue;
        }

        if let Err(err) = session.eval_line(text) {
            failures += 1;
            emitter.set_source_at(text, line_number);
            report(emitter, &err);
        }
    }

    debug!(
        lines = session.lines_evaluated(),
        failures, "end of input"
    );
    Ok(failures)
}
