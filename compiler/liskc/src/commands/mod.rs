//! Command handlers for the `lisk` CLI.
//!
//! Each submodule implements one command. Diagnostic reporting shared by all
//! of them lives here.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use lisk_diagnostic::emitter::{ColorMode, TerminalEmitter};

use crate::Error;

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::{repl_loop, run_repl};
pub use run::run_file;

/// Emitter writing to stderr, colored when stderr is a terminal.
pub fn stderr_emitter() -> TerminalEmitter<io::Stderr> {
    let is_tty = io::stderr().is_terminal();
    TerminalEmitter::with_color_mode(io::stderr(), ColorMode::Auto, is_tty)
}

/// Write one error through `emitter`.
pub fn report<W: Write>(emitter: &mut TerminalEmitter<W>, err: &Error) {
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
}

/// Read a file or report why not and exit with status 1.
pub(crate) fn read_file(path: &str) -> String {
    match crate::load_source(Path::new(path)) {
        Ok(content) => content,
        Err(err) => {
            report(&mut stderr_emitter(), &err);
            std::process::exit(1);
        }
    }
}
