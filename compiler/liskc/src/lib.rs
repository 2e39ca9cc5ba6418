//! Lisk interpreter driver.
//!
//! The binary (`lisk`) is a thin layer over this library:
//! - [`Session`] holds one environment across many inputs (the REPL).
//! - [`run_source`] evaluates a whole program against a fresh environment
//!   (file mode).
//! - [`commands`] holds the CLI entry points and diagnostic reporting.

pub mod commands;
mod error;
mod session;
mod tracing_setup;

pub use error::Error;
pub use session::Session;
pub use tracing_setup::init_tracing;

use std::path::Path;

use lisk_eval::{Environment, SharedPrintHandler};
use tracing::debug;

/// Lex, parse and evaluate `source` against a fresh environment.
pub fn run_source(source: &str, print_handler: SharedPrintHandler) -> Result<(), Error> {
    let program = lisk_parse::parse_source(source)?;
    debug!(exprs = program.len(), "running program");
    let mut env = Environment::with_print_handler(print_handler);
    lisk_eval::eval_program_in(&program, &mut env)?;
    Ok(())
}

/// Read a source file.
pub fn load_source(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
