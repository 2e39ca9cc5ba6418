//! File mode: evaluate a whole file against a fresh environment.

use lisk_eval::stdout_handler;

use super::{read_file, report, stderr_emitter};

/// Run a source file. Exits with status 1 on the first error.
pub fn run_file(path: &str) {
    let content = read_file(path);
    if let Err(err) = crate::run_source(&content, stdout_handler()) {
        let mut emitter = stderr_emitter()
            .with_source(&content)
            .with_file_path(path);
        report(&mut emitter, &err);
        std::process::exit(1);
    }
}
