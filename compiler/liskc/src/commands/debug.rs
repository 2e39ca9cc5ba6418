//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::{self, Write};

use lisk_diagnostic::span_utils::LineOffsetTable;
use lisk_ir::{Program, TokenList};

use super::{read_file, report, stderr_emitter};
use crate::Error;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match lisk_lexer::tokenize(&content) {
        Ok(tokens) => exit_on_write_error(write_tokens(
            &mut io::stdout().lock(),
            path,
            &content,
            &tokens,
        )),
        Err(err) => fail(path, &content, &err.into()),
    }
}

/// Parse a file and display each top-level expression.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match lisk_parse::parse_source(&content) {
        Ok(program) => exit_on_write_error(write_program(
            &mut io::stdout().lock(),
            path,
            &content,
            &program,
        )),
        Err(err) => fail(path, &content, &err.into()),
    }
}

fn exit_on_write_error(written: io::Result<()>) {
    if let Err(err) = written {
        eprintln!("error: cannot write output: {err}");
        std::process::exit(1);
    }
}

fn fail(path: &str, content: &str, err: &Error) -> ! {
    let mut emitter = stderr_emitter().with_source(content).with_file_path(path);
    report(&mut emitter, err);
    std::process::exit(1);
}

/// One line per token: `kind text @ line:col`.
pub fn write_tokens<W: Write>(
    out: &mut W,
    path: &str,
    source: &str,
    tokens: &TokenList,
) -> io::Result<()> {
    let lines = LineOffsetTable::build(source);
    writeln!(out, "Tokens for '{path}' ({} tokens):", tokens.len())?;
    for token in tokens {
        let (line, col) = lines.span_start(token.span);
        writeln!(out, "  {:?} {} @ {line}:{col}", token.kind, token.text)?;
    }
    out.flush()
}

pub fn write_program<W: Write>(
    out: &mut W,
    path: &str,
    source: &str,
    program: &Program,
) -> io::Result<()> {
    let lines = LineOffsetTable::build(source);
    writeln!(out, "Parse result for '{path}':")?;
    writeln!(out, "  Expressions: {}", program.len())?;
    for (i, expr) in program.iter().enumerate() {
        let (line, col) = lines.span_start(expr.span());
        writeln!(out, "  [{i}] {expr} @ {line}:{col}")?;
    }
    out.flush()
}
