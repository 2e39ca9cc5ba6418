//! Driver error type: everything that can stop a line or a file.

use std::io;
use std::path::PathBuf;

use lisk_diagnostic::{Diagnostic, ErrorCode};
use lisk_eval::EvalError;
use lisk_lexer::LexError;
use lisk_parse::{ParseError, SyntaxError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("{}", describe_io(.path, .source))]
    Io { path: PathBuf, source: io::Error },
}

fn describe_io(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lex(e) => Error::Lex(e),
            SyntaxError::Parse(e) => Error::Parse(e),
        }
    }
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Lex(e) => e.code(),
            Error::Parse(e) => e.code(),
            Error::Eval(e) => e.code(),
            Error::Io { .. } => ErrorCode::E9001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(e) => e.to_diagnostic(),
            Error::Parse(e) => e.to_diagnostic(),
            Error::Eval(e) => e.to_diagnostic(),
            Error::Io { .. } => Diagnostic::error(ErrorCode::E9001).with_message(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests;
