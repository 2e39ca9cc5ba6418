//! Error codes for all interpreter diagnostics.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit names the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
/// - E9xxx: Driver errors (IO)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Chunk of text that is not a token
    E0001,
    /// Integer literal does not fit in 64 bits
    E0002,
    /// Source text too large to address with spans
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,

    // Runtime Errors (E6xxx)
    /// Call to a name with no binding
    E6001,
    /// Call to a binding that is not a function
    E6002,
    /// Wrong argument type
    E6003,
    /// Division by zero
    E6004,
    /// `if` condition is not an integer
    E6005,
    /// `def` target is not a symbol
    E6006,
    /// Wrong number of arguments
    E6007,
    /// Integer overflow
    E6008,

    // Driver Errors (E9xxx)
    /// Could not read source
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
