//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics as
///
/// ```text
/// error[E1002]: unexpected end of input, expected `)`
///  --> demo.lisk:1:5
///   = note: ...
/// ```
///
/// The `-->` line needs both a span on the diagnostic and the source text
/// on the emitter; the path defaults to `<input>`.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    lines: Option<LineOffsetTable>,
    /// Line number of the first line of `lines` in the whole input.
    first_line: usize,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            lines: None,
            first_line: 1,
            file_path: None,
        }
    }

    /// Attach the source text so spans resolve to `line:col`.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.set_source_at(source, 1);
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Swap in new source text that begins at `first_line` (1-based) of the
    /// input, keeping the path. The REPL calls this per line.
    pub fn set_source_at(&mut self, source: &str, first_line: usize) {
        self.lines = Some(LineOffsetTable::build(source));
        self.first_line = first_line.max(1);
    }

    pub fn emit(&mut self, diag: &Diagnostic) {
        // A closed stderr leaves nowhere to report the failure.
        let _ = self.write_diagnostic(diag);
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Consume the emitter, returning the writer. Tests read buffers back this way.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, color: &'static str) -> &'static str {
        if self.colors {
            color
        } else {
            ""
        }
    }

    fn write_diagnostic(&mut self, diag: &Diagnostic) -> io::Result<()> {
        let (error, bold, note, reset) = (
            self.paint(colors::ERROR),
            self.paint(colors::BOLD),
            self.paint(colors::NOTE),
            self.paint(colors::RESET),
        );

        writeln!(
            self.writer,
            "{error}error[{}]{reset}{bold}: {}{reset}",
            diag.code, diag.message
        )?;

        if let (Some(span), Some(lines)) = (diag.span, &self.lines) {
            let (line, col) = lines.span_start(span);
            let line = line + self.first_line - 1;
            let path = self.file_path.as_deref().unwrap_or("<input>");
            writeln!(self.writer, " {note}-->{reset} {path}:{line}:{col}")?;
        }

        for n in &diag.notes {
            writeln!(self.writer, "  {note}= note:{reset} {n}")?;
        }
        Ok(())
    }
}
