//! Line and column lookup for spans.

use lisk_ir::Span;

/// Byte offsets of every line start in a source text.
///
/// ```
/// use lisk_diagnostic::span_utils::LineOffsetTable;
///
/// let table = LineOffsetTable::build("(def x 5)\n(print x)");
/// assert_eq!(table.offset_to_line_col(0), (1, 1));
/// assert_eq!(table.offset_to_line_col(11), (2, 2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[n]` is the byte where line `n + 1` starts.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line and byte column for `offset`.
    pub fn offset_to_line_col(&self, offset: u32) -> (usize, usize) {
        let offset = offset as usize;
        let line = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let col = offset - self.offsets[line] + 1;
        (line + 1, col)
    }

    /// Line and column of a span's start.
    pub fn span_start(&self, span: Span) -> (usize, usize) {
        self.offset_to_line_col(span.start)
    }
}
