//! Source chunking.

use std::ops::Range;

/// Byte ranges of the chunks in `source`.
///
/// Whitespace separates chunks and is dropped. `(` and `)` always form
/// chunks of their own, even when glued to other text.
pub fn chunks(source: &str) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    for (i, ch) in source.char_indices() {
        match ch {
            '(' | ')' => {
                if let Some(s) = start.take() {
                    out.push(s..i);
                }
                out.push(i..i + 1);
            }
            c if c.is_whitespace() => {
                if let Some(s) = start.take() {
                    out.push(s..i);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }
    if let Some(s) = start {
        out.push(s..source.len());
    }
    out
}
