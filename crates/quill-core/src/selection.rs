//! Selection ranges - char offsets into a document

use serde::{Deserialize, Serialize};

/// A `{start, end}` range into a document
///
/// Offsets count Unicode scalar values (chars), not bytes. When
/// `start == end` the selection is a caret with no selected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `offset`
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected chars
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clamp both offsets to `[0, len]` and put them in order
    ///
    /// Host selections drift relative to the content during composition, so
    /// out-of-range values are pulled back in rather than rejected. A backward
    /// range (`start > end`) is flipped.
    pub fn clamp(self, len: usize) -> Self {
        let a = self.start.min(len);
        let b = self.end.min(len);
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }
}

/// Number of chars in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the char at `char_offset`
///
/// Offsets at or past the end map to `text.len()`.
pub fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Byte range covered by `selection`, which must already be clamped to `text`
pub fn byte_range(text: &str, selection: Selection) -> (usize, usize) {
    let start = byte_offset(text, selection.start);
    let end = start + byte_offset(&text[start..], selection.len());
    (start, end)
}
