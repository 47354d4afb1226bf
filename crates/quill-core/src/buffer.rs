//! Text buffer - the document text and the active selection

use crate::selection::{byte_range, char_len, Selection};

/// The current document text plus where the cursor is
///
/// The buffer only stores values. It never diffs content and never rejects a
/// selection: everything handed to it is clamped to the current text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    selection: Selection,
}

impl TextBuffer {
    /// Create an empty buffer with the caret at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `content` with the caret at the end
    pub fn from_text(content: impl Into<String>) -> Self {
        let content = content.into();
        let end = char_len(&content);
        Self {
            content,
            selection: Selection::caret(end),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the whole document
    ///
    /// The stored selection is re-clamped against the new length.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.selection = self.selection.clamp(self.len_chars());
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Store a selection, clamped to `[0, len]`
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamp(self.len_chars());
    }

    /// The text covered by the current selection
    pub fn selected_text(&self) -> &str {
        let (start, end) = byte_range(&self.content, self.selection);
        &self.content[start..end]
    }

    /// Length of the document in chars
    pub fn len_chars(&self) -> usize {
        char_len(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
