//! Edit primitives every formatting command is built from

use quill_core::{byte_range, char_len, Selection};

/// A new (content, selection) pair for the host to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub content: String,
    pub selection: Selection,
}

/// Frame the selected text with `before` and `after`
///
/// The previously selected text stays selected, now between the markers.
/// On a caret both markers are still inserted and the caret lands between
/// them.
pub fn wrap_selection(content: &str, selection: Selection, before: &str, after: &str) -> Edit {
    let selection = selection.clamp(char_len(content));
    let (start, end) = byte_range(content, selection);

    let mut out = String::with_capacity(content.len() + before.len() + after.len());
    out.push_str(&content[..start]);
    out.push_str(before);
    out.push_str(&content[start..end]);
    out.push_str(after);
    out.push_str(&content[end..]);

    let inner_start = selection.start + char_len(before);
    Edit {
        content: out,
        selection: Selection::new(inner_start, inner_start + selection.len()),
    }
}

/// Replace the selection with `text` and collapse the caret after it
pub fn insert_at_cursor(content: &str, selection: Selection, text: &str) -> Edit {
    let selection = selection.clamp(char_len(content));
    let (start, end) = byte_range(content, selection);

    let mut out = String::with_capacity(content.len() + text.len());
    out.push_str(&content[..start]);
    out.push_str(text);
    out.push_str(&content[end..]);

    Edit {
        content: out,
        selection: Selection::caret(selection.start + char_len(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_text_selected() {
        let edit = wrap_selection("hello world", Selection::new(6, 11), "**", "**");
        assert_eq!(edit.content, "hello **world**");
        assert_eq!(edit.selection, Selection::new(8, 13));
    }

    #[test]
    fn test_wrap_on_caret() {
        let edit = wrap_selection("abc", Selection::caret(2), "**", "**");
        assert_eq!(edit.content, "ab****c");
        assert_eq!(edit.selection, Selection::caret(4));
    }

    #[test]
    fn test_wrap_prefix_only() {
        let edit = wrap_selection("Title", Selection::new(0, 5), "# ", "");
        assert_eq!(edit.content, "# Title");
        assert_eq!(edit.selection, Selection::new(2, 7));
    }

    #[test]
    fn test_wrap_counts_marker_chars_not_bytes() {
        let edit = wrap_selection("x", Selection::new(0, 1), "«", "»");
        assert_eq!(edit.content, "«x»");
        assert_eq!(edit.selection, Selection::new(1, 2));
    }

    #[test]
    fn test_wrap_multibyte_content() {
        let edit = wrap_selection("café au lait", Selection::new(0, 4), "*", "*");
        assert_eq!(edit.content, "*café* au lait");
        assert_eq!(edit.selection, Selection::new(1, 5));
    }

    #[test]
    fn test_wrap_clamps_selection() {
        let edit = wrap_selection("abc", Selection::new(1, 50), "~~", "~~");
        assert_eq!(edit.content, "a~~bc~~");
        assert_eq!(edit.selection, Selection::new(3, 5));
    }

    #[test]
    fn test_insert_at_caret() {
        let edit = insert_at_cursor("ab", Selection::caret(1), "XYZ");
        assert_eq!(edit.content, "aXYZb");
        assert_eq!(edit.selection, Selection::caret(4));
    }

    #[test]
    fn test_insert_replaces_selection() {
        let edit = insert_at_cursor("hello world", Selection::new(0, 5), "bye");
        assert_eq!(edit.content, "bye world");
        assert_eq!(edit.selection, Selection::caret(3));
    }

    #[test]
    fn test_insert_into_empty_document() {
        let edit = insert_at_cursor("", Selection::caret(7), "\n\n");
        assert_eq!(edit.content, "\n\n");
        assert_eq!(edit.selection, Selection::caret(2));
    }
}
