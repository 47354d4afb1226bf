//! Command engine - maps each formatting command onto an edit primitive

use std::borrow::Cow;

use quill_core::{char_len, CommandKind, FormatCommand, Selection};

use crate::error::{FormatError, Result};
use crate::primitives::{insert_at_cursor, wrap_selection, Edit};

pub const HIGHLIGHT_OPEN: &str = r#"<mark style="background-color: yellow">"#;
pub const HIGHLIGHT_CLOSE: &str = "</mark>";
pub const ALIGN_CLOSE: &str = "</div>";
pub const COLOR_CLOSE: &str = "</span>";
pub const HORIZONTAL_RULE: &str = "\n\n---\n\n";
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// The primitive a command resolves to, with its literal markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive<'a> {
    Wrap {
        before: Cow<'a, str>,
        after: Cow<'a, str>,
    },
    Insert(Cow<'a, str>),
}

impl<'a> Primitive<'a> {
    fn wrap(before: impl Into<Cow<'a, str>>, after: impl Into<Cow<'a, str>>) -> Self {
        Primitive::Wrap {
            before: before.into(),
            after: after.into(),
        }
    }

    fn prefix(before: &'static str) -> Self {
        Self::wrap(before, "")
    }

    fn insert(text: impl Into<Cow<'a, str>>) -> Self {
        Primitive::Insert(text.into())
    }
}

/// Resolve a command to its primitive
///
/// `has_selection` decides between the two shapes of `InsertLink`. Markers are
/// plain substrings: nothing here inspects the existing text, so applying the
/// same command twice stacks a second pair of markers.
pub fn plan(command: &FormatCommand, has_selection: bool) -> Result<Primitive<'_>> {
    let primitive = match command {
        FormatCommand::Bold => Primitive::wrap("**", "**"),
        FormatCommand::Italic => Primitive::wrap("*", "*"),
        FormatCommand::Underline => Primitive::wrap("<u>", "</u>"),
        FormatCommand::Strikethrough => Primitive::wrap("~~", "~~"),
        FormatCommand::Highlight => Primitive::wrap(HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE),
        FormatCommand::Heading1 => Primitive::prefix("# "),
        FormatCommand::Heading2 => Primitive::prefix("## "),
        FormatCommand::Heading3 => Primitive::prefix("### "),
        FormatCommand::Paragraph => Primitive::insert(PARAGRAPH_BREAK),
        FormatCommand::BulletList => Primitive::prefix("\n- "),
        FormatCommand::NumberedList => Primitive::prefix("\n1. "),
        FormatCommand::HorizontalRule => Primitive::insert(HORIZONTAL_RULE),
        FormatCommand::Blockquote => Primitive::prefix("\n> "),
        FormatCommand::CodeBlock => Primitive::wrap("```\n", "\n```"),
        FormatCommand::InlineCode => Primitive::wrap("`", "`"),
        FormatCommand::AlignLeft => Primitive::wrap(align_open("left"), ALIGN_CLOSE),
        FormatCommand::AlignCenter => Primitive::wrap(align_open("center"), ALIGN_CLOSE),
        FormatCommand::AlignRight => Primitive::wrap(align_open("right"), ALIGN_CLOSE),
        FormatCommand::TextColor { color } => {
            Primitive::wrap(format!(r#"<span style="color: {}">"#, color), COLOR_CLOSE)
        }
        FormatCommand::InsertLink { url, text } => {
            require_url(CommandKind::InsertLink, url)?;
            if has_selection {
                Primitive::wrap("[", format!("]({})", url))
            } else {
                let label = if text.is_empty() { url } else { text };
                Primitive::insert(format!("[{}]({})", label, url))
            }
        }
        FormatCommand::InsertImage { url, alt } => {
            require_url(CommandKind::InsertImage, url)?;
            Primitive::insert(format!("![{}]({})", alt, url))
        }
    };
    Ok(primitive)
}

/// Apply a formatting command to `content` at `selection`
///
/// The selection is clamped to the content first. Link and image commands
/// with a blank URL are rejected before anything is built.
pub fn apply_command(command: &FormatCommand, content: &str, selection: Selection) -> Result<Edit> {
    let selection = selection.clamp(char_len(content));
    let edit = match plan(command, !selection.is_empty())? {
        Primitive::Wrap { before, after } => wrap_selection(content, selection, &before, &after),
        Primitive::Insert(text) => insert_at_cursor(content, selection, &text),
    };
    Ok(edit)
}

fn align_open(side: &str) -> String {
    format!(r#"<div style="text-align: {}">"#, side)
}

fn require_url(command: CommandKind, url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(FormatError::EmptyUrl { command });
    }
    Ok(())
}
