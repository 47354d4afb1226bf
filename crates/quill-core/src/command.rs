//! Formatting commands - what the toolbar can ask the engine to do

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Identifier of a toolbar command, without any parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Highlight,
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    BulletList,
    NumberedList,
    HorizontalRule,
    Blockquote,
    CodeBlock,
    InlineCode,
    AlignLeft,
    AlignCenter,
    AlignRight,
    TextColor,
    InsertLink,
    InsertImage,
}

impl CommandKind {
    /// Every command, in toolbar order
    pub const ALL: [CommandKind; 21] = [
        CommandKind::Bold,
        CommandKind::Italic,
        CommandKind::Underline,
        CommandKind::Strikethrough,
        CommandKind::Highlight,
        CommandKind::Heading1,
        CommandKind::Heading2,
        CommandKind::Heading3,
        CommandKind::Paragraph,
        CommandKind::BulletList,
        CommandKind::NumberedList,
        CommandKind::HorizontalRule,
        CommandKind::Blockquote,
        CommandKind::CodeBlock,
        CommandKind::InlineCode,
        CommandKind::AlignLeft,
        CommandKind::AlignCenter,
        CommandKind::AlignRight,
        CommandKind::TextColor,
        CommandKind::InsertLink,
        CommandKind::InsertImage,
    ];

    /// Stable snake_case identifier (e.g. "bold", "insert_link")
    pub fn id(&self) -> &'static str {
        match self {
            CommandKind::Bold => "bold",
            CommandKind::Italic => "italic",
            CommandKind::Underline => "underline",
            CommandKind::Strikethrough => "strikethrough",
            CommandKind::Highlight => "highlight",
            CommandKind::Heading1 => "heading1",
            CommandKind::Heading2 => "heading2",
            CommandKind::Heading3 => "heading3",
            CommandKind::Paragraph => "paragraph",
            CommandKind::BulletList => "bullet_list",
            CommandKind::NumberedList => "numbered_list",
            CommandKind::HorizontalRule => "horizontal_rule",
            CommandKind::Blockquote => "blockquote",
            CommandKind::CodeBlock => "code_block",
            CommandKind::InlineCode => "inline_code",
            CommandKind::AlignLeft => "align_left",
            CommandKind::AlignCenter => "align_center",
            CommandKind::AlignRight => "align_right",
            CommandKind::TextColor => "text_color",
            CommandKind::InsertLink => "insert_link",
            CommandKind::InsertImage => "insert_image",
        }
    }

    /// Human-readable toolbar label
    pub fn label(&self) -> &'static str {
        match self {
            CommandKind::Bold => "Bold",
            CommandKind::Italic => "Italic",
            CommandKind::Underline => "Underline",
            CommandKind::Strikethrough => "Strikethrough",
            CommandKind::Highlight => "Highlight",
            CommandKind::Heading1 => "Heading 1",
            CommandKind::Heading2 => "Heading 2",
            CommandKind::Heading3 => "Heading 3",
            CommandKind::Paragraph => "Paragraph",
            CommandKind::BulletList => "Bullet List",
            CommandKind::NumberedList => "Numbered List",
            CommandKind::HorizontalRule => "Horizontal Rule",
            CommandKind::Blockquote => "Quote",
            CommandKind::CodeBlock => "Code Block",
            CommandKind::InlineCode => "Inline Code",
            CommandKind::AlignLeft => "Align Left",
            CommandKind::AlignCenter => "Align Center",
            CommandKind::AlignRight => "Align Right",
            CommandKind::TextColor => "Text Color",
            CommandKind::InsertLink => "Insert Link",
            CommandKind::InsertImage => "Insert Image",
        }
    }

    /// Default keyboard shortcut, if the command has one
    pub fn shortcut(&self) -> Option<&'static str> {
        match self {
            CommandKind::Bold => Some("Ctrl+B"),
            CommandKind::Italic => Some("Ctrl+I"),
            CommandKind::Underline => Some("Ctrl+U"),
            CommandKind::Strikethrough => Some("Ctrl+Shift+X"),
            CommandKind::InlineCode => Some("Ctrl+E"),
            CommandKind::InsertLink => Some("Ctrl+K"),
            _ => None,
        }
    }

    /// Whether the host must collect parameters before invoking the command
    pub fn requires_params(&self) -> bool {
        matches!(
            self,
            CommandKind::TextColor | CommandKind::InsertLink | CommandKind::InsertImage
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CommandKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.id() == trimmed)
            .ok_or_else(|| CoreError::UnknownCommand(trimmed.to_string()))
    }
}

/// A formatting request from the toolbar
///
/// Commands are plain values; the three that need host-collected input carry
/// it inline. Serialized as an internally tagged object, e.g.
/// `{"command": "insert_link", "url": "https://example.com", "text": "docs"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Highlight,
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    BulletList,
    NumberedList,
    HorizontalRule,
    Blockquote,
    CodeBlock,
    InlineCode,
    AlignLeft,
    AlignCenter,
    AlignRight,
    TextColor {
        /// CSS color value, usually a hex string like `#ff0000`
        color: String,
    },
    InsertLink {
        url: String,
        #[serde(default)]
        text: String,
    },
    InsertImage {
        url: String,
        #[serde(default)]
        alt: String,
    },
}

impl FormatCommand {
    pub fn text_color(color: impl Into<String>) -> Self {
        FormatCommand::TextColor {
            color: color.into(),
        }
    }

    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        FormatCommand::InsertLink {
            url: url.into(),
            text: text.into(),
        }
    }

    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        FormatCommand::InsertImage {
            url: url.into(),
            alt: alt.into(),
        }
    }

    /// The identifier of this command
    pub fn kind(&self) -> CommandKind {
        match self {
            FormatCommand::Bold => CommandKind::Bold,
            FormatCommand::Italic => CommandKind::Italic,
            FormatCommand::Underline => CommandKind::Underline,
            FormatCommand::Strikethrough => CommandKind::Strikethrough,
            FormatCommand::Highlight => CommandKind::Highlight,
            FormatCommand::Heading1 => CommandKind::Heading1,
            FormatCommand::Heading2 => CommandKind::Heading2,
            FormatCommand::Heading3 => CommandKind::Heading3,
            FormatCommand::Paragraph => CommandKind::Paragraph,
            FormatCommand::BulletList => CommandKind::BulletList,
            FormatCommand::NumberedList => CommandKind::NumberedList,
            FormatCommand::HorizontalRule => CommandKind::HorizontalRule,
            FormatCommand::Blockquote => CommandKind::Blockquote,
            FormatCommand::CodeBlock => CommandKind::CodeBlock,
            FormatCommand::InlineCode => CommandKind::InlineCode,
            FormatCommand::AlignLeft => CommandKind::AlignLeft,
            FormatCommand::AlignCenter => CommandKind::AlignCenter,
            FormatCommand::AlignRight => CommandKind::AlignRight,
            FormatCommand::TextColor { .. } => CommandKind::TextColor,
            FormatCommand::InsertLink { .. } => CommandKind::InsertLink,
            FormatCommand::InsertImage { .. } => CommandKind::InsertImage,
        }
    }
}

impl TryFrom<CommandKind> for FormatCommand {
    type Error = CoreError;

    /// Build the command for a parameter-free identifier
    fn try_from(kind: CommandKind) -> Result<Self> {
        let command = match kind {
            CommandKind::Bold => FormatCommand::Bold,
            CommandKind::Italic => FormatCommand::Italic,
            CommandKind::Underline => FormatCommand::Underline,
            CommandKind::Strikethrough => FormatCommand::Strikethrough,
            CommandKind::Highlight => FormatCommand::Highlight,
            CommandKind::Heading1 => FormatCommand::Heading1,
            CommandKind::Heading2 => FormatCommand::Heading2,
            CommandKind::Heading3 => FormatCommand::Heading3,
            CommandKind::Paragraph => FormatCommand::Paragraph,
            CommandKind::BulletList => FormatCommand::BulletList,
            CommandKind::NumberedList => FormatCommand::NumberedList,
            CommandKind::HorizontalRule => FormatCommand::HorizontalRule,
            CommandKind::Blockquote => FormatCommand::Blockquote,
            CommandKind::CodeBlock => FormatCommand::CodeBlock,
            CommandKind::InlineCode => FormatCommand::InlineCode,
            CommandKind::AlignLeft => FormatCommand::AlignLeft,
            CommandKind::AlignCenter => FormatCommand::AlignCenter,
            CommandKind::AlignRight => FormatCommand::AlignRight,
            CommandKind::TextColor | CommandKind::InsertLink | CommandKind::InsertImage => {
                return Err(CoreError::MissingParameters(kind.id().to_string()))
            }
        };
        Ok(command)
    }
}

impl FromStr for FormatCommand {
    type Err = CoreError;

    /// Parse an identifier such as "bold" into a parameter-free command
    fn from_str(s: &str) -> Result<Self> {
        FormatCommand::try_from(s.parse::<CommandKind>()?)
    }
}
