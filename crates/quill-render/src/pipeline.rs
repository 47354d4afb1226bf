//! The render pipeline - named passes applied in a fixed order

use std::fmt;

use tracing::trace;

use crate::passes as pass_fns;

/// One ordered substitution step
#[derive(Clone, Copy)]
pub struct RenderPass {
    /// Stable name, used in traces and debugging output
    pub name: &'static str,

    /// The substitution itself
    pub apply: fn(&str) -> String,
}

impl fmt::Debug for RenderPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPass").field("name", &self.name).finish()
    }
}

/// Every pass, in the order `render` applies them
///
/// Bold must precede italic (`**` contains `*`). Links precede images but
/// leave `![..](..)` alone. Paragraphs must be last: they consume every
/// remaining newline.
pub static PASSES: [RenderPass; 12] = [
    RenderPass {
        name: "headings",
        apply: pass_fns::headings,
    },
    RenderPass {
        name: "bold",
        apply: pass_fns::bold,
    },
    RenderPass {
        name: "italic",
        apply: pass_fns::italic,
    },
    RenderPass {
        name: "strikethrough",
        apply: pass_fns::strikethrough,
    },
    RenderPass {
        name: "links",
        apply: pass_fns::links,
    },
    RenderPass {
        name: "images",
        apply: pass_fns::images,
    },
    RenderPass {
        name: "blockquotes",
        apply: pass_fns::blockquotes,
    },
    RenderPass {
        name: "horizontal_rules",
        apply: pass_fns::horizontal_rules,
    },
    RenderPass {
        name: "lists",
        apply: pass_fns::lists,
    },
    RenderPass {
        name: "code_blocks",
        apply: pass_fns::code_blocks,
    },
    RenderPass {
        name: "inline_code",
        apply: pass_fns::inline_code,
    },
    RenderPass {
        name: "paragraphs",
        apply: pass_fns::paragraphs,
    },
];

/// The pipeline, in order
pub fn passes() -> &'static [RenderPass] {
    &PASSES
}

/// Look up a pass by name
pub fn pass(name: &str) -> Option<&'static RenderPass> {
    PASSES.iter().find(|pass| pass.name == name)
}

/// Render document text to an HTML string
///
/// Pure and deterministic: the same input always yields the same output.
pub fn render(content: &str) -> String {
    PASSES
        .iter()
        .fold(normalize_line_endings(content), |html, pass| {
            let next = (pass.apply)(&html);
            trace!(pass = pass.name, bytes = next.len(), "applied render pass");
            next
        })
}

/// Render and keep the text produced by every pass
///
/// The first entry is the normalized input under the name `"input"`; the last
/// entry equals `render(content)`.
pub fn render_with_trace(content: &str) -> Vec<(&'static str, String)> {
    let input = normalize_line_endings(content);
    let mut stages = Vec::with_capacity(PASSES.len() + 1);
    stages.push(("input", input.clone()));
    PASSES.iter().fold(input, |html, pass| {
        let next = (pass.apply)(&html);
        trace!(pass = pass.name, bytes = next.len(), "applied render pass");
        stages.push((pass.name, next.clone()));
        next
    });
    stages
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
