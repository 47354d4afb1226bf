//! Individual render passes
//!
//! Each pass is a global, non-overlapping substitution over the whole text.
//! Line-anchored patterns run in multi-line mode; `.` never crosses a newline
//! except in fenced code.

use std::sync::LazyLock;

use regex::{Captures, Regex};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("render pattern is valid")
}

static H3_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^### (.*)$"));
static H2_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^## (.*)$"));
static H1_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^# (.*)$"));
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"\*(.*?)\*"));
static STRIKE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"~~(.*?)~~"));

/// Group 1: a leading `!` (image syntax, left for the image pass)
/// Group 2: link text
/// Group 3: URL
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(!?)\[([^\]]+)\]\(([^)]+)\)"));

/// Group 1: alt text (may be empty)
/// Group 2: URL
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"!\[([^\]]*)\]\(([^)]+)\)"));

static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^> (.*)$"));
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^---$"));
static STAR_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^\* (.*)$"));
static DASH_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^- (.*)$"));
static NUMBERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^[0-9]+\. (.*)$"));
static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)```(.*?)```"));
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"`(.*?)`"));

/// `### x`, `## x`, `# x` at line start
pub fn headings(text: &str) -> String {
    let text = H3_RE.replace_all(text, "<h3>${1}</h3>");
    let text = H2_RE.replace_all(&text, "<h2>${1}</h2>");
    H1_RE.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// `**x**`; must run before [`italic`], whose delimiter is a prefix of this one
pub fn bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "<strong>${1}</strong>").into_owned()
}

pub fn italic(text: &str) -> String {
    ITALIC_RE.replace_all(text, "<em>${1}</em>").into_owned()
}

pub fn strikethrough(text: &str) -> String {
    STRIKE_RE.replace_all(text, "<del>${1}</del>").into_owned()
}

/// `[text](url)` opening in a new tab
///
/// A bracket pair directly after `!` is image syntax and is copied through
/// untouched for [`images`].
pub fn links(text: &str) -> String {
    LINK_RE
        .replace_all(text, |caps: &Captures| {
            if &caps[1] == "!" {
                caps[0].to_string()
            } else {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    &caps[3], &caps[2]
                )
            }
        })
        .into_owned()
}

/// `![alt](url)`, scaled to fit its container
pub fn images(text: &str) -> String {
    IMAGE_RE
        .replace_all(
            text,
            r#"<img src="${2}" alt="${1}" style="max-width: 100%; height: auto;" />"#,
        )
        .into_owned()
}

pub fn blockquotes(text: &str) -> String {
    BLOCKQUOTE_RE
        .replace_all(text, "<blockquote>${1}</blockquote>")
        .into_owned()
}

/// A line holding exactly `---`
pub fn horizontal_rules(text: &str) -> String {
    RULE_RE.replace_all(text, "<hr>").into_owned()
}

/// `* x`, `- x` and `1. x` lines
///
/// Every line gets its own `<ul>`/`<ol>` container; consecutive items are
/// not merged into one list.
pub fn lists(text: &str) -> String {
    let text = STAR_ITEM_RE.replace_all(text, "<ul><li>${1}</li></ul>");
    let text = DASH_ITEM_RE.replace_all(&text, "<ul><li>${1}</li></ul>");
    NUMBERED_ITEM_RE
        .replace_all(&text, "<ol><li>${1}</li></ol>")
        .into_owned()
}

/// ```` ```x``` ````, possibly spanning lines
pub fn code_blocks(text: &str) -> String {
    CODE_BLOCK_RE
        .replace_all(text, "<pre><code>${1}</code></pre>")
        .into_owned()
}

pub fn inline_code(text: &str) -> String {
    INLINE_CODE_RE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

/// Blank lines split paragraphs, single newlines become `<br>`, and the
/// whole text is wrapped once in `<p>`
pub fn paragraphs(text: &str) -> String {
    let body = text.replace("\n\n", "</p><p>").replace('\n', "<br>");
    format!("<p>{}</p>", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_only_at_line_start() {
        assert_eq!(headings("# A\n## B\n### C"), "<h1>A</h1>\n<h2>B</h2>\n<h3>C</h3>");
        assert_eq!(headings("not # a heading"), "not # a heading");
        assert_eq!(headings("#no-space"), "#no-space");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(bold("a **b** c **d**"), "a <strong>b</strong> c <strong>d</strong>");
        assert_eq!(italic("*x* and *y*"), "<em>x</em> and <em>y</em>");
    }

    #[test]
    fn test_bold_does_not_cross_lines() {
        assert_eq!(bold("**a\nb**"), "**a\nb**");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(strikethrough("~~old~~ new"), "<del>old</del> new");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            links("see [docs](https://a.io)"),
            r#"see <a href="https://a.io" target="_blank" rel="noopener noreferrer">docs</a>"#
        );
    }

    #[test]
    fn test_links_skip_images() {
        assert_eq!(links("![cat](/c.png)"), "![cat](/c.png)");
    }

    #[test]
    fn test_images() {
        assert_eq!(
            images("![cat](/c.png)"),
            r#"<img src="/c.png" alt="cat" style="max-width: 100%; height: auto;" />"#
        );
        assert_eq!(
            images("![](/c.png)"),
            r#"<img src="/c.png" alt="" style="max-width: 100%; height: auto;" />"#
        );
    }

    #[test]
    fn test_blockquotes_and_rules() {
        assert_eq!(blockquotes("> hi\nx > y"), "<blockquote>hi</blockquote>\nx > y");
        assert_eq!(horizontal_rules("a\n---\nb"), "a\n<hr>\nb");
        assert_eq!(horizontal_rules("----"), "----");
    }

    #[test]
    fn test_lists_are_not_merged() {
        assert_eq!(lists("- a\n- b"), "<ul><li>a</li></ul>\n<ul><li>b</li></ul>");
        assert_eq!(lists("* a"), "<ul><li>a</li></ul>");
        assert_eq!(lists("1. a\n12. b"), "<ol><li>a</li></ol>\n<ol><li>b</li></ol>");
    }

    #[test]
    fn test_code_block_spans_lines() {
        assert_eq!(code_blocks("```\nx\ny\n```"), "<pre><code>\nx\ny\n</code></pre>");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(inline_code("run `ls` now"), "run <code>ls</code> now");
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(paragraphs("one\n\ntwo\nthree"), "<p>one</p><p>two<br>three</p>");
        assert_eq!(paragraphs(""), "<p></p>");
    }
}
