//! Lightweight markdown to HTML rendering for entry previews.
//!
//! This is not a markdown parser. It applies a fixed, ordered list of regex
//! substitutions to the whole buffer; each step sees the output of the one
//! before it, so the order below is part of the output format.
//!
//! Supported: `#`/`##`/`###` headings, `***`/`**`/`*` emphasis, `* ` and
//! `1. ` list items, `[label](url)` links, `` `code` `` spans and newlines.
//! Everything else passes through untouched.
//!
//! Line-based rules treat `\r\n` as a line ending and never capture the `\r`;
//! list numbers are ASCII digits only.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Options for [`render_markdown_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Escape HTML-significant characters in the source before applying the
    /// markdown rules. Off by default: the preview treats entry text as
    /// trusted markup.
    pub escape_html: bool,
}

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static REGEX: OnceLock<Regex> = OnceLock::new();
            REGEX.get_or_init(|| Regex::new($pattern).unwrap())
        }
    };
}

static_regex!(h3_regex, r"(?mR)^### (.*)$");
static_regex!(h2_regex, r"(?mR)^## (.*)$");
static_regex!(h1_regex, r"(?mR)^# (.*)$");
static_regex!(bold_italic_regex, r"(?R)\*\*\*(.*?)\*\*\*");
static_regex!(bold_regex, r"(?R)\*\*(.*?)\*\*");
static_regex!(italic_regex, r"(?R)\*(.*?)\*");
static_regex!(unordered_item_regex, r"(?mR)^\* (.*)$");
static_regex!(ordered_item_regex, r"(?mR)^[0-9]+\. (.*)$");
static_regex!(list_run_regex, r"(?s)<li>.*</li>");
static_regex!(link_regex, r"\[([^\]]+)\]\(([^)]+)\)");
static_regex!(code_regex, r"`([^`]+)`");

/// Render entry text to an HTML fragment with default options.
///
/// # Examples
///
/// ```
/// use jotbook::domain::markdown::render_markdown;
///
/// assert_eq!(render_markdown("# Hello"), "<h1>Hello</h1>");
/// assert_eq!(render_markdown("line1\nline2"), "line1<br>line2");
/// ```
pub fn render_markdown(text: &str) -> String {
    render_markdown_with(text, RenderOptions::default())
}

/// Render entry text to an HTML fragment.
pub fn render_markdown_with(text: &str, options: RenderOptions) -> String {
    let html = if options.escape_html {
        escape_html(text)
    } else {
        text.to_string()
    };

    let html = h3_regex().replace_all(&html, "<h3>${1}</h3>");
    let html = h2_regex().replace_all(&html, "<h2>${1}</h2>");
    let html = h1_regex().replace_all(&html, "<h1>${1}</h1>");

    let html = bold_italic_regex().replace_all(&html, "<strong><em>${1}</em></strong>");
    let html = bold_regex().replace_all(&html, "<strong>${1}</strong>");
    let html = italic_regex().replace_all(&html, "<em>${1}</em>");

    let html = unordered_item_regex().replace_all(&html, "<li>${1}</li>");
    let html = wrap_unordered_run(&html);

    let html = ordered_item_regex().replace_all(&html, "<li>${1}</li>");
    let html = wrap_ordered_run(&html);

    let html = link_regex().replace_all(&html, r#"<a href="${2}">${1}</a>"#);
    let html = code_regex().replace_all(&html, "<code>${1}</code>");

    html.replace('\n', "<br>")
}

/// Wrap the span from the first `<li>` to the last `</li>` in `<ul>`.
///
/// Only one container is ever produced, so two lists separated by other text
/// end up sharing it.
fn wrap_unordered_run(html: &str) -> String {
    list_run_regex()
        .replace(html, |caps: &Captures| format!("<ul>{}</ul>", &caps[0]))
        .into_owned()
}

/// Wrap the item run in `<ol>` unless the unordered step already wrapped it.
fn wrap_ordered_run(html: &str) -> String {
    let Some(run) = list_run_regex().find(html) else {
        return html.to_string();
    };

    let already_wrapped = html[..run.start()].ends_with("<ul>") || run.as_str().contains("<ul>");
    if already_wrapped {
        return html.to_string();
    }

    format!(
        "{}<ol>{}</ol>{}",
        &html[..run.start()],
        run.as_str(),
        &html[run.end()..]
    )
}

/// Escape `&`, `<`, `>`, `"` and `'` for inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
