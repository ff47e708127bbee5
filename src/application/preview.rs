//! Preview entry use case

use crate::domain::markdown::escape_html;
use crate::domain::{render_markdown_with, Entry, RenderOptions};

/// Render an entry's content as an HTML fragment.
pub fn preview_fragment(entry: &Entry, options: RenderOptions) -> String {
    render_markdown_with(&entry.content, options)
}

/// Render an entry as a standalone HTML page, titled after the entry.
///
/// The title is always escaped; the body follows `options`.
pub fn preview_document(entry: &Entry, options: RenderOptions) -> String {
    let title = escape_html(entry.display_title());
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<div class=\"entry\">{body}</div>\n</body>\n</html>\n",
        title = title,
        body = preview_fragment(entry, options),
    )
}
