//! Plain-text excerpts of entry content for list views

use pulldown_cmark::{Event, Parser as MdParser, TagEnd};

/// Build a single-line plain-text summary of markdown content.
///
/// Markup is dropped, whitespace is collapsed and the result is cut to at
/// most `max_chars` characters (an ellipsis counts as one of them).
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let mut text = String::new();

    for event in MdParser::new(content) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
            ) => text.push(' '),
            _ => {}
        }
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, max_chars)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}
