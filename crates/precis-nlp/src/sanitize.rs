//! HTML sanitizing
//!
//! Converts untrusted, possibly marked-up input into plain paragraphs
//! separated by single newlines.

use scraper::{ElementRef, Html};

/// Elements whose text content is never visible
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Elements followed by a line break in the extracted text
const LINE_BREAK_ELEMENTS: [&str; 2] = ["p", "br"];

/// Strip markup from `raw`
///
/// Paragraph and line-break elements end a line, every line is trimmed,
/// blank lines are removed and the result is trimmed as a whole. Malformed
/// markup is tolerated the way an HTML5 parser tolerates it.
pub fn sanitize_html(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let mut text = String::with_capacity(raw.len());
    collect_text(fragment.root_element(), &mut text);

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            if HIDDEN_ELEMENTS.contains(&name) {
                continue;
            }

            collect_text(child_element, out);

            if LINE_BREAK_ELEMENTS.contains(&name) {
                out.push('\n');
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}
