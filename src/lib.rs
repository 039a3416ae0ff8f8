//! tagmark: single-pass Markdown to HTML converter with configurable tags
//!
//! The whole document is converted in one forward scan. Block structure
//! (paragraphs, nested lists, blockquotes) is reconciled once per line;
//! inline spans are recognized where their marker appears and written
//! immediately. Every tag the converter writes comes from a [`TagConfig`].
//!
//! # Design Principles
//! - No AST, no event buffer: output is written as the cursor moves
//! - No regex: pure byte-level scanning
//! - No backtracking beyond bounded rewinds within one construct
//! - Malformed constructs degrade to literal text, conversion never fails
//! - No escaping: document text and raw HTML pass through unchanged

mod block;
mod context;
pub mod cursor;
pub mod highlight;
mod inline;
pub mod limits;
pub mod range;
pub mod render;
pub mod tags;

pub use highlight::{EscapeHighlighter, Highlighter};
pub use range::Range;
pub use render::HtmlWriter;
pub use tags::{SharedHighlighter, TagConfig, TagPair};

use context::ParseContext;

/// Convert Markdown to HTML with the default tags.
///
/// # Example
/// ```
/// let html = tagmark::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<a name=\"Hello\"></a><h1>Hello</h1>\n<p>World</p>");
/// ```
pub fn to_html(input: &str) -> String {
    convert(input, &TagConfig::default())
}

/// Convert Markdown to HTML with caller-supplied tags.
///
/// # Example
/// ```
/// use tagmark::{convert, TagConfig, TagPair};
///
/// let tags = TagConfig {
///     link_wrapper: TagPair::new("<span class=\"link\">", "</span>"),
///     ..TagConfig::default()
/// };
/// assert_eq!(
///     convert("[t](u)", &tags),
///     "<p><span class=\"link\"><a href=\"u\">t</a></span></p>"
/// );
/// ```
pub fn convert(input: &str, tags: &TagConfig) -> String {
    render(input, tags, HtmlWriter::with_capacity_for(input.len())).into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its allocation is reused.
pub fn convert_into(input: &str, tags: &TagConfig, out: &mut Vec<u8>) {
    let mut buffer = std::mem::take(out);
    buffer.reserve(input.len() + input.len() / 4);
    *out = render(input, tags, HtmlWriter::from_vec(buffer)).into_vec();
}

fn render(input: &str, tags: &TagConfig, writer: HtmlWriter) -> HtmlWriter {
    let mut ctx = ParseContext::new(input, tags, writer);
    block::parse_document(&mut ctx);
    ctx.into_writer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(to_html("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_raw_html_passes_through() {
        assert_eq!(
            to_html("<script>alert('xss')</script>"),
            "<p><script>alert('xss')</script></p>"
        );
    }

    #[test]
    fn test_heading_h1() {
        assert_eq!(to_html("# Title\n"), "<a name=\"Title\"></a><h1>Title</h1>\n");
    }

    #[test]
    fn test_heading_all_levels() {
        for level in 1..=6 {
            let input = format!("{} H", "#".repeat(level));
            let html = to_html(&input);
            assert!(html.contains(&format!("<h{level}>H</h{level}>")), "{html}");
        }
    }

    #[test]
    fn test_convert_into_reuses_buffer() {
        let mut buffer = b"stale output".to_vec();
        convert_into("*a*", &TagConfig::default(), &mut buffer);
        assert_eq!(buffer, b"<p><em>a</em></p>");
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(to_html("héllo *wörld*"), "<p>héllo <em>wörld</em></p>");
    }
}
