//! Syntax highlighting hook for fenced code blocks.

use crate::Range;

/// Replaces the body of a fenced code block with highlighted HTML.
///
/// Called once per fenced block with the language token (possibly empty),
/// the full source document, and the byte range of the block body inside
/// it. The returned string is written between the code-block tags as-is;
/// the implementation is responsible for any escaping.
///
/// Any `Fn(&str, &str, Range) -> String` closure is a highlighter.
///
/// # Example
/// ```
/// use tagmark::{convert, Range, TagConfig};
///
/// let tags = TagConfig::default().with_highlighter(|lang: &str, source: &str, code: Range| {
///     format!("[{lang}:{}]", code.slice_str(source).unwrap_or(""))
/// });
/// let html = convert("```rs\nlet x;\n```\n", &tags);
/// assert_eq!(html, "<pre><code>[rs:let x;\n]</code></pre>");
/// ```
pub trait Highlighter {
    /// Produce the HTML that replaces the code body.
    fn highlight(&self, language: &str, source: &str, code: Range) -> String;
}

impl<F> Highlighter for F
where
    F: Fn(&str, &str, Range) -> String,
{
    #[inline]
    fn highlight(&self, language: &str, source: &str, code: Range) -> String {
        self(language, source, code)
    }
}

/// Highlighter that only HTML-escapes the code body.
///
/// Useful when the code block content is untrusted and no real
/// highlighting is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeHighlighter;

impl Highlighter for EscapeHighlighter {
    fn highlight(&self, _language: &str, source: &str, code: Range) -> String {
        let body = code.slice_str(source).unwrap_or("");
        html_escape::encode_text(body).into_owned()
    }
}
