//! Tag configuration: the opening/closing strings emitted per construct.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::Highlighter;
use crate::limits::MAX_HEADING_LEVEL;

/// Opening and closing markup for one construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    pub open: Cow<'static, str>,
    pub close: Cow<'static, str>,
}

impl TagPair {
    /// Create a pair from static strings.
    #[inline]
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    /// Create a pair from owned strings.
    pub fn owned(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: Cow::Owned(open.into()),
            close: Cow::Owned(close.into()),
        }
    }

    /// A pair that emits nothing.
    #[inline]
    pub const fn empty() -> Self {
        Self::new("", "")
    }
}

/// Shared highlighter handle stored in a [`TagConfig`].
pub type SharedHighlighter = Arc<dyn Highlighter + Send + Sync>;

/// Markup emitted for every recognized construct.
///
/// All fields are public; override what you need with struct update syntax:
///
/// ```
/// use tagmark::{convert, TagConfig, TagPair};
///
/// let tags = TagConfig {
///     italic: TagPair::new("<i>", "</i>"),
///     ..TagConfig::default()
/// };
/// assert_eq!(convert("*a*", &tags), "<p><i>a</i></p>");
/// ```
#[derive(Clone)]
pub struct TagConfig {
    /// Heading levels 1 through 6.
    pub headings: [TagPair; MAX_HEADING_LEVEL],
    pub paragraph: TagPair,
    pub italic: TagPair,
    pub bold: TagPair,
    pub blockquote: TagPair,
    /// Highlight markup. No Markdown syntax writes it.
    pub highlight: TagPair,
    pub strikethrough: TagPair,
    pub ordered_list: TagPair,
    pub ordered_list_item: TagPair,
    pub unordered_list: TagPair,
    pub unordered_list_item: TagPair,
    pub code: TagPair,
    pub code_block: TagPair,
    /// Wraps each generated `<a href>` anchor.
    pub link_wrapper: TagPair,
    /// Wraps each generated `<img>`.
    pub image_wrapper: TagPair,
    pub horizontal_rule: Cow<'static, str>,
    /// Replaces fenced code block bodies when set.
    pub highlighter: Option<SharedHighlighter>,
}

impl TagConfig {
    /// Tags for a heading level.
    ///
    /// Levels above 6 are clamped to 6 and level 0 is treated as 1; the
    /// `#` run length is never rejected for being too long.
    #[inline]
    pub fn heading(&self, level: usize) -> &TagPair {
        let index = level.clamp(1, MAX_HEADING_LEVEL) - 1;
        &self.headings[index]
    }

    /// List tags for an ordered or unordered list.
    #[inline]
    pub fn list(&self, ordered: bool) -> &TagPair {
        if ordered {
            &self.ordered_list
        } else {
            &self.unordered_list
        }
    }

    /// Item tags for an ordered or unordered list.
    #[inline]
    pub fn list_item(&self, ordered: bool) -> &TagPair {
        if ordered {
            &self.ordered_list_item
        } else {
            &self.unordered_list_item
        }
    }

    /// Install a highlighter for fenced code blocks.
    pub fn with_highlighter<H>(mut self, highlighter: H) -> Self
    where
        H: Highlighter + Send + Sync + 'static,
    {
        self.highlighter = Some(Arc::new(highlighter));
        self
    }

    /// Replace the horizontal rule markup.
    pub fn with_horizontal_rule(mut self, rule: impl Into<Cow<'static, str>>) -> Self {
        self.horizontal_rule = rule.into();
        self
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            headings: [
                TagPair::new("<h1>", "</h1>\n"),
                TagPair::new("<h2>", "</h2>\n"),
                TagPair::new("<h3>", "</h3>\n"),
                TagPair::new("<h4>", "</h4>\n"),
                TagPair::new("<h5>", "</h5>\n"),
                TagPair::new("<h6>", "</h6>\n"),
            ],
            paragraph: TagPair::new("<p>", "</p>"),
            italic: TagPair::new("<em>", "</em>"),
            bold: TagPair::new("<strong>", "</strong>"),
            blockquote: TagPair::new("<blockquote>\n", "</blockquote>\n"),
            highlight: TagPair::new("<mark>", "</mark>"),
            strikethrough: TagPair::new("<del>", "</del>"),
            ordered_list: TagPair::new("<ol>", "</ol>"),
            ordered_list_item: TagPair::new("<li>", "</li>"),
            unordered_list: TagPair::new("<ul>", "</ul>"),
            unordered_list_item: TagPair::new("<li>", "</li>"),
            code: TagPair::new("<code>", "</code>"),
            code_block: TagPair::new("<pre><code>", "</code></pre>"),
            link_wrapper: TagPair::empty(),
            image_wrapper: TagPair::empty(),
            horizontal_rule: Cow::Borrowed("<hr>"),
            highlighter: None,
        }
    }
}

impl fmt::Debug for TagConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagConfig")
            .field("headings", &self.headings)
            .field("paragraph", &self.paragraph)
            .field("italic", &self.italic)
            .field("bold", &self.bold)
            .field("blockquote", &self.blockquote)
            .field("highlight", &self.highlight)
            .field("strikethrough", &self.strikethrough)
            .field("ordered_list", &self.ordered_list)
            .field("ordered_list_item", &self.ordered_list_item)
            .field("unordered_list", &self.unordered_list)
            .field("unordered_list_item", &self.unordered_list_item)
            .field("code", &self.code)
            .field("code_block", &self.code_block)
            .field("link_wrapper", &self.link_wrapper)
            .field("image_wrapper", &self.image_wrapper)
            .field("horizontal_rule", &self.horizontal_rule)
            .field("highlighter", &self.highlighter.as_ref().map(|_| "<dyn Highlighter>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EscapeHighlighter;

    #[test]
    fn test_heading_clamp() {
        let tags = TagConfig::default();
        assert_eq!(tags.heading(1).open, "<h1>");
        assert_eq!(tags.heading(6).open, "<h6>");
        assert_eq!(tags.heading(9).open, "<h6>");
        assert_eq!(tags.heading(0).open, "<h1>");
    }

    #[test]
    fn test_list_lookup() {
        let tags = TagConfig::default();
        assert_eq!(tags.list(true).open, "<ol>");
        assert_eq!(tags.list(false).close, "</ul>");
        assert_eq!(tags.list_item(true).open, "<li>");
    }

    #[test]
    fn test_builders() {
        let tags = TagConfig::default()
            .with_horizontal_rule("<hr />")
            .with_highlighter(EscapeHighlighter);
        assert_eq!(tags.horizontal_rule, "<hr />");
        assert!(tags.highlighter.is_some());
        assert!(format!("{tags:?}").contains("<dyn Highlighter>"));
    }

    #[test]
    fn test_owned_pair() {
        let pair = TagPair::owned(String::from("<x>"), "</x>");
        assert_eq!(pair, TagPair::new("<x>", "</x>"));
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TagConfig>();
    }
}
