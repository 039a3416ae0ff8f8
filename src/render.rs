//! HTML output writer.
//!
//! Append-only byte buffer. Text is copied verbatim: the converter never
//! escapes document text, so raw HTML in the input reaches the output.

use crate::TagPair;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use tagmark::{HtmlWriter, TagPair};
///
/// let em = TagPair::new("<em>", "</em>");
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.open(&em);
/// writer.write_bytes(b"Hello");
/// writer.close(&em);
/// assert_eq!(writer.into_string(), "<em>Hello</em>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Typical HTML is ~1.25x input size.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::from_vec(Vec::with_capacity(input_len + input_len / 4))
    }

    /// Reuse an existing buffer. Its contents are cleared.
    #[inline]
    pub fn from_vec(mut out: Vec<u8>) -> Self {
        out.clear();
        Self { out }
    }

    /// Write raw bytes without escaping.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write `b` `count` times.
    #[inline]
    pub fn write_repeated(&mut self, b: u8, count: usize) {
        self.out.resize(self.out.len() + count, b);
    }

    /// Write the opening half of a tag pair.
    #[inline]
    pub fn open(&mut self, pair: &TagPair) {
        self.write_str(&pair.open);
    }

    /// Write the closing half of a tag pair.
    #[inline]
    pub fn close(&mut self, pair: &TagPair) {
        self.write_str(&pair.close);
    }

    /// Write `content` wrapped in a tag pair.
    #[inline]
    pub fn wrapped(&mut self, pair: &TagPair, content: &[u8]) {
        self.open(pair);
        self.write_bytes(content);
        self.close(pair);
    }

    /// Write a named anchor for a heading: `<a name="text-with-hyphens"></a>`.
    pub fn heading_anchor(&mut self, text: &[u8]) {
        self.write_str("<a name=\"");
        self.out
            .extend(text.iter().map(|&b| if b == b' ' { b'-' } else { b }));
        self.write_str("\"></a>");
    }

    /// Write a hyperlink: `<a href="url">title</a>`.
    pub fn anchor(&mut self, url: &[u8], title: &[u8]) {
        self.write_str("<a href=\"");
        self.write_bytes(url);
        self.write_str("\">");
        self.write_bytes(title);
        self.write_str("</a>");
    }

    /// Write an image: `<img src="file" alt="alt">`.
    pub fn image(&mut self, file: &[u8], alt: &[u8]) {
        self.write_str("<img src=\"");
        self.write_bytes(file);
        self.write_str("\" alt=\"");
        self.write_bytes(alt);
        self.write_str("\">");
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Take ownership of output buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    /// Take ownership as String, replacing invalid UTF-8.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
