//! Conversion state shared by every parser, and the paragraph accumulator.

use crate::block::ListStack;
use crate::cursor::Cursor;
use crate::render::HtmlWriter;
use crate::{Range, TagConfig};

/// Mutable state for one conversion.
///
/// Created by [`convert`](crate::convert), passed as `&mut` to each parser
/// function and dropped once the output is taken.
pub(crate) struct ParseContext<'a> {
    /// Source document.
    pub(crate) source: &'a str,
    /// Source document bytes.
    pub(crate) input: &'a [u8],
    pub(crate) tags: &'a TagConfig,
    pub(crate) out: HtmlWriter,
    pub(crate) cursor: Cursor<'a>,
    /// Start of the text not yet written to `out`.
    pub(crate) pending_start: usize,
    /// Leading indentation of the current line, in columns.
    pub(crate) line_indent: usize,
    pub(crate) blockquote_depth: usize,
    pub(crate) paragraph_open: bool,
    /// Whether the last text written ended in a space.
    pub(crate) ended_with_space: bool,
    /// A line break separates the next fragment from the previous one.
    pub(crate) join_pending: bool,
    pub(crate) lists: ListStack,
}

impl<'a> ParseContext<'a> {
    /// Create a context writing into `out`.
    pub fn new(source: &'a str, tags: &'a TagConfig, out: HtmlWriter) -> Self {
        let input = source.as_bytes();
        Self {
            source,
            input,
            tags,
            out,
            cursor: Cursor::new(input),
            pending_start: 0,
            line_indent: 0,
            blockquote_depth: 0,
            paragraph_open: false,
            ended_with_space: true,
            join_pending: false,
            lists: ListStack::new(),
        }
    }

    /// Finish the conversion and hand back the writer.
    pub fn into_writer(self) -> HtmlWriter {
        self.out
    }

    /// Current cursor offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.cursor.offset()
    }

    /// The pending span, from the last flush point to the cursor.
    #[inline]
    pub(crate) fn pending(&self) -> Range {
        Range::from_usize(self.pending_start, self.pos().max(self.pending_start))
    }

    #[inline]
    pub(crate) fn has_pending(&self) -> bool {
        self.pos() > self.pending_start
    }

    /// Drop the pending span: text up to the cursor has been consumed.
    #[inline]
    pub(crate) fn skip_pending(&mut self) {
        self.pending_start = self.pos();
    }

    /// Bytes of the input in `start..end`.
    #[inline]
    pub(crate) fn bytes(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Find the closing run of exactly `len` `marker` bytes, possibly on a later line.
    ///
    /// On success the cursor sits after the run and the run's start offset is
    /// returned. On failure the cursor does not move.
    ///
    /// A failed search means no run of that length follows, so no later
    /// opener of the same length exists to repeat the scan.
    pub(crate) fn seek_closing_run(&mut self, marker: u8, len: usize) -> Option<usize> {
        let start = self.pos();
        let limit = self.cursor.len();
        let found = self.cursor.seek_run(marker, len, limit);
        if found.is_none() {
            self.cursor.seek(start);
        }
        found
    }

    /// Open the paragraph wrapper unless one is open or a list item holds the flow.
    pub(crate) fn open_paragraph(&mut self) {
        if !self.paragraph_open && self.lists.is_empty() {
            self.out.open(&self.tags.paragraph);
            self.paragraph_open = true;
            self.join_pending = false;
        }
    }

    /// Close the paragraph wrapper if one is open.
    pub(crate) fn close_paragraph(&mut self) {
        if self.paragraph_open {
            self.out.close(&self.tags.paragraph);
            self.paragraph_open = false;
        }
        self.join_pending = false;
    }

    /// Write the space that joins a continuation line to the previous one.
    fn write_join(&mut self) {
        if self.join_pending && !self.ended_with_space {
            self.out.write_byte(b' ');
        }
        self.join_pending = false;
    }

    /// Copy the pending span to the output, managing the paragraph wrapper.
    ///
    /// Must run before any construct writes its tags so that output order
    /// follows input order. An empty span either opens the paragraph (a
    /// construct is about to be written into it) or closes it.
    pub(crate) fn flush_pending(&mut self, close_paragraph: bool) {
        if !self.has_pending() {
            if close_paragraph {
                self.close_paragraph();
            } else {
                self.open_paragraph();
                self.write_join();
            }
            self.skip_pending();
            return;
        }

        self.open_paragraph();
        self.write_join();

        let span = self.pending();
        let text = span.slice(self.input);
        self.ended_with_space = text.last() == Some(&b' ');
        self.out.write_bytes(text);
        self.skip_pending();

        if close_paragraph {
            self.close_paragraph();
        }
    }

    /// Record that an inline construct was written and move the pending
    /// span past it.
    #[inline]
    pub(crate) fn finish_inline(&mut self) {
        self.ended_with_space = false;
        self.skip_pending();
    }

    /// Nothing joins across block-level markup.
    #[inline]
    pub(crate) fn break_flow(&mut self) {
        self.ended_with_space = true;
        self.join_pending = false;
    }

    /// Record that block-level markup was written and move the pending
    /// span past it.
    #[inline]
    pub(crate) fn finish_block(&mut self) {
        self.break_flow();
        self.skip_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_context<F: FnOnce(&mut ParseContext<'_>)>(source: &str, f: F) -> String {
        let tags = TagConfig::default();
        let mut ctx = ParseContext::new(source, &tags, HtmlWriter::new());
        f(&mut ctx);
        ctx.into_writer().into_string()
    }

    #[test]
    fn flush_opens_paragraph_and_copies() {
        let html = with_context("hello", |ctx| {
            ctx.cursor.advance(5);
            ctx.flush_pending(true);
            assert!(!ctx.paragraph_open);
        });
        assert_eq!(html, "<p>hello</p>");
    }

    #[test]
    fn empty_flush_is_idempotent() {
        let html = with_context("", |ctx| {
            ctx.flush_pending(false);
            ctx.flush_pending(false);
            assert!(ctx.paragraph_open);
            ctx.flush_pending(true);
        });
        assert_eq!(html, "<p></p>");
    }

    #[test]
    fn join_space_only_after_line_break() {
        let html = with_context("ab", |ctx| {
            ctx.cursor.advance(1);
            ctx.flush_pending(false);
            ctx.join_pending = true;
            ctx.cursor.advance(1);
            ctx.flush_pending(true);
        });
        assert_eq!(html, "<p>a b</p>");
    }

    #[test]
    fn no_join_after_trailing_space() {
        let html = with_context("a b", |ctx| {
            ctx.cursor.advance(2);
            ctx.flush_pending(false);
            ctx.join_pending = true;
            ctx.cursor.advance(1);
            ctx.flush_pending(false);
        });
        assert_eq!(html, "<p>a b");
    }

    #[test]
    fn closing_run_search_crosses_lines() {
        with_context("a\n~~ b", |ctx| {
            assert_eq!(ctx.seek_closing_run(b'~', 2), Some(2));
            assert_eq!(ctx.pos(), 4);
        });
    }

    #[test]
    fn failed_closing_run_search_keeps_cursor() {
        with_context("x `a `` b", |ctx| {
            ctx.cursor.advance(3);
            assert_eq!(ctx.seek_closing_run(b'`', 1), None);
            assert_eq!(ctx.pos(), 3);
            assert_eq!(ctx.seek_closing_run(b'`', 2), Some(5));
            assert_eq!(ctx.pos(), 7);
        });
    }

    #[test]
    fn no_paragraph_inside_list() {
        let html = with_context("item", |ctx| {
            ctx.lists.push(false, 0, 0);
            ctx.cursor.advance(4);
            ctx.flush_pending(false);
            assert!(!ctx.paragraph_open);
        });
        assert_eq!(html, "item");
    }
}
