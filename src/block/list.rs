//! List frames and list-item resolution.

use smallvec::SmallVec;

use crate::context::ParseContext;
use crate::cursor::Cursor;

/// One open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListFrame {
    pub ordered: bool,
    /// Indentation (columns) at which this list's items sit.
    pub indentation: usize,
    /// Indentation difference to the parent frame, 0 for an outermost list.
    pub delta: usize,
    /// Blockquote depth the list was opened at.
    pub quote_depth: usize,
}

/// Stack of open lists, innermost on top.
///
/// Frames opened at the same blockquote depth have strictly increasing
/// indentation from bottom to top.
#[derive(Debug, Default)]
pub(crate) struct ListStack {
    frames: SmallVec<[ListFrame; 8]>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn top(&self) -> Option<&ListFrame> {
        self.frames.last()
    }

    /// Innermost frame, if it was opened at `quote_depth`.
    #[inline]
    pub fn top_in_quote(&self, quote_depth: usize) -> Option<&ListFrame> {
        self.top().filter(|frame| frame.quote_depth == quote_depth)
    }

    /// Number of frames opened at `quote_depth`.
    pub fn count_in_quote(&self, quote_depth: usize) -> usize {
        self.frames
            .iter()
            .rev()
            .take_while(|frame| frame.quote_depth == quote_depth)
            .count()
    }

    /// Push a frame, deriving its delta from the enclosing frame at the same quote depth.
    pub fn push(&mut self, ordered: bool, indentation: usize, quote_depth: usize) {
        let parent = self.top_in_quote(quote_depth).map_or(0, |frame| frame.indentation);
        debug_assert!(indentation >= parent);
        self.frames.push(ListFrame {
            ordered,
            indentation,
            delta: indentation.saturating_sub(parent),
            quote_depth,
        });
    }

    #[inline]
    pub fn pop(&mut self) -> Option<ListFrame> {
        self.frames.pop()
    }
}

/// Whether the rest of the line, after any spaces and tabs, starts a list item.
pub(crate) fn at_list_item(mut cursor: Cursor<'_>) -> bool {
    cursor.skip_whitespace();
    cursor.at_bullet_marker() || cursor.at_ordered_marker()
}

/// Parse a list marker at the cursor and open the item it starts.
///
/// Consumes the marker (`-`, `+`, `*` or digits followed by `.`) and the
/// whitespace after it; the item text starts at the first other byte.
pub(crate) fn parse_list_item(ctx: &mut ParseContext<'_>, ordered: bool) {
    ctx.close_paragraph();
    if ordered {
        ctx.cursor.skip_while(|b| b.is_ascii_digit());
    }
    ctx.cursor.bump();
    ctx.cursor.skip_whitespace();

    open_list_item(ctx, ordered);
    ctx.finish_block();
}

/// Reconcile the list stack with the current line's indentation and open an item.
fn open_list_item(ctx: &mut ParseContext<'_>, ordered: bool) {
    let tags = ctx.tags;
    let indent = ctx.line_indent;
    let quote_depth = ctx.blockquote_depth;

    let top = ctx.lists.top_in_quote(quote_depth).copied();
    match top {
        Some(top) if indent < top.indentation => {
            let mut current = top.indentation;
            while ctx.lists.count_in_quote(quote_depth) > 1 && current > indent {
                if let Some(frame) = close_list(ctx) {
                    current = current.saturating_sub(frame.delta);
                }
            }
            next_item(ctx);
        }
        Some(top) if indent == top.indentation => next_item(ctx),
        _ => {
            log::trace!("open {} list at indent {indent}", if ordered { "ordered" } else { "unordered" });
            ctx.lists.push(ordered, indent, quote_depth);
            ctx.out.open(tags.list(ordered));
            ctx.out.open(tags.list_item(ordered));
        }
    }
}

/// Close the current item of the innermost list and open its next one.
fn next_item(ctx: &mut ParseContext<'_>) {
    if let Some(frame) = ctx.lists.top().copied() {
        let item = ctx.tags.list_item(frame.ordered);
        ctx.out.close(item);
        ctx.out.open(item);
    }
}

/// Pop the innermost list, writing its item and list closing tags.
fn close_list(ctx: &mut ParseContext<'_>) -> Option<ListFrame> {
    let frame = ctx.lists.pop()?;
    ctx.out.close(ctx.tags.list_item(frame.ordered));
    ctx.out.close(ctx.tags.list(frame.ordered));
    Some(frame)
}

/// Close every open list.
pub(crate) fn close_all_lists(ctx: &mut ParseContext<'_>) {
    if ctx.lists.is_empty() {
        return;
    }
    while close_list(ctx).is_some() {}
    ctx.break_flow();
}

/// Close the lists opened inside blockquotes deeper than `quote_depth`.
pub(crate) fn close_lists_deeper_than(ctx: &mut ParseContext<'_>, quote_depth: usize) {
    while ctx.lists.top().is_some_and(|frame| frame.quote_depth > quote_depth) {
        close_list(ctx);
    }
}
