//! Blockquote depth tracking.

use super::list::{at_list_item, close_all_lists, close_lists_deeper_than};
use crate::context::ParseContext;

/// Reconcile the blockquote depth with the `>` run at the start of the line.
///
/// Writes exactly the difference in open/close tags. Lists opened inside a
/// blockquote are closed before that blockquote is, and open lists are
/// closed before a deeper blockquote opens on a line that is not a list
/// item. If any `>` was consumed the line indentation is measured again
/// after it.
pub(crate) fn resolve_blockquotes(ctx: &mut ParseContext<'_>) {
    let markers = ctx.cursor.count_run(b'>');

    if markers > ctx.blockquote_depth && !at_list_item(ctx.cursor) {
        close_all_lists(ctx);
    }

    if markers != ctx.blockquote_depth {
        log::trace!("blockquote depth {} -> {markers}", ctx.blockquote_depth);
        ctx.close_paragraph();
        while ctx.blockquote_depth < markers {
            ctx.out.open(&ctx.tags.blockquote);
            ctx.blockquote_depth += 1;
        }
        unwind_to(ctx, markers);
        ctx.break_flow();
    }

    if markers > 0 {
        ctx.line_indent = ctx.cursor.measure_indentation();
    }
}

/// Close blockquotes, and the lists inside them, down to `depth`.
pub(crate) fn unwind_to(ctx: &mut ParseContext<'_>, depth: usize) {
    while ctx.blockquote_depth > depth {
        let outer = ctx.blockquote_depth - 1;
        close_lists_deeper_than(ctx, outer);
        ctx.out.close(&ctx.tags.blockquote);
        ctx.blockquote_depth -= 1;
    }
}
