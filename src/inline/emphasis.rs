//! Emphasis: `*italic*`, `**bold**`, `***both***`.
//!
//! The left and right runs are counted independently. The strength is the
//! shorter run (at most 3); whatever the longer run has in excess is
//! written as literal asterisks on its own side, so `**a*` renders as
//! `*<em>a</em>`.

use crate::context::ParseContext;
use crate::limits::MAX_EMPHASIS_STRENGTH;

/// Parse emphasis starting at the `*` under the cursor.
pub(crate) fn parse_emphasis(ctx: &mut ParseContext<'_>) {
    ctx.flush_pending(false);

    let left = ctx.cursor.count_run(b'*');
    let content_start = ctx.pos();

    let closer = ctx
        .cursor
        .find2(b'*', b'\n')
        .map(|offset| content_start + offset)
        .filter(|&pos| ctx.input[pos] == b'*');
    let Some(content_end) = closer else {
        // No closer on this line: the run stays in the pending span as text.
        log::trace!("unclosed emphasis at {}", content_start - left);
        return;
    };

    ctx.cursor.seek(content_end);
    let right = ctx.cursor.count_run(b'*');
    let matched = left.min(right);

    let tags = ctx.tags;
    let content = ctx.bytes(content_start, content_end);
    let out = &mut ctx.out;

    out.write_repeated(b'*', left - matched);
    match matched.min(MAX_EMPHASIS_STRENGTH) {
        1 => out.wrapped(&tags.italic, content),
        2 => out.wrapped(&tags.bold, content),
        _ => {
            out.open(&tags.italic);
            out.wrapped(&tags.bold, content);
            out.close(&tags.italic);
        }
    }
    out.write_repeated(b'*', right - matched);

    ctx.finish_inline();
}
