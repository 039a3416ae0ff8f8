//! Line driver: resolves block structure per line, then dispatches on each
//! significant byte to the construct parsers.

use super::leaf::{parse_code_block, parse_dash, parse_heading};
use super::list::{at_list_item, close_all_lists, parse_list_item};
use super::quote::{resolve_blockquotes, unwind_to};
use crate::context::ParseContext;
use crate::inline::{parse_code_span, parse_emphasis, parse_escape, parse_image, parse_link, parse_strikethrough};
use crate::limits::{CODE_FENCE_LEN, PARAGRAPH_BREAK_SPACES};

/// Convert the whole document, then close everything still open.
pub(crate) fn parse_document(ctx: &mut ParseContext<'_>) {
    log::debug!("converting {} bytes", ctx.input.len());

    while !ctx.cursor.is_eof() {
        parse_line(ctx);
    }

    ctx.close_paragraph();
    close_all_lists(ctx);
    unwind_to(ctx, 0);

    log::debug!("wrote {} bytes", ctx.out.len());
}

/// Parse one line, leaving the cursor at the start of the next.
fn parse_line(ctx: &mut ParseContext<'_>) {
    ctx.line_indent = ctx.cursor.measure_indentation();
    resolve_blockquotes(ctx);

    if ctx.cursor.at_line_end() {
        ctx.close_paragraph();
        ctx.cursor.bump();
        ctx.skip_pending();
        return;
    }

    if !ctx.lists.is_empty() && !at_list_item(ctx.cursor) {
        close_all_lists(ctx);
    }

    ctx.skip_pending();
    let text_start = ctx.pos();
    let mut at_line_start = true;

    while let Some(b) = ctx.cursor.peek() {
        if b == b'\n' {
            break;
        }
        dispatch(ctx, b, at_line_start);
        at_line_start = false;
    }

    let trailing_spaces = ctx
        .bytes(text_start, ctx.pos())
        .iter()
        .rev()
        .take_while(|&&b| b == b' ')
        .count();
    let close = trailing_spaces >= PARAGRAPH_BREAK_SPACES;
    if ctx.has_pending() || close {
        ctx.flush_pending(close);
    }
    if ctx.paragraph_open || !ctx.lists.is_empty() {
        ctx.join_pending = true;
    }

    ctx.cursor.bump();
    ctx.skip_pending();
}

/// Hand the byte at the cursor to the parser for the construct it starts.
///
/// Order matters: bullets are recognized before emphasis, fences before
/// code spans, and ordered markers before plain text. `<` is not
/// dispatched, so raw HTML passes through untouched.
fn dispatch(ctx: &mut ParseContext<'_>, b: u8, at_line_start: bool) {
    match (b, at_line_start) {
        (b'\\', _) => parse_escape(ctx),
        (b'#', true) => parse_heading(ctx),
        (b'+' | b'*', true) if ctx.cursor.at_bullet_marker() => parse_list_item(ctx, false),
        (b'*', _) => parse_emphasis(ctx),
        (b'`', true) if ctx.cursor.run_len(b'`') == CODE_FENCE_LEN => parse_code_block(ctx),
        (b'`', _) => parse_code_span(ctx),
        (b'~', _) => parse_strikethrough(ctx),
        (b'-', true) => parse_dash(ctx),
        (b'0'..=b'9', true) if ctx.cursor.at_ordered_marker() => parse_list_item(ctx, true),
        (b'[', _) => parse_link(ctx),
        (b'!', _) => parse_image(ctx),
        _ => ctx.cursor.bump(),
    }
}
