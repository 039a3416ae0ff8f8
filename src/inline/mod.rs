//! Inline span parsers.
//!
//! Each parser starts on the marker byte the line driver dispatched on,
//! flushes the text before it, and either writes its construct or leaves
//! the marker in the pending span as plain text. Emphasis, links and
//! images stay on one line; strikethrough and code spans may close on a
//! later one. Spans do not nest: their content is copied verbatim.

mod code_span;
mod emphasis;
mod links;
mod strikethrough;

pub(crate) use code_span::parse_code_span;
pub(crate) use emphasis::parse_emphasis;
pub(crate) use links::{parse_image, parse_link};
pub(crate) use strikethrough::parse_strikethrough;

use crate::context::ParseContext;

/// `\x` writes `x` as plain text; the backslash itself is dropped.
pub(crate) fn parse_escape(ctx: &mut ParseContext<'_>) {
    ctx.flush_pending(false);
    ctx.cursor.bump();
    ctx.skip_pending();
    if !ctx.cursor.at_line_end() {
        ctx.cursor.bump();
    }
}
