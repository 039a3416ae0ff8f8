//! Inline links `[title](url)` and images `![alt](file)`.
//!
//! The closing `]`, the `(` right after it and the closing `)` must all be
//! on the current line. When one is missing the construct is abandoned
//! with the cursor at the point of failure; the bytes consumed so far stay
//! in the pending span and are written as plain text.

use crate::Range;
use crate::context::ParseContext;

/// Text and target of a bracketed construct.
struct Bracketed {
    text: Range,
    target: Range,
}

/// Offset of the next `needle` before the end of the current line.
fn find_on_line(ctx: &ParseContext<'_>, needle: u8) -> Option<usize> {
    let start = ctx.pos();
    ctx.cursor
        .find2(needle, b'\n')
        .map(|i| start + i)
        .filter(|&i| ctx.input[i] == needle)
}

/// Parse `[text](target)` with the cursor on `[`.
fn parse_bracketed(ctx: &mut ParseContext<'_>) -> Option<Bracketed> {
    ctx.cursor.bump();

    let text_start = ctx.pos();
    let Some(close) = find_on_line(ctx, b']') else {
        ctx.cursor.seek(ctx.cursor.line_end());
        return None;
    };
    ctx.cursor.seek(close + 1);
    if !ctx.cursor.at(b'(') {
        return None;
    }
    ctx.cursor.bump();

    let target_start = ctx.pos();
    let Some(paren) = find_on_line(ctx, b')') else {
        ctx.cursor.seek(ctx.cursor.line_end());
        return None;
    };
    ctx.cursor.seek(paren + 1);

    Some(Bracketed {
        text: Range::from_usize(text_start, close),
        target: Range::from_usize(target_start, paren),
    })
}

/// Parse a link with the cursor on `[`.
pub(crate) fn parse_link(ctx: &mut ParseContext<'_>) {
    ctx.flush_pending(false);
    let start = ctx.pos();

    let Some(link) = parse_bracketed(ctx) else {
        log::trace!("incomplete link at {start}");
        return;
    };

    let tags = ctx.tags;
    let title = link.text.slice(ctx.input);
    let url = link.target.slice(ctx.input);
    ctx.out.open(&tags.link_wrapper);
    ctx.out.anchor(url, title);
    ctx.out.close(&tags.link_wrapper);
    ctx.finish_inline();
}

/// Parse an image with the cursor on `!`.
///
/// Spaces and tabs may separate `!` from `[`. Without a `[` the `!` is
/// plain text.
pub(crate) fn parse_image(ctx: &mut ParseContext<'_>) {
    ctx.flush_pending(false);
    let start = ctx.pos();
    ctx.cursor.bump();
    ctx.cursor.skip_whitespace();

    if !ctx.cursor.at(b'[') {
        return;
    }

    let Some(image) = parse_bracketed(ctx) else {
        log::trace!("incomplete image at {start}");
        return;
    };

    let tags = ctx.tags;
    let alt = image.text.slice(ctx.input);
    let file = image.target.slice(ctx.input);
    ctx.out.open(&tags.image_wrapper);
    ctx.out.image(file, alt);
    ctx.out.close(&tags.image_wrapper);
    ctx.finish_inline();
}

#[cfg(test)]
mod tests {
    use crate::to_html;

    #[test]
    fn test_link() {
        assert_eq!(to_html("[t](u)"), "<p><a href=\"u\">t</a></p>");
    }

    #[test]
    fn test_link_in_text() {
        assert_eq!(
            to_html("see [docs](https://docs.rs) now"),
            "<p>see <a href=\"https://docs.rs\">docs</a> now</p>"
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            to_html("![a cat](cat.png)"),
            "<p><img src=\"cat.png\" alt=\"a cat\"></p>"
        );
    }

    #[test]
    fn test_image_with_space_after_bang() {
        assert_eq!(to_html("! [x](y)"), "<p><img src=\"y\" alt=\"x\"></p>");
    }

    #[test]
    fn test_bang_without_bracket_is_text() {
        assert_eq!(to_html("Hi! there"), "<p>Hi! there</p>");
    }

    #[test]
    fn test_missing_paren_keeps_text() {
        assert_eq!(to_html("[just brackets] *a*"), "<p>[just brackets] <em>a</em></p>");
    }

    #[test]
    fn test_missing_close_bracket_stops_at_line_end() {
        assert_eq!(to_html("[open *a*\nnext"), "<p>[open *a* next</p>");
    }

    #[test]
    fn test_missing_close_paren() {
        assert_eq!(to_html("![alt](file"), "<p>![alt](file</p>");
    }

    #[test]
    fn test_bracket_on_next_line_is_not_used() {
        assert_eq!(to_html("[a\n](b)"), "<p>[a ](b)</p>");
    }
}
