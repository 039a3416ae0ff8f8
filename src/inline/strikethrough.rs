//! Strikethrough: `~~text~~`.
//!
//! Only a run of exactly two tildes opens or closes the span; longer or
//! shorter runs are plain text inside it. The closer may sit on a later
//! line. The enclosed text is copied without further inline parsing.

use crate::context::ParseContext;
use crate::limits::STRIKETHROUGH_RUN_LEN;

/// Parse strikethrough starting at the `~` run under the cursor.
pub(crate) fn parse_strikethrough(ctx: &mut ParseContext<'_>) {
    let run = ctx.cursor.run_len(b'~');
    if run != STRIKETHROUGH_RUN_LEN {
        ctx.cursor.advance(run);
        return;
    }

    ctx.flush_pending(false);
    ctx.cursor.advance(run);
    let content_start = ctx.pos();

    match ctx.seek_closing_run(b'~', STRIKETHROUGH_RUN_LEN) {
        Some(content_end) => {
            let content = ctx.bytes(content_start, content_end);
            ctx.out.wrapped(&ctx.tags.strikethrough, content);
            ctx.finish_inline();
        }
        None => log::trace!("unclosed strikethrough at {}", content_start - run),
    }
}

#[cfg(test)]
mod tests {
    use crate::to_html;

    #[test]
    fn test_strikethrough() {
        assert_eq!(to_html("a ~~gone~~ b"), "<p>a <del>gone</del> b</p>");
    }

    #[test]
    fn test_other_runs_do_not_close() {
        assert_eq!(to_html("~~a ~~~ b ~ c~~"), "<p><del>a ~~~ b ~ c</del></p>");
    }

    #[test]
    fn test_single_and_triple_runs_are_text() {
        assert_eq!(to_html("~a~ ~~~b~~~"), "<p>~a~ ~~~b~~~</p>");
    }

    #[test]
    fn test_unclosed_is_text() {
        assert_eq!(to_html("~~open *a*"), "<p>~~open <em>a</em></p>");
    }

    #[test]
    fn test_closer_on_later_line() {
        assert_eq!(to_html("~~a\nb~~ c"), "<p><del>a\nb</del> c</p>");
    }

    #[test]
    fn test_equals_signs_are_text() {
        assert_eq!(
            to_html("if a == b and c == d then"),
            "<p>if a == b and c == d then</p>"
        );
    }
}
