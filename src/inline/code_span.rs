//! Code spans.
//!
//! An opening run of N backticks is closed by the next run of exactly N
//! backticks, which may be on a later line. Content is copied verbatim.

use crate::context::ParseContext;

/// Parse a code span starting at the backtick run under the cursor.
pub(crate) fn parse_code_span(ctx: &mut ParseContext<'_>) {
    ctx.flush_pending(false);

    let opener = ctx.cursor.count_run(b'`');
    let content_start = ctx.pos();

    match ctx.seek_closing_run(b'`', opener) {
        Some(content_end) => {
            let content = ctx.bytes(content_start, content_end);
            ctx.out.wrapped(&ctx.tags.code, content);
            ctx.finish_inline();
        }
        None => log::trace!("unclosed code span at {}", content_start - opener),
    }
}

#[cfg(test)]
mod tests {
    use crate::to_html;

    #[test]
    fn test_simple_code_span() {
        assert_eq!(to_html("hello `code` world"), "<p>hello <code>code</code> world</p>");
    }

    #[test]
    fn test_double_backtick() {
        assert_eq!(
            to_html("x ``code with ` backtick``"),
            "<p>x <code>code with ` backtick</code></p>"
        );
    }

    #[test]
    fn test_unmatched_backticks() {
        assert_eq!(to_html("hello `code`` world"), "<p>hello `code`` world</p>");
    }

    #[test]
    fn test_emphasis_inside_code_is_literal() {
        assert_eq!(to_html("`*not emphasis*`"), "<p><code>*not emphasis*</code></p>");
    }

    #[test]
    fn test_raw_html_is_not_escaped() {
        assert_eq!(to_html("`<b>`"), "<p><code><b></code></p>");
    }

    #[test]
    fn test_closer_on_later_line() {
        assert_eq!(to_html("`a\nb` c"), "<p><code>a\nb</code> c</p>");
    }

    #[test]
    fn test_unclosed_runs_stay_text_across_lines() {
        assert_eq!(to_html("`a\nb ``c"), "<p>`a b ``c</p>");
    }

    #[test]
    fn test_triple_backticks_mid_line() {
        assert_eq!(to_html("a ```b``` c"), "<p>a <code>b</code> c</p>");
    }
}
