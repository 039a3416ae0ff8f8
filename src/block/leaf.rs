//! Line-start constructs: headings, horizontal rules and fenced code blocks.

use crate::Range;
use crate::context::ParseContext;
use crate::limits::{CODE_FENCE_LEN, MIN_RULE_LEN};

/// `# Heading` through `###### Heading`.
///
/// Longer `#` runs are clamped to level 6. Without a space after the run
/// the line is plain text and the run is left in the pending span.
pub(crate) fn parse_heading(ctx: &mut ParseContext<'_>) {
    let level = ctx.cursor.run_len(b'#');
    if ctx.cursor.peek_ahead(level) != Some(b' ') {
        ctx.cursor.advance(level);
        return;
    }

    ctx.flush_pending(true);
    ctx.cursor.advance(level + 1);

    let start = ctx.pos();
    let end = ctx.cursor.line_end();
    ctx.cursor.seek(end);
    let text = ctx.bytes(start, end);
    log::trace!("heading level {level} at {start}");

    let pair = ctx.tags.heading(level);
    ctx.out.heading_anchor(text);
    ctx.out.wrapped(pair, text);
    ctx.finish_block();
}

/// A line starting with `-`: a horizontal rule (3 or more), a list item, or text.
pub(crate) fn parse_dash(ctx: &mut ParseContext<'_>) {
    let run = ctx.cursor.run_len(b'-');
    if run >= MIN_RULE_LEN {
        ctx.flush_pending(true);
        ctx.cursor.advance(run);
        ctx.out.write_str(&ctx.tags.horizontal_rule);
        ctx.finish_block();
    } else if ctx.cursor.at_bullet_marker() {
        super::list::parse_list_item(ctx, false);
    } else {
        ctx.cursor.advance(run);
    }
}

/// A fenced code block opened by exactly three backticks at line start.
///
/// The language token is optional; the rest of the opening line is
/// ignored. The body runs to the next run of exactly three backticks, or
/// to end of input when the fence is never closed.
pub(crate) fn parse_code_block(ctx: &mut ParseContext<'_>) {
    ctx.flush_pending(true);
    ctx.cursor.advance(CODE_FENCE_LEN);
    ctx.cursor.skip_whitespace();

    let lang_start = ctx.pos();
    ctx.cursor.skip_while(|b| !matches!(b, b' ' | b'\t' | b'\n'));
    let language = ctx.source.get(lang_start..ctx.pos()).unwrap_or("");

    ctx.cursor.seek(ctx.cursor.line_end());
    ctx.cursor.bump();

    let body_start = ctx.pos();
    let limit = ctx.cursor.len();
    let body_end = ctx
        .cursor
        .seek_run(b'`', CODE_FENCE_LEN, limit)
        .unwrap_or(limit);
    let body = Range::from_usize(body_start, body_end);
    log::trace!("code block `{language}` spanning {body_start}..{body_end}");

    let tags = ctx.tags;
    ctx.out.open(&tags.code_block);
    match &tags.highlighter {
        Some(highlighter) => {
            let html = highlighter.highlight(language, ctx.source, body);
            ctx.out.write_str(&html);
        }
        None => ctx.out.write_bytes(body.slice(ctx.input)),
    }
    ctx.out.close(&tags.code_block);
    ctx.finish_block();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HtmlWriter;
    use crate::TagConfig;

    fn run(source: &str, tags: &TagConfig, f: fn(&mut ParseContext<'_>)) -> (String, usize) {
        let mut ctx = ParseContext::new(source, tags, HtmlWriter::new());
        f(&mut ctx);
        let pos = ctx.pos();
        (ctx.into_writer().into_string(), pos)
    }

    #[test]
    fn test_heading_consumes_line() {
        let (html, pos) = run("## Two words\nnext", &TagConfig::default(), parse_heading);
        assert_eq!(html, "<a name=\"Two-words\"></a><h2>Two words</h2>\n");
        assert_eq!(pos, 12);
    }

    #[test]
    fn test_heading_level_clamped() {
        let (html, _) = run("######### deep", &TagConfig::default(), parse_heading);
        assert_eq!(html, "<a name=\"deep\"></a><h6>deep</h6>\n");
    }

    #[test]
    fn test_hash_without_space_is_text() {
        let (html, pos) = run("#tag", &TagConfig::default(), parse_heading);
        assert_eq!(html, "");
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_rule() {
        let (html, pos) = run("-----\n", &TagConfig::default(), parse_dash);
        assert_eq!(html, "<hr>");
        assert_eq!(pos, 5);
    }

    #[test]
    fn test_double_dash_is_text() {
        let (html, pos) = run("--x", &TagConfig::default(), parse_dash);
        assert_eq!(html, "");
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_code_block_verbatim() {
        let (html, pos) = run("```py extra\nx=1\n```\n", &TagConfig::default(), parse_code_block);
        assert_eq!(html, "<pre><code>x=1\n</code></pre>");
        assert_eq!(pos, 19);
    }

    #[test]
    fn test_code_block_unclosed_runs_to_end() {
        let (html, pos) = run("```\na\n``\nb", &TagConfig::default(), parse_code_block);
        assert_eq!(html, "<pre><code>a\n``\nb</code></pre>");
        assert_eq!(pos, 10);
    }

    #[test]
    fn test_code_block_highlighter_gets_offsets() {
        let tags = TagConfig::default().with_highlighter(|lang: &str, _: &str, code: Range| {
            format!("{lang}:{}..{}", code.start, code.end)
        });
        let (html, _) = run("```rust\nfn f() {}\n```", &tags, parse_code_block);
        assert_eq!(html, "<pre><code>rust:8..18</code></pre>");
    }
}
