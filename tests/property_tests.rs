//! Property-based tests for the converter
//!
//! Inputs are drawn from the Markdown marker alphabet so that every
//! construct is exercised, including malformed and truncated ones.

use proptest::prelude::*;
use tagmark::{TagConfig, convert, convert_into, to_html};

/// Lines built from marker bytes, text and indentation, without `<`
/// so that every tag in the output was written by the converter.
fn markdown_line() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("#".to_string()),
            Just(">".to_string()),
            Just("-".to_string()),
            Just("+".to_string()),
            Just("*".to_string()),
            Just("~".to_string()),
            Just("=".to_string()),
            Just("`".to_string()),
            Just("[".to_string()),
            Just("]".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("!".to_string()),
            Just("\\".to_string()),
            Just("1.".to_string()),
            Just(" ".to_string()),
            Just("\t".to_string()),
            "[a-z]{1,4}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

fn markdown_document() -> impl Strategy<Value = String> {
    prop::collection::vec(markdown_line(), 0..12).prop_map(|lines| lines.join("\n"))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

proptest! {
    #[test]
    fn never_panics(input in "\\PC*") {
        let _ = to_html(&input);
    }

    #[test]
    fn block_tags_are_balanced(input in markdown_document()) {
        let html = to_html(&input);
        for (open, close) in [
            ("<p>", "</p>"),
            ("<ul>", "</ul>"),
            ("<ol>", "</ol>"),
            ("<li>", "</li>"),
            ("<blockquote>", "</blockquote>"),
            ("<pre><code>", "</code></pre>"),
        ] {
            prop_assert_eq!(count(&html, open), count(&html, close), "{} in {:?} -> {:?}", open, input, html);
        }
    }

    #[test]
    fn inline_tags_are_balanced(input in markdown_document()) {
        let html = to_html(&input);
        for (open, close) in [
            ("<em>", "</em>"),
            ("<strong>", "</strong>"),
            ("<del>", "</del>"),
        ] {
            prop_assert_eq!(count(&html, open), count(&html, close), "{} in {:?} -> {:?}", open, input, html);
        }
    }

    #[test]
    fn plain_text_is_wrapped_unchanged(text in "[a-z]{1,10}( [a-z]{1,10}){0,5}") {
        prop_assert_eq!(to_html(&text), format!("<p>{text}</p>"));
    }

    #[test]
    fn convert_into_matches_convert(input in markdown_document()) {
        let tags = TagConfig::default();
        let mut buffer = b"previous".to_vec();
        convert_into(&input, &tags, &mut buffer);
        prop_assert_eq!(String::from_utf8_lossy(&buffer), convert(&input, &tags));
    }
}
