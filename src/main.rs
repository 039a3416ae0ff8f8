//! tagmark CLI - convert Markdown to HTML with the default tags
//!
//! Usage: `tagmark [FILE|-] [--escape-code]`
//!
//! Reads from FILE, or stdin when FILE is `-` or missing. Logging is
//! controlled with `RUST_LOG`.

use std::io::{self, Read, Write};

use tagmark::{EscapeHighlighter, TagConfig};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut path = None;
    let mut escape_code = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--escape-code" => escape_code = true,
            "-" => path = None,
            _ => path = Some(arg),
        }
    }

    let input = match &path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    log::debug!("read {} bytes from {}", input.len(), path.as_deref().unwrap_or("stdin"));

    let mut tags = TagConfig::default();
    if escape_code {
        tags = tags.with_highlighter(EscapeHighlighter);
    }

    let html = tagmark::convert(&input, &tags);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
