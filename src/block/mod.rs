//! Block structure for the line driver.
//!
//! Tracks what spans lines:
//! - Blockquote depth
//! - Nested lists
//!
//! and recognizes the constructs that can only start a line:
//! - Headings
//! - Horizontal rules
//! - Fenced code blocks

mod leaf;
mod list;
mod parser;
mod quote;

pub(crate) use list::ListStack;
pub(crate) use parser::parse_document;
