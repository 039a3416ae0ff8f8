//! Fixed delimiter lengths, clamps and widths.
//!
//! Every lookahead the scanner performs is bounded by one of these.

/// Deepest heading level; longer `#` runs are clamped to it.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Strongest emphasis (italic + bold); longer matched `*` runs are clamped to it.
pub const MAX_EMPHASIS_STRENGTH: usize = 3;

/// Exact backtick run that opens and closes a fenced code block.
pub const CODE_FENCE_LEN: usize = 3;

/// Shortest `-` run that forms a horizontal rule.
pub const MIN_RULE_LEN: usize = 3;

/// Exact `~` run that opens and closes strikethrough.
pub const STRIKETHROUGH_RUN_LEN: usize = 2;

/// Columns counted for a tab in leading indentation.
pub const TAB_WIDTH: usize = 4;

/// Trailing spaces that end the current paragraph.
pub const PARAGRAPH_BREAK_SPACES: usize = 2;
