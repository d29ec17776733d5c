//! Line classification for markdown headings and code fences.
//!
//! All predicates look at the trimmed line only, so indentation never
//! changes the result. Trimming also strips U+FEFF, so a byte order mark in
//! front of the first line does not hide a heading.

use std::sync::LazyLock;

use regex::Regex;

/// Marker that opens or closes a fenced code block
pub const FENCE_MARKER: &str = "```";

/// Zero width no-break space, also used as a byte order mark
const BOM: char = '\u{FEFF}';

/// ATX heading: one or more `#` followed by required whitespace
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#+[\s\x{FEFF}]").unwrap_or_else(|_| panic!("Invalid heading regex"))
});

/// Trim whitespace and byte order marks from both ends of a line
#[must_use]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineKind {
    /// Line opens or closes a fenced code block
    pub fence_delimiter: bool,
    /// Line looks like a heading (fence state is not considered)
    pub heading: bool,
}

/// Check if a line opens or closes a fenced code block.
///
/// Any info string after the backticks is ignored; opening and closing
/// delimiters are indistinguishable.
#[must_use]
pub fn is_fence_delimiter(line: &str) -> bool {
    trim_line(line).starts_with(FENCE_MARKER)
}

/// Check if a line is a heading line.
#[must_use]
pub fn is_heading(line: &str) -> bool {
    HEADING_RE.is_match(trim_line(line))
}

/// Check if a line is blank (empty after trimming)
#[must_use]
pub fn is_blank(line: &str) -> bool {
    trim_line(line).is_empty()
}

/// Classify a line in one pass
#[must_use]
pub fn classify(line: &str) -> LineKind {
    LineKind {
        fence_delimiter: is_fence_delimiter(line),
        heading: is_heading(line),
    }
}
