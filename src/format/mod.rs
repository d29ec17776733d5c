//! Markdown heading formatting.
//!
//! - [`classify`]: recognizes fence delimiters, headings and blank lines
//! - [`headings`]: inserts a blank line after each heading outside code fences

pub mod classify;
pub mod headings;

pub use classify::{classify, is_blank, is_fence_delimiter, is_heading, trim_line, LineKind};
pub use headings::{format_markdown, FenceState};
