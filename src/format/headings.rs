//! Blank-line enforcement after markdown headings.

use super::classify::{classify, is_blank};

/// Tracks whether the scan is inside a fenced code block
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FenceState {
    inside: bool,
}

impl FenceState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between inside and outside
    pub fn toggle(&mut self) {
        self.inside = !self.inside;
    }

    #[must_use]
    pub fn is_inside(self) -> bool {
        self.inside
    }
}

/// Format a markdown document so every heading is followed by a blank line.
///
/// Lines are split on `\n` only and joined back with `\n`, so any other line
/// ending is carried through as part of the line. Headings inside fenced code
/// blocks, headings on the last line, and headings already followed by a
/// blank line are left alone. Formatting is idempotent.
#[must_use]
pub fn format_markdown(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut output: Vec<&str> = Vec::with_capacity(lines.len());
    let mut fence = FenceState::new();

    for (idx, &line) in lines.iter().enumerate() {
        let kind = classify(line);
        if kind.fence_delimiter {
            fence.toggle();
        }

        output.push(line);

        if !fence.is_inside() && kind.heading {
            if let Some(next) = lines.get(idx + 1) {
                if !is_blank(next) {
                    output.push("");
                }
            }
        }
    }

    output.join("\n")
}
