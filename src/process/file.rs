//! Read-format-write for a single file.

use std::path::Path;

use anyhow::Context;

use crate::format::format_markdown;
use crate::Result;

/// How a processed file should be handled when its content changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the file in place
    #[default]
    InPlace,
    /// Report only, never write
    Check,
}

/// Result of formatting one readable file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed (and was written back unless checking)
    Formatted,
    /// Content was already formatted
    Unchanged,
}

impl FileOutcome {
    #[must_use]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Formatted)
    }
}

/// Format a file, writing it back only when the content differs.
///
/// Read errors (missing file, permissions, invalid UTF-8) and write errors
/// carry the path as context.
pub fn process_file(path: &Path, mode: WriteMode) -> Result<FileOutcome> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let formatted = format_markdown(&content);
    if formatted == content {
        return Ok(FileOutcome::Unchanged);
    }

    if mode == WriteMode::InPlace {
        std::fs::write(path, formatted)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(FileOutcome::Formatted)
}
