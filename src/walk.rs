//! Recursive discovery of markdown files.
//!
//! Only real directories are entered and only regular files are reported;
//! symbolic links are skipped entirely.

use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::config::{normalize_extension, Config, DEFAULT_EXCLUDE_DIRS};

/// Selection rules for a directory scan
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Normalized extensions (lowercase, no leading dot)
    pub extensions: Vec<String>,
    /// Directory names that are never entered
    pub exclude_dirs: Vec<String>,
    /// Files matching any of these are skipped
    pub exclude_patterns: Vec<Pattern>,
    /// Print `[DEBUG]` lines for skipped entries
    pub debug: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl WalkOptions {
    /// Build walk options from a configuration.
    ///
    /// The built-in excluded directories are always kept. Invalid glob
    /// patterns are dropped; `Config::validate` reports them.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            extensions: config
                .extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS
                .iter()
                .map(ToString::to_string)
                .chain(
                    config
                        .exclude_dirs
                        .iter()
                        .filter(|name| !DEFAULT_EXCLUDE_DIRS.contains(&name.as_str()))
                        .cloned(),
                )
                .collect(),
            exclude_patterns: config
                .exclude
                .iter()
                .filter_map(|p| Pattern::new(p).ok())
                .collect(),
            debug: false,
        }
    }

    /// Check if a file's extension is in the allow-list
    #[must_use]
    pub fn has_markdown_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            })
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.exclude_dirs.iter().any(|d| d == name))
    }
}

/// Find all markdown files under `root`.
///
/// Excluded directory names are matched exactly against each entry's base
/// name; `root` itself is always scanned. Results follow directory
/// enumeration order. Unreadable entries are reported and skipped.
#[must_use]
pub fn find_markdown_files(root: &Path, options: &WalkOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            let skip = options.is_excluded_dir(entry);
            if skip && options.debug {
                eprintln!("[DEBUG] Skipping directory: {}", entry.path().display());
            }
            !skip
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Warning: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !options.has_markdown_extension(path) {
            continue;
        }
        if is_excluded(path, root, &options.exclude_patterns) {
            if options.debug {
                eprintln!("[DEBUG] Excluded by pattern: {}", path.display());
            }
            continue;
        }
        files.push(entry.into_path());
    }

    files
}

/// Check if a path matches any exclusion pattern.
///
/// Only the part of `path` below `root` is matched, so the directories the
/// scan starts in can never exclude it. A pattern matches the relative path,
/// the file name, or any single component of the relative path.
#[must_use]
pub fn is_excluded(path: &Path, root: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative_str = relative.to_string_lossy();
    let components: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(c) => Some(c.to_string_lossy()),
            _ => None,
        })
        .collect();

    patterns.iter().any(|pattern| {
        pattern.matches(&relative_str)
            || components.iter().any(|c| pattern.matches(c))
    })
}
