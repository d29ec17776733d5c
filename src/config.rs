//! Configuration management for mdspacer.
//!
//! The formatting rules themselves are fixed; configuration only controls
//! which files a directory scan picks up. The built-in excluded directories
//! can be added to but never removed. Settings come from:
//! - TOML files (`mdspacer.toml`)
//! - CLI arguments (which extend file settings)
//!
//! Config files are auto-discovered in the user's home directory and in every
//! ancestor of the starting directory, least specific first.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["mdspacer.toml"];

/// File extensions picked up by a directory scan
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Directory names never entered by a directory scan
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["node_modules", ".git", ".next", "out"];

/// Home directory used for the user-wide `mdspacer.toml`
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(ToString::to_string).collect()
}

/// Main configuration struct for mdspacer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extensions matched case-insensitively, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names skipped during a scan (exact match); always a
    /// superset of [`DEFAULT_EXCLUDE_DIRS`]
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Glob patterns for files skipped during a scan
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Partial config used for merging multiple config files.
/// All fields are Optional so we can tell "not set" from "set to default".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    extensions: Option<Vec<String>>,
    exclude_dirs: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            exclude: Vec::new(),
        }
    }
}

/// Strip a leading dot and lowercase an extension
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}

impl Config {
    /// Validate configuration values
    ///
    /// Returns `None` if valid, or `Some(error_message)` if invalid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.extensions.is_empty() {
            return Some("extensions must not be empty".to_string());
        }
        if self
            .extensions
            .iter()
            .any(|ext| normalize_extension(ext).is_empty())
        {
            return Some("extensions must not contain empty values".to_string());
        }
        if self.exclude_dirs.iter().any(String::is_empty) {
            return Some("exclude_dirs must not contain empty names".to_string());
        }
        if let Some(bad) = self
            .exclude
            .iter()
            .find(|pattern| glob::Pattern::new(pattern).is_err())
        {
            return Some(format!("invalid exclude pattern: {bad}"));
        }
        None
    }

    /// Add extensions, skipping ones already present
    pub fn add_extensions<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            if !self
                .extensions
                .iter()
                .any(|known| normalize_extension(known) == ext)
            {
                self.extensions.push(ext);
            }
        }
    }

    /// Add excluded directory names, skipping ones already present
    pub fn add_exclude_dirs<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if !self.exclude_dirs.iter().any(|known| known == name) {
                self.exclude_dirs.push(name.to_string());
            }
        }
    }

    /// Render the configuration as TOML (used for debug output)
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set.
    ///
    /// `exclude_dirs` extends the current list instead of replacing it.
    fn apply_partial(&mut self, partial: PartialConfig) {
        if let Some(v) = partial.extensions {
            self.extensions = v.iter().map(|ext| normalize_extension(ext)).collect();
        }
        if let Some(v) = partial.exclude_dirs {
            self.add_exclude_dirs(v);
        }
        if let Some(v) = partial.exclude {
            self.exclude = v;
        }
    }

    /// Discover config files for a starting directory
    ///
    /// Returns config file paths in order of priority (least specific first):
    /// the home directory, then ancestors from the root down to `start_dir`.
    #[must_use]
    pub fn discover_config_files(start_dir: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let mut ancestors: Vec<&Path> = start_dir.ancestors().collect();
        ancestors.reverse();

        for ancestor in ancestors {
            for config_name in CONFIG_FILE_NAMES {
                let config_path = ancestor.join(config_name);
                if config_path.is_file() && !config_files.contains(&config_path) {
                    config_files.push(config_path);
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Unreadable or malformed files are reported and skipped.
    #[must_use]
    pub fn from_discovered_files(start_dir: &Path) -> Self {
        let mut config = Self::default();
        for path in Self::discover_config_files(start_dir) {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extensions, vec!["md", "mdx"]);
        assert_eq!(
            config.exclude_dirs,
            vec!["node_modules", ".git", ".next", "out"]
        );
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".md"), "md");
        assert_eq!(normalize_extension("MDX"), "mdx");
        assert_eq!(normalize_extension(".Markdown"), "markdown");
    }

    #[test]
    fn test_add_extensions_deduplicates() {
        let mut config = Config::default();
        config.add_extensions([".MD", "markdown", ".markdown"]);
        assert_eq!(config.extensions, vec!["md", "mdx", "markdown"]);
    }

    #[test]
    fn test_config_apply_partial() {
        let mut base = Config::default();
        let partial = PartialConfig {
            extensions: Some(vec![".Markdown".to_string()]),
            ..Default::default()
        };

        base.apply_partial(partial);
        assert_eq!(base.extensions, vec!["markdown"]);
        // Other fields should remain at defaults
        assert_eq!(base.exclude_dirs.len(), 4);
        assert!(base.exclude.is_empty());
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config::default();
        base.exclude.push("drafts/*".to_string());

        let partial = PartialConfig {
            exclude_dirs: Some(vec!["vendor".to_string()]),
            ..Default::default()
        };

        base.apply_partial(partial);
        assert_eq!(base.exclude, vec!["drafts/*"]);
        assert_eq!(
            base.exclude_dirs,
            vec!["node_modules", ".git", ".next", "out", "vendor"]
        );
    }

    #[test]
    fn test_partial_from_toml() {
        let partial: PartialConfig = toml::from_str(
            r#"
            extensions = ["md"]
            exclude = ["CHANGELOG.md"]
            "#,
        )
        .unwrap();
        assert_eq!(partial.extensions, Some(vec!["md".to_string()]));
        assert_eq!(partial.exclude, Some(vec!["CHANGELOG.md".to_string()]));
        assert!(partial.exclude_dirs.is_none());
    }

    #[test]
    fn test_partial_rejects_unknown_keys() {
        assert!(toml::from_str::<PartialConfig>("indent = 4").is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdspacer.toml");
        std::fs::write(&path, "exclude_dirs = [\"build\"]\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert_eq!(
            config.exclude_dirs,
            vec!["node_modules", ".git", ".next", "out", "build"]
        );
        assert_eq!(config.extensions, vec!["md", "mdx"]);
    }

    #[test]
    fn test_from_toml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_toml_file(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_discover_nested_overrides_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(
            dir.path().join("mdspacer.toml"),
            "extensions = [\"md\"]\nexclude = [\"a.md\"]\n",
        )
        .unwrap();
        std::fs::write(nested.join("mdspacer.toml"), "exclude = [\"b.md\"]\n").unwrap();

        let files = Config::discover_config_files(&nested);
        let parent_pos = files
            .iter()
            .position(|p| p == &dir.path().join("mdspacer.toml"))
            .unwrap();
        let nested_pos = files
            .iter()
            .position(|p| p == &nested.join("mdspacer.toml"))
            .unwrap();
        assert!(parent_pos < nested_pos);

        let config = Config::from_discovered_files(&nested);
        assert_eq!(config.extensions, vec!["md"]);
        assert_eq!(config.exclude, vec!["b.md"]);
    }

    #[test]
    fn test_config_file_cannot_drop_default_exclude_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdspacer.toml");
        std::fs::write(&path, "exclude_dirs = []\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        for name in DEFAULT_EXCLUDE_DIRS {
            assert!(config.exclude_dirs.iter().any(|d| d == name), "{name} dropped");
        }
    }

    #[test]
    fn test_add_exclude_dirs_deduplicates() {
        let mut config = Config::default();
        config.add_exclude_dirs(["target", ".git", "target"]);
        assert_eq!(
            config.exclude_dirs,
            vec!["node_modules", ".git", ".next", "out", "target"]
        );
    }

    #[test]
    fn test_to_toml_string() {
        let rendered = Config::default().to_toml_string().unwrap();
        assert!(rendered.contains("extensions = [\"md\", \"mdx\"]"));
        assert!(rendered.contains("node_modules"));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(Config::default().validate().is_none());
    }

    #[test]
    fn test_validate_empty_extensions() {
        let config = Config {
            extensions: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("extensions"));
    }

    #[test]
    fn test_validate_blank_extension() {
        let config = Config {
            extensions: vec![".".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_validate_empty_dir_name() {
        let config = Config {
            exclude_dirs: vec![String::new()],
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("exclude_dirs"));
    }

    #[test]
    fn test_validate_bad_pattern() {
        let config = Config {
            exclude: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("pattern"));
    }
}
