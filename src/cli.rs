//! Command-line interface for mdspacer.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Files to format; empty means scan the current directory
    pub inputs: Vec<PathBuf>,

    /// Report files that need formatting without writing them
    pub check: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Additional directory names to skip during a scan
    pub exclude_dirs: Vec<String>,

    /// Additional file extensions to scan for
    pub extensions: Vec<String>,

    /// Silent mode (errors only)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("mdspacer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ensures every markdown heading is followed by a blank line")
        .after_help(
            "With no FILE arguments, every .md and .mdx file under the current directory \
             is formatted, skipping node_modules, .git, .next and out.",
        )
        .arg(
            Arg::new("inputs")
                .help("Markdown files to format (default: scan the current directory)")
                .value_name("FILE")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Report files that need formatting without modifying them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/directories matching pattern when scanning (glob syntax, can be repeated)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude-dir")
                .long("exclude-dir")
                .help("Additional directory name to skip when scanning (can be repeated)")
                .value_name("NAME")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("ext")
                .short('x')
                .long("ext")
                .help("Additional file extension to scan for (can be repeated, e.g., -x markdown)")
                .value_name("EXT")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config and skipped paths)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (only errors are printed)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

fn strings(matches: &clap::ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        inputs: matches
            .get_many::<PathBuf>("inputs")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        check: matches.get_flag("check"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        exclude: strings(matches, "exclude"),
        exclude_dirs: strings(matches, "exclude-dir"),
        extensions: strings(matches, "ext"),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}
