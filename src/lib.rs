//! mdspacer - keeps a blank line after every markdown heading
//!
//! Rewrites markdown documents in place so each heading is followed by a
//! blank line, leaving fenced code blocks untouched.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod process;
pub mod walk;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use format::format_markdown;
pub use process::{process_file, process_files, FileOutcome, WriteMode};
pub use walk::{find_markdown_files, WalkOptions};
