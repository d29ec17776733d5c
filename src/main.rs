//! mdspacer - keeps a blank line after every markdown heading

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;

use mdspacer::process::{process_files, BatchOptions, BatchSummary, FileReport};
use mdspacer::{find_markdown_files, parse_args, CliArgs, Config, Result, WalkOptions, WriteMode};

fn main() -> Result<ExitCode> {
    let args = parse_args();
    let cwd = std::env::current_dir()?;
    let config = build_config(&args, &cwd)?;

    let mode = if args.check {
        WriteMode::Check
    } else {
        WriteMode::InPlace
    };

    let summary = if args.inputs.is_empty() {
        match scan_directory(&cwd, &config, &args, mode) {
            Some(summary) => summary,
            None => return Ok(ExitCode::SUCCESS),
        }
    } else {
        let options = BatchOptions {
            mode,
            check_exists: true,
        };
        run_batch(&args.inputs, options, &args)
    };

    if !args.silent {
        println!();
        println!("{}", summary.summary_line(mode));
    }
    if args.debug {
        eprintln!("[DEBUG] {summary}");
    }

    // Per-file failures never change the exit status; only --check does
    if mode == WriteMode::Check && summary.changed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Build configuration from an explicit config file or auto-discovery, then
/// apply CLI overrides
fn build_config(args: &CliArgs, cwd: &Path) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?
    } else {
        if args.debug {
            let discovered = Config::discover_config_files(cwd);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered");
            } else {
                eprintln!("[DEBUG] Discovered config files:");
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(cwd)
    };

    config.add_extensions(&args.extensions);
    config.add_exclude_dirs(&args.exclude_dirs);
    config.exclude.extend(args.exclude.iter().cloned());

    if args.debug {
        eprintln!("[DEBUG] Configuration:");
        for line in config.to_toml_string()?.lines() {
            eprintln!("[DEBUG]   {line}");
        }
    }

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Format every markdown file under `root`.
///
/// Returns `None` when nothing was found.
fn scan_directory(
    root: &Path,
    config: &Config,
    args: &CliArgs,
    mode: WriteMode,
) -> Option<BatchSummary> {
    let mut walk_options = WalkOptions::from_config(config);
    walk_options.debug = args.debug;

    let files = find_markdown_files(root, &walk_options);
    if files.is_empty() {
        if !args.silent {
            println!("No markdown files found.");
        }
        return None;
    }

    if !args.silent {
        println!("Found {} markdown file(s):", files.len());
    }

    let options = BatchOptions {
        mode,
        check_exists: false,
    };
    Some(run_batch(&files, options, args))
}

/// Process files in order, printing a status line for each
fn run_batch(files: &[PathBuf], options: BatchOptions, args: &CliArgs) -> BatchSummary {
    process_files(files, options, |report| print_report(report, options.mode, args))
}

fn print_report(report: &FileReport, mode: WriteMode, args: &CliArgs) {
    let line = report.status_line(mode);
    if report.is_error() {
        eprintln!("{line}");
    } else if !args.silent {
        println!("{line}");
    }
}
