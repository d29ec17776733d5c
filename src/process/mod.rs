//! File processing.
//!
//! - [`file`]: reads one file, formats it, and writes it back when it changed
//! - [`batch`]: runs a list of files in order, containing failures per file
//!   and tallying how many were changed
//!
//! The entry points are [`process_file`] for a single path and
//! [`process_files`] for a batch.

pub mod batch;
pub mod file;

pub use batch::{
    process_files, process_one, BatchOptions, BatchSummary, FileReport, FileStatus,
};
pub use file::{process_file, FileOutcome, WriteMode};
