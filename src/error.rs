//! Error types and result aliases for mdspacer.
//!
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! Per-file failures are not propagated past the batch; see
//! [`crate::process::FileStatus`].

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
