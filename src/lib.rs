//! # Release Kit
//!
//! Filesystem and text helpers for packaging and releasing plugins in CI.
//! The library provides regex-based in-place file editing, ordered
//! template substitution, touch semantics, human-readable byte-size
//! formatting and version-tag parsing; the `relkit` binary exposes each
//! helper as a subcommand for the surrounding release pipeline.
//!
//! ## Example
//!
//! ```no_run
//! use release_kit::utils::{FileSystemUtils, TextEncoding};
//!
//! let fs_utils = FileSystemUtils::new();
//! fs_utils.replace_in_file(
//!     "metadata.txt",
//!     r"^version=.*$",
//!     "version=1.2.3",
//!     TextEncoding::Utf8,
//! )?;
//! # Ok::<(), release_kit::error::ReleaseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
