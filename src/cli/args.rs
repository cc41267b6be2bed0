//! Command-line argument parsing and validation

use crate::utils::TextEncoding;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release Kit - filesystem and text helpers for packaging plugin releases
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "relkit")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace every match of a pattern in a file, in place
    Replace {
        /// File to edit
        file: PathBuf,

        /// Regular expression to match, with line-anchored ^ and $
        pattern: String,

        /// Replacement text
        replacement: String,

        /// Text encoding of the file
        #[arg(long, default_value = "utf8")]
        encoding: TextEncoding,
    },

    /// Render a template file by applying ordered substitutions
    Render {
        /// Template source file
        source: PathBuf,

        /// Destination file, created or overwritten
        dest: PathBuf,

        /// Substitution as PATTERN=REPLACEMENT, applied in order
        #[arg(short = 's', long = "set", value_parser = parse_substitution)]
        substitutions: Vec<(String, String)>,
    },

    /// Ensure a file exists without truncating it
    Touch {
        /// File to touch
        path: PathBuf,

        /// Refresh access and modification times
        #[arg(long)]
        update_time: bool,

        /// Do not create missing parent directories
        #[arg(long)]
        no_create_dirs: bool,
    },

    /// Format a byte count as a human-readable size
    Size {
        /// Byte count to format
        octets: u64,
    },

    /// Parse a version tag into its semantic components
    Tag {
        /// Version tag, loosely major.minor.patch[-prerelease]
        tag: String,
    },
}

/// Parse a PATTERN=REPLACEMENT pair
fn parse_substitution(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(pattern, replacement)| (pattern.to_string(), replacement.to_string()))
        .ok_or_else(|| format!("expected PATTERN=REPLACEMENT, got '{}'", raw))
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
