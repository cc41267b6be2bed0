//! Configuration management for the release helpers
//!
//! Centralizes the options shared by the commands and validates inputs
//! before any file is modified.

use crate::{
    cli::{Args, Command},
    error::ReleaseError,
    utils::TextEncoding,
};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Text encoding used for in-place edits
    pub encoding: TextEncoding,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ReleaseError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        if let Command::Replace { encoding, .. } = &args.command {
            config.encoding = *encoding;
        }

        config.validate(&args.command)?;
        Ok(config)
    }

    /// Validate that the input files a command reads actually exist
    pub fn validate(&self, command: &Command) -> Result<(), ReleaseError> {
        match command {
            Command::Replace { file, .. } if !file.exists() => Err(ReleaseError::validation(
                format!("File not found: {}", file.display()),
            )),
            Command::Render { source, .. } if !source.exists() => Err(ReleaseError::validation(
                format!("Template source not found: {}", source.display()),
            )),
            _ => Ok(()),
        }
    }
}
