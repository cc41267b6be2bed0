//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::VersionNote,
    utils::{FileSystemUtils, format_octets},
};
use anyhow::Context;
use std::path::Path;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Replace {
            file,
            pattern,
            replacement,
            ..
        } => execute_replace_command(config, file, pattern, replacement),
        Command::Render {
            source,
            dest,
            substitutions,
        } => execute_render_command(source, dest, substitutions),
        Command::Touch {
            path,
            update_time,
            no_create_dirs,
        } => execute_touch_command(path, *update_time, !*no_create_dirs),
        Command::Size { octets } => execute_size_command(*octets),
        Command::Tag { tag } => execute_tag_command(tag),
    }
}

/// Execute the replace command
#[instrument(skip(config))]
fn execute_replace_command(
    config: &Config,
    file: &Path,
    pattern: &str,
    replacement: &str,
) -> anyhow::Result<()> {
    info!("Editing {} in place...", file.display());

    let fs_utils = FileSystemUtils::new();
    fs_utils
        .replace_in_file(file, pattern, replacement, config.encoding)
        .context("Failed to edit file")?;

    info!("File edited successfully");
    Ok(())
}

/// Execute the render command
#[instrument]
fn execute_render_command(
    source: &Path,
    dest: &Path,
    substitutions: &[(String, String)],
) -> anyhow::Result<()> {
    info!(
        "Rendering template {} -> {}...",
        source.display(),
        dest.display()
    );

    let fs_utils = FileSystemUtils::new();
    fs_utils
        .configure_file(source, dest, substitutions)
        .context("Failed to render template")?;

    info!("Template rendered successfully");
    Ok(())
}

/// Execute the touch command
#[instrument]
fn execute_touch_command(path: &Path, update_time: bool, create_dirs: bool) -> anyhow::Result<()> {
    let fs_utils = FileSystemUtils::new();
    fs_utils
        .touch(path, update_time, create_dirs)
        .context("Failed to touch file")?;

    info!("Touched {}", path.display());
    Ok(())
}

/// Execute the size command
#[instrument]
fn execute_size_command(octets: u64) -> anyhow::Result<()> {
    let formatted = format_octets(octets).context("Failed to format size")?;
    println!("{}", formatted);
    Ok(())
}

/// Execute the tag command
#[instrument]
fn execute_tag_command(tag: &str) -> anyhow::Result<()> {
    match VersionNote::parse_tag(tag) {
        Some(note) => {
            println!("{}", note);
            Ok(())
        }
        None => anyhow::bail!("Tag '{}' does not contain a major.minor.patch version", tag),
    }
}
