//! File editing and touch utilities
//!
//! Provides in-place regex editing, template rendering and touch
//! semantics with proper error handling.

use crate::error::{ReleaseError, Result};
use crate::utils::encoding::TextEncoding;
use regex::{Regex, RegexBuilder};
use std::fs::{self, FileTimes, OpenOptions};
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, instrument, warn};

/// Utility struct for text file operations
#[derive(Debug, Default)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Replace every match of `pattern` in the file at `path`, in place.
    ///
    /// The pattern is matched in multiline mode, so `^` and `$` anchor at
    /// line boundaries. The file is read and written back under
    /// `encoding`; a file that cannot be decoded is logged as a warning
    /// and left untouched, while any other failure propagates.
    #[instrument(skip(self, replacement))]
    pub fn replace_in_file<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
        pattern: &str,
        replacement: &str,
        encoding: TextEncoding,
    ) -> Result<()> {
        let path = path.as_ref();

        debug!("Editing file in place: {}", path.display());

        let bytes =
            fs::read(path).map_err(|e| ReleaseError::file_system("read", path.to_path_buf(), e))?;

        let content = match encoding.decode(&bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!("{}:{}", path.display(), e);
                return Ok(());
            }
        };

        let re = compile_multiline(pattern)?;
        let edited = re.replace_all(&content, replacement);

        let encoded = encoding
            .encode(&edited)
            .map_err(|e| ReleaseError::encoding(e.to_string(), path.to_path_buf()))?;
        fs::write(path, encoded)
            .map_err(|e| ReleaseError::file_system("write", path.to_path_buf(), e))?;

        debug!("File edited successfully");
        Ok(())
    }

    /// Render a template by applying ordered `(pattern, replacement)`
    /// pairs to `source` and writing the result to `dest`.
    ///
    /// Substitutions compose sequentially: each pair matches in
    /// multiline mode against the output of the previous one. Both ends
    /// are strict UTF-8 and every failure propagates. `dest` is created
    /// if absent, overwritten if present, and may equal `source`.
    #[instrument(skip(self, substitutions))]
    pub fn configure_file<P, Q, S, R>(
        &self,
        source: P,
        dest: Q,
        substitutions: &[(S, R)],
    ) -> Result<()>
    where
        P: AsRef<Path> + std::fmt::Debug,
        Q: AsRef<Path> + std::fmt::Debug,
        S: AsRef<str>,
        R: AsRef<str>,
    {
        let source = source.as_ref();
        let dest = dest.as_ref();

        debug!(
            "Rendering template: {} -> {}",
            source.display(),
            dest.display()
        );

        let mut content = fs::read_to_string(source)
            .map_err(|e| ReleaseError::file_system("read", source.to_path_buf(), e))?;

        for (pattern, replacement) in substitutions {
            let re = compile_multiline(pattern.as_ref())?;
            content = re.replace_all(&content, replacement.as_ref()).into_owned();
        }

        fs::write(dest, content)
            .map_err(|e| ReleaseError::file_system("write", dest.to_path_buf(), e))?;

        debug!("Template rendered successfully");
        Ok(())
    }

    /// Ensure the file at `path` exists without truncating it.
    ///
    /// Missing parent directories are created when `create_dirs` is set.
    /// When `update_time` is set, the access and modification times of an
    /// existing file are refreshed to the current time; otherwise they
    /// are left alone.
    #[instrument(skip(self))]
    pub fn touch<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
        update_time: bool,
        create_dirs: bool,
    ) -> Result<()> {
        let path = path.as_ref();

        debug!("Touching file: {}", path.display());

        if create_dirs {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(|e| {
                        ReleaseError::file_system("create directory", parent.to_path_buf(), e)
                    })?;
                }
            }
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| ReleaseError::file_system("open", path.to_path_buf(), e))?;

        if update_time {
            let now = SystemTime::now();
            file.set_times(FileTimes::new().set_accessed(now).set_modified(now))
                .map_err(|e| ReleaseError::file_system("set times", path.to_path_buf(), e))?;
        }

        Ok(())
    }
}

fn compile_multiline(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map_err(|e| ReleaseError::pattern(pattern, e))
}
