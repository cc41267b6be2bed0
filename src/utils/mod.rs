//! Utility modules for common functionality
//!
//! Provides reusable utilities for file editing, touch semantics, text
//! encodings and size formatting.

pub mod encoding;
pub mod format;
pub mod fs;

pub use encoding::TextEncoding;
pub use format::format_octets;
pub use fs::FileSystemUtils;
