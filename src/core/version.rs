//! Version tag parsing
//!
//! Turns version-control tags of the loose `major.minor.patch[-prerelease]`
//! form into a structured note for the release pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Structured representation of a parsed version tag
///
/// Components are kept as the raw string fragments of the tag; the
/// pipeline treats them as opaque labels rather than numbers, so
/// `"v1.2.3"` parses with `major == "v1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionNote {
    /// Major component
    pub major: String,
    /// Minor component
    pub minor: String,
    /// Patch component
    pub patch: String,
    /// Optional prerelease label
    pub prerelease: Option<String>,
}

impl VersionNote {
    /// Create a new note from the three version components
    pub fn new(
        major: impl Into<String>,
        minor: impl Into<String>,
        patch: impl Into<String>,
    ) -> Self {
        VersionNote {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            prerelease: None,
        }
    }

    /// Parse a version tag into a note.
    ///
    /// The tag is split on every `-`, and only a tag with exactly one
    /// `-` carries a prerelease label: `"1.2.3-rc1"` keeps `"rc1"`,
    /// while `"1.2.3-rc-1"` keeps its version part but loses both
    /// trailing fragments. Returns `None` when the part before the
    /// first `-` is not a full `major.minor.patch`, so a caller can
    /// tell a genuine `0.0.0` from a tag that failed to parse.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let components: Vec<&str> = tag.split('-').collect();
        let items: Vec<&str> = components[0].split('.').collect();

        if items.len() < 3 {
            debug!("Tag '{}' has no major.minor.patch part", tag);
            return None;
        }

        let prerelease = if components.len() == 2 {
            Some(components[1].to_string())
        } else {
            None
        };

        Some(VersionNote {
            major: items[0].to_string(),
            minor: items[1].to_string(),
            patch: items[2].to_string(),
            prerelease,
        })
    }

    /// Whether this note is the empty sentinel produced by `Default`
    pub fn is_empty(&self) -> bool {
        self.major.is_empty()
            && self.minor.is_empty()
            && self.patch.is_empty()
            && self.prerelease.is_none()
    }
}

impl fmt::Display for VersionNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_plain() {
        let note = VersionNote::parse_tag("1.2.3").unwrap();
        assert_eq!(note.major, "1");
        assert_eq!(note.minor, "2");
        assert_eq!(note.patch, "3");
        assert_eq!(note.prerelease, None);
    }

    #[test]
    fn test_parse_tag_with_prerelease() {
        let note = VersionNote::parse_tag("1.2.3-rc1").unwrap();
        assert_eq!(note, VersionNote {
            prerelease: Some("rc1".to_string()),
            ..VersionNote::new("1", "2", "3")
        });
    }

    #[test]
    fn test_parse_tag_malformed_returns_none() {
        assert_eq!(VersionNote::parse_tag("nightly"), None);
        assert_eq!(VersionNote::parse_tag("1.2"), None);
        assert_eq!(VersionNote::parse_tag(""), None);
    }

    #[test]
    fn test_parse_tag_second_hyphen_drops_prerelease() {
        // Splitting on every hyphen means "rc-1" is two fragments, not
        // one label, and neither survives.
        let note = VersionNote::parse_tag("1.2.3-rc-1").unwrap();
        assert_eq!(note, VersionNote::new("1", "2", "3"));
    }

    #[test]
    fn test_parse_tag_trailing_hyphen_keeps_empty_label() {
        let note = VersionNote::parse_tag("1.2.3-").unwrap();
        assert_eq!(note.prerelease, Some(String::new()));
    }

    #[test]
    fn test_parse_tag_extra_items_are_ignored() {
        let note = VersionNote::parse_tag("1.2.3.4").unwrap();
        assert_eq!(note, VersionNote::new("1", "2", "3"));
    }

    #[test]
    fn test_parse_tag_components_pass_through_unvalidated() {
        let note = VersionNote::parse_tag("v1.2.3").unwrap();
        assert_eq!(note.major, "v1");
    }

    #[test]
    fn test_parse_tag_malformed_prefix_with_prerelease() {
        assert_eq!(VersionNote::parse_tag("1.2-rc1"), None);
    }

    #[test]
    fn test_default_is_empty_sentinel() {
        assert!(VersionNote::default().is_empty());
        assert!(!VersionNote::parse_tag("1.2.3").unwrap().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionNote::parse_tag("1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(
            VersionNote::parse_tag("1.2.3-beta").unwrap().to_string(),
            "1.2.3-beta"
        );
    }
}
