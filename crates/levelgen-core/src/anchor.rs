//! Literal anchor lookup
//!
//! An anchor is an exact, possibly multi-line piece of text marking the closing
//! delimiter of a collection in a registry file. Matching is byte-exact; no
//! whitespace normalization is done.

use std::fmt;

/// Literal insertion anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    text: String,
}

impl Anchor {
    /// Create an anchor from its literal text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The literal text of the anchor
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset of the first occurrence in `content`
    pub fn locate(&self, content: &str) -> Option<usize> {
        content.find(&self.text)
    }

    /// Number of non-overlapping occurrences in `content`
    pub fn occurrences(&self, content: &str) -> usize {
        if self.text.is_empty() {
            return 0;
        }
        content.matches(&self.text).count()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const SETUP: &str = "packages=[\n        'gitgud.skills.basics',\n    ],\n    package_data={\n";

    #[test]
    fn test_locate_multiline_anchor() {
        let anchor = Anchor::new("    ],\n    package_data");
        let at = anchor.locate(SETUP).unwrap();
        assert!(SETUP[at..].starts_with("    ],"));
    }

    #[test]
    fn test_anchor_is_whitespace_exact() {
        let anchor = Anchor::new("  ],\n    package_data");
        // Two-space prefix is still a substring of the four-space line.
        assert!(anchor.locate(SETUP).is_some());

        let tabbed = Anchor::new("\t],\n\tpackage_data");
        assert_eq!(tabbed.locate(SETUP), None);
    }

    #[test]
    fn test_occurrences() {
        let anchor = Anchor::new("\n]");
        assert_eq!(anchor.occurrences("a = [\n]\nb = [\n]\n"), 2);
        assert_eq!(anchor.occurrences("nothing here"), 0);
        assert_eq!(Anchor::new("").occurrences("abc"), 0);
    }
}
