//! Idempotent patches over registry file content
//!
//! Everything here is a pure function from content to content. A [`Patch`]
//! carries a marker and one or more [`Splice`]s: if the marker already occurs in
//! the content the patch is a no-op, otherwise every splice inserts its entry in
//! front of its anchor. Reading and writing files is left to
//! [`RegistryFile`](crate::file::RegistryFile).

use tracing::{debug, warn};

use crate::anchor::Anchor;
use crate::error::PatchError;

/// Result of applying a patch to some content
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum PatchOutcome {
    /// The marker was already there, content left alone
    AlreadyPresent,
    /// The patched content
    Applied(String),
}

/// One entry inserted immediately before an anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Where the entry goes
    pub anchor: Anchor,
    /// Text inserted in front of the anchor
    pub entry: String,
}

impl Splice {
    /// Create a splice
    pub fn new(anchor: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            anchor: Anchor::new(anchor),
            entry: entry.into(),
        }
    }

    /// Insert the entry in front of the first occurrence of the anchor
    pub fn apply(&self, content: &str) -> Result<String, PatchError> {
        let at = self
            .anchor
            .locate(content)
            .ok_or_else(|| PatchError::AnchorNotFound {
                anchor: self.anchor.as_str().to_string(),
            })?;

        let occurrences = self.anchor.occurrences(content);
        if occurrences > 1 {
            warn!(
                "Anchor {} occurs {} times, inserting at the first one",
                self.anchor, occurrences
            );
        }

        let (head, tail) = content.split_at(at);
        let entry = strip_leading_comma(head, &self.entry);

        let mut patched = String::with_capacity(content.len() + entry.len());
        patched.push_str(head);
        patched.push_str(entry);
        patched.push_str(tail);
        Ok(patched)
    }
}

/// A set of splices guarded by one "already registered" marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    marker: String,
    splices: Vec<Splice>,
}

impl Patch {
    /// Create a patch with no splices yet
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            splices: Vec::new(),
        }
    }

    /// Add a splice; splices run in the order they were added
    pub fn splice(mut self, anchor: impl Into<String>, entry: impl Into<String>) -> Self {
        self.splices.push(Splice::new(anchor, entry));
        self
    }

    /// Whether `content` already carries this registration
    pub fn is_registered(&self, content: &str) -> bool {
        content.contains(&self.marker)
    }

    /// Apply every splice, or none if the marker is already present.
    ///
    /// Fails without producing content if any anchor is missing or if the marker
    /// does not show up in the patched content.
    pub fn apply(&self, content: &str) -> Result<PatchOutcome, PatchError> {
        if self.is_registered(content) {
            debug!("Marker {:?} already present", self.marker);
            return Ok(PatchOutcome::AlreadyPresent);
        }

        let mut patched = content.to_string();
        for splice in &self.splices {
            patched = splice.apply(&patched)?;
        }

        if !self.is_registered(&patched) {
            return Err(PatchError::MarkerMissing {
                marker: self.marker.clone(),
            });
        }

        Ok(PatchOutcome::Applied(patched))
    }
}

/// Prepend `line` unless it already occurs somewhere in `content`
pub fn prepend_once(content: &str, line: &str) -> PatchOutcome {
    if content.contains(line) {
        return PatchOutcome::AlreadyPresent;
    }
    PatchOutcome::Applied(format!("{line}{content}"))
}

/// Drop the leading comma of an entry spliced right after an opening bracket.
///
/// List entries are written as `,\n    item` so they chain after the previous
/// element; in an empty list that would leave `[,`.
fn strip_leading_comma<'a>(head: &str, entry: &'a str) -> &'a str {
    if head.ends_with('[') {
        entry.strip_prefix(',').unwrap_or(entry)
    } else {
        entry
    }
}
