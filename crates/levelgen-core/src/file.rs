//! Read-modify-write wrapper for a single registry file

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::patch::{self, Patch, PatchOutcome};

/// A registry file loaded into memory
///
/// Holds the content as read plus the working copy patches are applied to.
/// Nothing reaches the disk until [`RegistryFile::save`].
#[derive(Debug, Clone)]
pub struct RegistryFile {
    path: PathBuf,
    original: String,
    content: String,
}

impl RegistryFile {
    /// Read a registry file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ScaffoldError::MissingRegistry(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        Ok(Self::from_content(path, content))
    }

    /// Wrap content that is not necessarily on disk yet
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            path: path.into(),
            original: content.clone(),
            content,
        }
    }

    /// Path the file is written back to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current working copy
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the working copy differs from what was loaded
    pub fn is_modified(&self) -> bool {
        self.content != self.original
    }

    /// Apply a patch to the working copy. Returns `true` if it changed anything.
    pub fn apply(&mut self, patch: &Patch) -> Result<bool> {
        let outcome = patch
            .apply(&self.content)
            .map_err(|source| ScaffoldError::Patch {
                path: self.path.clone(),
                source,
            })?;
        Ok(self.take(outcome))
    }

    /// Prepend `line` to the working copy unless it already occurs
    pub fn prepend_once(&mut self, line: &str) -> bool {
        let outcome = patch::prepend_once(&self.content, line);
        self.take(outcome)
    }

    /// Write the working copy back if it changed. Returns `true` if written.
    pub fn save(&mut self) -> Result<bool> {
        if !self.is_modified() {
            debug!("{} unchanged, not writing", self.path.display());
            return Ok(false);
        }
        fs::write(&self.path, &self.content).map_err(|e| ScaffoldError::io(&self.path, e))?;
        debug!("Wrote {}", self.path.display());
        self.original.clone_from(&self.content);
        Ok(true)
    }

    fn take(&mut self, outcome: PatchOutcome) -> bool {
        match outcome {
            PatchOutcome::Applied(content) => {
                self.content = content;
                true
            }
            PatchOutcome::AlreadyPresent => false,
        }
    }
}
