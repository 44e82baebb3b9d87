//! Error types for scaffolding and registry patching

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a pure patch over in-memory content
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    /// The insertion anchor does not occur in the content
    #[error("anchor {anchor:?} not found")]
    AnchorNotFound {
        /// Anchor text that was searched for
        anchor: String,
    },

    /// The marker is still absent after every splice was applied
    #[error("marker {marker:?} missing after patching")]
    MarkerMissing {
        /// Marker that should identify the new entry
        marker: String,
    },
}

/// Scaffolding errors, always tied to a path on disk
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project package directory is missing from the root
    #[error("'{}' not found; run from the project root", .0.display())]
    MissingProjectDir(PathBuf),

    /// A registry file the pipeline has to patch does not exist
    #[error("registry file '{}' not found", .0.display())]
    MissingRegistry(PathBuf),

    /// A template file is missing
    #[error("template '{}' not found", .0.display())]
    MissingTemplate(PathBuf),

    /// Patching a registry file failed; the file was not written
    #[error("cannot patch '{}': {source}", path.display())]
    Patch {
        /// Registry file being patched
        path: PathBuf,
        /// Underlying patch failure
        #[source]
        source: PatchError,
    },

    /// The name-check pattern failed to compile
    #[error("invalid name pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error on a specific path
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path the operation touched
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ScaffoldError>;
