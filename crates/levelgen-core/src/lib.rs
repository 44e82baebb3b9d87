//! `levelgen` core library
//!
//! Scaffolds new skills and levels into a skill/level tree and registers them
//! in the host application's registry source files.
//!
//! ## Layers
//!
//! - [`anchor`]: locate literal insertion anchors in file content
//! - [`entry`]: synthesize the text spliced into each registry
//! - [`patch`]: apply entries exactly once, as pure functions over content
//! - [`file`]: thin read/write wrapper around a registry file
//! - [`layout`]: where everything lives relative to the project root
//! - [`pipeline`]: the ordered registration run
//!
//! Patching is string-level. Nothing here parses the host language; an entry is
//! spliced in front of a fixed anchor, and a marker substring decides whether the
//! entity is already registered.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod anchor;
pub mod entry;
pub mod error;
pub mod file;
pub mod layout;
pub mod patch;
pub mod pipeline;

pub use anchor::Anchor;
pub use entry::Conventions;
pub use error::{PatchError, Result, ScaffoldError};
pub use file::RegistryFile;
pub use layout::ProjectLayout;
pub use patch::{Patch, PatchOutcome, Splice};
pub use pipeline::{Pipeline, Report, Step};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Conventions, Pipeline, ProjectLayout, Report, ScaffoldError, Step};
}
