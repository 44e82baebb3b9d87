//! Registry entries derived from skill and level names
//!
//! Each registry has its own formatting rules. The anchors below match the
//! hand-authored layout of the host project's files byte for byte, so they are
//! kept as literals rather than patterns.

use regex::Regex;

use crate::patch::Patch;

/// Closes the `packages=[...]` list in the setup file
const PACKAGES_ANCHOR: &str = "    ],\n    package_data";
/// Closes the `package_data={...}` dict in the setup file
const PACKAGE_DATA_ANCHOR: &str = "    },\n    python_requires";
/// Glob registered as package data for every skill
const LEVEL_DATA_GLOB: &str = "['_*/*']";
/// Closes the list aggregating all skills in the skill index
const SKILL_LIST_ANCHOR: &str = "\n]";
/// Closes the level list in a skill module
const LEVEL_LIST_ANCHOR: &str = "\n    ]";

const IDENTIFIER: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Naming conventions of a host project, keyed by its top-level package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    package: String,
}

impl Conventions {
    /// Conventions for the package named `package` (e.g. `gitgud`)
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    /// Dotted module path of a skill, e.g. `gitgud.skills.rebase`
    pub fn skill_module(&self, skill: &str) -> String {
        format!("{}.skills.{}", self.package, skill)
    }

    /// Sentinel import the skill imports are inserted above
    pub fn all_skills_import(&self) -> String {
        format!("\nfrom {}.skills.util import AllSkills", self.package)
    }

    /// Import every skill module needs before it can list levels
    pub fn level_import(&self) -> String {
        format!("from {}.skills.level_builder import BasicLevel\n", self.package)
    }

    /// Register a skill's package and its level data in the setup file
    pub fn package_patch(&self, skill: &str) -> Patch {
        let module = self.skill_module(skill);
        Patch::new(format!("'{module}'"))
            .splice(PACKAGES_ANCHOR, format!("        '{module}',\n"))
            .splice(
                PACKAGE_DATA_ANCHOR,
                format!("        '{module}': {LEVEL_DATA_GLOB},\n"),
            )
    }

    /// Import a skill and append it to the skill list in the skill index
    pub fn skill_index_patch(&self, skill: &str) -> Patch {
        let module = self.skill_module(skill);
        Patch::new(format!("from {module} import "))
            .splice(
                self.all_skills_import(),
                format!("from {module} import skill as {skill}_skill\n"),
            )
            .splice(SKILL_LIST_ANCHOR, format!(",\n    {skill}_skill"))
    }

    /// Append a level to the level list of a skill module
    pub fn level_patch(&self, level: &str) -> Patch {
        Patch::new(format!("BasicLevel('{level}', ")).splice(
            LEVEL_LIST_ANCHOR,
            format!(",\n        BasicLevel('{level}', __name__)"),
        )
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self::new("gitgud")
    }
}

/// Pattern matching names usable as-is in an import binding
pub fn identifier_pattern() -> Result<Regex, regex::Error> {
    Regex::new(IDENTIFIER)
}
