//! On-disk layout of the host project

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Skill module template; `{}` is replaced with the skill name
pub const SKILL_TEMPLATE: &str = "__init__.py";
/// Test case template copied once per skill
pub const TEST_TEMPLATE: &str = "test_levels.py";
/// Files copied verbatim into every level directory
pub const LEVEL_FILES: [&str; 5] = [
    "instructions.txt",
    "goal.txt",
    "setup.spec",
    "test.spec",
    "solution.txt",
];

/// Paths of everything the pipeline reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    package: String,
    setup_file: PathBuf,
    templates_dir: PathBuf,
}

impl ProjectLayout {
    /// Layout rooted at `root` with the top-level package `package`
    pub fn new(root: impl Into<PathBuf>, package: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            package: package.into(),
            setup_file: PathBuf::from("setup.py"),
            templates_dir: PathBuf::from("level_file_templates"),
        }
    }

    /// Setup file, relative to the root
    pub fn with_setup_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.setup_file = path.into();
        self
    }

    /// Template directory, relative to the root
    pub fn with_templates_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates_dir = path.into();
        self
    }

    /// Project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Top-level package name
    pub fn package(&self) -> &str {
        &self.package
    }

    /// `<root>/<package>`
    pub fn package_dir(&self) -> PathBuf {
        self.root.join(&self.package)
    }

    /// `<root>/<package>/skills`
    pub fn skills_dir(&self) -> PathBuf {
        self.package_dir().join("skills")
    }

    /// Index module listing every skill
    pub fn skill_index(&self) -> PathBuf {
        self.skills_dir().join("__init__.py")
    }

    /// Package manifest
    pub fn setup_file(&self) -> PathBuf {
        self.root.join(&self.setup_file)
    }

    /// Directory of one skill
    pub fn skill_dir(&self, skill: &str) -> PathBuf {
        self.skills_dir().join(skill)
    }

    /// Module listing the levels of one skill
    pub fn skill_module(&self, skill: &str) -> PathBuf {
        self.skill_dir(skill).join("__init__.py")
    }

    /// Directory holding one level's content files
    pub fn level_dir(&self, skill: &str, level: &str) -> PathBuf {
        self.skill_dir(skill).join(format!("_{level}"))
    }

    /// Template directory
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(&self.templates_dir)
    }

    /// A file inside the template directory
    pub fn template(&self, name: &str) -> PathBuf {
        self.templates_dir().join(name)
    }

    /// Check that the root looks like the host project.
    ///
    /// Runs before anything is written: the package directory, the setup file,
    /// the skill index and every template must exist.
    pub fn check(&self) -> Result<()> {
        let package_dir = self.package_dir();
        if !package_dir.is_dir() {
            return Err(ScaffoldError::MissingProjectDir(package_dir));
        }

        for registry in [self.setup_file(), self.skill_index()] {
            if !registry.is_file() {
                return Err(ScaffoldError::MissingRegistry(registry));
            }
        }

        let templates = [SKILL_TEMPLATE, TEST_TEMPLATE]
            .into_iter()
            .chain(LEVEL_FILES);
        for name in templates {
            let template = self.template(name);
            if !template.is_file() {
                return Err(ScaffoldError::MissingTemplate(template));
            }
        }

        debug!("Project layout at {} looks complete", self.root.display());
        Ok(())
    }
}
