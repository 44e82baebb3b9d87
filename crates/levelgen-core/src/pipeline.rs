//! Registration pipeline
//!
//! One run registers a single level, creating and registering its skill first
//! when needed. Stages run in a fixed order and each one either does its work
//! or notes that it was already done, so running the same names twice leaves
//! the project exactly as one run did.
//!
//! Stage order:
//! 1. register the skill package in the setup file
//! 2. create the skill and level directories
//! 3. for a new skill: render its module from the template, register it in the
//!    skill index
//! 4. register the level in the skill module
//! 5. copy the test case template
//! 6. copy the level content templates

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::entry::{self, Conventions};
use crate::error::{Result, ScaffoldError};
use crate::file::RegistryFile;
use crate::layout::{ProjectLayout, LEVEL_FILES, SKILL_TEMPLATE, TEST_TEMPLATE};

/// Placeholder replaced with the skill name in the skill template
const NAME_PLACEHOLDER: &str = "{}";

/// Which registry a step touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registry {
    /// Package list in the setup file
    Package,
    /// Skill list in the skill index
    Skill,
    /// Level list in a skill module
    Level,
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Registry::Package => write!(f, "package"),
            Registry::Skill => write!(f, "skill"),
            Registry::Level => write!(f, "level"),
        }
    }
}

/// One observable outcome of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A directory or file was created
    Created(PathBuf),
    /// A directory or file was already there
    Exists(PathBuf),
    /// A new entry was added to a registry file
    Registered {
        /// Registry kind
        registry: Registry,
        /// Skill or level name
        name: String,
        /// Registry file
        path: PathBuf,
    },
    /// The registry file already had the entry
    AlreadyRegistered {
        /// Registry kind
        registry: Registry,
        /// Skill or level name
        name: String,
        /// Registry file
        path: PathBuf,
    },
}

impl Step {
    /// Whether this step changed (or would change) the project
    pub fn is_change(&self) -> bool {
        matches!(self, Step::Created(_) | Step::Registered { .. })
    }

    fn describe(&self, dry_run: bool) -> String {
        match self {
            Step::Created(path) if dry_run => format!("Would create: {}", path.display()),
            Step::Created(path) => format!("Created: {}", path.display()),
            Step::Exists(path) => format!("Exists: {}", path.display()),
            Step::Registered {
                registry,
                name,
                path,
            } => {
                let verb = if dry_run { "Would register" } else { "Registered" };
                format!("{verb} {registry} \"{name}\" in {}", path.display())
            }
            Step::AlreadyRegistered {
                registry,
                name,
                path,
            } => format!(
                "Already registered {registry} \"{name}\" in {}",
                path.display()
            ),
        }
    }
}

/// Everything a run did, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    dry_run: bool,
    steps: Vec<Step>,
}

impl Report {
    fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            steps: Vec::new(),
        }
    }

    fn push(&mut self, step: Step) {
        info!("{}", step.describe(self.dry_run));
        self.steps.push(step);
    }

    /// Steps in the order they happened
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether nothing was written to disk
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Number of steps that changed the project
    pub fn changes(&self) -> usize {
        self.steps.iter().filter(|s| s.is_change()).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step.describe(self.dry_run))?;
        }
        Ok(())
    }
}

/// Registers skills and levels into one project
#[derive(Debug, Clone)]
pub struct Pipeline {
    layout: ProjectLayout,
    conventions: Conventions,
    dry_run: bool,
}

impl Pipeline {
    /// Pipeline for a project, naming entries after the layout's package
    pub fn new(layout: ProjectLayout) -> Self {
        let conventions = Conventions::new(layout.package());
        Self {
            layout,
            conventions,
            dry_run: false,
        }
    }

    /// Plan every step without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check the project preconditions without touching anything
    pub fn check(&self) -> Result<()> {
        self.layout.check()
    }

    /// Register `level` under `skill`, creating the skill if it is new
    pub fn run(&self, skill: &str, level: &str) -> Result<Report> {
        let identifier = entry::identifier_pattern()?;
        for (kind, name) in [("Skill", skill), ("Level", level)] {
            if !identifier.is_match(name) {
                warn!(
                    "{} name '{}' is not a valid identifier, generated imports may not load",
                    kind, name
                );
            }
        }

        self.check()?;
        info!(
            "Registering level '{}' of skill '{}' in {}",
            level,
            skill,
            self.layout.root().display()
        );

        let mut report = Report::new(self.dry_run);

        self.register_package(skill, &mut report)?;

        let skill_dir = self.layout.skill_dir(skill);
        let level_dir = self.layout.level_dir(skill, level);
        self.ensure_dir(&skill_dir, &mut report)?;
        self.ensure_dir(&level_dir, &mut report)?;

        let module_path = self.layout.skill_module(skill);
        let (mut module, is_new) = if module_path.exists() {
            (RegistryFile::load(&module_path)?, false)
        } else {
            (self.register_skill(skill, &mut report)?, true)
        };

        self.register_level(&mut module, level, is_new, &mut report)?;

        self.copy_template(TEST_TEMPLATE, &skill_dir.join(TEST_TEMPLATE), &mut report)?;
        for name in LEVEL_FILES {
            self.copy_template(name, &level_dir.join(name), &mut report)?;
        }

        info!("Done, {} change(s)", report.changes());
        Ok(report)
    }

    fn register_package(&self, skill: &str, report: &mut Report) -> Result<()> {
        let mut setup = RegistryFile::load(self.layout.setup_file())?;
        let patch = self.conventions.package_patch(skill);
        let registered = setup.apply(&patch)?;
        self.save(&mut setup)?;
        report.push(registry_step(Registry::Package, skill, setup.path(), registered));
        Ok(())
    }

    /// Render the new skill module in memory and register it in the index.
    ///
    /// The module itself is written by [`Pipeline::register_level`], after the
    /// index, so an interrupted run is picked up again by the next one.
    fn register_skill(&self, skill: &str, report: &mut Report) -> Result<RegistryFile> {
        let template_path = self.layout.template(SKILL_TEMPLATE);
        let template = fs::read_to_string(&template_path)
            .map_err(|e| ScaffoldError::io(&template_path, e))?;
        let module = RegistryFile::from_content(
            self.layout.skill_module(skill),
            template.replace(NAME_PLACEHOLDER, skill),
        );

        let mut index = RegistryFile::load(self.layout.skill_index())?;
        let registered = index.apply(&self.conventions.skill_index_patch(skill))?;
        self.save(&mut index)?;
        report.push(registry_step(Registry::Skill, skill, index.path(), registered));

        Ok(module)
    }

    fn register_level(
        &self,
        module: &mut RegistryFile,
        level: &str,
        is_new: bool,
        report: &mut Report,
    ) -> Result<()> {
        if module.prepend_once(&self.conventions.level_import()) {
            debug!("Added level import to {}", module.path().display());
        }
        let registered = module.apply(&self.conventions.level_patch(level))?;

        if is_new {
            // Rendered in memory, so there is nothing on disk to diff against.
            if !self.dry_run {
                fs::write(module.path(), module.content())
                    .map_err(|e| ScaffoldError::io(module.path(), e))?;
            }
            report.push(Step::Created(module.path().to_path_buf()));
        } else {
            self.save(module)?;
        }

        report.push(registry_step(Registry::Level, level, module.path(), registered));
        Ok(())
    }

    fn ensure_dir(&self, dir: &Path, report: &mut Report) -> Result<()> {
        if dir.is_dir() {
            report.push(Step::Exists(dir.to_path_buf()));
            return Ok(());
        }
        if !self.dry_run {
            fs::create_dir_all(dir).map_err(|e| ScaffoldError::io(dir, e))?;
        }
        report.push(Step::Created(dir.to_path_buf()));
        Ok(())
    }

    fn copy_template(&self, name: &str, dest: &Path, report: &mut Report) -> Result<()> {
        if dest.exists() {
            report.push(Step::Exists(dest.to_path_buf()));
            return Ok(());
        }
        if !self.dry_run {
            let source = self.layout.template(name);
            fs::copy(&source, dest).map_err(|e| ScaffoldError::io(&source, e))?;
        }
        report.push(Step::Created(dest.to_path_buf()));
        Ok(())
    }

    fn save(&self, file: &mut RegistryFile) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        file.save()?;
        Ok(())
    }
}

fn registry_step(registry: Registry, name: &str, path: &Path, registered: bool) -> Step {
    let (name, path) = (name.to_string(), path.to_path_buf());
    if registered {
        Step::Registered {
            registry,
            name,
            path,
        }
    } else {
        Step::AlreadyRegistered {
            registry,
            name,
            path,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_step_descriptions() {
        let created = Step::Created(PathBuf::from("a/b"));
        assert_eq!(created.describe(false), "Created: a/b");
        assert_eq!(created.describe(true), "Would create: a/b");

        let registered = Step::Registered {
            registry: Registry::Level,
            name: "interactive".into(),
            path: PathBuf::from("x/__init__.py"),
        };
        assert_eq!(
            registered.describe(false),
            "Registered level \"interactive\" in x/__init__.py"
        );
        assert!(registered.is_change());
        assert!(!Step::Exists(PathBuf::from("a")).is_change());
    }

    #[test]
    fn test_report_counts_changes() {
        let mut report = Report::new(false);
        report.push(Step::Created(PathBuf::from("a")));
        report.push(Step::Exists(PathBuf::from("b")));
        assert_eq!(report.changes(), 1);
        assert_eq!(report.to_string(), "Created: a\nExists: b\n");
    }
}
