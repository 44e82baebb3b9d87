use levelgen_core::ProjectLayout;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project-local config file, looked up in the working directory
const LOCAL_CONFIG: &str = "levelgen.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Top-level package directory of the host project
    pub package: String,
    /// Package manifest, relative to the project root
    pub setup_file: PathBuf,
    /// Template directory, relative to the project root
    pub templates_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            package: "gitgud".to_string(),
            setup_file: PathBuf::from("setup.py"),
            templates_dir: PathBuf::from("level_file_templates"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Optional global config: <config_dir>/levelgen/levelgen.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("levelgen").join(LOCAL_CONFIG))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config (optional, never created)
    /// 3. Local override: <root>/levelgen.toml (optional)
    /// 4. Environment variables with LEVELGEN__ prefix (highest priority)
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = config::Config::builder();

        if let Some(global) = Self::global_config_path() {
            config_builder = config_builder.add_source(config::File::from(global).required(false));
        }

        let config = config_builder
            .add_source(config::File::from(root.join(LOCAL_CONFIG)).required(false))
            .add_source(config::Environment::with_prefix("LEVELGEN").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Project layout rooted at `root`
    pub fn layout(&self, root: &Path) -> ProjectLayout {
        ProjectLayout::new(root, &self.project.package)
            .with_setup_file(&self.project.setup_file)
            .with_templates_dir(&self.project.templates_dir)
    }
}
