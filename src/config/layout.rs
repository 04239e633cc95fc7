//! Resolved project layout
//!
//! The project root is an explicit value; nothing below this point derives
//! paths from the process working directory.

use std::path::{Path, PathBuf};

use super::ProjectConfig;
use crate::error::{AppstrapError, Result};

/// Every path the pipeline reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub config: ProjectConfig,
}

impl ProjectLayout {
    /// Build a layout from an existing project directory
    pub fn new(root: &Path, config: ProjectConfig) -> Result<Self> {
        if !root.is_dir() {
            return Err(AppstrapError::ProjectNotFound {
                path: root.display().to_string(),
            });
        }
        config.validate()?;
        let root = dunce::canonicalize(root)?;
        Ok(Self { root, config })
    }

    /// Open a project directory, loading its optional configuration file
    ///
    /// `app_name` replaces the configured application name; a trailing
    /// `.app` is dropped.
    pub fn open(root: &Path, app_name: Option<&str>) -> Result<Self> {
        if !root.is_dir() {
            return Err(AppstrapError::ProjectNotFound {
                path: root.display().to_string(),
            });
        }
        let mut config = ProjectConfig::load(root)?;
        if let Some(name) = app_name {
            config.app_name = name.strip_suffix(".app").unwrap_or(name).to_string();
        }
        Self::new(root, config)
    }

    /// Candidate environment directories, in lookup order
    pub fn environment_candidates(&self) -> Vec<PathBuf> {
        self.config
            .environment_dirs
            .iter()
            .map(|d| self.root.join(d))
            .collect()
    }

    /// First candidate environment directory that exists
    pub fn existing_environment(&self) -> Option<PathBuf> {
        let candidates = self.environment_candidates();
        candidates.into_iter().find(|p| p.is_dir())
    }

    /// Environment to reuse or, when none exists yet, to create
    pub fn environment_target(&self) -> PathBuf {
        self.existing_environment()
            .unwrap_or_else(|| self.root.join(&self.config.environment_dirs[0]))
    }

    /// Dependency manifest path (may not exist)
    pub fn requirements(&self) -> PathBuf {
        self.root.join(&self.config.requirements)
    }

    /// Icon source image path (may not exist)
    pub fn icon_source(&self) -> PathBuf {
        self.root.join(&self.config.icon)
    }

    /// Main program the launcher runs
    pub fn main_script(&self) -> PathBuf {
        self.root.join(&self.config.main_script)
    }

    /// Output application bundle
    pub fn bundle(&self) -> PathBuf {
        self.root.join(format!("{}.app", self.config.app_name))
    }

    /// Resource directory inside the bundle
    pub fn bundle_resources(&self) -> PathBuf {
        self.bundle().join("Contents").join("Resources")
    }

    /// Compiled icon container inside the bundle
    pub fn bundle_icon(&self) -> PathBuf {
        self.bundle_resources().join("applet.icns")
    }
}

/// Interpreter inside an isolated environment
pub fn environment_python(environment: &Path) -> PathBuf {
    environment.join("bin").join("python")
}

/// Package manager inside an isolated environment
pub fn environment_pip(environment: &Path) -> PathBuf {
    environment.join("bin").join("pip")
}
