//! Project configuration (appstrap.yaml)
//!
//! The file is optional and every field has a default, so a project that
//! follows the conventional layout needs no configuration at all.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Name of the optional configuration file in the project root
pub const CONFIG_FILE_NAME: &str = "appstrap.yaml";

/// Project configuration from appstrap.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Bundle name without the `.app` suffix
    pub app_name: String,

    /// Main program the launcher runs, relative to the project root
    pub main_script: String,

    /// Interpreter looked up on PATH
    pub interpreter: String,

    /// Candidate environment directories, checked in order
    pub environment_dirs: Vec<String>,

    /// Dependency manifest
    pub requirements: String,

    /// Packages installed when the manifest is missing
    pub fallback_packages: Vec<String>,

    /// Icon source image
    pub icon: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_name: "ScreenshotApp".to_string(),
            main_script: "screen_capture_app.py".to_string(),
            interpreter: "python3".to_string(),
            environment_dirs: vec!["venv".to_string(), ".venv".to_string()],
            requirements: "requirements.txt".to_string(),
            fallback_packages: vec![
                "Pillow".to_string(),
                "pyobjc-framework-Quartz".to_string(),
                "pyobjc-framework-Cocoa".to_string(),
            ],
            icon: "app_icon.png".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration from the project root, falling back to defaults
    /// when no configuration file exists
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let display = path.display().to_string();
        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| config::read_failed(&display, e))?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::AppstrapError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(display, reason)
            }
            other => other,
        })
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| config::parse_failed(CONFIG_FILE_NAME, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("app_name", &self.app_name),
            ("main_script", &self.main_script),
            ("interpreter", &self.interpreter),
            ("requirements", &self.requirements),
            ("icon", &self.icon),
        ] {
            if value.trim().is_empty() {
                return Err(config::invalid(format!("'{field}' must not be empty")));
            }
        }

        if self.app_name.contains('/') {
            return Err(config::invalid("'app_name' must not contain '/'"));
        }

        if self.environment_dirs.is_empty() {
            return Err(config::invalid(
                "'environment_dirs' must list at least one directory",
            ));
        }

        if let Some(dir) = self.environment_dirs.iter().find(|d| names_root(d)) {
            return Err(config::invalid(format!(
                "'environment_dirs' entry '{dir}' must name a directory below the project root"
            )));
        }

        if self.fallback_packages.iter().all(|p| p.trim().is_empty()) {
            return Err(config::invalid(
                "'fallback_packages' must list at least one package",
            ));
        }

        let relative_fields = self
            .environment_dirs
            .iter()
            .map(|d| ("environment_dirs", d))
            .chain([
                ("main_script", &self.main_script),
                ("requirements", &self.requirements),
                ("icon", &self.icon),
            ]);
        for (field, value) in relative_fields {
            if Path::new(value).is_absolute() {
                return Err(config::invalid(format!(
                    "'{field}' must be relative to the project root, got '{value}'"
                )));
            }
        }

        Ok(())
    }
}

/// Whether `dir` is blank or resolves to the directory it is relative to
fn names_root(dir: &str) -> bool {
    Path::new(dir.trim())
        .components()
        .all(|c| c == Component::CurDir)
}
