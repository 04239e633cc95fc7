//! Isolated environment management

use std::path::Path;

use crate::error::{Result, tool};
use crate::toolchain::EnvironmentBuilder;

/// What [`ensure_environment`] found or did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentState {
    Reused,
    Created,
}

impl EnvironmentState {
    pub fn describe(self, target: &Path) -> String {
        match self {
            EnvironmentState::Reused => format!("Reusing {}", target.display()),
            EnvironmentState::Created => format!("Created {}", target.display()),
        }
    }
}

/// Make sure an environment exists at `target`
///
/// An existing directory is accepted as-is; its contents are not inspected.
pub fn ensure_environment(
    builder: &dyn EnvironmentBuilder,
    interpreter: &Path,
    target: &Path,
) -> Result<EnvironmentState> {
    if target.is_dir() {
        return Ok(EnvironmentState::Reused);
    }

    let target_name = target.display().to_string();
    builder
        .create(interpreter, target)
        .map_err(|e| tool::environment_creation_failed(target_name, &e))?;
    Ok(EnvironmentState::Created)
}
