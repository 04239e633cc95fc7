//! Interpreter discovery

use std::path::PathBuf;

use super::{Degradation, Outcome, Step};
use crate::config::ProjectLayout;
use crate::config::layout::environment_python;
use crate::error::{AppstrapError, Result};
use crate::toolchain::InterpreterLocator;

/// Locate the system interpreter; absence is fatal
pub fn locate_interpreter(locator: &dyn InterpreterLocator, name: &str) -> Result<PathBuf> {
    locator
        .locate(name)
        .ok_or_else(|| AppstrapError::InterpreterNotFound {
            name: name.to_string(),
        })
}

/// Interpreter the launcher will run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterpreter {
    pub interpreter: PathBuf,
    /// Environment the interpreter belongs to, `None` for the system interpreter
    pub environment: Option<PathBuf>,
}

/// Prefer an existing isolated environment, fall back to the system interpreter
pub fn resolve_bundle_interpreter(
    layout: &ProjectLayout,
    locator: &dyn InterpreterLocator,
) -> Result<Outcome<ResolvedInterpreter>> {
    if let Some(environment) = layout.existing_environment() {
        return Ok(Outcome::clean(ResolvedInterpreter {
            interpreter: environment_python(&environment),
            environment: Some(environment),
        }));
    }

    let interpreter = locate_interpreter(locator, &layout.config.interpreter)?;
    let warning = Degradation::new(
        Step::Locate,
        format!(
            "No isolated environment found; the app will run with the system interpreter {}. \
             Run 'appstrap setup' to provision one",
            interpreter.display()
        ),
    );
    Ok(Outcome::degraded(
        ResolvedInterpreter {
            interpreter,
            environment: None,
        },
        vec![warning],
    ))
}
