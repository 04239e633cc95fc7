//! External tool errors
//!
//! Capabilities report a bare [`AppstrapError::ToolFailed`] or
//! [`AppstrapError::ToolLaunchFailed`]; the pipeline re-labels them with the
//! step that failed while keeping the tool's exit code.

use super::AppstrapError;

/// Creates a tool failure carrying the tool's exit status
pub fn failed(program: impl Into<String>, code: Option<i32>) -> AppstrapError {
    failed_with_output(program, code, "")
}

/// Creates a tool failure carrying the tool's exit status and the tail of its output
pub fn failed_with_output(
    program: impl Into<String>,
    code: Option<i32>,
    output: impl Into<String>,
) -> AppstrapError {
    AppstrapError::ToolFailed {
        program: program.into(),
        code,
        output: output.into(),
    }
}

/// Creates a tool launch error
pub fn launch_failed(program: impl Into<String>, reason: impl ToString) -> AppstrapError {
    AppstrapError::ToolLaunchFailed {
        program: program.into(),
        reason: reason.to_string(),
    }
}

/// Relabels a tool error as an environment creation failure
pub fn environment_creation_failed(path: impl Into<String>, err: &AppstrapError) -> AppstrapError {
    AppstrapError::EnvironmentCreationFailed {
        path: path.into(),
        reason: err.to_string(),
        code: err.tool_code(),
    }
}

/// Relabels a tool error as a dependency installation failure
pub fn dependency_install_failed(
    environment: impl Into<String>,
    err: &AppstrapError,
) -> AppstrapError {
    AppstrapError::DependencyInstallFailed {
        environment: environment.into(),
        reason: err.to_string(),
        code: err.tool_code(),
    }
}

/// Relabels a tool error as a bundle compilation failure
pub fn bundle_compile_failed(bundle: impl Into<String>, err: &AppstrapError) -> AppstrapError {
    AppstrapError::BundleCompileFailed {
        bundle: bundle.into(),
        reason: err.to_string(),
        code: err.tool_code(),
    }
}
