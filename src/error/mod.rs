//! Error types and handling for Appstrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only fatal failures are errors. Recoverable failures are collected as
//! [`crate::pipeline::Degradation`] values and never surface here.
//!
//! Convenience constructors are grouped by error domain:
//! - [`config`]: Configuration errors
//! - [`tool`]: External tool errors

pub mod config;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Appstrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppstrapError {
    // Project errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(appstrap::project::not_found),
        help("Pass an existing directory with --project or APPSTRAP_PROJECT")
    )]
    ProjectNotFound { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(appstrap::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(appstrap::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(appstrap::config::invalid))]
    ConfigInvalid { message: String },

    // Interpreter errors
    #[error("Python interpreter '{name}' not found on PATH")]
    #[diagnostic(
        code(appstrap::interpreter::interpreter_not_found),
        help("Install the Xcode Command Line Tools with 'xcode-select --install', then run again")
    )]
    InterpreterNotFound { name: String },

    // Tool errors
    #[error("Failed to launch '{program}': {reason}")]
    #[diagnostic(code(appstrap::tool::launch_failed))]
    ToolLaunchFailed { program: String, reason: String },

    #[error("'{program}' exited with {}{}", display_code(.code), display_output(.output))]
    #[diagnostic(code(appstrap::tool::failed))]
    ToolFailed {
        program: String,
        code: Option<i32>,
        output: String,
    },

    // Pipeline step errors
    #[error("Failed to create isolated environment at {path}: {reason}")]
    #[diagnostic(
        code(appstrap::environment::creation_failed),
        help("Check that the interpreter ships the venv module and the directory is writable")
    )]
    EnvironmentCreationFailed {
        path: String,
        reason: String,
        code: Option<i32>,
    },

    #[error("Failed to install dependencies into {environment}: {reason}")]
    #[diagnostic(
        code(appstrap::deps::install_failed),
        help("Check your network connection and the package names in the requirements file")
    )]
    DependencyInstallFailed {
        environment: String,
        reason: String,
        code: Option<i32>,
    },

    #[error("Failed to compile application bundle {bundle}: {reason}")]
    #[diagnostic(code(appstrap::bundle::compile_failed))]
    BundleCompileFailed {
        bundle: String,
        reason: String,
        code: Option<i32>,
    },

    #[error("Failed to remove existing bundle {bundle}: {reason}")]
    #[diagnostic(
        code(appstrap::bundle::remove_failed),
        help("Quit the application if it is running and check the bundle permissions")
    )]
    BundleRemoveFailed { bundle: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(appstrap::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(appstrap::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appstrap::fs::io_error))]
    IoError { message: String },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn display_output(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!("\n{output}")
    }
}

impl AppstrapError {
    /// Exit code of the external tool behind this error, if any
    pub fn tool_code(&self) -> Option<i32> {
        match self {
            AppstrapError::ToolFailed { code, .. }
            | AppstrapError::EnvironmentCreationFailed { code, .. }
            | AppstrapError::DependencyInstallFailed { code, .. }
            | AppstrapError::BundleCompileFailed { code, .. } => *code,
            _ => None,
        }
    }

    /// Process exit code for this error
    ///
    /// Propagates the failing tool's own status; anything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self.tool_code() {
            Some(code) if code != 0 => code,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for AppstrapError {
    fn from(err: std::io::Error) -> Self {
        AppstrapError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppstrapError>;
