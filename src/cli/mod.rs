//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Arguments shared by setup and bundle
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;

/// Appstrap - macOS helper app bootstrapper
///
/// Provision a Python environment and package the helper into a double-clickable app.
#[derive(Parser, Debug)]
#[command(
    name = "appstrap",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bootstrap a Python helper into a double-clickable macOS app",
    long_about = "Appstrap creates an isolated Python environment for a project, installs its \
                  dependencies and compiles a launcher into a macOS application bundle with a \
                  custom icon.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appstrap setup                   \x1b[90m# Environment, dependencies and app\x1b[0m\n   \
                  appstrap bundle                  \x1b[90m# Rebuild only the app\x1b[0m\n   \
                  appstrap -p ~/capture setup      \x1b[90m# Use another project directory\x1b[0m\n   \
                  appstrap bundle --name Capture   \x1b[90m# Build Capture.app\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "APPSTRAP_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output (stream tool output)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the environment, install dependencies and build the app
    Setup(BuildArgs),

    /// Build the app with the existing environment
    Bundle(BuildArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
