//! Command helper utilities

use std::path::PathBuf;

use console::Style;

use crate::cli::BuildArgs;
use crate::config::ProjectLayout;
use crate::error::{AppstrapError, Result};
use crate::pipeline::{Mode, Pipeline, RunReport};
use crate::toolchain::Toolchain;
use crate::ui::ConsoleReporter;

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| AppstrapError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Open the project, applying command-line overrides on top of its configuration
pub fn open_layout(project: Option<PathBuf>, args: &BuildArgs) -> Result<ProjectLayout> {
    let root = resolve_project_path(project)?;
    ProjectLayout::open(&root, args.name.as_deref())
}

/// Run the pipeline in `mode` against the real system tools
pub fn run_pipeline(
    project: Option<PathBuf>,
    args: &BuildArgs,
    mode: Mode,
    verbose: bool,
) -> Result<RunReport> {
    let layout = open_layout(project, args)?;

    let bundle_name = format!("{}.app", layout.config.app_name);
    println!(
        "{} {} in {}",
        Style::new().bold().green().apply_to(header(mode)),
        Style::new().bold().apply_to(bundle_name),
        layout.root.display()
    );

    let toolchain = Toolchain::system(verbose);
    let mut reporter = ConsoleReporter::new(verbose);
    Pipeline::new(&layout, &toolchain, &mut reporter).run(mode)
}

fn header(mode: Mode) -> &'static str {
    match mode {
        Mode::Provision => "Setting up",
        Mode::BundleOnly => "Bundling",
    }
}
