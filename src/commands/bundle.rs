//! Bundle command: rebuild the app against an already provisioned project

use std::path::PathBuf;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::pipeline::Mode;

/// Run bundle command
pub fn run(project: Option<PathBuf>, args: BuildArgs, verbose: bool) -> Result<()> {
    super::helpers::run_pipeline(project, &args, Mode::BundleOnly, verbose)?;
    Ok(())
}
