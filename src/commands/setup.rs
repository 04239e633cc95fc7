//! Setup command: full provisioning followed by bundling

use std::path::PathBuf;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::pipeline::Mode;

/// Run setup command
pub fn run(project: Option<PathBuf>, args: BuildArgs, verbose: bool) -> Result<()> {
    super::helpers::run_pipeline(project, &args, Mode::Provision, verbose)?;
    Ok(())
}
