//! Application bundle compilation
//!
//! The bundle is never updated in place: any previous bundle is removed and
//! the compiler writes a fresh one in a single invocation.

use std::fs;
use std::path::Path;

use super::{Degradation, Outcome, Step};
use crate::config::ProjectLayout;
use crate::error::{AppstrapError, Result, tool};
use crate::launcher::{LAUNCHER_FILE_NAME, launcher_script};
use crate::temp;
use crate::toolchain::BundleCompiler;

/// What [`build_bundle`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltBundle {
    /// A previous bundle existed and was removed
    pub replaced: bool,
}

/// Remove `bundle` if anything exists at that path
pub fn remove_stale_bundle(bundle: &Path) -> Result<bool> {
    let Ok(metadata) = fs::symlink_metadata(bundle) else {
        return Ok(false);
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(bundle)
    } else {
        fs::remove_file(bundle)
    };
    removed.map_err(|e| AppstrapError::BundleRemoveFailed {
        bundle: bundle.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(true)
}

/// Compile a fresh bundle whose launcher runs the main program with `interpreter`
pub fn build_bundle(
    compiler: &dyn BundleCompiler,
    layout: &ProjectLayout,
    interpreter: &Path,
) -> Result<Outcome<BuiltBundle>> {
    let bundle = layout.bundle();
    let replaced = remove_stale_bundle(&bundle)?;

    let scratch = temp::scratch_dir("appstrap-launcher-")?;
    let launcher = scratch.path().join(LAUNCHER_FILE_NAME);
    let main_script = layout.main_script();
    fs::write(
        &launcher,
        launcher_script(&layout.root, interpreter, &main_script),
    )
    .map_err(|e| AppstrapError::FileWriteFailed {
        path: launcher.display().to_string(),
        reason: e.to_string(),
    })?;

    let bundle_name = bundle.display().to_string();
    compiler
        .compile(&launcher, &bundle)
        .map_err(|e| tool::bundle_compile_failed(bundle_name, &e))?;

    let mut degradations = Vec::new();
    if !main_script.is_file() {
        degradations.push(Degradation::new(
            Step::Bundle,
            format!(
                "Main program {} not found; the app will not start until it exists",
                main_script.display()
            ),
        ));
    }

    Ok(Outcome::degraded(BuiltBundle { replaced }, degradations))
}
