//! Dependency installation

use std::path::{Path, PathBuf};

use super::{Degradation, Outcome, Step};
use crate::config::layout::environment_pip;
use crate::error::{Result, tool};
use crate::toolchain::PackageInstaller;

/// Where the installed packages came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    Manifest(PathBuf),
    Fallback(Vec<String>),
}

impl InstallSource {
    pub fn describe(&self) -> String {
        match self {
            InstallSource::Manifest(path) => format!("Installed packages from {}", path.display()),
            InstallSource::Fallback(packages) => {
                format!("Installed fallback packages: {}", packages.join(", "))
            }
        }
    }
}

/// Install dependencies into `environment`
///
/// With a manifest, pip upgrades itself first (best-effort) and then installs
/// the manifest. Without one, the fallback packages are installed. A failure
/// of the actual install is fatal.
pub fn install_dependencies(
    installer: &dyn PackageInstaller,
    environment: &Path,
    manifest: &Path,
    fallback: &[String],
) -> Result<Outcome<InstallSource>> {
    let pip = environment_pip(environment);
    let fail = |e| tool::dependency_install_failed(environment.display().to_string(), &e);
    let mut degradations = Vec::new();

    if manifest.is_file() {
        if let Err(e) = installer.upgrade_installer(&pip) {
            degradations.push(Degradation::new(
                Step::Dependencies,
                format!("Could not upgrade pip, continuing with the bundled version: {e}"),
            ));
        }
        installer.install_manifest(&pip, manifest).map_err(fail)?;
        return Ok(Outcome::degraded(
            InstallSource::Manifest(manifest.to_path_buf()),
            degradations,
        ));
    }

    let packages: Vec<String> = fallback
        .iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    installer.install_packages(&pip, &packages).map_err(fail)?;

    let manifest_name = match manifest.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => manifest.display().to_string(),
    };
    degradations.push(Degradation::new(
        Step::Dependencies,
        format!(
            "{manifest_name} not found; installed {} only. \
             Install anything else manually with '{} install <package>'",
            packages.join(", "),
            pip.display()
        ),
    ));
    let source = InstallSource::Fallback(packages);
    Ok(Outcome::degraded(source, degradations))
}
