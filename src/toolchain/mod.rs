//! External tool capabilities
//!
//! Every operating-system tool the pipeline drives sits behind a small trait,
//! so the pipeline can run against fakes in tests. [`Toolchain::system`]
//! wires the real implementations from [`system`].

pub mod process;
pub mod system;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use process::ToolRunner;

/// Finds executables on the search path
pub trait InterpreterLocator {
    /// Absolute path of `name`, or `None` when it is not installed
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Creates isolated package environments
pub trait EnvironmentBuilder {
    fn create(&self, interpreter: &Path, target: &Path) -> Result<()>;
}

/// Installs packages with an environment's package manager
pub trait PackageInstaller {
    /// Upgrade the package manager itself
    fn upgrade_installer(&self, pip: &Path) -> Result<()>;

    /// Install everything listed in a manifest file
    fn install_manifest(&self, pip: &Path, manifest: &Path) -> Result<()>;

    /// Install the named packages
    fn install_packages(&self, pip: &Path, packages: &[String]) -> Result<()>;
}

/// Compiles a launcher script into an application bundle
pub trait BundleCompiler {
    fn compile(&self, launcher: &Path, bundle: &Path) -> Result<()>;
}

/// Raster conversion and icon container compilation
pub trait IconConverter {
    /// Convert `source` to PNG at `dest`
    fn normalize(&self, source: &Path, dest: &Path) -> Result<()>;

    /// Write a `size`x`size` copy of `source` to `dest`
    fn resize(&self, source: &Path, size: u32, dest: &Path) -> Result<()>;

    /// Compile an `.iconset` directory into an icon container at `dest`
    fn compile(&self, iconset: &Path, dest: &Path) -> Result<()>;
}

/// Removes download-provenance metadata
pub trait AttributeStripper {
    fn strip(&self, bundle: &Path) -> Result<()>;
}

/// The full set of capabilities a pipeline run needs
pub struct Toolchain {
    pub locator: Box<dyn InterpreterLocator>,
    pub environments: Box<dyn EnvironmentBuilder>,
    pub packages: Box<dyn PackageInstaller>,
    pub bundler: Box<dyn BundleCompiler>,
    pub icons: Box<dyn IconConverter>,
    pub attributes: Box<dyn AttributeStripper>,
}

impl Toolchain {
    /// Toolchain backed by the host's tools
    pub fn system(verbose: bool) -> Self {
        let runner = ToolRunner::new(verbose);
        Self {
            locator: Box::new(system::PathLocator),
            environments: Box::new(system::VenvBuilder::new(runner)),
            packages: Box::new(system::PipInstaller::new(runner)),
            bundler: Box::new(system::OsaCompiler::new(runner)),
            icons: Box::new(system::SipsIconConverter::new(runner)),
            attributes: Box::new(system::XattrStripper::new(runner)),
        }
    }
}
