//! Host tool implementations: `python -m venv`, `pip`, `osacompile`, `sips`,
//! `iconutil` and `xattr`

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{
    AttributeStripper, BundleCompiler, EnvironmentBuilder, IconConverter, InterpreterLocator,
    PackageInstaller, ToolRunner,
};
use crate::error::Result;

/// Extended attribute macOS attaches to downloaded files
pub const QUARANTINE_ATTRIBUTE: &str = "com.apple.quarantine";

/// macOS tools the bundle steps shell out to
pub const HOST_TOOLS: [&str; 4] = ["osacompile", "sips", "iconutil", "xattr"];

/// Looks executables up on PATH
pub struct PathLocator;

impl InterpreterLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// `<python> -m venv <target>`
pub struct VenvBuilder {
    runner: ToolRunner,
}

impl VenvBuilder {
    pub fn new(runner: ToolRunner) -> Self {
        Self { runner }
    }
}

impl EnvironmentBuilder for VenvBuilder {
    fn create(&self, interpreter: &Path, target: &Path) -> Result<()> {
        let mut cmd = Command::new(interpreter);
        cmd.args(["-m", "venv"]).arg(target);
        self.runner.run(cmd)
    }
}

/// `pip install ...`
pub struct PipInstaller {
    runner: ToolRunner,
}

impl PipInstaller {
    pub fn new(runner: ToolRunner) -> Self {
        Self { runner }
    }

    fn install(pip: &Path) -> Command {
        let mut cmd = Command::new(pip);
        cmd.arg("install");
        cmd
    }
}

impl PackageInstaller for PipInstaller {
    fn upgrade_installer(&self, pip: &Path) -> Result<()> {
        let mut cmd = Self::install(pip);
        cmd.args(["--upgrade", "pip"]);
        self.runner.run(cmd)
    }

    fn install_manifest(&self, pip: &Path, manifest: &Path) -> Result<()> {
        let mut cmd = Self::install(pip);
        cmd.arg("-r").arg(manifest);
        self.runner.run(cmd)
    }

    fn install_packages(&self, pip: &Path, packages: &[String]) -> Result<()> {
        let mut cmd = Self::install(pip);
        cmd.args(packages);
        self.runner.run(cmd)
    }
}

/// `osacompile -o <bundle> <launcher>`
pub struct OsaCompiler {
    runner: ToolRunner,
}

impl OsaCompiler {
    pub fn new(runner: ToolRunner) -> Self {
        Self { runner }
    }
}

impl BundleCompiler for OsaCompiler {
    fn compile(&self, launcher: &Path, bundle: &Path) -> Result<()> {
        let mut cmd = Command::new("osacompile");
        cmd.arg("-o").arg(bundle).arg(launcher);
        self.runner.run(cmd)
    }
}

/// `sips` for raster work, `iconutil` for the icon container
pub struct SipsIconConverter {
    runner: ToolRunner,
}

impl SipsIconConverter {
    pub fn new(runner: ToolRunner) -> Self {
        Self { runner }
    }
}

impl IconConverter for SipsIconConverter {
    fn normalize(&self, source: &Path, dest: &Path) -> Result<()> {
        let mut cmd = Command::new("sips");
        cmd.args(["-s", "format", "png"])
            .arg(source)
            .arg("--out")
            .arg(dest);
        self.runner.run(cmd)
    }

    fn resize(&self, source: &Path, size: u32, dest: &Path) -> Result<()> {
        let size = size.to_string();
        let mut cmd = Command::new("sips");
        cmd.args(["-z", &size, &size])
            .arg(source)
            .arg("--out")
            .arg(dest);
        self.runner.run(cmd)
    }

    fn compile(&self, iconset: &Path, dest: &Path) -> Result<()> {
        let mut cmd = Command::new("iconutil");
        cmd.args(["-c", "icns"]).arg(iconset).arg("-o").arg(dest);
        self.runner.run(cmd)
    }
}

/// `xattr -rd com.apple.quarantine <bundle>`
pub struct XattrStripper {
    runner: ToolRunner,
}

impl XattrStripper {
    pub fn new(runner: ToolRunner) -> Self {
        Self { runner }
    }
}

impl AttributeStripper for XattrStripper {
    fn strip(&self, bundle: &Path) -> Result<()> {
        let mut cmd = Command::new("xattr");
        cmd.args(["-rd", QUARANTINE_ATTRIBUTE]).arg(bundle);
        self.runner.run(cmd)
    }
}
