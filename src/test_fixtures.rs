//! Test fixtures: fake toolchain capabilities and a recording reporter.
//!
//! Every fake appends a one-line description of each call to a shared
//! [`CallLog`], so tests can assert which tools a run invoked and in what
//! order. Fakes that succeed produce the same files the real tool would leave
//! behind, enough for the next pipeline step to proceed.
//!
//! # Usage
//!
//! ```ignore
//! let log = CallLog::default();
//! let mut tools = FakeTools::new(&log);
//! tools.attributes = FakeAttributeStripper::failing(&log);
//! let toolchain = tools.into_toolchain();
//! ```

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Result, tool};
use crate::pipeline::RunReport;
use crate::toolchain::{
    AttributeStripper, BundleCompiler, EnvironmentBuilder, IconConverter, InterpreterLocator,
    PackageInstaller, Toolchain,
};
use crate::ui::Reporter;

/// Shared, ordered record of fake tool invocations
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn record(&self, call: impl Into<String>) {
        self.0.borrow_mut().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Number of calls containing `pattern`
    pub fn count(&self, pattern: &str) -> usize {
        let calls = self.0.borrow();
        calls.iter().filter(|c| c.contains(pattern)).count()
    }
}

fn fail_if(program: &str, code: Option<i32>) -> Result<()> {
    match code {
        Some(code) => Err(tool::failed(program, Some(code))),
        None => Ok(()),
    }
}

pub struct FakeLocator {
    path: Option<PathBuf>,
}

impl FakeLocator {
    pub fn found(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn missing() -> Self {
        Self { path: None }
    }
}

impl InterpreterLocator for FakeLocator {
    fn locate(&self, _name: &str) -> Option<PathBuf> {
        self.path.clone()
    }
}

pub struct FakeEnvironmentBuilder {
    log: CallLog,
    fail: Option<i32>,
}

impl FakeEnvironmentBuilder {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail: None,
        }
    }

    pub fn failing(log: &CallLog, code: i32) -> Self {
        Self {
            log: log.clone(),
            fail: Some(code),
        }
    }
}

impl EnvironmentBuilder for FakeEnvironmentBuilder {
    fn create(&self, _interpreter: &Path, target: &Path) -> Result<()> {
        self.log.record(format!("venv {}", target.display()));
        fail_if("python3", self.fail)?;
        let bin = target.join("bin");
        fs::create_dir_all(&bin)?;
        fs::write(bin.join("python"), "")?;
        fs::write(bin.join("pip"), "")?;
        Ok(())
    }
}

pub struct FakePackageInstaller {
    log: CallLog,
    fail_upgrade: bool,
    fail_install: Option<i32>,
}

impl FakePackageInstaller {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail_upgrade: false,
            fail_install: None,
        }
    }

    pub fn failing_upgrade(mut self) -> Self {
        self.fail_upgrade = true;
        self
    }

    pub fn failing_install(mut self, code: i32) -> Self {
        self.fail_install = Some(code);
        self
    }
}

impl PackageInstaller for FakePackageInstaller {
    fn upgrade_installer(&self, _pip: &Path) -> Result<()> {
        self.log.record("pip upgrade");
        fail_if("pip", self.fail_upgrade.then_some(1))
    }

    fn install_manifest(&self, _pip: &Path, manifest: &Path) -> Result<()> {
        self.log
            .record(format!("pip install -r {}", manifest.display()));
        fail_if("pip", self.fail_install)
    }

    fn install_packages(&self, _pip: &Path, packages: &[String]) -> Result<()> {
        self.log.record(format!("pip install {}", packages.join(" ")));
        fail_if("pip", self.fail_install)
    }
}

pub struct FakeBundleCompiler {
    log: CallLog,
    fail: Option<i32>,
    last_launcher: RefCell<Option<PathBuf>>,
}

impl FakeBundleCompiler {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail: None,
            last_launcher: RefCell::new(None),
        }
    }

    pub fn failing(log: &CallLog, code: i32) -> Self {
        Self {
            fail: Some(code),
            ..Self::new(log)
        }
    }

    /// Launcher script path handed to the last compile call
    pub fn last_launcher(&self) -> Option<PathBuf> {
        self.last_launcher.borrow().clone()
    }
}

impl BundleCompiler for FakeBundleCompiler {
    fn compile(&self, launcher: &Path, bundle: &Path) -> Result<()> {
        self.log.record(format!("osacompile {}", bundle.display()));
        *self.last_launcher.borrow_mut() = Some(launcher.to_path_buf());
        fail_if("osacompile", self.fail)?;

        let resources = bundle.join("Contents").join("Resources");
        fs::create_dir_all(&resources)?;
        fs::create_dir_all(bundle.join("Contents").join("MacOS"))?;
        fs::write(bundle.join("Contents").join("MacOS").join("applet"), "")?;
        fs::copy(launcher, resources.join("launcher.applescript"))?;
        fs::write(resources.join("applet.icns"), "default icon")?;
        Ok(())
    }
}

pub struct FakeIconConverter {
    log: CallLog,
    fail_normalize: bool,
    fail_sizes: Vec<u32>,
    fail_compile: bool,
    last_iconset: RefCell<Option<PathBuf>>,
}

impl FakeIconConverter {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail_normalize: false,
            fail_sizes: Vec::new(),
            fail_compile: false,
            last_iconset: RefCell::new(None),
        }
    }

    pub fn failing_normalize(mut self) -> Self {
        self.fail_normalize = true;
        self
    }

    pub fn failing_sizes(mut self, sizes: &[u32]) -> Self {
        self.fail_sizes.extend_from_slice(sizes);
        self
    }

    pub fn failing_compile(mut self) -> Self {
        self.fail_compile = true;
        self
    }

    /// Iconset directory handed to the last compile call
    pub fn last_iconset(&self) -> Option<PathBuf> {
        self.last_iconset.borrow().clone()
    }
}

impl IconConverter for FakeIconConverter {
    fn normalize(&self, source: &Path, dest: &Path) -> Result<()> {
        self.log.record("sips normalize");
        fail_if("sips", self.fail_normalize.then_some(1))?;
        fs::copy(source, dest)?;
        Ok(())
    }

    fn resize(&self, _source: &Path, size: u32, dest: &Path) -> Result<()> {
        self.log.record(format!("sips resize {size}"));
        fail_if("sips", self.fail_sizes.contains(&size).then_some(1))?;
        fs::write(dest, format!("{size}px"))?;
        Ok(())
    }

    fn compile(&self, iconset: &Path, dest: &Path) -> Result<()> {
        self.log.record("iconutil compile");
        *self.last_iconset.borrow_mut() = Some(iconset.to_path_buf());
        fail_if("iconutil", self.fail_compile.then_some(1))?;
        fs::write(dest, "icns")?;
        Ok(())
    }
}

pub struct FakeAttributeStripper {
    log: CallLog,
    fail: bool,
}

impl FakeAttributeStripper {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail: false,
        }
    }

    pub fn failing(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail: true,
        }
    }
}

impl AttributeStripper for FakeAttributeStripper {
    fn strip(&self, bundle: &Path) -> Result<()> {
        self.log.record(format!("xattr {}", bundle.display()));
        fail_if("xattr", self.fail.then_some(1))
    }
}

/// A complete set of fakes, each replaceable before building the toolchain
pub struct FakeTools {
    pub locator: FakeLocator,
    pub environments: FakeEnvironmentBuilder,
    pub packages: FakePackageInstaller,
    pub bundler: FakeBundleCompiler,
    pub icons: FakeIconConverter,
    pub attributes: FakeAttributeStripper,
}

impl FakeTools {
    /// Fakes that all succeed, with `python3` at /usr/bin/python3
    pub fn new(log: &CallLog) -> Self {
        Self {
            locator: FakeLocator::found("/usr/bin/python3"),
            environments: FakeEnvironmentBuilder::new(log),
            packages: FakePackageInstaller::new(log),
            bundler: FakeBundleCompiler::new(log),
            icons: FakeIconConverter::new(log),
            attributes: FakeAttributeStripper::new(log),
        }
    }

    pub fn into_toolchain(self) -> Toolchain {
        Toolchain {
            locator: Box::new(self.locator),
            environments: Box::new(self.environments),
            packages: Box::new(self.packages),
            bundler: Box::new(self.bundler),
            icons: Box::new(self.icons),
            attributes: Box::new(self.attributes),
        }
    }
}

/// Reporter that records every event as a line of text
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

impl RecordingReporter {
    pub fn count(&self, prefix: &str) -> usize {
        self.events.iter().filter(|e| e.starts_with(prefix)).count()
    }
}

impl Reporter for RecordingReporter {
    fn begin_step(&mut self, index: usize, total: usize, title: &str) {
        self.events.push(format!("begin {index}/{total} {title}"));
    }

    fn detail(&mut self, message: &str) {
        self.events.push(format!("detail {message}"));
    }

    fn warn(&mut self, message: &str) {
        self.events.push(format!("warn {message}"));
    }

    fn end_step(&mut self) {
        self.events.push("end".to_string());
    }

    fn abandon(&mut self) {
        self.events.push("abandon".to_string());
    }

    fn finish(&mut self, report: &RunReport) {
        self.events
            .push(format!("finish {} warning(s)", report.degradations.len()));
    }
}
