//! Bootstrap pipeline
//!
//! This module handles:
//! - Orchestration of the steps, from interpreter lookup to quarantine removal
//! - Step-numbered progress reporting
//! - The two failure tiers: fatal errors abort through `?`, recoverable
//!   failures are collected as [`Degradation`]s and reported at the end
//!
//! Every external tool is invoked at most once per run and nothing is retried.

pub mod bundle;
pub mod dependencies;
pub mod environment;
pub mod icon;
pub mod interpreter;
pub mod sanitize;


use std::fmt;
use std::path::PathBuf;

use crate::config::ProjectLayout;
use crate::config::layout::environment_python;
use crate::error::Result;
use crate::toolchain::Toolchain;
use crate::ui::Reporter;

/// Which steps a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Provision the environment and dependencies, then build the bundle
    Provision,
    /// Build the bundle with whatever interpreter is already available
    BundleOnly,
}

impl Mode {
    /// Steps performed in this mode, in order
    pub fn steps(self) -> &'static [Step] {
        match self {
            Mode::Provision => &[
                Step::Locate,
                Step::Environment,
                Step::Dependencies,
                Step::Bundle,
                Step::Icon,
                Step::Sanitize,
            ],
            Mode::BundleOnly => &[Step::Locate, Step::Bundle, Step::Icon, Step::Sanitize],
        }
    }
}

/// Pipeline steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Locate,
    Environment,
    Dependencies,
    Bundle,
    Icon,
    Sanitize,
}

impl Step {
    /// Progress title
    pub fn title(self) -> &'static str {
        match self {
            Step::Locate => "Locating Python interpreter",
            Step::Environment => "Preparing isolated environment",
            Step::Dependencies => "Installing dependencies",
            Step::Bundle => "Building application bundle",
            Step::Icon => "Packaging application icon",
            Step::Sanitize => "Removing quarantine attribute",
        }
    }

    /// Short label used in the warning summary
    pub fn label(self) -> &'static str {
        match self {
            Step::Locate => "interpreter",
            Step::Environment => "environment",
            Step::Dependencies => "dependencies",
            Step::Bundle => "bundle",
            Step::Icon => "icon",
            Step::Sanitize => "quarantine",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recoverable failure: the run continues with reduced functionality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub step: Step,
    pub message: String,
}

impl Degradation {
    pub fn new(step: Step, message: impl Into<String>) -> Self {
        Self {
            step,
            message: message.into(),
        }
    }
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.step, self.message)
    }
}

/// Result of a step that cannot fail fatally at this point, plus anything
/// that went wrong along the way
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub degradations: Vec<Degradation>,
}

impl<T> Outcome<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            degradations: Vec::new(),
        }
    }

    pub fn degraded(value: T, degradations: Vec<Degradation>) -> Self {
        Self {
            value,
            degradations,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mode: Mode,
    pub bundle: PathBuf,
    pub interpreter: PathBuf,
    pub environment: Option<PathBuf>,
    pub icon_installed: bool,
    pub degradations: Vec<Degradation>,
}

/// Installation pipeline for a single project
pub struct Pipeline<'a> {
    layout: &'a ProjectLayout,
    tools: &'a Toolchain,
    reporter: &'a mut dyn Reporter,
    degradations: Vec<Degradation>,
    position: usize,
    total: usize,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        layout: &'a ProjectLayout,
        tools: &'a Toolchain,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            layout,
            tools,
            reporter,
            degradations: Vec::new(),
            position: 0,
            total: 0,
        }
    }

    /// Run every step of `mode`, stopping at the first fatal error
    pub fn run(mut self, mode: Mode) -> Result<RunReport> {
        match self.run_steps(mode) {
            Ok(report) => {
                self.reporter.finish(&report);
                Ok(report)
            }
            Err(e) => {
                self.reporter.abandon();
                Err(e)
            }
        }
    }

    fn run_steps(&mut self, mode: Mode) -> Result<RunReport> {
        let tools = self.tools;
        let layout = self.layout;
        self.total = mode.steps().len();
        self.position = 0;

        let (interpreter, environment) = match mode {
            Mode::Provision => {
                self.begin(Step::Locate);
                let name = &layout.config.interpreter;
                let system = interpreter::locate_interpreter(tools.locator.as_ref(), name)?;
                self.reporter.detail(&format!("Found {}", system.display()));
                self.end(Outcome::clean(()));

                self.begin(Step::Environment);
                let target = layout.environment_target();
                let builder = tools.environments.as_ref();
                let state = environment::ensure_environment(builder, &system, &target)?;
                self.reporter.detail(&state.describe(&target));
                self.end(Outcome::clean(()));

                self.begin(Step::Dependencies);
                let installed = dependencies::install_dependencies(
                    tools.packages.as_ref(),
                    &target,
                    &layout.requirements(),
                    &layout.config.fallback_packages,
                )?;
                self.reporter.detail(&installed.value.describe());
                self.end(installed);

                (environment_python(&target), Some(target))
            }
            Mode::BundleOnly => {
                self.begin(Step::Locate);
                let locator = tools.locator.as_ref();
                let resolved = interpreter::resolve_bundle_interpreter(layout, locator)?;
                let using = format!("Using {}", resolved.value.interpreter.display());
                self.reporter.detail(&using);
                let resolved = self.end(resolved);
                (resolved.interpreter, resolved.environment)
            }
        };

        self.begin(Step::Bundle);
        let built = bundle::build_bundle(tools.bundler.as_ref(), layout, &interpreter)?;
        if built.value.replaced {
            self.reporter.detail("Removed previous bundle");
        }
        let compiled = format!("Compiled {}", layout.bundle().display());
        self.reporter.detail(&compiled);
        self.end(built);

        self.begin(Step::Icon);
        let icon = icon::package_icon(
            tools.icons.as_ref(),
            &layout.icon_source(),
            &layout.bundle_icon(),
        );
        let icon_installed = self.end(icon);

        self.begin(Step::Sanitize);
        let sanitized = sanitize::strip_quarantine(tools.attributes.as_ref(), &layout.bundle());
        self.end(sanitized);

        Ok(RunReport {
            mode,
            bundle: layout.bundle(),
            interpreter,
            environment,
            icon_installed,
            degradations: std::mem::take(&mut self.degradations),
        })
    }

    fn begin(&mut self, step: Step) {
        self.position += 1;
        let title = step.title();
        self.reporter.begin_step(self.position, self.total, title);
    }

    fn end<T>(&mut self, outcome: Outcome<T>) -> T {
        for degradation in outcome.degradations {
            self.reporter.warn(&degradation.message);
            self.degradations.push(degradation);
        }
        self.reporter.end_step();
        outcome.value
    }
}
