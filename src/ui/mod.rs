//! UI/Progress presentation layer
//!
//! This module handles:
//! - Step-numbered progress for pipeline runs
//! - Interactive spinners using indicatif
//!
//! All progress reporting goes through the Reporter trait; pipeline tests
//! substitute a recording implementation.

pub mod summary;

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::RunReport;

/// Progress reporter trait for pipeline runs
pub trait Reporter {
    /// Announce step `index` of `total`
    fn begin_step(&mut self, index: usize, total: usize, title: &str);

    /// Informational line within the current step
    fn detail(&mut self, message: &str);

    /// Recoverable problem within the current step
    fn warn(&mut self, message: &str);

    /// Current step completed
    fn end_step(&mut self);

    /// Abandon on fatal error
    fn abandon(&mut self);

    /// Run completed; show the summary
    fn finish(&mut self, report: &RunReport);
}

/// Interactive reporter printing to the terminal
///
/// Shows a spinner while a step blocks on an external tool. In verbose mode
/// tool output is streamed to the terminal instead, so no spinner is drawn.
pub struct ConsoleReporter {
    verbose: bool,
    spinner: Option<ProgressBar>,
    title: String,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: None,
            title: String::new(),
        }
    }

    fn print_line(&self, line: &str) {
        // A hidden spinner drops println output
        match self.spinner {
            Some(ref spinner) if !spinner.is_hidden() => spinner.println(line),
            _ => println!("{line}"),
        }
    }

    fn spinner(title: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(title.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

impl Reporter for ConsoleReporter {
    fn begin_step(&mut self, index: usize, total: usize, title: &str) {
        println!(
            "{} {}",
            Style::new().bold().cyan().apply_to(format!("[{index}/{total}]")),
            Style::new().bold().apply_to(title)
        );
        self.title = title.to_string();
        if !self.verbose {
            self.spinner = Some(Self::spinner(title));
        }
    }

    fn detail(&mut self, message: &str) {
        self.print_line(&format!("      {message}"));
    }

    fn warn(&mut self, message: &str) {
        self.print_line(&format!(
            "      {} {}",
            Style::new().bold().yellow().apply_to("warning:"),
            message
        ));
    }

    fn end_step(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        println!(
            "      {} {}",
            Style::new().green().apply_to("✓"),
            Style::new().dim().apply_to(&self.title)
        );
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }

    fn finish(&mut self, report: &RunReport) {
        summary::print_summary(report);
    }
}
