//! End-of-run summary: collected warnings, then the success banner

use console::Style;

use crate::pipeline::{Mode, RunReport};

/// Print the warnings collected during the run and the success banner
pub fn print_summary(report: &RunReport) {
    println!();
    if !report.degradations.is_empty() {
        println!(
            "{}",
            Style::new().bold().yellow().apply_to(format!(
                "Completed with {} warning(s):",
                report.degradations.len()
            ))
        );
        for degradation in &report.degradations {
            println!("  - {degradation}");
        }
        println!();
    }

    for line in banner_lines(report) {
        println!("{line}");
    }
}

/// Success banner and next steps, unstyled
pub fn banner_lines(report: &RunReport) -> Vec<String> {
    let name = report
        .bundle
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.bundle.display().to_string());

    let mut lines = vec![
        format!(
            "{} {}",
            Style::new().bold().green().apply_to("Done!"),
            Style::new().bold().apply_to(format!("{name} is ready"))
        ),
        format!("  Bundle:      {}", report.bundle.display()),
        format!("  Interpreter: {}", report.interpreter.display()),
    ];
    if let Some(ref environment) = report.environment {
        lines.push(format!("  Environment: {}", environment.display()));
    } else {
        lines.push(String::from("  Environment: none (system interpreter)"));
    }
    if !report.icon_installed {
        lines.push(String::from("  Icon:        default (no custom icon installed)"));
    }
    lines.push(String::new());
    lines.push(Style::new().bold().apply_to("Next steps:").to_string());
    lines.push(format!("  1. Double-click {name} in Finder to launch it"));
    lines.push(String::from(
        "  2. Grant Screen Recording and Accessibility permissions when macOS asks \
         (System Settings > Privacy & Security)",
    ));
    lines.push(String::from("  3. Drag it to the Dock for quick access"));
    if report.mode == Mode::Provision {
        lines.push(String::from("  Run 'appstrap bundle' to rebuild only the app later"));
    }
    lines
}
