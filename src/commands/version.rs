//! Version command implementation
//!
//! Besides the build info, reports where each external tool resolves on
//! PATH, which is the first thing to check when a run fails to launch one.

use console::Style;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::toolchain::InterpreterLocator;
use crate::toolchain::system::{HOST_TOOLS, PathLocator};

/// Run version command
pub fn run() -> Result<()> {
    println!("appstrap {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Tools:");
    let interpreter = ProjectConfig::default().interpreter;
    for line in tool_lines(&PathLocator, &interpreter) {
        println!("{line}");
    }

    Ok(())
}

/// One line per tool: its resolved path, or a missing marker
fn tool_lines(locator: &dyn InterpreterLocator, interpreter: &str) -> Vec<String> {
    std::iter::once(interpreter)
        .chain(HOST_TOOLS)
        .map(|tool| match locator.locate(tool) {
            Some(path) => format!("  {tool:<11} {}", path.display()),
            None => {
                let missing = Style::new().yellow().apply_to("not found");
                format!("  {tool:<11} {missing}")
            }
        })
        .collect()
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
