//! Appstrap - macOS helper app bootstrapper
//!
//! Provisions an isolated Python environment for a project, installs its
//! dependencies and packages it as a double-clickable application bundle.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod error;
mod launcher;
mod pipeline;
mod temp;
mod toolchain;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::AppstrapError;

fn report_error(err: &AppstrapError) {
    eprintln!("{} {}", Style::new().bold().red().apply_to("Error:"), err);
    if let Some(help) = err.help() {
        eprintln!("{} {}", Style::new().bold().cyan().apply_to("help:"), help);
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(cli.project, args, cli.verbose),
        Commands::Bundle(args) => commands::bundle::run(cli.project, args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(e.exit_code());
    }
}
