//! Blocking execution of external tools

use std::process::{Command, Stdio};

use console::Style;

use crate::error::{Result, tool};

/// Lines of captured output kept in a failure report
const OUTPUT_TAIL_LINES: usize = 12;

/// Runs external tools to completion
///
/// Quiet runs capture the tool's output and only surface its tail when the
/// tool fails. Verbose runs echo the command line and stream the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRunner {
    verbose: bool,
}

impl ToolRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run a command, failing on launch errors and non-zero exit status
    pub fn run(&self, mut cmd: Command) -> Result<()> {
        let program = program_name(&cmd);
        cmd.stdin(Stdio::null());

        if self.verbose {
            eprintln!(
                "      {} {}",
                Style::new().dim().apply_to("$"),
                Style::new().dim().apply_to(command_line(&cmd))
            );
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| tool::launch_failed(&program, e))?;
            if !status.success() {
                return Err(tool::failed(program, status.code()));
            }
            return Ok(());
        }

        let output = cmd.output().map_err(|e| tool::launch_failed(&program, e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let text = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).into_owned()
            } else {
                stderr.into_owned()
            };
            return Err(tool::failed_with_output(
                program,
                output.status.code(),
                output_tail(&text, OUTPUT_TAIL_LINES),
            ));
        }
        Ok(())
    }
}

/// File name of the command's program, for messages
fn program_name(cmd: &Command) -> String {
    let program = std::path::Path::new(cmd.get_program());
    program
        .file_name()
        .unwrap_or(program.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Printable command line
pub fn command_line(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|a| {
            let a = a.to_string_lossy();
            if a.contains(char::is_whitespace) {
                format!("\"{a}\"")
            } else {
                a.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last `lines` non-empty lines of `text`, indented
fn output_tail(text: &str, lines: usize) -> String {
    let kept: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = kept.len().saturating_sub(lines);
    kept[start..]
        .iter()
        .map(|l| format!("    {}", l.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}
