//! Launcher script synthesis
//!
//! The bundle's only job is to open Terminal, change to the project
//! directory and run the main program with the chosen interpreter. The
//! command is quoted twice: POSIX single quotes for the shell Terminal runs,
//! then AppleScript string escaping for the `do script` literal.

use std::path::Path;

/// File name of the launcher inside its scratch directory
pub const LAUNCHER_FILE_NAME: &str = "launcher.applescript";

/// AppleScript source that launches the main program in Terminal
pub fn launcher_script(project_dir: &Path, interpreter: &Path, main_script: &Path) -> String {
    let command = shell_command(project_dir, interpreter, main_script);
    format!(
        "tell application \"Terminal\"\n    activate\n    do script \"{}\"\nend tell\n",
        applescript_escape(&command)
    )
}

/// Shell command Terminal runs
pub fn shell_command(project_dir: &Path, interpreter: &Path, main_script: &Path) -> String {
    format!(
        "cd {} && {} {}",
        shell_quote(&project_dir.to_string_lossy()),
        shell_quote(&interpreter.to_string_lossy()),
        shell_quote(&main_script.to_string_lossy())
    )
}

/// POSIX single-quote a word
pub fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Escape text for an AppleScript double-quoted string literal
pub fn applescript_escape(text: &str) -> String {
    text.replace('\\', r"\\").replace('"', "\\\"")
}
