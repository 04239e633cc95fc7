//! Common test utilities for Appstrap integration tests
//!
//! A [`TestProject`] is a temporary project directory next to a `bin/`
//! directory of shell-script stand-ins for the macOS tools. Every stand-in
//! appends its command line to a call log, and behaves just enough like the
//! real tool for the next step to proceed. Failures are injected through
//! environment variables read by the scripts.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "python3 $*" >> "$APPSTRAP_TEST_LOG"
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    if [ -n "$FAKE_VENV_FAIL" ]; then
        echo "Error: venv module unavailable" >&2
        exit "$FAKE_VENV_FAIL"
    fi
    mkdir -p "$3/bin" || exit 1
    printf '#!/bin/sh\nexit 0\n' > "$3/bin/python"
    cp "$FAKE_BIN/pip.template" "$3/bin/pip"
    chmod 755 "$3/bin/python" "$3/bin/pip"
fi
"#;

const FAKE_PIP: &str = r#"#!/bin/sh
echo "pip $*" >> "$APPSTRAP_TEST_LOG"
if [ "$2" = "--upgrade" ]; then
    exit "${FAKE_PIP_UPGRADE_FAIL:-0}"
fi
if [ -n "$FAKE_PIP_FAIL" ]; then
    echo "ERROR: No matching distribution found" >&2
    exit "$FAKE_PIP_FAIL"
fi
"#;

const FAKE_OSACOMPILE: &str = r#"#!/bin/sh
echo "osacompile $*" >> "$APPSTRAP_TEST_LOG"
if [ -n "$FAKE_OSACOMPILE_FAIL" ]; then
    echo "syntax error" >&2
    exit "$FAKE_OSACOMPILE_FAIL"
fi
bundle="$2"
mkdir -p "$bundle/Contents/MacOS" "$bundle/Contents/Resources" || exit 1
printf '' > "$bundle/Contents/MacOS/applet"
cp "$3" "$bundle/Contents/Resources/launcher.applescript"
echo "default icon" > "$bundle/Contents/Resources/applet.icns"
"#;

const FAKE_SIPS: &str = r#"#!/bin/sh
echo "sips $*" >> "$APPSTRAP_TEST_LOG"
[ -n "$FAKE_SIPS_FAIL" ] && exit 1
src=""
out=""
while [ $# -gt 0 ]; do
    case "$1" in
        --out) out="$2"; shift 2 ;;
        -s|-z) shift 3 ;;
        *) src="$1"; shift ;;
    esac
done
cp "$src" "$out"
"#;

const FAKE_ICONUTIL: &str = r#"#!/bin/sh
echo "iconutil $*" >> "$APPSTRAP_TEST_LOG"
[ -n "$FAKE_ICONUTIL_FAIL" ] && exit 1
echo "custom icns" > "$5"
"#;

const FAKE_XATTR: &str = r#"#!/bin/sh
echo "xattr $*" >> "$APPSTRAP_TEST_LOG"
if [ -n "$FAKE_XATTR_FAIL" ]; then
    echo "xattr: permission denied" >&2
    exit "$FAKE_XATTR_FAIL"
fi
"#;

/// A project directory plus fake tools for one test
pub struct TestProject {
    pub temp: TempDir,
    /// Project root
    pub path: PathBuf,
    /// Fake tool directory put first on PATH
    pub bin: PathBuf,
    /// Per-test TMPDIR, to check that scratch directories are cleaned up
    pub tmp: PathBuf,
    log: PathBuf,
}

impl TestProject {
    /// Create a project with a main script, requirements and icon
    pub fn new() -> Self {
        let project = Self::empty();
        project.write_file("screen_capture_app.py", "print('capture')\n");
        project.write_file("requirements.txt", "Pillow\npyobjc-framework-Quartz\n");
        project.write_file("app_icon.png", "png bytes");
        project
    }

    /// Create a project directory without any files
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let bin = temp.path().join("bin");
        let tmp = temp.path().join("tmp");
        for dir in [&path, &bin, &tmp] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        let log = temp.path().join("calls.log");
        std::fs::write(&log, "").expect("Failed to create call log");

        let project = Self {
            temp,
            path,
            bin,
            tmp,
            log,
        };
        project.install_tool("python3", FAKE_PYTHON);
        project.install_tool("pip.template", FAKE_PIP);
        project.install_tool("osacompile", FAKE_OSACOMPILE);
        project.install_tool("sips", FAKE_SIPS);
        project.install_tool("iconutil", FAKE_ICONUTIL);
        project.install_tool("xattr", FAKE_XATTR);
        project
    }

    fn install_tool(&self, name: &str, script: &str) {
        let path = self.bin.join(name);
        std::fs::write(&path, script).expect("Failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
    }

    /// The appstrap binary, run against this project with the fake tools
    pub fn command(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("appstrap").expect("appstrap binary");
        cmd.current_dir(&self.path)
            .env_remove("APPSTRAP_PROJECT")
            .env("PATH", format!("{}:/usr/bin:/bin", self.bin.display()))
            .env("TMPDIR", &self.tmp)
            .env("APPSTRAP_TEST_LOG", &self.log)
            .env("FAKE_BIN", &self.bin);
        cmd
    }

    /// Lines appended by the fake tools so far
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .expect("Failed to read call log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Number of logged calls starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        let calls = self.calls();
        calls.iter().filter(|c| c.starts_with(prefix)).count()
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Remove a file from the project
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Entries left in the per-test TMPDIR
    pub fn scratch_entries(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.tmp)
            .expect("Failed to read tmp directory")
            .map(|e| e.expect("dir entry").path())
            .collect()
    }

    /// Create a stale bundle holding a sentinel file
    pub fn create_stale_bundle(&self, name: &str) -> PathBuf {
        let sentinel = self.path.join(name).join("Contents").join("old-sentinel");
        std::fs::create_dir_all(sentinel.parent().unwrap_or(Path::new(".")))
            .expect("Failed to create stale bundle");
        std::fs::write(&sentinel, "stale").expect("Failed to write sentinel");
        sentinel
    }
}
