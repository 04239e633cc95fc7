//! Scratch directories for launcher scripts and icon sets
//!
//! Scratch directories are never created under the current working directory
//! (e.g. when TMPDIR=tmp or TMPDIR=./tmp), and they are removed when the
//! returned [`TempDir`] is dropped, whatever the outcome of the step using it.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::Result;

/// Directory scratch directories are created in; a relative TMPDIR falls
/// back to /tmp
pub fn temp_dir_base() -> PathBuf {
    let tmp = env::temp_dir();
    if tmp.is_absolute() {
        tmp
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a scratch directory owned by the caller
pub fn scratch_dir(prefix: &str) -> Result<TempDir> {
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(temp_dir_base())?;
    Ok(dir)
}
