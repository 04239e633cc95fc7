//! Quarantine attribute removal

use std::path::Path;

use super::{Degradation, Outcome, Step};
use crate::toolchain::AttributeStripper;

/// Strip download-provenance metadata from `bundle`; failures are recoverable
pub fn strip_quarantine(stripper: &dyn AttributeStripper, bundle: &Path) -> Outcome<bool> {
    match stripper.strip(bundle) {
        Ok(()) => Outcome::clean(true),
        Err(e) => Outcome::degraded(
            false,
            vec![Degradation::new(
                Step::Sanitize,
                format!(
                    "Could not remove the quarantine attribute ({e}); macOS may ask for \
                     confirmation on first launch"
                ),
            )],
        ),
    }
}
