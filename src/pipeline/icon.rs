//! Icon packaging
//!
//! Every failure in here is recoverable: the bundle keeps the default icon
//! the compiler gave it. Intermediates live in a scratch directory that is
//! removed when this step returns, whatever happened.

use std::fs;
use std::path::Path;

use super::{Degradation, Outcome, Step};
use crate::temp;
use crate::toolchain::IconConverter;

/// Iconset entries as (file stem, pixel size)
pub const ICONSET_VARIANTS: [(&str, u32); 10] = [
    ("icon_16x16", 16),
    ("icon_16x16@2x", 32),
    ("icon_32x32", 32),
    ("icon_32x32@2x", 64),
    ("icon_128x128", 128),
    ("icon_128x128@2x", 256),
    ("icon_256x256", 256),
    ("icon_256x256@2x", 512),
    ("icon_512x512", 512),
    ("icon_512x512@2x", 1024),
];

const KEEP_DEFAULT: &str = "keeping the default icon";

/// Build an icon container from `source` and install it at `destination`
///
/// The returned value tells whether a custom icon was installed.
pub fn package_icon(
    converter: &dyn IconConverter,
    source: &Path,
    destination: &Path,
) -> Outcome<bool> {
    let mut degradations = Vec::new();
    let installed = try_package_icon(converter, source, destination, &mut degradations);
    Outcome::degraded(installed, degradations)
}

fn try_package_icon(
    converter: &dyn IconConverter,
    source: &Path,
    destination: &Path,
    degradations: &mut Vec<Degradation>,
) -> bool {
    let mut degrade = |message: String| degradations.push(Degradation::new(Step::Icon, message));

    if !source.is_file() {
        degrade(format!(
            "Icon source {} not found; {KEEP_DEFAULT}",
            source.display()
        ));
        return false;
    }

    let scratch = match temp::scratch_dir("appstrap-iconset-") {
        Ok(dir) => dir,
        Err(e) => {
            degrade(format!("Could not create a scratch directory ({e}); {KEEP_DEFAULT}"));
            return false;
        }
    };

    let normalized = scratch.path().join("source.png");
    if let Err(e) = converter.normalize(source, &normalized) {
        degrade(format!(
            "Could not convert {} to PNG, using it as-is: {e}",
            source.display()
        ));
        if let Err(e) = fs::copy(source, &normalized) {
            degrade(format!("Could not copy icon source ({e}); {KEEP_DEFAULT}"));
            return false;
        }
    }

    let iconset = scratch.path().join("AppIcon.iconset");
    if let Err(e) = fs::create_dir(&iconset) {
        degrade(format!("Could not create the icon set ({e}); {KEEP_DEFAULT}"));
        return false;
    }

    let missing: Vec<&str> = ICONSET_VARIANTS
        .iter()
        .filter(|(name, size)| {
            converter
                .resize(&normalized, *size, &iconset.join(format!("{name}.png")))
                .is_err()
        })
        .map(|(name, _)| *name)
        .collect();

    if missing.len() == ICONSET_VARIANTS.len() {
        degrade(format!("No icon sizes could be generated; {KEEP_DEFAULT}"));
        return false;
    }
    if !missing.is_empty() {
        degrade(format!(
            "{} of {} icon sizes could not be generated: {}",
            missing.len(),
            ICONSET_VARIANTS.len(),
            missing.join(", ")
        ));
    }

    let compiled = scratch.path().join("AppIcon.icns");
    if let Err(e) = converter.compile(&iconset, &compiled) {
        degrade(format!("Could not compile the icon set ({e}); {KEEP_DEFAULT}"));
        return false;
    }

    let installed = destination
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| fs::copy(&compiled, destination));
    if let Err(e) = installed {
        degrade(format!(
            "Could not install the icon into {} ({e}); {KEEP_DEFAULT}",
            destination.display()
        ));
        return false;
    }

    true
}
