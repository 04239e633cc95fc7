//! Command implementations for Appstrap CLI

pub mod bundle;
pub mod completions;
pub mod helpers;
pub mod setup;
pub mod version;
