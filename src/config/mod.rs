//! Project configuration
//!
//! - [`project`]: optional `appstrap.yaml` overrides
//! - [`layout`]: every path the pipeline touches, resolved against the project root

pub mod layout;
pub mod project;

pub use layout::ProjectLayout;
pub use project::ProjectConfig;
