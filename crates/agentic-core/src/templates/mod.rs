//! Template assets, project layouts, and framework manifests
//!
//! This module provides:
//! - Merge-copying of template trees (skipping VCS metadata and caches)
//! - Per-type project layouts and the content of their generated files
//! - The optional `framework.yaml` manifest of a framework source
//! - Version compatibility checking

pub mod copier;
pub mod generators;
pub mod layout;
pub mod manifest;
pub mod version;

pub use copier::copy_tree;
pub use generators::TemplateContext;
pub use layout::{layout_for, materialize, ProjectLayout, BASELINE_DIRS};
pub use manifest::FrameworkManifest;
pub use version::check_compatibility;
