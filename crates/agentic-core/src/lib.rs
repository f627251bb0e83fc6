//! Agentic Core - Project bootstrapping for the agentic SDLC framework
//!
//! This library creates new projects wired to an agentic SDLC framework: a
//! git repository with the framework linked in (as a submodule or a copy), a
//! type-specific directory layout, configuration and workflow state files,
//! and one initial commit.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Tree copying, layouts, manifests, git, config files
//! - **Layer 2: Workflow Orchestration** - `ProjectBootstrapper`, framework updates, and the `ProductConfig` trait
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based wizard (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use agentic_core::{BootstrapConfig, ProjectBootstrapper, ProjectSpec, ProjectType};
//!
//! let spec = ProjectSpec::new("demo", ProjectType::Microservice, None)?;
//! let config = BootstrapConfig::new("/opt/agentic-framework").prefer_submodule(false);
//! let outcome = ProjectBootstrapper::with_git(config).create(&spec)?;
//! println!("created {}", outcome.root.display());
//! # Ok::<(), agentic_core::ScaffoldError>(())
//! ```

pub mod bootstrap;
pub mod config;
pub mod enhancement;
pub mod error;
pub mod io;
pub mod link;
pub mod product;
pub mod project;
pub mod runtime;
pub mod status;
pub mod sync;
pub mod templates;
pub mod vcs;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use bootstrap::{BootstrapConfig, BootstrapOutcome, BootstrapStage, ProjectBootstrapper};
pub use config::{ProjectConfig, WorkflowState};
pub use error::{Result, ScaffoldError};
pub use link::{LinkKind, LinkStrategyResult};
pub use product::ProductConfig;
pub use project::{ProjectSpec, ProjectType, WorkflowType};
pub use status::{load_status, ProjectStatus};
pub use sync::{merge_enhancement, update_framework, MergeOutcome, UpdateOutcome};
pub use vcs::{GitCli, VersionControl};

#[cfg(feature = "tui")]
pub use tui::run;

/// CLI version - used for framework compatibility checking
/// Each binary should pass its own version, but this provides a fallback
pub const DEFAULT_CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
