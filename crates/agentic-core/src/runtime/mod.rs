//! Environment checks and tool lookup
//!
//! This module provides:
//! - PATH lookup and version probing for external tools like git
//! - The diagnostics behind the `doctor` command

pub mod check;
pub mod tool;

pub use check::{run_diagnostics, CheckStatus, Diagnostic};
pub use tool::ToolManager;
