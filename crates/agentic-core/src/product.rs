//! Product configuration trait for CLI binaries
//!
//! This trait defines the identity of the binary that drives the
//! bootstrapper: names, environment variables, and the guidance it prints.

use crate::link::LinkKind;
use std::path::Path;

/// Configuration trait for the CLI product
///
/// Implementors define:
/// - Product identity (name, display name)
/// - Where the framework source comes from
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable naming the framework source directory
    fn framework_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Executables that should resolve on PATH after installation
    fn entry_points(&self) -> &'static [&'static str] {
        &[]
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, link: LinkKind) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;
}
