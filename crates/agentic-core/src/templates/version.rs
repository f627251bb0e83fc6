//! Version comparison for CLI and framework compatibility

use semver::Version;

/// Compare the running CLI version against the minimum a framework asks for.
/// Returns a warning message if the CLI is older than the framework expects.
pub fn check_compatibility(
    cli_version: &str,
    min_cli_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    // Unparsable versions can't be compared, so no warning
    let cli_ver = parse_version(cli_version)?;
    let required = parse_version(min_cli_version)?;

    if cli_ver < required {
        Some(format!(
            "This framework was designed for CLI version {} or newer. \
             You are running version {}. Consider updating: {}",
            min_cli_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse a version string, tolerating a leading 'v'
pub fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}
