//! Framework manifest types and parsing

use crate::error::{IoResultExt, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the manifest at the root of a framework source
pub const MANIFEST_FILE: &str = "framework.yaml";

/// Framework version recorded when the source carries no manifest
pub const DEFAULT_FRAMEWORK_VERSION: &str = "1.0";

const DEFAULT_BRIEF_TEMPLATE: &str = "project-brief-template.md";

/// Framework manifest (`<framework>/framework.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkManifest {
    /// Display name of the framework
    #[serde(default)]
    pub name: Option<String>,

    /// Description shown by the wizard
    #[serde(default)]
    pub description: Option<String>,

    /// Framework version, recorded in every project's config
    #[serde(default = "default_version", deserialize_with = "version_string")]
    pub version: String,

    /// Oldest CLI able to bootstrap from this framework (semver)
    #[serde(default)]
    pub min_cli_version: Option<String>,

    /// Project brief template, relative to the framework root
    #[serde(default = "default_brief_template")]
    pub brief_template: String,
}

fn default_version() -> String {
    DEFAULT_FRAMEWORK_VERSION.to_string()
}

/// Accept `version: 1.0` as well as `version: "1.0"`
fn version_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a version string, found {:?}",
            other
        ))),
    }
}

fn default_brief_template() -> String {
    DEFAULT_BRIEF_TEMPLATE.to_string()
}

impl Default for FrameworkManifest {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            version: default_version(),
            min_cli_version: None,
            brief_template: default_brief_template(),
        }
    }
}

impl FrameworkManifest {
    /// Load the manifest from a framework source, falling back to defaults
    /// when the source has none
    pub fn load(framework_source: &Path) -> Result<Self> {
        let path = framework_source.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).at_path(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Path to the brief template inside the framework source
    pub fn brief_template_path(&self, framework_source: &Path) -> PathBuf {
        framework_source.join(&self.brief_template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = FrameworkManifest::parse(
            r#"
name: Agentic SDLC
description: Agent personas and standards
version: 2.1.0
min_cli_version: 0.1.0
brief_template: templates/brief.md
"#,
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("Agentic SDLC"));
        assert_eq!(manifest.version, "2.1.0");
        assert_eq!(manifest.min_cli_version.as_deref(), Some("0.1.0"));
        assert_eq!(
            manifest.brief_template_path(Path::new("/fw")),
            PathBuf::from("/fw/templates/brief.md")
        );
    }

    #[test]
    fn test_parse_partial_manifest_uses_defaults() {
        let manifest = FrameworkManifest::parse("name: Minimal\n").unwrap();
        assert_eq!(manifest.version, DEFAULT_FRAMEWORK_VERSION);
        assert_eq!(manifest.brief_template, "project-brief-template.md");
        assert!(manifest.min_cli_version.is_none());
    }

    #[test]
    fn test_empty_manifest_is_default() {
        let manifest = FrameworkManifest::parse("  \n").unwrap();
        assert_eq!(manifest.version, DEFAULT_FRAMEWORK_VERSION);
    }

    #[test]
    fn test_numeric_version() {
        let manifest = FrameworkManifest::parse("version: 2\n").unwrap();
        assert_eq!(manifest.version, "2");
        let manifest = FrameworkManifest::parse("version: 1.5\n").unwrap();
        assert_eq!(manifest.version, "1.5");
    }

    #[test]
    fn test_invalid_manifest_is_error() {
        assert!(FrameworkManifest::parse("version: [unclosed").is_err());
        assert!(FrameworkManifest::parse("version: [1, 2]").is_err());
    }

    #[test]
    fn test_load_without_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = FrameworkManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.version, DEFAULT_FRAMEWORK_VERSION);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "version: 3.0.0\n").unwrap();
        let manifest = FrameworkManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.version, "3.0.0");
    }
}
