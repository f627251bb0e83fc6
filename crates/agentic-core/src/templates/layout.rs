//! Per-type project layouts

use super::generators::{self, ContentGenerator, TemplateContext};
use crate::error::{IoResultExt, Result};
use crate::project::ProjectType;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories every project gets, whatever its type
pub const BASELINE_DIRS: &[&str] = &["src", "tests", "docs", "data", "config"];

/// A file the layout writes, with the function producing its content
#[derive(Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub generate: ContentGenerator,
}

impl std::fmt::Debug for GeneratedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Directories and generated files required by a project type
#[derive(Debug, Clone, Default)]
pub struct ProjectLayout {
    pub directories: Vec<PathBuf>,
    pub files: Vec<GeneratedFile>,
}

impl ProjectLayout {
    fn with_dirs(mut self, dirs: &[&str]) -> Self {
        for dir in dirs {
            let dir = PathBuf::from(dir);
            if !self.directories.contains(&dir) {
                self.directories.push(dir);
            }
        }
        self
    }

    fn with_file(mut self, path: &str, generate: ContentGenerator) -> Self {
        self.files.push(GeneratedFile {
            path: PathBuf::from(path),
            generate,
        });
        self
    }

    /// Every path the layout creates, directories first
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.directories
            .iter()
            .map(PathBuf::as_path)
            .chain(self.files.iter().map(|f| f.path.as_path()))
    }
}

/// Layout for a project type. Types without a dedicated layout, including
/// free-form tags, get the baseline only.
pub fn layout_for(project_type: &ProjectType) -> ProjectLayout {
    let layout = ProjectLayout::default().with_dirs(BASELINE_DIRS);

    match project_type {
        ProjectType::JupyterNotebook => layout
            .with_dirs(&[
                "notebooks",
                "notebooks/exploratory",
                "notebooks/analysis",
                "notebooks/reporting",
            ])
            .with_file(
                "notebooks/01_initial_analysis.ipynb",
                generators::jupyter_notebook,
            )
            .with_file("requirements-jupyter.txt", generators::jupyter_requirements),
        ProjectType::DesktopApp => layout
            .with_dirs(&[
                "src/gui",
                "src/models",
                "src/controllers",
                "resources/icons",
                "resources/styles",
            ])
            .with_file("main.py", generators::desktop_main)
            .with_file("src/gui/main_window.py", generators::desktop_main_window),
        ProjectType::Microservice => layout
            .with_dirs(&["services", "api/v1", "docker", "k8s"])
            .with_file("docker-compose.yml", generators::docker_compose)
            .with_file("Dockerfile", generators::dockerfile),
        ProjectType::DataScience => layout
            .with_dirs(&[
                "data/raw",
                "data/processed",
                "data/external",
                "notebooks/exploratory",
                "notebooks/analysis",
                "notebooks/modeling",
                "src/data",
                "src/features",
                "src/models",
                "src/visualization",
                "models",
                "reports/figures",
            ])
            .with_file("requirements-ds.txt", generators::data_science_requirements),
        ProjectType::Devops => layout
            .with_dirs(&[
                "terraform",
                "ansible",
                "docker",
                "k8s",
                "scripts/deployment",
                "scripts/monitoring",
                "configs/nginx",
                "configs/prometheus",
            ])
            .with_file("terraform/main.tf", generators::terraform_main),
        ProjectType::Testing => layout
            .with_dirs(&[
                "tests/unit",
                "tests/integration",
                "tests/e2e",
                "tests/fixtures",
                "tests/utils",
                "performance",
                "load_tests",
            ])
            .with_file("pytest.ini", generators::pytest_ini),
        ProjectType::Custom => layout
            .with_dirs(&["custom"])
            .with_file("custom/README.md", generators::custom_readme),
        ProjectType::WebApp
        | ProjectType::Api
        | ProjectType::Dashboard
        | ProjectType::MlModel
        | ProjectType::DataPipeline
        | ProjectType::Cli
        | ProjectType::Other(_) => layout,
    }
}

/// Create the layout under `root`.
///
/// Directories are created idempotently. Generated files are always
/// rewritten, so running this twice resets them to their generated content.
/// Returns the relative paths of the files written.
pub fn materialize(
    layout: &ProjectLayout,
    root: &Path,
    ctx: &TemplateContext,
) -> Result<Vec<PathBuf>> {
    for dir in &layout.directories {
        let path = root.join(dir);
        fs::create_dir_all(&path).at_path(&path)?;
    }

    let mut written = Vec::with_capacity(layout.files.len());
    for file in &layout.files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).at_path(parent)?;
        }
        fs::write(&path, (file.generate)(ctx)).at_path(&path)?;
        debug!(file = %file.path.display(), "generated");
        written.push(file.path.clone());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    fn ctx() -> TemplateContext {
        TemplateContext::new("demo", "test")
    }

    /// Every entry under root, as relative paths
    fn entries(root: &Path) -> BTreeSet<PathBuf> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .map(|e| e.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    /// Expected entries: the layout's paths plus their ancestors
    fn expected(layout: &ProjectLayout) -> BTreeSet<PathBuf> {
        let mut set = BTreeSet::new();
        for path in layout.paths() {
            for ancestor in path.ancestors() {
                if !ancestor.as_os_str().is_empty() {
                    set.insert(ancestor.to_path_buf());
                }
            }
        }
        set
    }

    #[test]
    fn test_every_layout_is_complete_and_exact() {
        let mut types = ProjectType::KNOWN.to_vec();
        types.push(ProjectType::Other("banana".to_string()));

        for project_type in types {
            let dir = TempDir::new().unwrap();
            let layout = layout_for(&project_type);
            materialize(&layout, dir.path(), &ctx()).unwrap();

            for path in layout.paths() {
                assert!(
                    dir.path().join(path).exists(),
                    "{project_type}: missing {}",
                    path.display()
                );
            }
            assert_eq!(entries(dir.path()), expected(&layout), "{project_type}");
        }
    }

    #[test]
    fn test_baseline_only_for_plain_types() {
        for project_type in [
            ProjectType::WebApp,
            ProjectType::Api,
            ProjectType::Cli,
            ProjectType::Other("banana".to_string()),
        ] {
            let layout = layout_for(&project_type);
            let dirs: Vec<_> = layout
                .directories
                .iter()
                .map(|d| d.to_string_lossy().into_owned())
                .collect();
            assert_eq!(dirs, BASELINE_DIRS);
            assert!(layout.files.is_empty());
        }
    }

    #[test]
    fn test_microservice_layout() {
        let layout = layout_for(&ProjectType::Microservice);
        assert!(layout.directories.contains(&PathBuf::from("services")));
        let files: Vec<_> = layout.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            files,
            vec![PathBuf::from("docker-compose.yml"), PathBuf::from("Dockerfile")]
        );
    }

    #[test]
    fn test_materialize_is_idempotent_for_dirs() {
        let dir = TempDir::new().unwrap();
        let layout = layout_for(&ProjectType::DataScience);
        materialize(&layout, dir.path(), &ctx()).unwrap();
        materialize(&layout, dir.path(), &ctx()).unwrap();
        assert!(dir.path().join("reports/figures").is_dir());
    }

    #[test]
    fn test_materialize_overwrites_generated_files() {
        let dir = TempDir::new().unwrap();
        let layout = layout_for(&ProjectType::Testing);
        materialize(&layout, dir.path(), &ctx()).unwrap();

        let ini = dir.path().join("pytest.ini");
        fs::write(&ini, "edited").unwrap();
        let written = materialize(&layout, dir.path(), &ctx()).unwrap();

        assert_eq!(written, vec![PathBuf::from("pytest.ini")]);
        assert!(fs::read_to_string(&ini).unwrap().starts_with("[pytest]"));
    }
}
