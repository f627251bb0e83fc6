//! Charm-style CLI prompts using cliclack

use crate::bootstrap::{BootstrapConfig, BootstrapOutcome, ProjectBootstrapper};
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::project::{ProjectSpec, ProjectType};
use crate::templates::FrameworkManifest;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Menu key of the free-form "Other" entry
const OTHER_KEY: &str = "14";

/// A resolved menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Known(ProjectType),
    Other,
}

/// `(key, label, hint)` for every entry of the project type menu
pub fn menu_items() -> Vec<(String, String, String)> {
    let mut items: Vec<_> = ProjectType::KNOWN
        .iter()
        .enumerate()
        .map(|(idx, t)| {
            (
                (idx + 1).to_string(),
                format!("{}. {}", idx + 1, t.as_str()),
                t.description().to_string(),
            )
        })
        .collect();
    items.push((
        OTHER_KEY.to_string(),
        format!("{}. other", OTHER_KEY),
        "Enter a custom project type".to_string(),
    ));
    items
}

/// Map a menu key ("1".."14") to a selection
pub fn parse_menu_choice(key: &str) -> crate::error::Result<MenuChoice> {
    let key = key.trim();
    if key == OTHER_KEY {
        return Ok(MenuChoice::Other);
    }
    key.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| ProjectType::KNOWN.get(idx))
        .map(|t| MenuChoice::Known(t.clone()))
        .ok_or_else(|| ScaffoldError::invalid(format!("unknown project type selection '{}'", key)))
}

/// Run the interactive `new` wizard
pub fn run<C: ProductConfig>(
    config: &C,
    framework: Option<PathBuf>,
    cli_version: &str,
) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Resolve the framework before asking anything
    let framework = framework.ok_or_else(|| {
        ScaffoldError::invalid(format!(
            "no framework source configured; pass --framework <DIR> or set {}",
            config.framework_env()
        ))
    })?;
    describe_framework(&framework)?;

    // Step 2: Project name
    let name: String = cliclack::input("Project name")
        .placeholder("my-project")
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Project name is required")
            } else {
                Ok(())
            }
        })
        .interact()?;

    // Step 3: Project type
    let project_type = select_project_type()?;

    // Step 4: Output directory
    let output_dir = select_output_dir()?;

    // Validates the name before anything touches the disk
    let spec = ProjectSpec::new(name, project_type, Some(output_dir))?;

    // Step 5: Integration method
    let prefer_submodule: bool = cliclack::select("Framework integration")
        .item(true, "Git submodule", "tracks framework updates")
        .item(false, "Copy", "standalone snapshot")
        .initial_value(true)
        .interact()?;

    // Step 6: Confirm
    let confirmed: bool = cliclack::confirm(format!(
        "Create {} ({}) in {}?",
        spec.name(),
        spec.project_type(),
        spec.output_dir().display()
    ))
    .initial_value(true)
    .interact()?;

    if !confirmed {
        cliclack::outro_cancel("Setup cancelled.")?;
        return Ok(());
    }

    // Step 7: Create project
    let bootstrap_config = BootstrapConfig::new(framework)
        .prefer_submodule(prefer_submodule)
        .cli_version(cli_version)
        .upgrade_command(config.upgrade_command());
    let outcome = create_project(ProjectBootstrapper::with_git(bootstrap_config), &spec)?;

    // Step 8: Show next steps
    print_next_steps(config, &outcome)?;

    Ok(())
}

fn describe_framework(framework: &Path) -> Result<()> {
    if !framework.is_dir() {
        return Err(ScaffoldError::invalid(format!(
            "framework source not found: {}",
            framework.display()
        ))
        .into());
    }
    let manifest = FrameworkManifest::load(framework)?;
    let title = manifest.name.as_deref().unwrap_or("framework");
    cliclack::log::info(format!(
        "Using {} {} from {}",
        title,
        manifest.version,
        framework.display()
    ))?;
    if let Some(description) = &manifest.description {
        cliclack::log::remark(description)?;
    }
    Ok(())
}

fn select_project_type() -> Result<ProjectType> {
    let mut select = cliclack::select("Project type");
    for (key, label, hint) in menu_items() {
        select = select.item(key, label, hint);
    }
    let key: String = select.interact()?;

    match parse_menu_choice(&key)? {
        MenuChoice::Known(project_type) => Ok(project_type),
        MenuChoice::Other => {
            let tag: String = cliclack::input("Custom project type")
                .placeholder("e.g. browser-extension")
                .validate(|input: &String| {
                    if input.trim().is_empty() {
                        Err("Project type is required")
                    } else {
                        Ok(())
                    }
                })
                .interact()?;
            Ok(ProjectType::from(tag.as_str()))
        }
    }
}

fn select_output_dir() -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let input: String = cliclack::input("Output directory")
        .placeholder(".")
        .default_input(".")
        .interact()?;

    let path = if input.trim().is_empty() || input.trim() == "." {
        current_dir
    } else {
        let p = PathBuf::from(input.trim());
        if p.is_absolute() {
            p
        } else {
            current_dir.join(p)
        }
    };

    Ok(path)
}

fn create_project(
    bootstrapper: ProjectBootstrapper,
    spec: &ProjectSpec,
) -> Result<BootstrapOutcome> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match bootstrapper.create(spec) {
        Ok(outcome) => {
            spinner.stop(format!(
                "Created {} ({} framework)",
                outcome.root.display(),
                outcome.link.kind
            ));
            for warning in &outcome.warnings {
                cliclack::log::warning(warning)?;
            }
            Ok(outcome)
        }
        Err(e) => {
            spinner.error("Project creation failed");
            Err(e.into())
        }
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, outcome: &BootstrapOutcome) -> Result<()> {
    let steps = config.next_steps(&outcome.root, outcome.link.kind);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_every_type_plus_other() {
        let items = menu_items();
        assert_eq!(items.len(), 14);
        assert_eq!(items[0].0, "1");
        assert_eq!(items[0].1, "1. web-app");
        assert_eq!(items[13].0, OTHER_KEY);
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(
            parse_menu_choice("4").unwrap(),
            MenuChoice::Known(ProjectType::Microservice)
        );
        assert_eq!(
            parse_menu_choice(" 13 ").unwrap(),
            MenuChoice::Known(ProjectType::Custom)
        );
        assert_eq!(parse_menu_choice("14").unwrap(), MenuChoice::Other);
    }

    #[test]
    fn test_parse_menu_choice_rejects_unknown() {
        for key in ["0", "15", "", "web-app", "-1"] {
            assert!(matches!(
                parse_menu_choice(key),
                Err(ScaffoldError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_menu_keys_round_trip() {
        for (key, _, _) in menu_items() {
            assert!(parse_menu_choice(&key).is_ok());
        }
    }
}
