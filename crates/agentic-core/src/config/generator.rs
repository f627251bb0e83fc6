//! Project brief and README generation

use crate::error::{IoResultExt, Result};
use crate::link::{LinkKind, FRAMEWORK_DIR};
use crate::project::WorkflowType;
use crate::templates::TemplateContext;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const BRIEF_FILE: &str = "project-brief.md";
pub const README_FILE: &str = "README.md";

/// Replace `{{project_name}}`, `{{project_type}}` and `{{created_date}}`
pub fn render(template: &str, ctx: &TemplateContext) -> String {
    template
        .replace("{{project_name}}", &ctx.project_name)
        .replace("{{project_type}}", &ctx.project_type)
        .replace("{{created_date}}", &ctx.created_date)
}

fn specialist(workflow: WorkflowType) -> &'static str {
    match workflow {
        WorkflowType::Software => "Software Developer",
        WorkflowType::DataScience => "Data Scientist",
    }
}

fn workflow_label(workflow: WorkflowType) -> &'static str {
    match workflow {
        WorkflowType::Software => "Software Development",
        WorkflowType::DataScience => "Data Science",
    }
}

/// Brief used when the framework ships no template of its own
pub fn default_brief(ctx: &TemplateContext, workflow: WorkflowType) -> String {
    format!(
        r#"# {name} Project Brief

## Project Overview

**Project Name**: {name}
**Project Type**: {project_type}
**Created**: {date}

### Problem Statement
[Describe the problem this project will solve]

### Solution Overview
[Describe the proposed solution]

### Success Criteria
- [ ] [Define success criteria]

## Scope & Requirements

### Core Functionality
- [List core features]

### Out of Scope
- [List what's explicitly not included]

## Agentic Workflow

- **Workflow**: {workflow}
- **Agents**: Business Analyst, {specialist}, QA Engineer

## Next Steps
1. Complete this project brief
2. Review the agent definitions in `{framework}/`
3. Begin development with the agentic workflow
"#,
        name = ctx.project_name,
        project_type = ctx.project_type,
        date = ctx.created_date,
        workflow = workflow_label(workflow),
        specialist = specialist(workflow),
        framework = FRAMEWORK_DIR,
    )
}

pub fn readme(ctx: &TemplateContext, workflow: WorkflowType, link: LinkKind) -> String {
    let integration = match link {
        LinkKind::Submodule => "git submodule",
        LinkKind::Copy => "copy",
    };
    format!(
        r#"# {name}

A {project_type} project using the Agentic SDLC Framework.

## Setup

1. **Review Project Brief**: Edit `project-brief.md` with your specific requirements
2. **Check Status**: Run `agentic status`
3. **Contribute Improvements**: Run `agentic enhance <name> <description>`

## Framework Integration

This project integrates the Agentic SDLC framework as a {integration}.

- **Framework Path**: `./{framework}/`
- **Agents**: Business Analyst, {specialist}, QA Engineer
- **Workflow**: {workflow}

## Directory Structure

```
{name}/
├── {framework}/  # Agentic SDLC framework
├── .agentic-state/       # Workflow state
├── config/               # Project configuration
├── src/                  # Source code
├── tests/                # Test files
├── docs/                 # Documentation
├── data/                 # Data files
└── project-brief.md      # Project specification
```
"#,
        name = ctx.project_name,
        project_type = ctx.project_type,
        framework = FRAMEWORK_DIR,
        specialist = specialist(workflow),
        workflow = workflow_label(workflow),
    )
}

/// Write `project-brief.md` and `README.md` into the project root.
///
/// `brief_template` is the framework's brief template, used when it exists.
pub fn write_documents(
    project_root: &Path,
    ctx: &TemplateContext,
    workflow: WorkflowType,
    link: LinkKind,
    brief_template: &Path,
) -> Result<()> {
    let brief = if brief_template.is_file() {
        debug!(template = %brief_template.display(), "Rendering framework brief template");
        let template = fs::read_to_string(brief_template).at_path(brief_template)?;
        render(&template, ctx)
    } else {
        default_brief(ctx, workflow)
    };

    let brief_path = project_root.join(BRIEF_FILE);
    fs::write(&brief_path, brief).at_path(&brief_path)?;

    let readme_path = project_root.join(README_FILE);
    fs::write(&readme_path, readme(ctx, workflow, link)).at_path(&readme_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ctx() -> TemplateContext {
        TemplateContext {
            project_name: "demo".into(),
            project_type: "api".into(),
            created_date: "2024-05-01".into(),
        }
    }

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let out = render(
            "{{project_name}} / {{project_type}} / {{created_date}} / {{project_name}}",
            &ctx(),
        );
        assert_eq!(out, "demo / api / 2024-05-01 / demo");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{{owner}}", &ctx()), "{{owner}}");
    }

    #[test]
    fn test_default_brief_mentions_specialist() {
        let brief = default_brief(&ctx(), WorkflowType::DataScience);
        assert!(brief.contains("Data Scientist"));
        assert!(brief.contains("**Created**: 2024-05-01"));
    }

    #[test]
    fn test_readme_describes_link() {
        assert!(readme(&ctx(), WorkflowType::Software, LinkKind::Submodule).contains("git submodule"));
        assert!(readme(&ctx(), WorkflowType::Software, LinkKind::Copy).contains("as a copy"));
    }

    #[test]
    fn test_write_documents_prefers_framework_template() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.md");
        fs::write(&template, "# {{project_name}} ({{project_type}})\n").unwrap();

        write_documents(dir.path(), &ctx(), WorkflowType::Software, LinkKind::Copy, &template)
            .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(BRIEF_FILE)).unwrap(),
            "# demo (api)\n"
        );
        assert!(dir.path().join(README_FILE).is_file());
    }

    #[test]
    fn test_write_documents_without_template() {
        let dir = TempDir::new().unwrap();
        write_documents(
            dir.path(),
            &ctx(),
            WorkflowType::Software,
            LinkKind::Copy,
            &dir.path().join("missing.md"),
        )
        .unwrap();

        let brief = fs::read_to_string(dir.path().join(BRIEF_FILE)).unwrap();
        assert!(brief.starts_with("# demo Project Brief"));
    }
}
