//! agentic CLI - Project bootstrapping for the agentic SDLC framework

use agentic_core::link::FRAMEWORK_DIR;
use agentic_core::runtime::{self, Diagnostic};
use agentic_core::{
    enhancement, BootstrapConfig, GitCli, LinkKind, MergeOutcome, ProductConfig,
    ProjectBootstrapper, ProjectSpec, ProjectType, ScaffoldError, UpdateOutcome,
};
use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// agentic product configuration
#[derive(Clone)]
pub struct AgenticConfig;

impl ProductConfig for AgenticConfig {
    fn name(&self) -> &'static str {
        "agentic"
    }

    fn display_name(&self) -> &'static str {
        "Agentic SDLC"
    }

    fn framework_env(&self) -> &'static str {
        "AGENTIC_FRAMEWORK_PATH"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/agentic-sdlc/agentic-framework#readme"
    }

    fn entry_points(&self) -> &'static [&'static str] {
        &["agentic"]
    }

    fn cli_description(&self) -> &'static str {
        "CLI for bootstrapping projects with the agentic SDLC framework"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install agentic-tools --force"
    }

    fn next_steps(&self, dir: &Path, link: LinkKind) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Fill in the brief the agents work from
        steps.push("Edit project-brief.md with your requirements".to_string());
        steps.push("Run `agentic status` to review the workflow".to_string());

        if link == LinkKind::Submodule {
            steps.push(format!(
                "Pull framework updates with `git submodule update --remote {}`",
                FRAMEWORK_DIR
            ));
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Agentic framework source directory
    #[arg(long, global = true, env = "AGENTIC_FRAMEWORK_PATH")]
    pub framework: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project non-interactively
    Init(InitArgs),
    /// Create a new project with interactive prompts
    New,
    /// Check the environment the CLI depends on
    Doctor,
    /// Show project and workflow status
    Status {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Create a template for contributing an improvement back to the framework
    Enhance {
        /// Enhancement name
        name: String,
        /// What the enhancement does
        description: String,
        /// Project directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Pull the latest framework into a submodule project and commit it
    Update {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Open a branch in the framework submodule for an enhancement
    Merge {
        /// Enhancement name, as given to `enhance`
        name: String,
        /// Project directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Project name (also the directory created)
    pub name: String,

    /// Project type (web-app, api, microservice, data-science, ...); other values are kept as-is
    #[arg(short = 't', long = "type", default_value = "web-app")]
    pub project_type: String,

    /// Directory to create the project in
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Copy the framework instead of adding it as a git submodule
    #[arg(long)]
    pub copy: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn require_framework(config: &AgenticConfig, framework: Option<PathBuf>) -> Result<PathBuf> {
    framework.ok_or_else(|| {
        ScaffoldError::invalid(format!(
            "no framework source configured; pass --framework <DIR> or set {}",
            config.framework_env()
        ))
        .into()
    })
}

fn run_init(config: &AgenticConfig, framework: Option<PathBuf>, args: InitArgs) -> Result<()> {
    let framework = require_framework(config, framework)?;
    let project_type = ProjectType::from(args.project_type.as_str());
    let spec = ProjectSpec::new(args.name, project_type, args.output)?;

    let bootstrap_config = BootstrapConfig::new(framework)
        .prefer_submodule(!args.copy)
        .cli_version(CLI_VERSION)
        .upgrade_command(config.upgrade_command());
    let outcome = ProjectBootstrapper::with_git(bootstrap_config).create(&spec)?;

    for warning in &outcome.warnings {
        println!("{} {}", "!".yellow(), warning);
    }

    println!(
        "{} Created {} at {}",
        "✓".green(),
        spec.name().bold(),
        outcome.root.display()
    );
    println!(
        "  {} {} ({} workflow)",
        "Type:".dimmed(),
        outcome.config.project_type,
        outcome.config.agents.workflow_type
    );
    println!("  {} {}", "Framework:".dimmed(), outcome.link.kind);

    println!();
    println!("  Next steps");
    for (i, step) in config.next_steps(&outcome.root, outcome.link.kind).iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    Ok(())
}

fn print_diagnostic(diag: &Diagnostic) {
    if diag.passed() {
        println!("{} {}", "✓".green(), diag);
    } else {
        println!("{} {}", "✗".red(), diag);
        if let Some(remedy) = &diag.remedy {
            println!("    {}", remedy.dimmed());
        }
    }
}

fn run_doctor(config: &AgenticConfig, framework: Option<PathBuf>) {
    println!("{}", format!("{} doctor", config.display_name()).bold());
    println!();

    let diagnostics = runtime::run_diagnostics(
        config.entry_points(),
        framework.as_deref(),
        config.framework_env(),
    );

    for diag in &diagnostics {
        print_diagnostic(diag);
    }

    let failed = diagnostics.iter().filter(|d| !d.passed()).count();
    println!();
    if failed == 0 {
        println!("{}", "All checks passed".green());
    } else {
        println!("{}", format!("{} check(s) need attention", failed).yellow());
    }
}

fn run_status(dir: &Path) -> Result<()> {
    let status = agentic_core::load_status(dir)?;
    let config = &status.config;

    println!("{}", "Project Status".bold());
    println!("   Name: {}", config.project_name);
    println!("   Type: {}", config.project_type);
    println!(
        "   Framework: {} ({})",
        if config.use_submodule { "Submodule" } else { "Copy" },
        config.framework_version
    );
    println!("   Created: {}", config.created_day());

    if let Some(state) = &status.state {
        println!("{}", "Workflow Status".bold());
        println!("   Phase: {}", state.current_phase);
        println!("   Type: {}", state.workflow_type);
        println!("   Active Agents: {}", state.active_agents.len());
        println!("   Tasks Done: {}", state.completed_tasks.len());
        println!("   Quality Gates Passed: {}", state.quality_gates_passed.len());
    }

    if !status.enhancements.is_empty() {
        println!("{}", "Pending Enhancements".bold());
        for name in &status.enhancements {
            println!("   - {}", name);
        }
    }

    Ok(())
}

fn run_enhance(dir: &Path, name: &str, description: &str) -> Result<()> {
    let created = enhancement::create_enhancement(dir, name, description)?;
    println!(
        "{} Enhancement template created: {}",
        "✓".green(),
        created.join("README.md").display()
    );
    println!("  Document your changes there, then run `agentic merge {}`", name.trim());
    Ok(())
}

fn run_update(dir: &Path) -> Result<()> {
    match agentic_core::update_framework(&GitCli::default(), dir)? {
        UpdateOutcome::Updated => {
            println!("{} Framework updated and committed", "✓".green());
        }
        UpdateOutcome::AlreadyCurrent => {
            println!("{} Framework already up to date", "✓".green());
        }
    }
    Ok(())
}

fn run_merge(dir: &Path, name: &str) -> Result<()> {
    match agentic_core::merge_enhancement(&GitCli::default(), dir, name)? {
        MergeOutcome::Branched {
            branch,
            framework_dir,
        } => {
            println!(
                "{} Created branch {} in {}",
                "✓".green(),
                branch.bold(),
                framework_dir.display()
            );
            println!();
            println!("  Next steps");
            println!("  1.  Copy your improved files into {}", FRAMEWORK_DIR);
            println!("  2.  cd {} && git add . && git commit", FRAMEWORK_DIR);
            println!("  3.  git push origin {}", branch);
        }
        MergeOutcome::ManualMergeRequired => {
            println!(
                "{} The framework was copied into this project; merge the enhancement into the framework repository by hand",
                "!".yellow()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = AgenticConfig;
    let matches = Args::command()
        .name(config.name())
        .about(config.cli_description())
        .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_tracing(args.verbose);

    let result = match args.command {
        Some(Command::Init(init_args)) => run_init(&config, args.framework, init_args),
        Some(Command::Doctor) => {
            run_doctor(&config, args.framework);
            Ok(())
        }
        Some(Command::Status { dir }) => run_status(&dir),
        Some(Command::Enhance {
            name,
            description,
            dir,
        }) => run_enhance(&dir, &name, &description),
        Some(Command::Update { dir }) => run_update(&dir),
        Some(Command::Merge { name, dir }) => run_merge(&dir, &name),
        // No subcommand provided, default to the interactive wizard
        Some(Command::New) | None => {
            let result = agentic_core::run(&config, args.framework, CLI_VERSION);

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}
