//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `labkit`.
#[derive(Debug, Parser)]
#[command(name = "labkit", version, about = "Scaffold and audit research project layouts")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new project with a standardized directory structure.
    Create(CreateArgs),
    /// Migrate an existing tree toward a schema, with backup.
    Restructure(RestructureArgs),
    /// Score a tree's compliance against its schema.
    Validate(ValidateArgs),
    /// Report structure statistics and git information.
    Status(StatusArgs),
}

/// Arguments for `labkit create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name in kebab-case.
    pub name: String,
    /// Project type (schema name).
    #[arg(long = "type", value_name = "NAME")]
    pub project_type: String,
    /// Directory the project is created under (defaults to the current
    /// directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Author recorded in the generated boilerplate.
    #[arg(long)]
    pub author: Option<String>,
    /// Description recorded in the generated boilerplate.
    #[arg(long)]
    pub description: Option<String>,
    /// Skip git init and the initial commit.
    #[arg(long)]
    pub no_git: bool,
    /// Proceed even if the target directory already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `labkit restructure`.
#[derive(Debug, Args)]
pub struct RestructureArgs {
    /// Project directory to restructure.
    pub path: PathBuf,
    /// Target project type; auto-detected when omitted.
    #[arg(long = "type", value_name = "NAME")]
    pub project_type: Option<String>,
    /// Skip the backup copy normally taken before any destructive step.
    #[arg(long)]
    pub no_backup: bool,
    /// Keep nonstandard directories instead of deleting them.
    #[arg(long)]
    pub keep_nonstandard: bool,
}

/// Arguments for `labkit validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Project directory to validate.
    pub path: PathBuf,
    /// Project type to validate against; auto-detected when omitted.
    #[arg(long = "type", value_name = "NAME")]
    pub project_type: Option<String>,
    /// Also flag extra directories as issues.
    #[arg(long)]
    pub strict: bool,
    /// Create missing directories and boilerplate files.
    #[arg(long)]
    pub fix_issues: bool,
}

/// Arguments for `labkit status`.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Project directory to report on.
    pub path: PathBuf,
    /// Skip git statistics.
    #[arg(long)]
    pub no_git: bool,
    /// Skip the recursive file statistics walk.
    #[arg(long)]
    pub no_file_stats: bool,
}
