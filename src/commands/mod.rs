//! Command dispatch and handlers.
//!
//! Every handler converts its own errors into a failure envelope and prints
//! it; the process exits 0 whenever an envelope was produced, so scripted
//! callers read the `success` field instead of the exit code.

pub mod create;
pub mod restructure;
pub mod status;
pub mod validate;

use std::collections::BTreeMap;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::detect::detect;
use crate::outcome::Outcome;
use crate::schema::{Schema, SchemaRegistry};
use crate::tree::DirectoryTree;

/// Author recorded in boilerplate when `--author` is not given.
const DEFAULT_AUTHOR: &str = "Adrian";

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string only when the result envelope itself cannot be
/// rendered; logical operation failures are reported inside the envelope.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Create(args) => create::run(ctx, args),
        Command::Restructure(args) => restructure::run(ctx, args),
        Command::Validate(args) => validate::run(ctx, args),
        Command::Status(args) => status::run(ctx, args),
    }
}

/// Prints an envelope to stdout.
pub(crate) fn emit(outcome: &Outcome) -> Result<(), String> {
    let json = outcome.to_json()?;
    println!("{json}");
    Ok(())
}

/// Resolves the schema for an operation: an explicitly requested type must
/// exist; otherwise detection runs with a `general` fallback.
///
/// Returns an error message (for the caller to wrap in its own error
/// category) when the requested or fallback type is unknown.
pub(crate) fn resolve_schema<'a>(
    registry: &'a SchemaRegistry,
    tree: &DirectoryTree,
    requested: Option<&str>,
) -> Result<&'a Schema, String> {
    let type_name = match requested {
        Some(name) => name,
        None => detect(tree, registry).unwrap_or("general"),
    };
    registry.get(type_name).ok_or_else(|| {
        format!(
            "unknown project type '{type_name}'; available: {}",
            registry.type_names().join(", ")
        )
    })
}

/// Builds the substitution map handed to the template port.
pub(crate) fn template_vars(
    ctx: &ServiceContext,
    project_name: &str,
    project_type: &str,
    author: Option<&str>,
    description: Option<&str>,
) -> BTreeMap<String, String> {
    let now = ctx.clock.now();
    let description = description.map_or_else(
        || format!("A {project_type} project managed by labkit"),
        ToString::to_string,
    );
    let mut vars = BTreeMap::new();
    vars.insert("project_name".to_string(), project_name.to_string());
    vars.insert("project_type".to_string(), project_type.to_string());
    vars.insert("author_name".to_string(), author.unwrap_or(DEFAULT_AUTHOR).to_string());
    vars.insert("description".to_string(), description);
    vars.insert("creation_date".to_string(), now.format("%Y-%m-%d").to_string());
    vars.insert("year".to_string(), now.format("%Y").to_string());
    vars
}
