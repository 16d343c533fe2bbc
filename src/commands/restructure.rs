//! `labkit restructure` command.
//!
//! The only command with destructive side effects. A backup copy is taken
//! before anything mutates, and its completion is a precondition for
//! proceeding. Applying the plan is not transactional: a mid-apply failure
//! leaves a partial tree, which is what the backup is for. Concurrent
//! restructures of the same project path are not safe.

use std::path::Path;

use serde_json::json;

use crate::cli::RestructureArgs;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::outcome::Outcome;
use crate::restructure::{apply, plan};
use crate::schema::SchemaRegistry;
use crate::tree::DirectoryTree;

use super::{emit, resolve_schema, template_vars};

/// Execute the `restructure` command.
///
/// # Errors
///
/// Returns an error string only if the envelope cannot be printed.
pub fn run(ctx: &ServiceContext, args: &RestructureArgs) -> Result<(), String> {
    let outcome = execute(ctx, args).unwrap_or_else(|err| Outcome::failure(&err));
    emit(&outcome)
}

fn execute(ctx: &ServiceContext, args: &RestructureArgs) -> Result<Outcome, Error> {
    if !ctx.fs.exists(&args.path) {
        return Err(Error::Restructure(format!(
            "project directory '{}' does not exist",
            args.path.display()
        )));
    }

    let project_name = args
        .path
        .file_name()
        .map_or_else(|| "project".to_string(), |n| n.to_string_lossy().into_owned());

    let mut warnings = Vec::new();
    let backup_path = if args.no_backup {
        None
    } else {
        let stamp = ctx.clock.now().format("%Y%m%d_%H%M%S");
        let backup = args
            .path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{project_name}_backup_{stamp}"));
        ctx.fs
            .copy_tree(&args.path, &backup)
            .map_err(|e| Error::Restructure(format!("backup failed, aborting: {e}")))?;
        warnings.push(format!("Backup created at {}", backup.display()));
        Some(backup.display().to_string())
    };

    let registry = SchemaRegistry::load(ctx.fs.as_ref())?;
    let tree = DirectoryTree::capture(ctx.fs.as_ref(), &args.path)
        .map_err(|e| Error::Restructure(format!("cannot read '{}': {e}", args.path.display())))?;
    let schema = resolve_schema(&registry, &tree, args.project_type.as_deref())
        .map_err(Error::Restructure)?;

    let diff = plan(&tree, schema, !args.keep_nonstandard);
    let changes = apply(ctx.fs.as_ref(), &args.path, &diff)
        .map_err(|e| Error::Restructure(format!("applying the plan failed: {e}")))?;

    // Refresh the boilerplate so manifests reflect the new shape.
    let vars = template_vars(ctx, &project_name, &schema.type_name, None, None);
    for file in ctx.templates.render_all(&vars) {
        ctx.fs
            .write(&args.path.join(&file.name), &file.contents)
            .map_err(|e| Error::Restructure(format!("cannot write '{}': {e}", file.name)))?;
    }

    let moved: Vec<_> = changes
        .moved_files
        .iter()
        .map(|(from, to)| json!({"from": from, "to": to}))
        .collect();

    Ok(Outcome::ok_with_warnings(
        "Project restructured successfully",
        json!({
            "backup_path": backup_path,
            "project_type": schema.type_name,
            "created_directories": changes.created_dirs,
            "moved_files": moved,
            "removed_directories": changes.removed_dirs,
        }),
        warnings,
    ))
}
