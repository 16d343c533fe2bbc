//! `labkit validate` command.

use std::path::Path;

use serde_json::json;

use crate::analyze::analyze;
use crate::cli::ValidateArgs;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::outcome::Outcome;
use crate::schema::SchemaRegistry;
use crate::score::score;
use crate::tree::DirectoryTree;

use super::{emit, resolve_schema, template_vars};

/// Execute the `validate` command.
///
/// # Errors
///
/// Returns an error string only if the envelope cannot be printed.
pub fn run(ctx: &ServiceContext, args: &ValidateArgs) -> Result<(), String> {
    let outcome = execute(ctx, args).unwrap_or_else(|err| Outcome::failure(&err));
    emit(&outcome)
}

/// Runs the capture → detect → analyze → score pipeline and returns the
/// compliance score with the resolved type name. Shared with `status`.
pub(crate) fn assess(ctx: &ServiceContext, path: &Path) -> Result<(u8, String), Error> {
    let registry = SchemaRegistry::load(ctx.fs.as_ref())?;
    let tree = DirectoryTree::capture(ctx.fs.as_ref(), path)
        .map_err(|e| Error::Validation(format!("cannot read '{}': {e}", path.display())))?;
    let schema = resolve_schema(&registry, &tree, None).map_err(Error::Validation)?;
    let analysis = analyze(&tree, schema);
    let report = score(&analysis, schema, tree.git_present(), false);
    Ok((report.score, schema.type_name.clone()))
}

fn execute(ctx: &ServiceContext, args: &ValidateArgs) -> Result<Outcome, Error> {
    if !ctx.fs.exists(&args.path) {
        return Err(Error::Validation(format!(
            "project directory '{}' does not exist",
            args.path.display()
        )));
    }

    let registry = SchemaRegistry::load(ctx.fs.as_ref())?;
    let tree = DirectoryTree::capture(ctx.fs.as_ref(), &args.path)
        .map_err(|e| Error::Validation(format!("cannot read '{}': {e}", args.path.display())))?;
    let schema = resolve_schema(&registry, &tree, args.project_type.as_deref())
        .map_err(Error::Validation)?;

    let analysis = analyze(&tree, schema);
    let report = score(&analysis, schema, tree.git_present(), args.strict);

    let mut fixes_applied = Vec::new();
    if args.fix_issues {
        for dir in &analysis.missing_dirs {
            ctx.fs
                .create_dir_all(&args.path.join(dir))
                .map_err(|e| Error::Validation(format!("cannot create '{dir}': {e}")))?;
            fixes_applied.push(format!("Created directory: {dir}"));
        }
        if !analysis.missing_files.is_empty() {
            let project_name = args
                .path
                .file_name()
                .map_or_else(|| "project".to_string(), |n| n.to_string_lossy().into_owned());
            let vars = template_vars(ctx, &project_name, &schema.type_name, None, None);
            for file in ctx.templates.render_all(&vars) {
                if analysis.missing_files.contains(&file.name) {
                    ctx.fs
                        .write(&args.path.join(&file.name), &file.contents)
                        .map_err(|e| Error::Validation(format!("cannot write '{}': {e}", file.name)))?;
                    fixes_applied.push(format!("Created file: {}", file.name));
                }
            }
        }
    }

    let missing_items: Vec<&String> =
        analysis.missing_dirs.iter().chain(analysis.missing_files.iter()).collect();
    let extra_items: Vec<&String> =
        analysis.extra_dirs.iter().chain(analysis.extra_files.iter()).collect();

    Ok(Outcome::ok(
        "Validation completed",
        json!({
            "compliance_score": report.score,
            "project_type": schema.type_name,
            "structure_analysis": {
                "required_dirs_present": analysis.present_dirs,
                "required_files_present": analysis.present_files,
                "missing_items": missing_items,
                "extra_items": extra_items,
            },
            "issues_found": report.issues,
            "suggestions": report.suggestions,
            "fixes_applied": fixes_applied,
        }),
    ))
}
