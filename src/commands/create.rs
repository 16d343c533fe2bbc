//! `labkit create` command.

use std::path::PathBuf;

use serde_json::json;

use crate::cli::CreateArgs;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::outcome::Outcome;
use crate::schema::SchemaRegistry;

use super::{emit, template_vars};

/// Returns `true` for kebab-case names: a lowercase letter first, a letter
/// or digit last, and only `[a-z0-9-]` in between.
#[must_use]
pub fn is_kebab_case(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    bytes[0].is_ascii_lowercase()
        && (bytes[bytes.len() - 1].is_ascii_lowercase() || bytes[bytes.len() - 1].is_ascii_digit())
        && bytes.iter().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// Execute the `create` command.
///
/// # Errors
///
/// Returns an error string only if the envelope cannot be printed.
pub fn run(ctx: &ServiceContext, args: &CreateArgs) -> Result<(), String> {
    let outcome = execute(ctx, args).unwrap_or_else(|err| Outcome::failure(&err));
    emit(&outcome)
}

fn execute(ctx: &ServiceContext, args: &CreateArgs) -> Result<Outcome, Error> {
    if !is_kebab_case(&args.name) {
        return Err(Error::Creation(format!(
            "invalid project name '{}': must be kebab-case",
            args.name
        )));
    }

    let registry = SchemaRegistry::load(ctx.fs.as_ref())?;
    let schema = registry.get(&args.project_type).ok_or_else(|| {
        Error::Creation(format!(
            "unknown project type '{}'; available: {}",
            args.project_type,
            registry.type_names().join(", ")
        ))
    })?;

    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let project_path = root.join(&args.name);
    if ctx.fs.exists(&project_path) && !args.force {
        return Err(Error::Creation(format!(
            "project directory '{}' already exists; pass --force to overwrite",
            project_path.display()
        )));
    }

    let mut created_dirs = Vec::new();
    ctx.fs
        .create_dir_all(&project_path)
        .map_err(|e| Error::Creation(format!("cannot create project root: {e}")))?;
    created_dirs.push(project_path.display().to_string());
    for dir in schema.required_dirs.iter().chain(schema.optional_dirs.iter()) {
        let full = project_path.join(dir);
        ctx.fs
            .create_dir_all(&full)
            .map_err(|e| Error::Creation(format!("cannot create '{dir}': {e}")))?;
        created_dirs.push(full.display().to_string());
    }

    let vars = template_vars(
        ctx,
        &args.name,
        &schema.type_name,
        args.author.as_deref(),
        args.description.as_deref(),
    );
    let mut created_files = Vec::new();
    for file in ctx.templates.render_all(&vars) {
        ctx.fs
            .write(&project_path.join(&file.name), &file.contents)
            .map_err(|e| Error::Creation(format!("cannot write '{}': {e}", file.name)))?;
        created_files.push(file.name);
    }

    let mut warnings = Vec::new();
    let mut git_initialized = false;
    if !args.no_git {
        // A failed init is a warning, never an operation failure.
        match ctx.git.init_and_commit(&project_path, &format!("Initial commit: {}", args.name)) {
            Ok(()) => git_initialized = true,
            Err(e) => warnings.push(format!("Git initialization failed: {e}")),
        }
    }

    Ok(Outcome::ok_with_warnings(
        format!("Project '{}' created successfully", args.name),
        json!({
            "project_path": project_path.display().to_string(),
            "project_type": schema.type_name,
            "created_directories": created_dirs,
            "created_files": created_files,
            "git_initialized": git_initialized,
        }),
        warnings,
    ))
}
