//! `labkit status` command.

use serde_json::{json, Map, Value};

use crate::cli::StatusArgs;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::outcome::Outcome;

use super::{emit, validate};

/// Execute the `status` command.
///
/// # Errors
///
/// Returns an error string only if the envelope cannot be printed.
pub fn run(ctx: &ServiceContext, args: &StatusArgs) -> Result<(), String> {
    let outcome = execute(ctx, args).unwrap_or_else(|err| Outcome::failure(&err));
    emit(&outcome)
}

fn round_mib(bytes: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let mib = bytes as f64 / (1024.0 * 1024.0);
    (mib * 10.0).round() / 10.0
}

fn execute(ctx: &ServiceContext, args: &StatusArgs) -> Result<Outcome, Error> {
    if !ctx.fs.exists(&args.path) {
        return Err(Error::Validation(format!(
            "project directory '{}' does not exist",
            args.path.display()
        )));
    }

    let project_name = args
        .path
        .file_name()
        .map_or_else(|| "project".to_string(), |n| n.to_string_lossy().into_owned());
    let last_modified = ctx.fs.modified(&args.path).map(|t| t.to_rfc3339());

    let (compliance_score, project_type) = validate::assess(ctx, &args.path)?;

    let mut structure_stats = Map::new();
    structure_stats.insert("compliance_score".into(), json!(compliance_score));
    let mut file_breakdown = Value::Null;
    if !args.no_file_stats {
        let stats = ctx
            .fs
            .walk_stats(&args.path)
            .map_err(|e| Error::Validation(format!("cannot walk '{}': {e}", args.path.display())))?;
        structure_stats.insert("total_directories".into(), json!(stats.directories));
        structure_stats.insert("total_files".into(), json!(stats.files));
        structure_stats.insert("project_size_mb".into(), json!(round_mib(stats.bytes)));
        let breakdown: Map<String, Value> = stats
            .per_dir
            .iter()
            .map(|(dir, d)| {
                (dir.clone(), json!({"files": d.files, "size_mb": round_mib(d.bytes)}))
            })
            .collect();
        file_breakdown = Value::Object(breakdown);
    }

    let mut warnings = Vec::new();
    let mut git_info = Value::Null;
    if !args.no_git && ctx.git.is_repo(&args.path) {
        // Each query degrades to null independently; git trouble is never an
        // operation failure.
        let commits = match ctx.git.commit_count(&args.path) {
            Ok(n) => json!(n),
            Err(e) => {
                warnings.push(format!("Failed to count commits: {e}"));
                Value::Null
            }
        };
        let branches = match ctx.git.branch_count(&args.path) {
            Ok(n) => json!(n),
            Err(e) => {
                warnings.push(format!("Failed to count branches: {e}"));
                Value::Null
            }
        };
        let last_commit = match ctx.git.last_commit(&args.path) {
            Ok(ts) => json!(ts),
            Err(e) => {
                warnings.push(format!("Failed to read last commit: {e}"));
                Value::Null
            }
        };
        git_info = json!({
            "commits": commits,
            "branches": branches,
            "last_commit": last_commit,
        });
    }

    Ok(Outcome::ok_with_warnings(
        "Status report generated",
        json!({
            "project_info": {
                "name": project_name,
                "path": args.path.display().to_string(),
                "type": project_type,
                "last_modified": last_modified,
            },
            "structure_stats": structure_stats,
            "file_breakdown": file_breakdown,
            "git_info": git_info,
        }),
        warnings,
    ))
}
