//! Restructure planner: the three-way diff that moves a tree toward a
//! schema, and its (non-transactional) application.
//!
//! Loose files are routed by filename extension only; contents are never
//! inspected, and a file whose extension is unmapped stays where it is.

use std::collections::BTreeSet;
use std::path::Path;

use crate::analyze::dir_is_standard;
use crate::ports::filesystem::FileSystem;
use crate::schema::Schema;
use crate::tree::{is_reserved, DirectoryTree};

/// Ordered extension routing table; the first matching entry wins. Values
/// are the top-level schema component the file belongs under.
pub const EXTENSION_ROUTES: [(&str, &str); 6] = [
    ("py", "codes"),
    ("R", "codes"),
    ("md", "paper"),
    ("csv", "data"),
    ("xlsx", "data"),
    ("json", "data"),
];

/// Computed diff between a snapshot and a target schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RestructurePlan {
    /// Required directories to create, in schema order.
    pub dirs_to_create: Vec<String>,
    /// Nonstandard top-level directories to delete.
    pub dirs_to_remove: Vec<String>,
    /// `(source, destination)` relative paths for loose-file moves.
    pub file_moves: Vec<(String, String)>,
}

impl RestructurePlan {
    /// Returns `true` when the plan changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs_to_create.is_empty()
            && self.dirs_to_remove.is_empty()
            && self.file_moves.is_empty()
    }
}

/// What `apply` actually changed on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppliedChanges {
    /// Directories that did not exist and were created.
    pub created_dirs: Vec<String>,
    /// Moves that were carried out.
    pub moved_files: Vec<(String, String)>,
    /// Directories that were deleted.
    pub removed_dirs: Vec<String>,
}

fn extension(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// First schema directory (required before optional, in declaration order)
/// whose leading component matches the routing category.
fn route_target<'a>(schema: &'a Schema, category: &str) -> Option<&'a str> {
    schema
        .required_dirs
        .iter()
        .chain(schema.optional_dirs.iter())
        .map(String::as_str)
        .find(|entry| entry.split('/').next() == Some(category))
}

/// Computes the restructure diff for one snapshot and target schema.
///
/// Steps run in a fixed order: missing required directories first, then
/// extension-routed file moves (skipping moves whose destination already
/// holds a same-named file), then — only when `remove_nonstandard` —
/// deletions of top-level directories that are neither schema-sanctioned
/// nor reserved. Removals are judged against the pre-move snapshot, so
/// directories the plan itself creates are never removal candidates.
#[must_use]
pub fn plan(tree: &DirectoryTree, schema: &Schema, remove_nonstandard: bool) -> RestructurePlan {
    let mut plan = RestructurePlan::default();

    let mut seen = BTreeSet::new();
    for dir in &schema.required_dirs {
        if seen.insert(dir.as_str()) && !tree.has_dir(dir) {
            plan.dirs_to_create.push(dir.clone());
        }
    }

    for name in tree.files.keys() {
        if schema.required_files.iter().any(|f| f == name) {
            continue;
        }
        let Some(ext) = extension(name) else { continue };
        let Some((_, category)) = EXTENSION_ROUTES.iter().find(|(e, _)| *e == ext) else {
            continue;
        };
        let Some(dest_dir) = route_target(schema, category) else { continue };
        if tree.has_file_in(dest_dir, name) {
            continue;
        }
        plan.file_moves.push((name.clone(), format!("{dest_dir}/{name}")));
    }

    if remove_nonstandard {
        for dir in tree.top_level_dirs() {
            if !is_reserved(dir) && !dir_is_standard(schema, dir) {
                plan.dirs_to_remove.push(dir.to_string());
            }
        }
    }

    plan
}

/// Applies a plan to the tree rooted at `root`.
///
/// Not transactional: a failure partway through leaves the mixed state
/// behind, which is why callers take a backup before calling this. Creations
/// and moves re-check the disk, so applying the same plan twice performs no
/// additional work the second time.
///
/// # Errors
///
/// Returns the first filesystem error encountered.
pub fn apply(
    fs: &dyn FileSystem,
    root: &Path,
    plan: &RestructurePlan,
) -> Result<AppliedChanges, Box<dyn std::error::Error + Send + Sync>> {
    let mut changes = AppliedChanges::default();

    for dir in &plan.dirs_to_create {
        let target = root.join(dir);
        if !fs.exists(&target) {
            fs.create_dir_all(&target)?;
            changes.created_dirs.push(dir.clone());
        }
    }

    for (source, dest) in &plan.file_moves {
        let from = root.join(source);
        let to = root.join(dest);
        // Re-check at apply time; the source may already have been moved and
        // the destination may have gained a file since planning.
        if !fs.exists(&from) || fs.exists(&to) {
            continue;
        }
        fs.rename(&from, &to)?;
        changes.moved_files.push((source.clone(), dest.clone()));
    }

    for dir in &plan.dirs_to_remove {
        let target = root.join(dir);
        if fs.exists(&target) {
            fs.remove_dir_all(&target)?;
            changes.removed_dirs.push(dir.clone());
        }
    }

    Ok(changes)
}
