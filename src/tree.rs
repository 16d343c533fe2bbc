//! Point-in-time snapshot of a project directory.
//!
//! Every operation captures one snapshot up front and computes against it;
//! nothing here stays valid if the filesystem changes concurrently. Capture
//! lists the project root plus one nested level, which is as deep as schema
//! entries such as `data/raw` reach.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::ports::filesystem::FileSystem;

/// Directory names never classified as extra or nonstandard, regardless of
/// schema. Kept as one list so the allowlist is not scattered through the
/// classification code.
pub const RESERVED_NAMES: [&str; 4] = [".git", ".claude", ".claude-plugin", "__pycache__"];

/// Returns `true` for directory names on the reserved allowlist.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Captured state of a project directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryTree {
    /// Relative directory paths, top level plus one nested level
    /// (`data`, `data/raw`). Reserved directories appear but are not
    /// descended into.
    pub dirs: BTreeSet<String>,
    /// Top-level filenames with sizes in bytes.
    pub files: BTreeMap<String, u64>,
    /// Filenames per captured subdirectory, for move-collision checks.
    pub files_in: BTreeMap<String, BTreeSet<String>>,
    /// Last modification time of the project root.
    pub modified: Option<DateTime<Utc>>,
}

impl DirectoryTree {
    /// Captures a snapshot of `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root or one of its subdirectories cannot be
    /// listed.
    pub fn capture(
        fs: &dyn FileSystem,
        root: &Path,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut tree = Self { modified: fs.modified(root), ..Self::default() };

        for entry in fs.list_entries(root)? {
            if !entry.is_dir {
                tree.files.insert(entry.name, entry.size);
                continue;
            }
            tree.dirs.insert(entry.name.clone());
            if is_reserved(&entry.name) {
                continue;
            }
            for sub in fs.list_entries(&root.join(&entry.name))? {
                let rel = format!("{}/{}", entry.name, sub.name);
                if sub.is_dir {
                    tree.dirs.insert(rel.clone());
                    let mut leaves = BTreeSet::new();
                    for leaf in fs.list_entries(&root.join(&entry.name).join(&sub.name))? {
                        if !leaf.is_dir {
                            leaves.insert(leaf.name);
                        }
                    }
                    if !leaves.is_empty() {
                        tree.files_in.insert(rel, leaves);
                    }
                } else {
                    tree.files_in.entry(entry.name.clone()).or_default().insert(sub.name);
                }
            }
        }
        Ok(tree)
    }

    /// Top-level directory names only (no `/` in the path).
    pub fn top_level_dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str).filter(|d| !d.contains('/'))
    }

    /// Returns `true` if the captured tree contains the relative dir path.
    #[must_use]
    pub fn has_dir(&self, rel: &str) -> bool {
        self.dirs.contains(rel)
    }

    /// Returns `true` if a `.git` directory exists at the top level.
    #[must_use]
    pub fn git_present(&self) -> bool {
        self.dirs.contains(".git")
    }

    /// Returns `true` if the captured tree has a file named `name` directly
    /// inside directory `dir`.
    #[must_use]
    pub fn has_file_in(&self, dir: &str, name: &str) -> bool {
        self.files_in.get(dir).is_some_and(|set| set.contains(name))
    }
}
