//! Structure analyzer: classifies a snapshot against one schema.
//!
//! Pure function of (snapshot, schema); the same inputs always produce the
//! same classification.

use std::collections::BTreeSet;

use crate::schema::Schema;
use crate::tree::{is_reserved, DirectoryTree};

/// Classification of every entry in a snapshot relative to one schema.
///
/// `present_dirs` and `missing_dirs` together cover exactly the schema's
/// required directories, in schema order and without duplicates. The same
/// holds for the file lists and required files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    /// Required directories that exist.
    pub present_dirs: Vec<String>,
    /// Required directories that are absent.
    pub missing_dirs: Vec<String>,
    /// Top-level directories that are neither schema entries nor reserved.
    pub extra_dirs: Vec<String>,
    /// Required files that exist at the project root.
    pub present_files: Vec<String>,
    /// Required files that are absent.
    pub missing_files: Vec<String>,
    /// Top-level non-dot files the schema does not require.
    pub extra_files: Vec<String>,
}

/// Returns `true` if a top-level directory is sanctioned by the schema:
/// either listed directly, or the leading component of a nested entry
/// (`data` is standard when the schema lists `data/raw`).
#[must_use]
pub fn dir_is_standard(schema: &Schema, name: &str) -> bool {
    schema
        .required_dirs
        .iter()
        .chain(schema.optional_dirs.iter())
        .any(|entry| entry == name || entry.split('/').next() == Some(name))
}

fn dedup_in_order(items: &[String]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    items.iter().map(String::as_str).filter(|item| seen.insert(*item)).collect()
}

/// Classifies the snapshot against the schema.
#[must_use]
pub fn analyze(tree: &DirectoryTree, schema: &Schema) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    for dir in dedup_in_order(&schema.required_dirs) {
        if tree.has_dir(dir) {
            result.present_dirs.push(dir.to_string());
        } else {
            result.missing_dirs.push(dir.to_string());
        }
    }

    for dir in tree.top_level_dirs() {
        if !is_reserved(dir) && !dir_is_standard(schema, dir) {
            result.extra_dirs.push(dir.to_string());
        }
    }

    for file in dedup_in_order(&schema.required_files) {
        if tree.files.contains_key(file) {
            result.present_files.push(file.to_string());
        } else {
            result.missing_files.push(file.to_string());
        }
    }

    for file in tree.files.keys() {
        if !file.starts_with('.') && !schema.required_files.iter().any(|f| f == file) {
            result.extra_files.push(file.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ScoringWeights;

    fn schema(required_dirs: &[&str], optional_dirs: &[&str], required_files: &[&str]) -> Schema {
        Schema {
            type_name: "test".into(),
            description: String::new(),
            required_dirs: required_dirs.iter().map(ToString::to_string).collect(),
            optional_dirs: optional_dirs.iter().map(ToString::to_string).collect(),
            required_files: required_files.iter().map(ToString::to_string).collect(),
            weights: ScoringWeights::default(),
        }
    }

    fn tree(dirs: &[&str], files: &[&str]) -> DirectoryTree {
        let mut tree = DirectoryTree::default();
        for dir in dirs {
            tree.dirs.insert((*dir).to_string());
        }
        for file in files {
            tree.files.insert((*file).to_string(), 0);
        }
        tree
    }

    #[test]
    fn present_and_missing_partition_the_required_dirs() {
        let schema = schema(&["a", "b", "c"], &[], &[]);
        let result = analyze(&tree(&["b"], &[]), &schema);
        assert_eq!(result.present_dirs, vec!["b"]);
        assert_eq!(result.missing_dirs, vec!["a", "c"]);

        let mut combined: Vec<&str> = Vec::new();
        combined.extend(result.present_dirs.iter().map(String::as_str));
        combined.extend(result.missing_dirs.iter().map(String::as_str));
        combined.sort_unstable();
        assert_eq!(combined, vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_schema_entries_are_counted_once() {
        let schema = schema(&["a", "a"], &[], &["R.md", "R.md"]);
        let result = analyze(&tree(&[], &[]), &schema);
        assert_eq!(result.missing_dirs, vec!["a"]);
        assert_eq!(result.missing_files, vec!["R.md"]);
    }

    #[test]
    fn reserved_names_are_never_extra() {
        let schema = schema(&["data"], &[], &[]);
        let result = analyze(&tree(&["data", ".git", "__pycache__", "junk"], &[]), &schema);
        assert_eq!(result.extra_dirs, vec!["junk"]);
    }

    #[test]
    fn nested_schema_entries_sanction_their_top_level_parent() {
        let schema = schema(&["data/raw", "codes/scripts"], &[], &[]);
        let result = analyze(&tree(&["data", "data/raw", "codes", "stuff"], &[]), &schema);
        assert_eq!(result.present_dirs, vec!["data/raw"]);
        assert_eq!(result.missing_dirs, vec!["codes/scripts"]);
        assert_eq!(result.extra_dirs, vec!["stuff"]);
    }

    #[test]
    fn dotfiles_are_not_extra_files() {
        let schema = schema(&[], &[], &["README.md"]);
        let result = analyze(&tree(&[], &["README.md", ".env", "notes.txt"]), &schema);
        assert_eq!(result.present_files, vec!["README.md"]);
        assert_eq!(result.extra_files, vec!["notes.txt"]);
    }

    #[test]
    fn analyze_is_pure() {
        let schema = schema(&["a", "b"], &["c"], &["R.md"]);
        let snapshot = tree(&["a", "c", "junk"], &["R.md", "x.py"]);
        assert_eq!(analyze(&snapshot, &schema), analyze(&snapshot, &schema));
    }
}
