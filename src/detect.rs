//! Project-type detection from an existing directory layout.

use crate::schema::SchemaRegistry;
use crate::tree::DirectoryTree;

/// Minimum match ratio (exclusive) for a confident detection.
pub const DETECT_THRESHOLD: f64 = 0.3;

/// Infers which schema best matches the captured tree.
///
/// For each schema the match ratio is the fraction of its required
/// directories that exist in the snapshot; schemas with no required
/// directories are skipped (undefined ratio). The strictly highest ratio
/// wins; on a tie the schema declared earlier in the registry wins — an
/// arbitrary but documented tie-break. Returns `None` when the best ratio is
/// at or below [`DETECT_THRESHOLD`]; callers should then fall back to
/// `general` rather than treat this as an error.
#[must_use]
pub fn detect<'a>(tree: &DirectoryTree, registry: &'a SchemaRegistry) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;

    for schema in registry.schemas() {
        if schema.required_dirs.is_empty() {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = {
            let matches = schema.required_dirs.iter().filter(|d| tree.has_dir(d)).count();
            matches as f64 / schema.required_dirs.len() as f64
        };
        if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
            best = Some((&schema.type_name, ratio));
        }
    }

    best.and_then(|(name, ratio)| (ratio > DETECT_THRESHOLD).then_some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Schema, ScoringWeights};

    fn registry(entries: &[(&str, &[&str])]) -> SchemaRegistry {
        let schemas = entries
            .iter()
            .map(|(name, dirs)| Schema {
                type_name: (*name).to_string(),
                description: String::new(),
                required_dirs: dirs.iter().map(ToString::to_string).collect(),
                optional_dirs: Vec::new(),
                required_files: Vec::new(),
                weights: ScoringWeights::default(),
            })
            .collect::<Vec<_>>();
        SchemaRegistry::from_schemas(schemas)
    }

    fn tree(dirs: &[&str]) -> DirectoryTree {
        let mut tree = DirectoryTree::default();
        for dir in dirs {
            tree.dirs.insert((*dir).to_string());
        }
        tree
    }

    #[test]
    fn highest_ratio_wins() {
        let registry =
            registry(&[("alpha", &["a", "b", "c"]), ("beta", &["a", "b"]), ("general", &["x"])]);
        assert_eq!(detect(&tree(&["a", "b"]), &registry), Some("beta"));
    }

    #[test]
    fn ties_go_to_the_earlier_registry_entry() {
        let registry = registry(&[("first", &["a", "b"]), ("second", &["a", "c"])]);
        assert_eq!(detect(&tree(&["a"]), &registry), Some("first"));
    }

    #[test]
    fn low_ratios_yield_none() {
        let registry = registry(&[("alpha", &["a", "b", "c", "d"])]);
        // 1/4 = 0.25 <= threshold
        assert_eq!(detect(&tree(&["a"]), &registry), None);
    }

    #[test]
    fn ratio_exactly_at_threshold_yields_none() {
        let registry = registry(&[("alpha", &["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"])]);
        // 3/10 = 0.3, not strictly above
        assert_eq!(detect(&tree(&["a", "b", "c"]), &registry), None);
    }

    #[test]
    fn schemas_without_required_dirs_are_skipped() {
        let registry = registry(&[("empty", &[]), ("alpha", &["a"])]);
        assert_eq!(detect(&tree(&["a"]), &registry), Some("alpha"));
    }

    #[test]
    fn nested_required_dirs_match_captured_nested_paths() {
        let registry = registry(&[("research", &["data/raw", "codes/scripts"])]);
        assert_eq!(detect(&tree(&["data", "data/raw", "codes", "codes/scripts"]), &registry), Some("research"));
    }
}
