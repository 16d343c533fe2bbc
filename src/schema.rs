//! Schema registry: named project-type shapes and scoring weights.
//!
//! A schema declares the required and optional directories, required files,
//! and scoring weights for one project type. The registry holds every loaded
//! schema in declaration order (detection ties go to the earlier entry) and
//! always contains a `general` fallback.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ports::filesystem::FileSystem;

/// Environment variable naming an external schema configuration file.
///
/// When unset, or when the named file does not exist, the built-in schema
/// set is used. An existing file fully replaces the built-ins (no merging).
pub const CONFIG_ENV: &str = "LABKIT_CONFIG";

/// Weights of the four compliance-score components. Must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of the required-directory component.
    pub directories: u32,
    /// Weight of the required-file component.
    pub required_files: u32,
    /// Weight of the all-required-files-present component.
    pub content_quality: u32,
    /// Weight of the `.git` presence component.
    pub git_integration: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self { directories: 40, required_files: 35, content_quality: 15, git_integration: 10 }
    }
}

impl ScoringWeights {
    /// Sum of all four weights.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.directories + self.required_files + self.content_quality + self.git_integration
    }
}

/// The declared shape of one project type. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Registry key (e.g. `research-project`).
    pub type_name: String,
    /// One-line human description.
    #[serde(default)]
    pub description: String,
    /// Directories that must exist, in declaration order. Entries may be
    /// nested relative paths such as `data/raw`.
    pub required_dirs: Vec<String>,
    /// Directories that are accepted but not required.
    #[serde(default)]
    pub optional_dirs: Vec<String>,
    /// Filenames that must exist at the project root.
    #[serde(default)]
    pub required_files: Vec<String>,
    /// Scoring weights applied when this schema is validated against.
    #[serde(default)]
    pub weights: ScoringWeights,
}

/// Body of one `project_types` entry in the external configuration.
#[derive(Debug, Deserialize)]
struct SchemaSpec {
    #[serde(default)]
    description: String,
    #[serde(default)]
    required_dirs: Vec<String>,
    #[serde(default)]
    optional_dirs: Vec<String>,
    #[serde(default)]
    required_files: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ValidationSection {
    #[serde(default)]
    scoring_weights: Option<ScoringWeights>,
}

/// Ordered collection of schemas keyed by type name.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: Vec<Schema>,
}

const DEFAULT_REQUIRED_FILES: [&str; 4] =
    ["README.md", ".gitignore", "project.yml", ".project-config.json"];

fn builtin_schema(
    type_name: &str,
    description: &str,
    required_dirs: &[&str],
    optional_dirs: &[&str],
) -> Schema {
    Schema {
        type_name: type_name.to_string(),
        description: description.to_string(),
        required_dirs: required_dirs.iter().map(ToString::to_string).collect(),
        optional_dirs: optional_dirs.iter().map(ToString::to_string).collect(),
        required_files: DEFAULT_REQUIRED_FILES.iter().map(ToString::to_string).collect(),
        weights: ScoringWeights::default(),
    }
}

impl SchemaRegistry {
    /// The built-in schema set used when no external configuration exists.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            schemas: vec![
                builtin_schema(
                    "research-project",
                    "Academic research projects with data analysis and paper writing",
                    &[
                        "claude-code",
                        "data/raw",
                        "data/processed",
                        "codes/scripts",
                        "paper/sections",
                        "pre/literature",
                    ],
                    &["data/external", "codes/notebooks", "paper/figures", "pre/proposals"],
                ),
                builtin_schema(
                    "data-analysis",
                    "Data analysis projects with ETL and reporting",
                    &[
                        "claude-code",
                        "data/raw",
                        "data/processed",
                        "codes/etl",
                        "codes/analysis",
                        "reports/drafts",
                    ],
                    &["data/exports", "codes/models", "codes/visualization", "reports/presentations"],
                ),
                builtin_schema(
                    "paper-writing",
                    "Academic paper writing projects",
                    &[
                        "claude-code",
                        "data/figures",
                        "data/tables",
                        "codes/analysis",
                        "paper/chapters",
                        "pre/outlines",
                    ],
                    &["data/supplementary", "paper/sections", "pre/drafts", "pre/reviews"],
                ),
                builtin_schema(
                    "general",
                    "General purpose projects with flexible structure",
                    &["claude-code", "data", "codes", "paper", "pre"],
                    &[],
                ),
            ],
        }
    }

    /// Loads the registry, consulting [`CONFIG_ENV`] for an external source.
    ///
    /// A missing source silently falls back to the built-in set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] only when the external source exists but is
    /// unreadable, malformed, or fails validation.
    pub fn load(fs: &dyn FileSystem) -> Result<Self> {
        let Ok(source) = std::env::var(CONFIG_ENV) else {
            return Ok(Self::builtin());
        };
        let path = PathBuf::from(source);
        if !fs.exists(&path) {
            return Ok(Self::builtin());
        }
        let doc = fs
            .read_to_string(&path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&doc)
    }

    /// Parses a registry from an external YAML document.
    ///
    /// The document shape mirrors the built-in defaults:
    ///
    /// ```yaml
    /// project_types:
    ///   general:
    ///     required_dirs: [data, codes]
    ///     required_files: [README.md]
    /// validation:
    ///   scoring_weights:
    ///     directories: 40
    ///     required_files: 35
    ///     content_quality: 15
    ///     git_integration: 10
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is malformed, if the
    /// weights do not sum to 100, or if no `general` entry is present.
    pub fn from_yaml(doc: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct ConfigDoc {
            project_types: serde_yaml::Mapping,
            #[serde(default)]
            validation: ValidationSection,
        }

        let config: ConfigDoc =
            serde_yaml::from_str(doc).map_err(|e| Error::Config(e.to_string()))?;
        let weights = config.validation.scoring_weights.unwrap_or_default();

        // serde_yaml mappings preserve document order, which fixes the
        // detection tie-break order.
        let mut schemas = Vec::new();
        for (key, value) in config.project_types {
            let type_name: String = serde_yaml::from_value(key)
                .map_err(|e| Error::Config(format!("bad project type key: {e}")))?;
            let spec: SchemaSpec = serde_yaml::from_value(value)
                .map_err(|e| Error::Config(format!("bad project type '{type_name}': {e}")))?;
            schemas.push(Schema {
                type_name,
                description: spec.description,
                required_dirs: spec.required_dirs,
                optional_dirs: spec.optional_dirs,
                required_files: spec.required_files,
                weights,
            });
        }

        let registry = Self { schemas };
        registry.check()?;
        Ok(registry)
    }

    fn check(&self) -> Result<()> {
        if self.get("general").is_none() {
            return Err(Error::Config("a 'general' project type is required".to_string()));
        }
        for schema in &self.schemas {
            let total = schema.weights.total();
            if total != 100 {
                return Err(Error::Config(format!(
                    "scoring weights for '{}' sum to {total}, expected 100",
                    schema.type_name
                )));
            }
        }
        Ok(())
    }

    /// Builds a registry from explicit schemas, preserving their order.
    #[must_use]
    pub fn from_schemas(schemas: Vec<Schema>) -> Self {
        Self { schemas }
    }

    /// Looks up a schema by type name.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.type_name == type_name)
    }

    /// All schemas in declaration order.
    #[must_use]
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// Type names in declaration order, for error messages.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        self.schemas.iter().map(|s| s.type_name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_general_fallback() {
        let registry = SchemaRegistry::builtin();
        let general = registry.get("general").unwrap();
        assert_eq!(general.required_dirs, vec!["claude-code", "data", "codes", "paper", "pre"]);
        assert_eq!(general.required_files.len(), 4);
    }

    #[test]
    fn builtin_weights_always_sum_to_100() {
        let registry = SchemaRegistry::builtin();
        for schema in registry.schemas() {
            assert_eq!(schema.weights.total(), 100, "weights of {}", schema.type_name);
        }
    }

    #[test]
    fn external_document_replaces_builtins_and_keeps_order() {
        let doc = r"
project_types:
  zeta:
    required_dirs: [src]
  alpha:
    required_dirs: [lib]
  general:
    required_dirs: [data, codes]
";
        let registry = SchemaRegistry::from_yaml(doc).unwrap();
        assert_eq!(registry.type_names(), vec!["zeta", "alpha", "general"]);
        assert!(registry.get("research-project").is_none());
        assert_eq!(registry.get("general").unwrap().weights, ScoringWeights::default());
    }

    #[test]
    fn custom_weights_apply_to_every_schema() {
        let doc = r"
project_types:
  general:
    required_dirs: [data]
validation:
  scoring_weights:
    directories: 50
    required_files: 30
    content_quality: 10
    git_integration: 10
";
        let registry = SchemaRegistry::from_yaml(doc).unwrap();
        assert_eq!(registry.get("general").unwrap().weights.directories, 50);
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = SchemaRegistry::from_yaml("project_types: [not, a, map]").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_general_entry_is_rejected() {
        let doc = r"
project_types:
  custom:
    required_dirs: [src]
";
        let err = SchemaRegistry::from_yaml(doc).unwrap_err();
        assert!(err.to_string().contains("general"));
    }

    #[test]
    fn bad_weight_sum_is_rejected() {
        let doc = r"
project_types:
  general:
    required_dirs: [data]
validation:
  scoring_weights:
    directories: 90
    required_files: 30
    content_quality: 10
    git_integration: 10
";
        let err = SchemaRegistry::from_yaml(doc).unwrap_err();
        assert!(err.to_string().contains("sum to 140"));
    }
}
