//! Built-in boilerplate templates with literal `{{var}}` substitution.

use std::collections::BTreeMap;

use crate::ports::templates::{ProjectTemplates, RenderedFile};

const README_TEMPLATE: &str = r"# {{project_name}}

{{description}}

## Project Type
{{project_type}}

## Directory Structure

- `claude-code/` - Assistant conversation history and prompts
- `data/` - Data files (raw and processed)
- `codes/` - Analysis scripts and code
- `paper/` - Paper-related content
- `pre/` - Preliminary work and planning

## Created
- Date: {{creation_date}}
- Author: {{author_name}}
";

const GITIGNORE_TEMPLATE: &str = r"# Python
__pycache__/
*.py[cod]
*.so
build/
dist/
*.egg-info/

# Data files
*.csv
*.xlsx
data/raw/*
!data/raw/.gitkeep

# Outputs
outputs/
figures/
*.pdf
*.png

# IDE
.vscode/
.idea/
*.swp

# OS
.DS_Store
Thumbs.db

# Project specific
.env
config/local.*
";

const PROJECT_YML_TEMPLATE: &str = r"project:
  name: {{project_name}}
  type: {{project_type}}
  description: {{description}}
  created: {{creation_date}}
  author: {{author_name}}

structure:
  - claude-code
  - data
  - codes
  - paper
  - pre

metadata:
  version: 0.1.0
  last_updated: {{creation_date}}
";

const PROJECT_CONFIG_TEMPLATE: &str = r#"{
  "project_name": "{{project_name}}",
  "project_type": "{{project_type}}",
  "created_at": "{{creation_date}}",
  "author": "{{author_name}}",
  "description": "{{description}}",
  "version": "0.1.0",
  "structure_version": "1.0",
  "config": {
    "backup_enabled": true,
    "auto_validate": true,
    "git_integration": true
  }
}
"#;

/// The fixed boilerplate set: readme, ignore file, project manifest, and
/// project metadata file.
pub struct BuiltinTemplates;

/// Replaces every `{{var}}` (and spaced `{{ var }}`) token literally.
/// Tokens without a matching variable are left verbatim.
fn substitute(template: &str, vars: &BTreeMap<String, String>) -> String {
    let mut content = template.to_string();
    for (var, value) in vars {
        content = content.replace(&format!("{{{{{var}}}}}"), value);
        content = content.replace(&format!("{{{{ {var} }}}}"), value);
    }
    content
}

impl ProjectTemplates for BuiltinTemplates {
    fn render_all(&self, vars: &BTreeMap<String, String>) -> Vec<RenderedFile> {
        [
            ("README.md", README_TEMPLATE),
            (".gitignore", GITIGNORE_TEMPLATE),
            ("project.yml", PROJECT_YML_TEMPLATE),
            (".project-config.json", PROJECT_CONFIG_TEMPLATE),
        ]
        .into_iter()
        .map(|(name, template)| RenderedFile {
            name: name.to_string(),
            contents: substitute(template, vars),
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn substitute_replaces_known_tokens() {
        let rendered = substitute("# {{name}} ({{ name }})", &vars(&[("name", "demo")]));
        assert_eq!(rendered, "# demo (demo)");
    }

    #[test]
    fn substitute_leaves_unresolved_tokens_verbatim() {
        let rendered = substitute("by {{author_name}}", &vars(&[("name", "demo")]));
        assert_eq!(rendered, "by {{author_name}}");
    }

    #[test]
    fn render_all_produces_the_fixed_file_set() {
        let files = BuiltinTemplates.render_all(&vars(&[
            ("project_name", "my-study"),
            ("project_type", "general"),
        ]));
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["README.md", ".gitignore", "project.yml", ".project-config.json"]);

        let readme = &files[0].contents;
        assert!(readme.starts_with("# my-study"));
        assert!(readme.contains("general"));
        // Variables not supplied stay as-is.
        assert!(readme.contains("{{creation_date}}"));
    }
}
