//! Template port for rendering project boilerplate files.

use std::collections::BTreeMap;

/// One rendered boilerplate file, ready to be written at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Filename relative to the project root (e.g. `README.md`).
    pub name: String,
    /// Fully substituted file contents.
    pub contents: String,
}

/// Renders the fixed set of boilerplate files for a project.
///
/// Substitution is a literal find-and-replace of `{{var}}` tokens, not a
/// general template engine; unresolved tokens are left verbatim.
pub trait ProjectTemplates: Send + Sync {
    /// Renders every boilerplate file with the given variable map.
    fn render_all(&self, vars: &BTreeMap<String, String>) -> Vec<RenderedFile>;
}
