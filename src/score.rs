//! Compliance scorer: weighted 0–100 score plus issues and suggestions.

use crate::analyze::AnalysisResult;
use crate::schema::Schema;

/// Scorer output: the score plus deterministic issue/suggestion pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    /// Weighted compliance score in `[0, 100]`.
    pub score: u8,
    /// One issue string per non-empty problem category.
    pub issues: Vec<String>,
    /// One suggestion paired with each issue.
    pub suggestions: Vec<String>,
}

/// Ratio of present entries over required entries for one component.
/// An empty required list contributes 0 rather than full weight.
fn component(required: usize, missing: usize, weight: u32) -> f64 {
    if required == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = (required.saturating_sub(missing)) as f64 / required as f64;
    ratio.max(0.0) * f64::from(weight)
}

/// Scores an analysis against its schema.
///
/// The score is `floor(dir + file + content + git)` where the directory and
/// file components scale their weight by the fraction of required entries
/// present, the content component is all-or-nothing on every required file
/// being present, and the git component is granted when a `.git` directory
/// exists. Extra directories only surface as an issue in strict mode.
#[must_use]
pub fn score(
    analysis: &AnalysisResult,
    schema: &Schema,
    git_present: bool,
    strict: bool,
) -> ScoreReport {
    let weights = &schema.weights;

    let dir_component = component(
        analysis.present_dirs.len() + analysis.missing_dirs.len(),
        analysis.missing_dirs.len(),
        weights.directories,
    );
    let file_component = component(
        analysis.present_files.len() + analysis.missing_files.len(),
        analysis.missing_files.len(),
        weights.required_files,
    );
    let content_component =
        if analysis.missing_files.is_empty() { f64::from(weights.content_quality) } else { 0.0 };
    let git_component = if git_present { f64::from(weights.git_integration) } else { 0.0 };

    let total = (dir_component + file_component + content_component + git_component).floor();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = total.clamp(0.0, 100.0) as u8;

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if !analysis.missing_dirs.is_empty() {
        let list = analysis.missing_dirs.join(", ");
        issues.push(format!("Missing required directories: {list}"));
        suggestions.push(format!("Create missing directories: {list}"));
    }
    if !analysis.missing_files.is_empty() {
        let list = analysis.missing_files.join(", ");
        issues.push(format!("Missing required files: {list}"));
        suggestions.push(format!("Create missing files: {list}"));
    }
    if strict && !analysis.extra_dirs.is_empty() {
        let preview: Vec<&str> =
            analysis.extra_dirs.iter().take(3).map(String::as_str).collect();
        issues.push(format!("Extra directories found: {}", preview.join(", ")));
        suggestions
            .push("Remove extra directories or move them to appropriate locations".to_string());
    }

    ScoreReport { score, issues, suggestions }
}
