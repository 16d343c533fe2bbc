//! Live git adapter using `git` CLI commands.

use std::path::Path;
use std::process::Command;

use crate::ports::git::GitRepo;

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

fn run_git(
    path: &Path,
    args: &[&str],
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let output = Command::new("git").args(args).current_dir(path).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {stderr}", args.join(" ")).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl GitRepo for LiveGitRepo {
    fn is_repo(&self, path: &Path) -> bool {
        path.join(".git").exists()
    }

    fn commit_count(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let stdout = run_git(path, &["rev-list", "--count", "HEAD"])?;
        Ok(stdout.trim().parse()?)
    }

    fn branch_count(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let stdout = run_git(path, &["branch", "--list"])?;
        Ok(stdout.lines().filter(|line| !line.trim().is_empty()).count() as u64)
    }

    fn last_commit(
        &self,
        path: &Path,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let stdout = run_git(path, &["log", "-1", "--format=%ci"])?;
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    fn init_and_commit(
        &self,
        path: &Path,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(path, &["init"])?;
        run_git(path, &["add", "."])?;
        run_git(path, &["commit", "-m", message])?;
        Ok(())
    }
}
