//! Git port for version-control queries and repository setup.
//!
//! Every method here is optional from the core's point of view: a failing
//! git call is downgraded to a warning or a null field by the caller, never
//! propagated as an operation failure.

use std::path::Path;

/// Provides read access to, and initialization of, a git repository.
pub trait GitRepo: Send + Sync {
    /// Returns `true` if `path` is the root of a git repository.
    fn is_repo(&self, path: &Path) -> bool;

    /// Returns the number of commits reachable from `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits or git fails.
    fn commit_count(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the number of local branches.
    ///
    /// # Errors
    ///
    /// Returns an error if git fails.
    fn branch_count(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the timestamp of the last commit, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if git fails.
    fn last_commit(
        &self,
        path: &Path,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Initializes a repository at `path`, stages everything, and records an
    /// initial commit with the given message.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three git invocations fails.
    fn init_and_commit(
        &self,
        path: &Path,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
