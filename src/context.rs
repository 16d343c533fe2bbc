//! Service context bundling all port trait objects.

use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitRepo;
use crate::ports::templates::ProjectTemplates;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests replace
/// individual fields with in-memory fakes.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for directory and file operations.
    pub fs: Box<dyn FileSystem>,
    /// Git for version-control queries and repository setup.
    pub git: Box<dyn GitRepo>,
    /// Boilerplate file renderer.
    pub templates: Box<dyn ProjectTemplates>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::git::LiveGitRepo;
        use crate::adapters::live::templates::BuiltinTemplates;

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            git: Box::new(LiveGitRepo),
            templates: Box::new(BuiltinTemplates),
        }
    }
}
