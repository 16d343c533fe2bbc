//! Filesystem port for directory and file operations.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};

/// One entry in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name, without any path prefix.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// File size in bytes; zero for directories.
    pub size: u64,
}

/// Per-directory slice of a recursive walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirStats {
    /// Number of files directly in the directory.
    pub files: u64,
    /// Total bytes of those files.
    pub bytes: u64,
}

/// Aggregate result of a recursive walk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkStats {
    /// Total directories found (hidden directories skipped).
    pub directories: u64,
    /// Total files found.
    pub files: u64,
    /// Total size in bytes.
    pub bytes: u64,
    /// Stats keyed by directory path relative to the walk root, with a
    /// trailing slash (`"data/raw/"`); only directories that contain files
    /// appear.
    pub per_dir: BTreeMap<String, DirStats>,
}

/// Provides filesystem access for the validation core.
///
/// Abstracting the filesystem lets the core run against in-memory fakes in
/// tests without touching the real disk. All destructive operations in the
/// crate flow through this trait.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes the given contents to a file, creating parent directories and
    /// overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the entries of a directory with their metadata, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_entries(
        &self,
        path: &Path,
    ) -> Result<Vec<DirEntry>, Box<dyn std::error::Error + Send + Sync>>;

    /// Creates a directory and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails for a reason other than the
    /// directory already existing.
    fn create_dir_all(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Removes a directory and everything beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Moves a file from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the move fails.
    fn rename(
        &self,
        from: &Path,
        to: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Recursively copies a directory tree. Used for the pre-restructure
    /// backup; completion is a precondition for any destructive step.
    ///
    /// # Errors
    ///
    /// Returns an error if any part of the copy fails.
    fn copy_tree(
        &self,
        from: &Path,
        to: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Walks a tree recursively and returns size and count statistics.
    /// Hidden directories (names starting with `.`) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be read.
    fn walk_stats(
        &self,
        root: &Path,
    ) -> Result<WalkStats, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the last modification time of a path, if available.
    fn modified(&self, path: &Path) -> Option<DateTime<Utc>>;
}
