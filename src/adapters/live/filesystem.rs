//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::ports::filesystem::{DirEntry, DirStats, FileSystem, WalkStats};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_entries(
        &self,
        path: &Path,
    ) -> Result<Vec<DirEntry>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            let metadata = entry.metadata()?;
            let is_dir = metadata.is_dir();
            entries.push(DirEntry { name, is_dir, size: if is_dir { 0 } else { metadata.len() } });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::remove_dir_all(path)?)
    }

    fn rename(
        &self,
        from: &Path,
        to: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::rename(from, to)?)
    }

    fn copy_tree(
        &self,
        from: &Path,
        to: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        copy_recursive(from, to)
    }

    fn walk_stats(
        &self,
        root: &Path,
    ) -> Result<WalkStats, Box<dyn std::error::Error + Send + Sync>> {
        let mut stats = WalkStats::default();
        walk_recursive(root, root, &mut stats)?;
        Ok(stats)
    }

    fn modified(&self, path: &Path) -> Option<DateTime<Utc>> {
        let modified = std::fs::metadata(path).ok()?.modified().ok()?;
        Some(DateTime::<Utc>::from(modified))
    }
}

fn copy_recursive(from: &Path, to: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_recursive(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn walk_recursive(
    root: &Path,
    dir: &Path,
    stats: &mut WalkStats,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut dir_files = 0u64;
    let mut dir_bytes = 0u64;
    let mut subdirs = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            if !name.starts_with('.') {
                subdirs.push(entry.path());
            }
        } else {
            dir_files += 1;
            dir_bytes += entry.metadata()?.len();
        }
    }

    if dir_files > 0 {
        let rel = dir.strip_prefix(root).unwrap_or(dir);
        let key = if rel.as_os_str().is_empty() {
            "./".to_string()
        } else {
            format!("{}/", rel.to_string_lossy())
        };
        stats.per_dir.insert(key, DirStats { files: dir_files, bytes: dir_bytes });
    }
    stats.files += dir_files;
    stats.bytes += dir_bytes;

    subdirs.sort();
    for subdir in subdirs {
        stats.directories += 1;
        walk_recursive(root, &subdir, stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_entries_reports_kind_and_size() {
        let dir = std::env::temp_dir().join("labkit_live_fs_list");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(dir.join("a.txt"), "hello").unwrap();

        let fs = LiveFileSystem;
        let entries = fs.list_entries(&dir).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert!(!entries[0].is_dir);
        assert_eq!(entries[0].size, 5);
        assert_eq!(entries[1].name, "sub");
        assert!(entries[1].is_dir);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn walk_stats_skips_hidden_directories() {
        let dir = std::env::temp_dir().join("labkit_live_fs_walk");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("data")).unwrap();
        std::fs::create_dir_all(dir.join(".git")).unwrap();
        std::fs::write(dir.join("data").join("x.csv"), "1,2,3").unwrap();
        std::fs::write(dir.join(".git").join("HEAD"), "ref").unwrap();
        std::fs::write(dir.join("top.md"), "# hi").unwrap();

        let fs = LiveFileSystem;
        let stats = fs.walk_stats(&dir).unwrap();
        assert_eq!(stats.directories, 1);
        assert_eq!(stats.files, 2);
        assert_eq!(stats.per_dir.get("data/").unwrap().files, 1);
        assert!(stats.per_dir.contains_key("./"));
        assert!(!stats.per_dir.contains_key(".git/"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn copy_tree_copies_nested_files() {
        let dir = std::env::temp_dir().join("labkit_live_fs_copy");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("src").join("inner")).unwrap();
        std::fs::write(dir.join("src").join("inner").join("f.txt"), "payload").unwrap();

        let fs = LiveFileSystem;
        fs.copy_tree(&dir.join("src"), &dir.join("dst")).unwrap();
        let copied = std::fs::read_to_string(dir.join("dst").join("inner").join("f.txt")).unwrap();
        assert_eq!(copied, "payload");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
