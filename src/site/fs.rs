//! Filesystem access used by the site builder.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Filesystem operations the site builder needs.
///
/// Implementations must be shareable across threads because documents may
/// be converted in parallel.
pub trait FileSystem: Send + Sync {
    /// Reads a whole file as raw bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Reads a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Creates or truncates a file and writes `contents` to it.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Copies a file byte for byte.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Creates a single directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Returns true if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the regular files directly inside `dir`. Subdirectories are
    /// not returned.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// The real filesystem, via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl FileSystem for StdFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::copy(from, to).map(|_| ())
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                log::debug!("Skipping subdirectory: {}", entry.path().display());
                continue;
            }
            files.push(entry.path());
        }
        Ok(files)
    }
}

/// An in-memory filesystem.
///
/// Files and directories live in a map behind a mutex. Writes and copies
/// fail when the parent directory does not exist, mirroring the real
/// filesystem closely enough to exercise the builder's error paths.
#[derive(Debug, Default)]
pub struct MemoryFs {
    inner: Mutex<MemoryTree>,
}

#[derive(Debug, Default)]
struct MemoryTree {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryTree {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(parent) if parent.as_os_str().is_empty() => true,
            Some(parent) => self.dirs.contains(parent),
        }
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl MemoryFs {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, creating any missing parent directories.
    pub fn insert_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut tree = self.lock();
        tree.add_ancestors(path);
        tree.files.insert(path.to_path_buf(), contents.into());
    }

    /// Adds a directory and its ancestors.
    pub fn insert_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut tree = self.lock();
        tree.add_ancestors(path);
        tree.dirs.insert(path.to_path_buf());
    }

    /// Returns a file's contents as text, if it exists and is UTF-8.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        let tree = self.lock();
        let bytes = tree.files.get(path.as_ref())?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// Returns a file's raw contents, if it exists.
    pub fn file_bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// Returns every file path, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().files.keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryTree> {
        // Every mutation is a single insert, so a poisoned tree is still consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file or directory", path.display()),
    )
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let tree = self.lock();
        tree.files.get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let tree = self.lock();
        let bytes = tree.files.get(path).ok_or_else(|| not_found(path))?;
        String::from_utf8(bytes.clone())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut tree = self.lock();
        if !tree.parent_exists(path) {
            return Err(not_found(path));
        }
        tree.files
            .insert(path.to_path_buf(), contents.as_bytes().to_vec());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut tree = self.lock();
        let bytes = tree.files.get(from).cloned().ok_or_else(|| not_found(from))?;
        if !tree.parent_exists(to) {
            return Err(not_found(to));
        }
        tree.files.insert(to.to_path_buf(), bytes);
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let mut tree = self.lock();
        if tree.dirs.contains(path) || tree.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{}: already exists", path.display()),
            ));
        }
        if !tree.parent_exists(path) {
            return Err(not_found(path));
        }
        tree.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let tree = self.lock();
        tree.files.contains_key(path) || tree.dirs.contains(path)
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let tree = self.lock();
        if !tree.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        Ok(tree
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_insert_creates_parents() {
        let fs = MemoryFs::new();
        fs.insert_file("a/b/c.txt", "hi");
        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert_eq!(fs.file("a/b/c.txt").as_deref(), Some("hi"));
        assert_eq!(fs.paths(), vec![PathBuf::from("a/b/c.txt")]);
    }

    #[test]
    fn test_memory_fs_write_requires_parent() {
        let fs = MemoryFs::new();
        let err = fs.write(Path::new("out/x.html"), "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        fs.create_dir(Path::new("out")).unwrap();
        fs.write(Path::new("out/x.html"), "x").unwrap();
        assert_eq!(fs.file("out/x.html").as_deref(), Some("x"));
    }

    #[test]
    fn test_memory_fs_create_dir_twice() {
        let fs = MemoryFs::new();
        fs.create_dir(Path::new("out")).unwrap();
        let err = fs.create_dir(Path::new("out")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_memory_fs_create_dir_is_single_level() {
        let fs = MemoryFs::new();
        let err = fs.create_dir(Path::new("a/b")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_fs_list_dir_direct_children_only() {
        let fs = MemoryFs::new();
        fs.insert_file("pages/a.md", "a");
        fs.insert_file("pages/b.png", vec![0u8, 1]);
        fs.insert_file("pages/sub/c.md", "c");

        let listed = fs.list_dir(Path::new("pages")).unwrap();
        assert_eq!(
            listed,
            vec![PathBuf::from("pages/a.md"), PathBuf::from("pages/b.png")]
        );
    }

    #[test]
    fn test_memory_fs_read_keeps_invalid_utf8() {
        let fs = MemoryFs::new();
        fs.insert_file("pages/latin1.md", b"Caf\xE9".to_vec());

        assert_eq!(fs.read(Path::new("pages/latin1.md")).unwrap(), b"Caf\xE9");
        let err = fs.read_to_string(Path::new("pages/latin1.md")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_memory_fs_copy_missing_source() {
        let fs = MemoryFs::new();
        fs.insert_dir("out");
        let err = fs
            .copy(Path::new("missing.css"), Path::new("out/styles.css"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_std_fs_list_dir_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "a").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let listed = StdFs.list_dir(dir.path()).unwrap();
        assert_eq!(listed, vec![dir.path().join("a.md")]);
    }
}
