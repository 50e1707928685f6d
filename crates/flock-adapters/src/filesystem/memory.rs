//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use flock_core::{
    application::ports::Filesystem,
    error::{FlockError, FlockResult},
};

/// In-memory filesystem for testing.
///
/// Paths are compared after lexically collapsing `.` and `..`.
///
/// Cloning shares the underlying state, so a test can keep one handle for
/// assertions while the service owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    links: HashMap<PathBuf, PathBuf>,
}

impl MemoryFilesystemInner {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
            || self.directories.contains(path)
            || self.links.contains_key(path)
    }

    fn require_parent(&self, path: &Path, operation: &'static str) -> FlockResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(FlockError::operation_failed(
                    operation,
                    path,
                    "Parent directory does not exist",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Follow links until a non-link path is reached.
    fn resolve(&self, path: &Path) -> PathBuf {
        let mut current = path.to_path_buf();
        let mut hops = 0;
        while let Some(target) = self.links.get(&current) {
            let base = current.parent().unwrap_or(Path::new(""));
            current = normalize(&base.join(target));
            hops += 1;
            if hops > 32 {
                break;
            }
        }
        current
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = &normalize(path.as_ref());
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner
                .files
                .insert(path.to_path_buf(), content.as_bytes().to_vec());
        }
        self
    }

    /// Seed a directory and its ancestors (testing helper).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            insert_ancestors(&mut inner.directories, &normalize(path.as_ref()));
        }
        self
    }

    /// Read a file's content, following links (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let resolved = inner.resolve(&normalize(path.as_ref()));
        let bytes = inner.files.get(&resolved)?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// Where a link points, if `path` is a link.
    pub fn link_target(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        let inner = self.inner.read().ok()?;
        inner.links.get(&normalize(path.as_ref())).cloned()
    }

    /// Check if a directory exists.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(&normalize(path.as_ref())))
            .unwrap_or(false)
    }

    /// Total number of files, directories and links.
    pub fn entry_count(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.files.len() + inner.directories.len() + inner.links.len())
            .unwrap_or(0)
    }

    fn write_inner(
        &self,
        path: &Path,
    ) -> FlockResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| FlockError::operation_failed("lock filesystem", path, "lock poisoned"))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let path = &normalize(path);
        self.inner
            .read()
            .map(|inner| inner.exists(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> FlockResult<()> {
        let path = &normalize(path);
        let mut inner = self.write_inner(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) || inner.links.contains_key(&current) {
                return Err(FlockError::operation_failed(
                    "create directory",
                    path,
                    "Not a directory",
                ));
            }
        }
        insert_ancestors(&mut inner.directories, path);

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FlockResult<()> {
        let path = &normalize(path);
        let mut inner = self.write_inner(path)?;
        inner.require_parent(path, "write file")?;
        if inner.directories.contains(path) {
            return Err(FlockError::operation_failed(
                "write file",
                path,
                "Is a directory",
            ));
        }

        inner
            .files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn create_new(&self, path: &Path, content: &str) -> FlockResult<()> {
        let path = &normalize(path);
        let mut inner = self.write_inner(path)?;
        if inner.exists(path) {
            return Err(FlockError::operation_failed(
                "create file",
                path,
                "File exists",
            ));
        }
        inner.require_parent(path, "create file")?;

        inner
            .files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> FlockResult<String> {
        let path = &normalize(path);
        let inner = self
            .inner
            .read()
            .map_err(|_| FlockError::operation_failed("lock filesystem", path, "lock poisoned"))?;
        let resolved = inner.resolve(path);
        let bytes = inner.files.get(&resolved).ok_or_else(|| {
            FlockError::operation_failed("read file", path, "No such file")
        })?;
        String::from_utf8(bytes.clone())
            .map_err(|e| FlockError::operation_failed("read file", path, e))
    }

    fn append(&self, path: &Path, bytes: &[u8]) -> FlockResult<()> {
        let path = &normalize(path);
        let mut inner = self.write_inner(path)?;
        let resolved = inner.resolve(path);
        let file = inner.files.get_mut(&resolved).ok_or_else(|| {
            FlockError::operation_failed("open for append", path, "No such file")
        })?;
        file.extend_from_slice(bytes);
        Ok(())
    }

    fn link(&self, link: &Path, target: &Path) -> FlockResult<()> {
        let link = &normalize(link);
        let mut inner = self.write_inner(link)?;
        if inner.links.get(link).is_some_and(|existing| existing == target) {
            return Ok(());
        }
        if inner.directories.contains(link) {
            return Err(FlockError::operation_failed(
                "replace link",
                link,
                "Is a directory",
            ));
        }
        inner.require_parent(link, "create link")?;

        inner.files.remove(link);
        inner.links.insert(link.to_path_buf(), target.to_path_buf());
        Ok(())
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

/// Lexically collapse `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
