//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use flock_core::{
    application::ports::Filesystem,
    error::{Context, FlockResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FlockResult<()> {
        std::fs::create_dir_all(path).context("create directory", path)
    }

    fn write_file(&self, path: &Path, content: &str) -> FlockResult<()> {
        std::fs::write(path, content).context("write file", path)
    }

    fn create_new(&self, path: &Path, content: &str) -> FlockResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .context("create file", path)?;
        file.write_all(content.as_bytes()).context("write file", path)
    }

    fn read_to_string(&self, path: &Path) -> FlockResult<String> {
        std::fs::read_to_string(path).context("read file", path)
    }

    fn append(&self, path: &Path, bytes: &[u8]) -> FlockResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .context("open for append", path)?;
        file.write_all(bytes).context("append to file", path)
    }

    fn link(&self, link: &Path, target: &Path) -> FlockResult<()> {
        if std::fs::read_link(link).is_ok_and(|existing| existing == target) {
            debug!(link = %link.display(), "Link already in place");
            return Ok(());
        }
        if link.symlink_metadata().is_ok() {
            std::fs::remove_file(link).context("replace link", link)?;
        }

        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(target, link).context("create link", link)
        }
        #[cfg(not(unix))]
        {
            // No unprivileged symlinks; fall back to a copy of the target.
            let source = link.parent().unwrap_or(Path::new("")).join(target);
            std::fs::copy(&source, link)
                .map(|_| ())
                .context("create link", link)
        }
    }
}
