//! Keeps Flock's build products out of version control.

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{FlockPaths, content},
    error::FlockResult,
};

/// What happened to `.gitignore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitIgnoreOutcome {
    /// No `.gitignore` in the project; none was created.
    Missing,
    /// The marker was already present; the file was not touched.
    AlreadyPresent,
    /// The Flock block was appended.
    Appended,
}

pub struct GitIgnoreUpdater<'a> {
    paths: &'a FlockPaths,
    filesystem: &'a dyn Filesystem,
}

impl<'a> GitIgnoreUpdater<'a> {
    pub fn new(paths: &'a FlockPaths, filesystem: &'a dyn Filesystem) -> Self {
        Self { paths, filesystem }
    }

    /// Append the marker-guarded block unless it is already there.
    ///
    /// An unreadable file is treated as empty and gets the block appended.
    /// Only a failure to append is an error.
    #[instrument(skip_all)]
    pub fn update(&self) -> FlockResult<GitIgnoreOutcome> {
        let path = self.paths.resolve(&self.paths.gitignore);
        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "No .gitignore, leaving it alone");
            return Ok(GitIgnoreOutcome::Missing);
        }

        let contents = self.filesystem.read_to_string(&path).unwrap_or_else(|e| {
            debug!(error = %e, "Unreadable .gitignore, treating as empty");
            String::new()
        });
        if contents.contains(content::GITIGNORE_MARKER) {
            return Ok(GitIgnoreOutcome::AlreadyPresent);
        }

        let block = content::gitignore_block(
            &self.paths.build_directory,
            &self.paths.packages_directory,
        );
        self.filesystem.append(&path, block.as_bytes())?;

        Ok(GitIgnoreOutcome::Appended)
    }
}
