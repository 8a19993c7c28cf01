//! Writing generated files to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// What to do when the target path already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace the existing file.
    #[default]
    Always,
    /// Keep the existing file (`--skip-overwrite`).
    IfMissing,
}

/// Outcome of [`File::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file already existed and was kept.
    Skipped,
}

/// Rendered content bound for a path.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the content, creating parent directories as needed.
    pub fn write(&self) -> Result<WriteResult> {
        if self.overwrite == Overwrite::IfMissing && self.path.exists() {
            tracing::debug!(path = %self.path.display(), "keeping existing file");
            return Ok(WriteResult::Skipped);
        }

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;
        }
        fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;

        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("acme").join("routes.clj");

        let result = File::new(&path, "(ns acme.routes)").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "(ns acme.routes)");
    }

    #[test]
    fn test_write_replaces_by_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.clj");
        fs::write(&path, "old").unwrap();

        let file = File::new(&path, "new");
        assert_eq!(file.content(), "new");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_if_missing() {
        let temp = TempDir::new().unwrap();
        let kept = temp.path().join("kept.clj");
        let created = temp.path().join("created.clj");
        fs::write(&kept, "hand edited").unwrap();

        let write = |path: &Path| {
            File::new(path, "generated")
                .overwrite(Overwrite::IfMissing)
                .write()
                .unwrap()
        };

        assert_eq!(write(kept.as_path()), WriteResult::Skipped);
        assert_eq!(write(created.as_path()), WriteResult::Written);
        assert_eq!(fs::read_to_string(&kept).unwrap(), "hand edited");
        assert_eq!(fs::read_to_string(&created).unwrap(), "generated");
    }
}
