//! Scoped temporary storage for one run

use crate::error::{MixError, MixResult};
use log::{info, warn};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A unique directory under the configured temporary root.
///
/// The directory is removed by [`TempWorkspace::cleanup`], or on drop if the
/// run unwinds before reaching it. A root that did not exist before the run
/// is removed as well once it is empty.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: Option<TempDir>,
    created_root: Option<PathBuf>,
}

impl TempWorkspace {
    /// Create a fresh workspace under `root`
    pub fn create(root: &Path) -> MixResult<Self> {
        let created_root = if root.exists() {
            None
        } else {
            std::fs::create_dir_all(root)?;
            Some(root.to_path_buf())
        };

        let dir = tempfile::Builder::new()
            .prefix("mixtrack-")
            .tempdir_in(root)?;

        info!("Created workspace {}", dir.path().display());

        Ok(TempWorkspace {
            dir: Some(dir),
            created_root,
        })
    }

    /// Path of the workspace directory
    pub fn path(&self) -> &Path {
        self.dir
            .as_ref()
            .map(TempDir::path)
            .unwrap_or_else(|| Path::new(""))
    }

    /// Remove the workspace and everything in it
    pub fn cleanup(mut self) -> MixResult<()> {
        self.release()
    }

    fn release(&mut self) -> MixResult<()> {
        let Some(dir) = self.dir.take() else {
            return Ok(());
        };

        let path = dir.path().to_path_buf();
        info!("Cleaning up {}", path.display());
        dir.close()
            .map_err(|e| MixError::ProcessingError(format!("cannot remove {}: {}", path.display(), e)))?;

        if let Some(root) = self.created_root.take() {
            // Leaves the root alone if anything else was put there meanwhile
            if let Err(e) = std::fs::remove_dir(&root) {
                warn!("Keeping {}: {}", root.display(), e);
            }
        }

        info!("Done cleaning up {}", path.display());
        Ok(())
    }
}

impl Drop for TempWorkspace {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("Workspace cleanup failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cleanup_removes_directory_and_contents() {
        let root = tempdir().unwrap();
        let workspace = TempWorkspace::create(root.path()).unwrap();
        let path = workspace.path().to_path_buf();
        std::fs::write(path.join("chunk.wav"), b"data").unwrap();

        workspace.cleanup().unwrap();

        assert!(!path.exists());
        // Pre-existing root is kept
        assert!(root.path().exists());
    }

    #[test]
    fn test_created_root_is_removed() {
        let parent = tempdir().unwrap();
        let root = parent.path().join("temp");

        let workspace = TempWorkspace::create(&root).unwrap();
        assert!(root.exists());
        workspace.cleanup().unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn test_drop_cleans_up() {
        let parent = tempdir().unwrap();
        let root = parent.path().join("temp");
        let path;
        {
            let workspace = TempWorkspace::create(&root).unwrap();
            path = workspace.path().to_path_buf();
            std::fs::write(path.join("source.mp3"), b"data").unwrap();
        }

        assert!(!path.exists());
        assert!(!root.exists());
    }

    #[test]
    fn test_workspaces_are_unique() {
        let root = tempdir().unwrap();
        let a = TempWorkspace::create(root.path()).unwrap();
        let b = TempWorkspace::create(root.path()).unwrap();
        assert_ne!(a.path(), b.path());
    }
}
