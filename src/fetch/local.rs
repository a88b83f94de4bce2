use crate::error::{MixError, MixResult};
use log::info;
use std::path::{Path, PathBuf};

/// Copies a local audio file into the workspace
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFetcher;

impl LocalFetcher {
    /// Copy `locator` (a path or `file://` URL) into `dest`
    pub async fn fetch(&self, locator: &str, dest: &Path) -> MixResult<PathBuf> {
        let source = PathBuf::from(locator.strip_prefix("file://").unwrap_or(locator));

        let file_name = source
            .file_name()
            .ok_or_else(|| MixError::FetchFailed(format!("{} is not a file", source.display())))?;

        if !tokio::fs::metadata(&source)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
        {
            return Err(MixError::FetchFailed(format!(
                "{} does not exist",
                source.display()
            )));
        }

        let target = dest.join(file_name);
        tokio::fs::copy(&source, &target)
            .await
            .map_err(|e| MixError::FetchFailed(format!("{}: {}", source.display(), e)))?;

        info!("Copied {} into {}", source.display(), dest.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_copies_into_destination() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let source = src_dir.path().join("mix.mp3");
        std::fs::write(&source, b"audio").unwrap();

        let fetched = LocalFetcher
            .fetch(source.to_str().unwrap(), dest_dir.path())
            .await
            .unwrap();

        assert_eq!(fetched, dest_dir.path().join("mix.mp3"));
        assert_eq!(std::fs::read(&fetched).unwrap(), b"audio");
        assert!(source.exists());
    }

    #[tokio::test]
    async fn test_file_url() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let source = src_dir.path().join("set.wav");
        std::fs::write(&source, b"audio").unwrap();

        let locator = format!("file://{}", source.display());
        let fetched = LocalFetcher.fetch(&locator, dest_dir.path()).await.unwrap();
        assert_eq!(fetched.file_name().unwrap(), "set.wav");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dest_dir = tempdir().unwrap();
        let result = LocalFetcher
            .fetch("/nonexistent/mix.mp3", dest_dir.path())
            .await;
        assert!(matches!(result, Err(MixError::FetchFailed(_))));
    }
}
