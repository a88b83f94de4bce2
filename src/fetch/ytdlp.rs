use crate::error::{MixError, MixResult};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Base name of the downloaded audio inside the workspace
const OUTPUT_STEM: &str = "source";

/// Audio container requested from `yt-dlp`
const AUDIO_FORMAT: &str = "mp3";

/// Downloads the audio track of a media page with the external `yt-dlp` tool
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    program: PathBuf,
}

impl YtDlpFetcher {
    /// Create a fetcher running `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        YtDlpFetcher {
            program: program.into(),
        }
    }

    /// Command line for downloading `url` into `dest`
    fn args(url: &str, dest: &Path) -> Vec<String> {
        let template = dest.join(format!("{}.%(ext)s", OUTPUT_STEM));
        vec![
            "--no-playlist".to_string(),
            "--extract-audio".to_string(),
            "--audio-format".to_string(),
            AUDIO_FORMAT.to_string(),
            "--audio-quality".to_string(),
            "192K".to_string(),
            "--quiet".to_string(),
            "--output".to_string(),
            template.to_string_lossy().into_owned(),
            url.to_string(),
        ]
    }

    /// Download the audio of `url` into `dest`
    pub async fn fetch(&self, url: &str, dest: &Path) -> MixResult<PathBuf> {
        info!("Downloading audio from {}", url);
        let args = Self::args(url, dest);
        debug!("{} {}", self.program.display(), args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                MixError::FetchFailed(format!("cannot run {}: {}", self.program.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MixError::FetchFailed(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        let audio = dest.join(format!("{}.{}", OUTPUT_STEM, AUDIO_FORMAT));
        if !audio.is_file() {
            return Err(MixError::FetchFailed(format!(
                "{} does not exist",
                audio.display()
            )));
        }

        info!("Downloaded {}", audio.display());
        Ok(audio)
    }
}
