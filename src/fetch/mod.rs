//! Source fetchers
//!
//! A locator is classified by plain substring and scheme checks before any
//! I/O happens; the matching fetcher then places a local audio file inside
//! the run's workspace.

/// Local file sources
pub mod local;
/// Remote sources through yt-dlp
pub mod ytdlp;

pub use local::LocalFetcher;
pub use ytdlp::YtDlpFetcher;

use crate::error::{MixError, MixResult};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of source a locator points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// YouTube video or music page
    YouTube,
    /// SoundCloud track or set
    SoundCloud,
    /// File on the local filesystem
    Local,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::YouTube => "YouTube",
            SourceKind::SoundCloud => "SoundCloud",
            SourceKind::Local => "local file",
        };
        f.write_str(name)
    }
}

/// Classify a locator; `None` when no fetcher handles it.
///
/// Without a scheme, only a host-like first component (`youtu.be/...`) can
/// name a remote site; anything else is a local path.
pub fn classify(locator: &str) -> Option<SourceKind> {
    let locator = locator.trim();
    if locator.is_empty() {
        return None;
    }
    if locator.starts_with("file://") {
        return Some(SourceKind::Local);
    }

    let remote_part = if locator.contains("://") {
        locator
    } else {
        match locator.split('/').next() {
            Some(host) if host.contains('.') && locator.contains('/') => host,
            _ => return Some(SourceKind::Local),
        }
    };

    if remote_part.contains("yout") {
        Some(SourceKind::YouTube)
    } else if remote_part.contains("soundcloud") {
        Some(SourceKind::SoundCloud)
    } else if locator.contains("://") {
        None
    } else {
        Some(SourceKind::Local)
    }
}

/// Fetcher selected for one locator
#[derive(Debug, Clone)]
pub enum SourceFetcher {
    /// Remote media pages downloaded through `yt-dlp`
    YtDlp(YtDlpFetcher),
    /// Files already on disk
    Local(LocalFetcher),
}

impl SourceFetcher {
    /// Pick the fetcher for `locator`, failing fast on unsupported sources
    pub fn for_url(locator: &str, yt_dlp: &Path) -> MixResult<Self> {
        match classify(locator) {
            Some(SourceKind::YouTube) | Some(SourceKind::SoundCloud) => {
                Ok(SourceFetcher::YtDlp(YtDlpFetcher::new(yt_dlp)))
            }
            Some(SourceKind::Local) => Ok(SourceFetcher::Local(LocalFetcher)),
            None => Err(MixError::UnsupportedSource(locator.to_string())),
        }
    }

    /// Fetch `locator` into `dest`, returning the local audio file
    pub async fn fetch(&self, locator: &str, dest: &Path) -> MixResult<PathBuf> {
        match self {
            SourceFetcher::YtDlp(fetcher) => fetcher.fetch(locator.trim(), dest).await,
            SourceFetcher::Local(fetcher) => fetcher.fetch(locator.trim(), dest).await,
        }
    }
}
