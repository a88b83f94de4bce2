//! Run orchestration
//!
//! One run walks through
//! `Idle -> Fetching -> Segmenting -> Recognizing -> Assembling -> Persisting -> CleaningUp -> Done`
//! and stops at the first fatal error. The workspace is cleaned up on every
//! path once it exists.

use crate::config::Settings;
use crate::core::{TrackListing, TrackMatch};
use crate::decoder;
use crate::error::{MixError, MixResult};
use crate::fetch::SourceFetcher;
use crate::output;
use crate::processor::{Segment, assemble, segment};
use crate::recognize::{Identifier, Outcome, Recognizer};
use crate::workspace::TempWorkspace;
use futures::stream::{self, StreamExt};
use log::{error, info, warn};
use std::fmt;
use std::path::PathBuf;

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Not started
    Idle,
    /// Downloading or copying the source audio
    Fetching,
    /// Decoding and windowing the audio
    Segmenting,
    /// Submitting windows to the identification service
    Recognizing,
    /// Ordering the results
    Assembling,
    /// Writing the listing
    Persisting,
    /// Removing temporary storage
    CleaningUp,
    /// Finished
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Location of the JSON listing
    pub output_path: PathBuf,
    /// The listing that was written
    pub listing: TrackListing,
}

/// Identifies the tracks of one mix
pub struct Pipeline<I> {
    settings: Settings,
    recognizer: Recognizer<I>,
    stage: Stage,
}

impl<I: Identifier> Pipeline<I> {
    /// Create a pipeline using `identifier` as the recognition service
    pub fn new(settings: Settings, identifier: I) -> MixResult<Self> {
        settings.validate()?;
        let recognizer = Recognizer::new(identifier, settings.sample_rate)?;

        Ok(Pipeline {
            settings,
            recognizer,
            stage: Stage::Idle,
        })
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn enter(&mut self, stage: Stage) {
        info!("{} -> {}", self.stage, stage);
        self.stage = stage;
    }

    /// Identify the tracks of the mix at `locator` and write the listing
    pub async fn run(mut self, locator: &str) -> MixResult<RunReport> {
        info!("Starting run for {}", locator);

        // Unsupported sources fail before any temporary state exists
        let fetcher = SourceFetcher::for_url(locator, &self.settings.yt_dlp)
            .inspect_err(|e| error!("Run failed during {}: {}", Stage::Idle, e))?;

        let workspace = TempWorkspace::create(&self.settings.temp_output_dir)
            .inspect_err(|e| error!("Cannot create workspace: {}", e))?;
        let result = self.run_in(locator, &fetcher, &workspace).await;
        let last_stage = self.stage;

        self.enter(Stage::CleaningUp);
        let cleanup = workspace.cleanup();

        match (result, cleanup) {
            (Ok(report), Ok(())) => {
                self.enter(Stage::Done);
                Ok(report)
            }
            (Ok(_), Err(e)) => {
                error!("Cleanup failed: {}", e);
                Err(e)
            }
            (Err(e), cleanup) => {
                if let Err(cleanup_err) = cleanup {
                    warn!("Cleanup failed: {}", cleanup_err);
                }
                error!("Run failed during {}: {}", last_stage, e);
                Err(e)
            }
        }
    }

    async fn run_in(
        &mut self,
        locator: &str,
        fetcher: &SourceFetcher,
        workspace: &TempWorkspace,
    ) -> MixResult<RunReport> {
        self.enter(Stage::Fetching);
        let audio_path = fetcher.fetch(locator, workspace.path()).await?;

        self.enter(Stage::Segmenting);
        let asset = decoder::load(&audio_path)?;
        let segments = segment(asset, self.settings.window_seconds)?;
        info!(
            "Split into {} windows of {}s",
            segments.len(),
            self.settings.window_seconds
        );

        self.enter(Stage::Recognizing);
        let matches = self.recognize_all(segments).await?;

        self.enter(Stage::Assembling);
        let listing = assemble(matches);
        for track in &listing {
            info!("{}", track);
        }

        self.enter(Stage::Persisting);
        let output_path = output::write_listing(&listing, &self.settings.final_output_dir)?;

        Ok(RunReport {
            output_path,
            listing,
        })
    }

    /// Recognize every window, at most `concurrency` at a time
    async fn recognize_all(&self, segments: Vec<Segment>) -> MixResult<Vec<TrackMatch>> {
        let total = segments.len();
        let recognizer = &self.recognizer;

        let recognitions: Vec<_> = stream::iter(segments)
            .map(|segment| recognizer.recognize_detailed(segment))
            .buffer_unordered(self.settings.concurrency)
            .collect()
            .await;

        let matched = recognitions
            .iter()
            .filter(|r| r.outcome == Outcome::Matched)
            .count();
        let unreachable = recognitions
            .iter()
            .filter(|r| r.outcome == Outcome::Unreachable)
            .count();

        info!("Recognized {}/{} windows", matched, total);

        if total > 0 && unreachable == total {
            return Err(MixError::ServiceUnavailable { segments: total });
        }
        if unreachable > 0 {
            warn!("Service unreachable for {} windows", unreachable);
        }

        Ok(recognitions.into_iter().map(|r| r.track).collect())
    }
}
