#![warn(missing_docs)]

//! # mixtrack: track listings for continuous mixes
//!
//! Splits a DJ mix into fixed-length windows, asks an identification
//! service what plays in each window, and writes the results as a
//! chronologically ordered JSON track listing.
//!
//! ## Pipeline
//!
//! - **Fetch** - YouTube/SoundCloud through `yt-dlp`, or a local file
//! - **Decode** - MP3, FLAC, WAV, OGG, AAC via Symphonia
//! - **Segment** - 20 second windows (configurable)
//! - **Recognize** - windows sent concurrently; failures become `"n/a"` entries
//! - **Assemble** - ordered by window offset, repeated songs kept
//! - **Persist** - `program_output.json`
//!
//! ## Quick Start
//!
//! ```ignore
//! use mixtrack::{HttpIdentifier, Pipeline, Settings};
//!
//! let settings = Settings::default();
//! let identifier = HttpIdentifier::new(settings.endpoint.clone(), None, settings.timeout())?;
//! let report = Pipeline::new(settings, identifier)?
//!     .run("https://www.youtube.com/watch?v=...")
//!     .await?;
//! for track in &report.listing {
//!     println!("{}", track);
//! }
//! ```

/// Run configuration
pub mod config;
/// Core audio and track types
pub mod core;
/// Audio decoder implementations
pub mod decoder;
/// Audio encoder implementations
pub mod encoder;
/// Error types for the pipeline
pub mod error;
/// Source fetchers
pub mod fetch;
/// Audio filters for recognition samples
pub mod filter;
/// Listing persistence
pub mod output;
/// Run orchestration
pub mod pipeline;
/// Windowing and listing assembly
pub mod processor;
/// Per-window recognition
pub mod recognize;
/// Temporary storage
pub mod workspace;

// Export public types
pub use config::{LogLevel, Settings};
pub use core::{AudioAsset, AudioFrame, Channels, TrackListing, TrackMatch};
pub use error::{MixError, MixResult};
pub use pipeline::{Pipeline, RunReport, Stage};
pub use recognize::{HttpIdentifier, Identifier, Recognizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
