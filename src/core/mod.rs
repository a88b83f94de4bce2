//! Core audio and track listing types

/// Audio frame and asset types
pub mod audio;
/// Track match and listing types
pub mod track;

pub use audio::{AudioAsset, AudioFrame, Channels};
pub use track::{TrackListing, TrackMatch, UNKNOWN};
