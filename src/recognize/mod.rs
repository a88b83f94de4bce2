//! Per-window song recognition
//!
//! A [`Recognizer`] turns one [`Segment`] into exactly one [`TrackMatch`].
//! Every failure along the way (sample preparation, network, service errors,
//! unparseable answers) and every "no match" answer becomes the `"n/a"`
//! sentinel for that window, so one bad window never aborts a run.

/// HTTP identification client
pub mod http;
/// Identification service interface
pub mod identifier;

pub use http::HttpIdentifier;
pub use identifier::{Candidate, IdentifyError, Identifier, Sample};

use crate::core::{Channels, TrackMatch};
use crate::encoder::{WavFormat, encode_wav};
use crate::error::{MixError, MixResult};
use crate::filter::{Filter, Normalize, Remix, Resample};
use crate::processor::Segment;
use log::{debug, warn};

/// Sample rate most recognition services expect
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// Peak level recognition samples are normalized to
const TARGET_PEAK: f32 = 0.9;

/// How a window's recognition ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The service returned a candidate
    Matched,
    /// The service answered but found nothing
    NoMatch,
    /// Preparation, service or parse failure
    Failed,
    /// The service could not be reached
    Unreachable,
}

/// Result of recognizing one window
#[derive(Debug, Clone)]
pub struct Recognition {
    /// Listing entry for the window (sentinel unless matched)
    pub track: TrackMatch,
    /// How recognition ended
    pub outcome: Outcome,
}

/// Maps windows to track matches through an [`Identifier`]
pub struct Recognizer<I> {
    identifier: I,
    sample_rate: u32,
}

impl<I: Identifier> Recognizer<I> {
    /// Create a recognizer submitting samples at `sample_rate`
    pub fn new(identifier: I, sample_rate: u32) -> MixResult<Self> {
        if sample_rate == 0 {
            return Err(MixError::InvalidSampleRate { rate: 0 });
        }

        Ok(Recognizer {
            identifier,
            sample_rate,
        })
    }

    /// The underlying identification service
    pub fn identifier(&self) -> &I {
        &self.identifier
    }

    /// Recognize one window; never fails
    pub async fn recognize(&self, segment: Segment) -> TrackMatch {
        self.recognize_detailed(segment).await.track
    }

    /// Recognize one window and report how it went
    pub async fn recognize_detailed(&self, segment: Segment) -> Recognition {
        let offset = segment.offset_seconds;
        let index = segment.index;

        let sample = match self.prepare(segment) {
            Ok(sample) => sample,
            Err(e) => {
                warn!("Window {} at {}s: could not prepare sample: {}", index, offset, e);
                return Recognition {
                    track: TrackMatch::sentinel(offset),
                    outcome: Outcome::Failed,
                };
            }
        };

        match self.identifier.identify(&sample).await {
            Ok(Some(candidate)) => {
                let track = TrackMatch::from_parts(candidate.subtitle, candidate.title, offset);
                debug!("Window {} at {}s: {}", index, offset, track);
                Recognition {
                    track,
                    outcome: Outcome::Matched,
                }
            }
            Ok(None) => {
                warn!("Window {} at {}s: no matches", index, offset);
                Recognition {
                    track: TrackMatch::sentinel(offset),
                    outcome: Outcome::NoMatch,
                }
            }
            Err(e) => {
                let failure = MixError::RecognitionFailure(e.to_string());
                warn!("Window {} at {}s: {}", index, offset, failure);
                let outcome = if e.is_transport() {
                    Outcome::Unreachable
                } else {
                    Outcome::Failed
                };
                Recognition {
                    track: TrackMatch::sentinel(offset),
                    outcome,
                }
            }
        }
    }

    /// Downmix, resample, normalize and encode a window for submission
    fn prepare(&self, segment: Segment) -> MixResult<Sample> {
        let audio = segment.audio;

        let mono = Remix::new(audio.channels(), Channels::Mono).process(&audio)?;
        let resampled = Resample::new(mono.sample_rate(), self.sample_rate, Channels::Mono)?
            .process(&mono)?;
        let normalized = Normalize::peak(TARGET_PEAK)?.process(&resampled)?;

        Ok(Sample {
            offset_seconds: segment.offset_seconds,
            wav: encode_wav(&normalized, WavFormat::Pcm16)?,
        })
    }
}
