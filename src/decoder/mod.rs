//! Audio decoder implementations

/// Symphonia-backed decoder
pub mod symphonia;

pub use symphonia::SymphoniaDecoder;

use crate::core::{AudioAsset, AudioFrame, Channels};
use crate::error::MixResult;
use crate::filter::{Filter, Remix};
use log::info;
use std::path::Path;

/// Trait for audio decoders
pub trait Decoder: Send {
    /// Get next audio frame from the stream
    fn decode_frame(&mut self) -> MixResult<Option<AudioFrame>>;

    /// Sample rate of the decoded stream
    fn sample_rate(&self) -> u32;

    /// Channel layout of the decoded stream
    fn channels(&self) -> Channels;
}

/// Create a decoder from a file path
pub fn from_file<P: AsRef<Path>>(path: P) -> MixResult<Box<dyn Decoder>> {
    SymphoniaDecoder::from_file(path).map(|d| Box::new(d) as Box<dyn Decoder>)
}

/// Decode a whole file into memory, downmixed to mono frame by frame
pub fn load<P: AsRef<Path>>(path: P) -> MixResult<AudioAsset> {
    let path = path.as_ref();
    let mut decoder = from_file(path)?;
    let sample_rate = decoder.sample_rate();
    let channels = decoder.channels();
    let mut downmix = Remix::new(channels, Channels::Mono);

    let mut samples = Vec::new();
    while let Some(frame) = decoder.decode_frame()? {
        if channels == Channels::Mono {
            samples.extend(frame.into_samples());
        } else {
            samples.extend(downmix.process(&frame)?.into_samples());
        }
    }

    let audio = AudioFrame::new(samples, sample_rate, Channels::Mono, 0)?;
    info!(
        "Decoded {} ({:.1}s, {} Hz, {} downmixed to mono)",
        path.display(),
        audio.duration().as_secs_f64(),
        sample_rate,
        channels.name()
    );

    Ok(AudioAsset::new(path, audio))
}
