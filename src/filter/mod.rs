//! Audio filters used to prepare recognition samples

/// Peak normalization
pub mod normalize;
/// Channel remixing
pub mod remix;
/// Sample rate conversion
pub mod resample;

pub use normalize::Normalize;
pub use remix::Remix;
pub use resample::Resample;

use crate::core::AudioFrame;
use crate::error::MixResult;

/// Trait for audio filters
pub trait Filter {
    /// Process an audio frame through this filter
    fn process(&mut self, frame: &AudioFrame) -> MixResult<AudioFrame>;
}
