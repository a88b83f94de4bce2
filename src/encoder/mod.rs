//! Audio encoder implementations

/// WAV output via hound
pub mod wav;

pub use wav::{WavEncoder, WavFormat, encode_wav, export_segment};

use crate::core::AudioFrame;
use crate::error::MixResult;

/// Trait for audio encoders
pub trait Encoder {
    /// Encode an audio frame to output
    fn encode(&mut self, frame: &AudioFrame) -> MixResult<()>;

    /// Finalize encoding (flush any remaining data)
    fn finalize(&mut self) -> MixResult<()> {
        Ok(())
    }
}
