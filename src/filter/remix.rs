use crate::core::{AudioFrame, Channels};
use crate::error::{MixError, MixResult};

/// Audio channel remixer - converts between channel layouts
pub struct Remix {
    input_channels: Channels,
    output_channels: Channels,
}

impl Remix {
    /// Create a new channel remixer
    pub fn new(input_channels: Channels, output_channels: Channels) -> Self {
        Remix {
            input_channels,
            output_channels,
        }
    }

    /// Downmix any layout to mono by averaging all channels of each frame
    fn downmix(input: &[f32], channels: usize) -> Vec<f32> {
        input
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    }
}

impl super::Filter for Remix {
    fn process(&mut self, frame: &AudioFrame) -> MixResult<AudioFrame> {
        if frame.channels() != self.input_channels {
            return Err(MixError::InvalidChannels {
                expected: self.input_channels.count(),
                got: frame.channels().count(),
            });
        }

        let samples = frame.samples();

        let output_samples = match (self.input_channels, self.output_channels) {
            (src, dst) if src == dst => samples.to_vec(),
            (src, Channels::Mono) => Self::downmix(samples, src.count() as usize),
            _ => {
                return Err(MixError::ProcessingError(format!(
                    "Remix from {} to {} not supported",
                    self.input_channels.name(),
                    self.output_channels.name()
                )));
            }
        };

        AudioFrame::new(
            output_samples,
            frame.sample_rate(),
            self.output_channels,
            frame.frame_number(),
        )
    }
}
