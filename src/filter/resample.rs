use crate::core::{AudioFrame, Channels};
use crate::error::{MixError, MixResult};

/// Audio resampler - converts from one sample rate to another using linear interpolation
pub struct Resample {
    input_rate: u32,
    output_rate: u32,
    channels: Channels,
}

impl Resample {
    /// Create a new resampler
    ///
    /// # Arguments
    /// * `input_rate` - Input sample rate in Hz
    /// * `output_rate` - Output sample rate in Hz
    /// * `channels` - Number of channels
    pub fn new(input_rate: u32, output_rate: u32, channels: Channels) -> MixResult<Self> {
        if input_rate == 0 || output_rate == 0 {
            return Err(MixError::InvalidSampleRate { rate: 0 });
        }

        Ok(Resample {
            input_rate,
            output_rate,
            channels,
        })
    }

    /// Linear interpolation resampling of a single channel
    ///
    /// `step` is the distance in input samples between two output samples.
    fn linear_resample(input: &[f32], step: f64) -> Vec<f32> {
        if input.is_empty() || step <= 0.0 {
            return Vec::new();
        }

        let output_len = (input.len() as f64 / step).ceil() as usize;
        let mut output = Vec::with_capacity(output_len);

        for i in 0..output_len {
            let input_pos = i as f64 * step;
            let input_idx = input_pos.floor() as usize;

            if input_idx + 1 < input.len() {
                let frac = input_pos - input_idx as f64;
                let sample = (input[input_idx] as f64 * (1.0 - frac)
                    + input[input_idx + 1] as f64 * frac) as f32;
                output.push(sample.clamp(-1.0, 1.0));
            } else if input_idx < input.len() {
                output.push(input[input_idx]);
            }
        }

        output
    }
}

impl super::Filter for Resample {
    fn process(&mut self, frame: &AudioFrame) -> MixResult<AudioFrame> {
        if frame.channels() != self.channels {
            return Err(MixError::InvalidChannels {
                expected: self.channels.count(),
                got: frame.channels().count(),
            });
        }

        if frame.sample_rate() != self.input_rate {
            return Err(MixError::InvalidSampleRate {
                rate: frame.sample_rate(),
            });
        }

        if self.input_rate == self.output_rate {
            return Ok(frame.clone());
        }

        let step = self.input_rate as f64 / self.output_rate as f64;
        let channel_count = self.channels.count() as usize;

        // Resample each channel on its own, then interleave again
        let per_channel: Vec<Vec<f32>> = (0..channel_count)
            .map(|ch| {
                let channel: Vec<f32> = frame
                    .samples()
                    .iter()
                    .skip(ch)
                    .step_by(channel_count)
                    .copied()
                    .collect();
                Self::linear_resample(&channel, step)
            })
            .collect();

        let frames_out = per_channel.iter().map(Vec::len).min().unwrap_or(0);
        let mut resampled = Vec::with_capacity(frames_out * channel_count);
        for i in 0..frames_out {
            for channel in &per_channel {
                resampled.push(channel[i]);
            }
        }

        AudioFrame::new(
            resampled,
            self.output_rate,
            self.channels,
            frame.frame_number(),
        )
    }
}
