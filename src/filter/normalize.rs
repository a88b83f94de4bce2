use crate::core::AudioFrame;
use crate::error::{MixError, MixResult};

/// Peak normalization filter - scales a frame so its loudest sample hits a target
#[derive(Clone, Debug)]
pub struct Normalize {
    /// Target peak level (0.0 to 1.0)
    target_peak: f32,
}

impl Normalize {
    /// Create a peak normalizer (normalizes to target peak level)
    pub fn peak(target_peak: f32) -> MixResult<Self> {
        if target_peak <= 0.0 || target_peak > 1.0 {
            return Err(MixError::ConfigError(format!(
                "Target peak must be between 0.0 and 1.0, got {}",
                target_peak
            )));
        }

        Ok(Normalize { target_peak })
    }

    /// Calculate peak level of audio samples
    fn calculate_peak(samples: &[f32]) -> f32 {
        samples
            .iter()
            .map(|&s| s.abs())
            .fold(0.0f32, |a, b| a.max(b))
    }
}

impl super::Filter for Normalize {
    fn process(&mut self, frame: &AudioFrame) -> MixResult<AudioFrame> {
        let peak = Self::calculate_peak(frame.samples());

        // Silence stays silence
        if peak == 0.0 {
            return Ok(frame.clone());
        }

        let gain = self.target_peak / peak;
        let normalized = frame
            .samples()
            .iter()
            .map(|&s| (s * gain).clamp(-1.0, 1.0))
            .collect();

        AudioFrame::new(
            normalized,
            frame.sample_rate(),
            frame.channels(),
            frame.frame_number(),
        )
    }
}
