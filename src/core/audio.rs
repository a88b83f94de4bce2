use crate::error::{MixError, MixResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Channel configuration for audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Mono (1 channel)
    Mono = 1,
    /// Stereo (2 channels)
    Stereo = 2,
    /// Quad (4 channels)
    Quad = 4,
    /// 5.1 surround sound
    SurroundFivePointOne = 6,
    /// 7.1 surround sound
    SurroundSevenPointOne = 8,
}

impl Channels {
    /// Create Channels from channel count
    pub fn from_count(count: u32) -> MixResult<Self> {
        match count {
            1 => Ok(Channels::Mono),
            2 => Ok(Channels::Stereo),
            4 => Ok(Channels::Quad),
            6 => Ok(Channels::SurroundFivePointOne),
            8 => Ok(Channels::SurroundSevenPointOne),
            n => Err(MixError::InvalidChannels {
                expected: 1,
                got: n,
            }),
        }
    }

    /// Get the number of channels
    pub fn count(&self) -> u32 {
        *self as u32
    }

    /// Get channel layout name
    pub fn name(&self) -> &'static str {
        match self {
            Channels::Mono => "Mono",
            Channels::Stereo => "Stereo",
            Channels::Quad => "Quad",
            Channels::SurroundFivePointOne => "5.1 Surround",
            Channels::SurroundSevenPointOne => "7.1 Surround",
        }
    }
}

/// Audio frame containing samples and metadata
#[derive(Debug, Clone)]
pub struct AudioFrame {
    /// Audio samples (interleaved for multiple channels, f32 from -1.0 to 1.0)
    samples: Vec<f32>,
    /// Sample rate in Hz (e.g., 44100, 48000, 16000)
    sample_rate: u32,
    /// Number of channels
    channels: Channels,
    /// Frame number in the audio stream
    frame_number: u64,
}

impl AudioFrame {
    /// Create a new audio frame
    pub fn new(
        samples: Vec<f32>,
        sample_rate: u32,
        channels: Channels,
        frame_number: u64,
    ) -> MixResult<Self> {
        if sample_rate == 0 {
            return Err(MixError::InvalidSampleRate { rate: sample_rate });
        }

        if samples.len() % channels.count() as usize != 0 {
            return Err(MixError::BufferError(
                "Sample count not divisible by channel count".to_string(),
            ));
        }

        Ok(AudioFrame {
            samples,
            sample_rate,
            channels,
            frame_number,
        })
    }

    /// Get reference to the samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Get owned samples (consumes frame)
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Get sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get channel configuration
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Get number of samples per channel
    pub fn samples_per_channel(&self) -> usize {
        self.samples.len() / self.channels.count() as usize
    }

    /// Get frame number
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Get duration of this frame
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples_per_channel() as f64 / self.sample_rate as f64)
    }

    /// Check if frame is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A fully decoded audio stream and the local file it was read from
#[derive(Debug, Clone)]
pub struct AudioAsset {
    source: PathBuf,
    audio: AudioFrame,
}

impl AudioAsset {
    /// Wrap decoded audio
    pub fn new(source: impl Into<PathBuf>, audio: AudioFrame) -> Self {
        AudioAsset {
            source: source.into(),
            audio,
        }
    }

    /// Local file the audio was decoded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Decoded audio
    pub fn audio(&self) -> &AudioFrame {
        &self.audio
    }

    /// Take the decoded audio (consumes asset)
    pub fn into_audio(self) -> AudioFrame {
        self.audio
    }

    /// Total duration of the stream
    pub fn duration(&self) -> Duration {
        self.audio.duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_from_count() {
        assert_eq!(Channels::from_count(1).unwrap(), Channels::Mono);
        assert_eq!(Channels::from_count(2).unwrap(), Channels::Stereo);
        assert!(Channels::from_count(0).is_err());
        assert!(Channels::from_count(3).is_err());
    }

    #[test]
    fn test_channels_count() {
        assert_eq!(Channels::Mono.count(), 1);
        assert_eq!(Channels::Stereo.count(), 2);
        assert_eq!(Channels::Quad.count(), 4);
    }

    #[test]
    fn test_audio_frame_creation() {
        let samples = vec![0.1, 0.2, 0.3, 0.4];
        let frame = AudioFrame::new(samples, 44100, Channels::Stereo, 0).unwrap();

        assert_eq!(frame.sample_rate(), 44100);
        assert_eq!(frame.channels(), Channels::Stereo);
        assert_eq!(frame.samples_per_channel(), 2);
        assert_eq!(frame.frame_number(), 0);
    }

    #[test]
    fn test_audio_frame_invalid_samples() {
        // Odd number of samples for stereo should fail
        let samples = vec![0.1, 0.2, 0.3];
        let result = AudioFrame::new(samples, 44100, Channels::Stereo, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_asset_duration() {
        let frame = AudioFrame::new(vec![0.0; 8000 * 45], 8000, Channels::Mono, 0).unwrap();
        let asset = AudioAsset::new("mix.wav", frame);

        assert_eq!(asset.duration(), Duration::from_secs(45));
        assert_eq!(asset.source(), Path::new("mix.wav"));
    }
}
