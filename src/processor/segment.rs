use crate::core::{AudioAsset, AudioFrame};
use crate::error::{MixError, MixResult};
use log::debug;
use std::time::Duration;

/// Default window length in seconds
pub const DEFAULT_WINDOW_SECONDS: u32 = 20;

/// One fixed-length window of the mix
#[derive(Debug, Clone)]
pub struct Segment {
    /// Position in emission order, starting at 0
    pub index: usize,
    /// Start of the window in the mix (`index * window`)
    pub offset_seconds: u64,
    /// Audio covered by the window
    pub audio: AudioFrame,
}

impl Segment {
    /// Length of the window's audio
    pub fn duration(&self) -> Duration {
        self.audio.duration()
    }
}

/// Audio segmentation - split audio into fixed-length windows
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// Window length in seconds
    window_seconds: u32,
}

impl Segmenter {
    /// Create a new segmenter
    pub fn new(window_seconds: u32) -> MixResult<Self> {
        if window_seconds == 0 {
            return Err(MixError::ConfigError(
                "Segment window must be at least one second".to_string(),
            ));
        }

        Ok(Segmenter { window_seconds })
    }

    /// Window length in seconds
    pub fn window_seconds(&self) -> u32 {
        self.window_seconds
    }

    /// Split an asset into consecutive windows covering `[0, duration)`
    pub fn split(&self, asset: AudioAsset) -> MixResult<Vec<Segment>> {
        let audio = asset.into_audio();
        let sample_rate = audio.sample_rate();
        let channels = audio.channels();

        let window_len =
            self.window_seconds as usize * sample_rate as usize * channels.count() as usize;
        let windows = split_windows(audio.into_samples(), window_len);

        let mut segments = Vec::with_capacity(windows.len());

        for (index, window) in windows.into_iter().enumerate() {
            let segment = Segment {
                index,
                offset_seconds: index as u64 * self.window_seconds as u64,
                audio: AudioFrame::new(window, sample_rate, channels, index as u64)?,
            };

            debug!(
                "Segment {} at {}s ({:.1}s)",
                segment.index,
                segment.offset_seconds,
                segment.duration().as_secs_f64()
            );

            segments.push(segment);
        }

        Ok(segments)
    }
}

/// Cut `samples` into chunks of `window_len`, the last one possibly shorter.
///
/// Chunks are taken off the tail and the source buffer is shrunk after each
/// cut, so the mix is never held twice.
fn split_windows(mut samples: Vec<f32>, window_len: usize) -> Vec<Vec<f32>> {
    let count = samples.len().div_ceil(window_len);
    let mut windows = Vec::with_capacity(count);

    for index in (1..count).rev() {
        windows.push(samples.split_off(index * window_len));
        samples.shrink_to_fit();
    }
    if count > 0 {
        windows.push(samples);
    }

    windows.reverse();
    windows
}

/// Split `asset` into windows of `window_seconds`
pub fn segment(asset: AudioAsset, window_seconds: u32) -> MixResult<Vec<Segment>> {
    Segmenter::new(window_seconds)?.split(asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Channels;

    fn asset(seconds: usize, sample_rate: u32, channels: Channels) -> AudioAsset {
        let len = seconds * sample_rate as usize * channels.count() as usize;
        let samples = (0..len).map(|i| (i % 7) as f32 / 10.0).collect();
        AudioAsset::new(
            "mix.wav",
            AudioFrame::new(samples, sample_rate, channels, 0).unwrap(),
        )
    }

    #[test]
    fn test_segmenter_creation() {
        let segmenter = Segmenter::new(20).unwrap();
        assert_eq!(segmenter.window_seconds(), 20);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(Segmenter::new(0).is_err());
        assert!(segment(asset(1, 8000, Channels::Mono), 0).is_err());
    }

    #[test]
    fn test_split_45_seconds_into_20_second_windows() {
        let segments = segment(asset(45, 8000, Channels::Mono), 20).unwrap();

        assert_eq!(segments.len(), 3);
        let offsets: Vec<u64> = segments.iter().map(|s| s.offset_seconds).collect();
        assert_eq!(offsets, vec![0, 20, 40]);
        let durations: Vec<Duration> = segments.iter().map(Segment::duration).collect();
        assert_eq!(
            durations,
            vec![
                Duration::from_secs(20),
                Duration::from_secs(20),
                Duration::from_secs(5)
            ]
        );
    }

    #[test]
    fn test_segments_cover_asset_exactly() {
        for (seconds, window) in [(60, 20), (61, 20), (7, 3), (1, 1), (100, 30)] {
            let source = asset(seconds, 1000, Channels::Stereo);
            let original = source.audio().samples().to_vec();
            let segments = segment(source, window).unwrap();

            assert_eq!(segments.len(), seconds.div_ceil(window as usize));

            for (i, s) in segments.iter().enumerate() {
                assert_eq!(s.index, i);
                assert_eq!(s.offset_seconds, i as u64 * window as u64);
            }

            // Concatenating the windows gives back the original stream
            let rejoined: Vec<f32> = segments
                .iter()
                .flat_map(|s| s.audio.samples().iter().copied())
                .collect();
            assert_eq!(rejoined, original);
        }
    }

    #[test]
    fn test_short_asset_gives_one_segment() {
        let segments = segment(asset(5, 8000, Channels::Mono), 20).unwrap();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].offset_seconds, 0);
        assert_eq!(segments[0].duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_empty_asset_gives_no_segments() {
        let segments = segment(asset(0, 8000, Channels::Mono), 20).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_split_windows_does_not_keep_source_allocation() {
        let samples: Vec<f32> = (0..10_000).map(|i| i as f32).collect();
        let windows = split_windows(samples, 3000);

        let lens: Vec<usize> = windows.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![3000, 3000, 3000, 1000]);
        assert_eq!(windows[1][0], 3000.0);
        assert_eq!(windows[3][999], 9999.0);

        // The first window is the source buffer itself, shrunk to one window
        let allocated: usize = windows.iter().map(Vec::capacity).sum();
        assert!(allocated < 10_000 + 3000, "allocated {}", allocated);
    }

    #[test]
    fn test_fractional_tail_is_kept() {
        // 2.5 seconds at 1 kHz
        let frame = AudioFrame::new(vec![0.0; 2500], 1000, Channels::Mono, 0).unwrap();
        let segments = segment(AudioAsset::new("mix.wav", frame), 1).unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].offset_seconds, 2);
        assert_eq!(segments[2].audio.samples_per_channel(), 500);
    }
}
