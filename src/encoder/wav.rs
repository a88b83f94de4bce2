use crate::core::{AudioFrame, Channels};
use crate::error::{MixError, MixResult};
use crate::processor::Segment;
use hound::{WavSpec, WavWriter};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::{Path, PathBuf};

/// Sample encoding written into the WAV container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// 16-bit signed PCM (compact, accepted by recognition services)
    Pcm16,
    /// 32-bit float
    Float32,
}

impl WavFormat {
    fn spec(self, sample_rate: u32, channels: Channels) -> WavSpec {
        let (bits_per_sample, sample_format) = match self {
            WavFormat::Pcm16 => (16, hound::SampleFormat::Int),
            WavFormat::Float32 => (32, hound::SampleFormat::Float),
        };

        WavSpec {
            channels: channels.count() as u16,
            sample_rate,
            bits_per_sample,
            sample_format,
        }
    }
}

/// WAV audio encoder
pub struct WavEncoder<W: Write + Seek> {
    writer: Option<WavWriter<W>>,
    sample_rate: u32,
    channels: Channels,
    format: WavFormat,
}

impl WavEncoder<BufWriter<File>> {
    /// Create a new WAV encoder writing to a file
    pub fn create<P: AsRef<Path>>(
        path: P,
        sample_rate: u32,
        channels: Channels,
        format: WavFormat,
    ) -> MixResult<Self> {
        let writer = WavWriter::create(path, format.spec(sample_rate, channels))
            .map_err(|e| MixError::EncodeError(e.to_string()))?;

        Ok(WavEncoder {
            writer: Some(writer),
            sample_rate,
            channels,
            format,
        })
    }
}

impl<W: Write + Seek> WavEncoder<W> {
    /// Create a new WAV encoder over any seekable writer
    pub fn new(inner: W, sample_rate: u32, channels: Channels, format: WavFormat) -> MixResult<Self> {
        let writer = WavWriter::new(inner, format.spec(sample_rate, channels))
            .map_err(|e| MixError::EncodeError(e.to_string()))?;

        Ok(WavEncoder {
            writer: Some(writer),
            sample_rate,
            channels,
            format,
        })
    }
}

impl<W: Write + Seek> super::Encoder for WavEncoder<W> {
    fn encode(&mut self, frame: &AudioFrame) -> MixResult<()> {
        if frame.sample_rate() != self.sample_rate {
            return Err(MixError::InvalidSampleRate {
                rate: frame.sample_rate(),
            });
        }

        if frame.channels() != self.channels {
            return Err(MixError::InvalidChannels {
                expected: self.channels.count(),
                got: frame.channels().count(),
            });
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| MixError::ProcessingError("Encoder already finalized".to_string()))?;

        for &sample in frame.samples() {
            match self.format {
                WavFormat::Pcm16 => {
                    let scaled = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
                    writer.write_sample(scaled)?;
                }
                WavFormat::Float32 => writer.write_sample(sample)?,
            }
        }

        Ok(())
    }

    fn finalize(&mut self) -> MixResult<()> {
        if let Some(writer) = self.writer.take() {
            writer
                .finalize()
                .map_err(|e| MixError::EncodeError(e.to_string()))?;
        }
        Ok(())
    }
}

/// Encode a frame into an in-memory WAV file
pub fn encode_wav(frame: &AudioFrame, format: WavFormat) -> MixResult<Vec<u8>> {
    use super::Encoder;

    let mut buffer = Cursor::new(Vec::new());
    {
        let mut encoder = WavEncoder::new(&mut buffer, frame.sample_rate(), frame.channels(), format)?;
        encoder.encode(frame)?;
        encoder.finalize()?;
    }
    Ok(buffer.into_inner())
}

/// Write a segment to `dir` as `chunk_NNNN.wav`
pub fn export_segment(segment: &Segment, dir: &Path, format: WavFormat) -> MixResult<PathBuf> {
    use super::Encoder;

    let path = dir.join(format!("chunk_{:04}.wav", segment.index));
    let audio = &segment.audio;

    let mut encoder = WavEncoder::create(&path, audio.sample_rate(), audio.channels(), format)?;
    encoder.encode(audio)?;
    encoder.finalize()?;

    Ok(path)
}
