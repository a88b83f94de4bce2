use std::io;
use thiserror::Error;

/// Result type for mix identification operations
pub type MixResult<T> = Result<T, MixError>;

/// Error types for the mix identification pipeline
#[derive(Error, Debug)]
pub enum MixError {
    /// IO error (file operations, disk access)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No fetcher handles this locator
    #[error("No fetcher for source: {0}")]
    UnsupportedSource(String),

    /// The source was recognized but could not be fetched
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Unsupported audio format
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Invalid audio metadata
    #[error("Invalid audio metadata: {0}")]
    InvalidMetadata(String),

    /// Decoding failed
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Encoding failed
    #[error("Encode error: {0}")]
    EncodeError(String),

    /// Invalid channel configuration
    #[error("Invalid channel configuration: expected {expected}, got {got}")]
    InvalidChannels {
        /// Expected number of channels
        expected: u32,
        /// Got number of channels
        got: u32,
    },

    /// Invalid sample rate
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate
        rate: u32,
    },

    /// Buffer-related error
    #[error("Buffer error: {0}")]
    BufferError(String),

    /// A single segment could not be recognized
    #[error("Recognition failure: {0}")]
    RecognitionFailure(String),

    /// The identification service could not be reached for any segment
    #[error("Identification service unreachable for all {segments} segments")]
    ServiceUnavailable {
        /// Number of segments attempted
        segments: usize,
    },

    /// Writing the track listing failed
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Audio processing error
    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl From<symphonia::core::errors::Error> for MixError {
    fn from(err: symphonia::core::errors::Error) -> Self {
        MixError::DecodeError(err.to_string())
    }
}

impl From<hound::Error> for MixError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => MixError::Io(e),
            e => MixError::EncodeError(e.to_string()),
        }
    }
}
