use serde::Deserialize;
use std::future::Future;
use thiserror::Error;

/// Identification service errors
#[derive(Debug, Error)]
pub enum IdentifyError {
    /// The service could not be reached (connect failure, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// The response body was not understood
    #[error("Parse error: {0}")]
    Parse(String),
}

impl IdentifyError {
    /// Whether the failure means the service is unreachable rather than unhappy
    pub fn is_transport(&self) -> bool {
        matches!(self, IdentifyError::Network(_))
    }
}

/// Audio submitted to the identification service
#[derive(Debug, Clone)]
pub struct Sample {
    /// Offset of the window the sample was cut from
    pub offset_seconds: u64,
    /// WAV-encoded audio
    pub wav: Vec<u8>,
}

/// Best candidate song returned by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    /// Song title
    pub title: Option<String>,
    /// Performing artist
    pub subtitle: Option<String>,
}

/// An audio identification oracle
pub trait Identifier: Send + Sync {
    /// Identify one sample; `Ok(None)` means the service found no match
    fn identify(
        &self,
        sample: &Sample,
    ) -> impl Future<Output = Result<Option<Candidate>, IdentifyError>> + Send;
}
