use super::identifier::{Candidate, IdentifyError, Identifier, Sample};
use log::debug;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("mixtrack/", env!("CARGO_PKG_VERSION"));

/// Default recognition endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/recognize";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Service response: `{"track": {"title": ..., "subtitle": ...}}`
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    track: Option<Candidate>,
}

/// Identification service reached over HTTP.
///
/// Each sample is POSTed as `audio/wav`; the service answers with a JSON
/// document whose optional `track` object carries `title` and `subtitle`.
pub struct HttpIdentifier {
    http_client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HttpIdentifier {
    /// Create a client for `endpoint`
    pub fn new(
        endpoint: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, IdentifyError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| IdentifyError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            api_token,
        })
    }

    /// Endpoint samples are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Parse a response body into the best candidate, if any
    pub fn parse_response(body: &str) -> Result<Option<Candidate>, IdentifyError> {
        let response: RecognizeResponse =
            serde_json::from_str(body).map_err(|e| IdentifyError::Parse(e.to_string()))?;
        Ok(response.track)
    }
}

impl Identifier for HttpIdentifier {
    async fn identify(&self, sample: &Sample) -> Result<Option<Candidate>, IdentifyError> {
        debug!(
            "Submitting window at {}s ({} bytes) to {}",
            sample.offset_seconds,
            sample.wav.len(),
            self.endpoint
        );

        let mut request = self
            .http_client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(sample.wav.clone());

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| IdentifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(IdentifyError::Api(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| IdentifyError::Network(e.to_string()))?;

        Self::parse_response(&body)
    }
}
