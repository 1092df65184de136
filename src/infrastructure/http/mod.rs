use crate::domain::probe::ProbeRequest;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Status and raw body of a response from the speech API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Failure to obtain any HTTP response at all.
/// Non-2xx statuses are not transport errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connect(_) => "connect",
            Self::Timeout(_) => "timeout",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Other(_) => "transport",
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Connect(_) | Self::Timeout(_))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Other(err.to_string())
        }
    }
}

/// Sends probe requests to the speech API.
/// Abstracts the HTTP client so probes can run against recorded or failing transports.
#[async_trait]
pub trait SpeechTransport: Send + Sync {
    /// POST `request` as JSON to `url` with the given Authorization header value
    ///
    /// # Errors
    /// Returns error only when no HTTP response was received
    async fn post_json(
        &self,
        url: &str,
        authorization: &str,
        request: &ProbeRequest,
    ) -> Result<TransportResponse, TransportError>;
}

pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// `timeout` of `None` keeps the client library default
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl SpeechTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        authorization: &str,
        request: &ProbeRequest,
    ) -> Result<TransportResponse, TransportError> {
        tracing::debug!(url = url, reqid = %request.request.reqid, "Sending speech API request");

        let response = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status = status, body_length = body.len(), "Speech API responded");

        Ok(TransportResponse { status, body })
    }
}
