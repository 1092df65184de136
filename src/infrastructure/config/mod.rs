use crate::domain::probe::{Credentials, DEFAULT_VOICE_TYPE};
use crate::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_TTS_URL: &str = "https://openspeech.byteoversea.com/api/v1/tts";
pub const DEFAULT_CLUSTER: &str = "byteplus_tts";

#[derive(Debug, Clone)]
pub struct Config {
    pub app_id: Option<String>,
    pub access_token: Option<String>,
    pub cluster: String,
    pub voice_type: String,
    pub tts_url: String,
    pub http_timeout_secs: Option<u64>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load from the process environment, after applying any `.env` file
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    /// Credentials are not validated: unset values go out as `null`.
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_timeout_secs = match var("PROBE_HTTP_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        let log_format = match var("LOG_FORMAT")
            .unwrap_or_else(|| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::Config(format!(
                    "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                    other
                )))
            }
        };

        let config = Config {
            app_id: var("BYTEPLUS_APP_ID"),
            access_token: var("BYTEPLUS_ACCESS_TOKEN"),
            cluster: var("BYTEPLUS_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string()),
            voice_type: var("BYTEPLUS_VOICE_TYPE")
                .unwrap_or_else(|| DEFAULT_VOICE_TYPE.to_string()),
            tts_url: var("BYTEPLUS_TTS_URL").unwrap_or_else(|| DEFAULT_TTS_URL.to_string()),
            http_timeout_secs,
            log_format,
        };

        Ok(config)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            app_id: self.app_id.clone(),
            access_token: self.access_token.clone(),
            cluster: Some(self.cluster.clone()),
        }
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }
}

fn parse_timeout(raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::Config(format!(
            "PROBE_HTTP_TIMEOUT_SECS must be a positive integer, got '{}'",
            raw
        ))),
    }
}
