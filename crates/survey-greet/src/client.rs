//! Survey API access.

use crate::config::FetchConfig;
use crate::error::Result;
use log::debug;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restapi.surveygizmo.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can hand back one raw survey payload.
pub trait ResponseSource {
    fn fetch_payload(&self) -> Result<Value>;
}

/// Blocking client for the SurveyGizmo v5 `surveyresponse` endpoint.
///
/// One GET per call, no paging: the first page the API returns is the
/// whole result.
#[derive(Debug, Clone)]
pub struct SurveyClient {
    http: reqwest::blocking::Client,
    base_url: String,
    config: FetchConfig,
}

impl SurveyClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(config: FetchConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    /// Endpoint URL without the credential query string.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v5/survey/{}/surveyresponse",
            self.base_url, self.config.survey_id
        )
    }
}

impl ResponseSource for SurveyClient {
    fn fetch_payload(&self) -> Result<Value> {
        let url = self.endpoint();
        debug!("GET {}", url);

        // Errors carry the request URL, which includes the credentials.
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_token", self.config.api_token.as_str()),
                ("api_token_secret", self.config.api_secret.as_str()),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.without_url())?;

        let body = response.bytes().map_err(|e| e.without_url())?;
        debug!("received {} bytes", body.len());
        Ok(serde_json::from_slice(&body)?)
    }
}
