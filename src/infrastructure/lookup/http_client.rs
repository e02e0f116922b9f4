//! Shared HTTP client for entity lookups

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::domain::DomainError;

/// Response envelope used by the user and course services
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Connection settings for a lookup service
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL of the service, e.g. `http://users:8081`
    pub base_url: String,
    /// Optional bearer token sent with every request
    pub token: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl LookupConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-based client for `GET {base_url}/{resource}/{id}`
#[derive(Debug, Clone)]
pub struct LookupHttpClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    service: &'static str,
    resource: &'static str,
}

impl LookupHttpClient {
    pub fn new(
        config: &LookupConfig,
        service: &'static str,
        resource: &'static str,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build {} client: {}", service, e))
            })?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DomainError::configuration(format!(
                "Invalid {} base URL '{}': {}",
                service, config.base_url, e
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "Invalid {} base URL '{}'",
                service, config.base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            token: config.token.clone().filter(|t| !t.is_empty()),
            service,
            resource,
        })
    }

    /// `{base_url}/{resource}/{id}` with the id escaped as a single path
    /// segment. `None` for `.` and `..`, which cannot name an entity.
    fn url(&self, id: &str) -> Option<Url> {
        if id == "." || id == ".." {
            return None;
        }

        let mut url = self.base_url.clone();

        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(self.resource).push(id);
        }

        Some(url)
    }

    /// Fetch an entity. `Ok(None)` means the service answered 404.
    pub async fn fetch<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>, DomainError> {
        let Some(url) = self.url(id) else {
            return Ok(None);
        };
        debug!(service = self.service, url = %url, "Looking up entity");

        let mut request = self.client.get(url);

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::upstream(self.service, format!("Request failed: {}", e)))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::upstream(
                self.service,
                format!("HTTP {}: {}", status, body),
            ));
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            DomainError::upstream(self.service, format!("Failed to parse response: {}", e))
        })?;

        Ok(Some(envelope.data))
    }
}
