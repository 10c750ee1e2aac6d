//! HTTP transport for the Zendesk API.
//!
//! Issues authenticated requests and hands every response to the
//! [classifier](crate::classifier) before the body is decoded. No request
//! is retried.
//!
//! # Security
//!
//! Credentials are sent as HTTP basic auth and never logged.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use url::Url;

use crate::classifier::classify;
use crate::config::ClientConfig;
use crate::error::ZendeskError;
use crate::logger::Logger;
use crate::models::{Response, ResponseBody};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Authenticated HTTP transport bound to one Zendesk endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// API root, always ending in `/`.
    base_url: Url,

    username: String,

    /// SECURITY: Never log this value!
    password: String,

    logger: Arc<dyn Logger>,
}

impl HttpTransport {
    /// Creates a transport from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::Config` if the URL is not an http(s) URL, or
    /// `ZendeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &ClientConfig) -> Result<Self, ZendeskError> {
        let base_url = Self::normalize_base_url(config.url())?;

        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ZendeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url,
            username: config.username().to_string(),
            password: config.password().to_string(),
            logger: Arc::clone(config.logger()),
        })
    }

    /// Parses the endpoint and ensures it ends with `/` so relative paths
    /// join beneath it rather than replacing its last segment.
    fn normalize_base_url(url: &str) -> Result<Url, ZendeskError> {
        let url = url.trim();
        let with_slash = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{}/", url)
        };

        let parsed = Url::parse(&with_slash)
            .map_err(|e| ZendeskError::invalid_config(format!("invalid url {:?}: {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ZendeskError::invalid_config(
                "url must start with http:// or https://",
            ));
        }

        Ok(parsed)
    }

    /// The API root requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs the response classifier with this transport's logger.
    pub fn handle_response(&self, response: &Response) -> Result<(), ZendeskError> {
        classify(response, self.logger.as_ref())
    }

    /// Makes a GET request.
    pub async fn get<T>(&self, path: &str) -> Result<T, ZendeskError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, None).await
    }

    /// Makes a PUT request with a JSON payload.
    pub async fn put<T>(&self, path: &str, payload: serde_json::Value) -> Result<T, ZendeskError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(payload)).await
    }

    /// Sends a request, classifies the response and decodes its body.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the API root (e.g. "tickets/1.json")
    /// * `payload` - Optional JSON request body
    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        payload: Option<serde_json::Value>,
    ) -> Result<T, ZendeskError>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ZendeskError::invalid_config(format!("invalid path {:?}: {}", path, e)))?;

        tracing::debug!(method = %method, path = %path, "Making Zendesk API request");

        let mut req = self
            .http
            .request(method.clone(), url)
            .basic_auth(&self.username, Some(&self.password))
            .header(header::ACCEPT, "application/json");

        if let Some(payload) = payload {
            req = req.json(&payload);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return ZendeskError::Timeout {
                    duration: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                    operation: format!("{} {}", method, path),
                };
            }
            ZendeskError::Http(e)
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(ZendeskError::Http)?;
        let response = Response::new(status, ResponseBody::parse(text));

        tracing::trace!(status, body = %response.body(), "Zendesk API response");

        if let Err(e) = self.handle_response(&response) {
            if matches!(e, ZendeskError::Authentication { .. }) {
                tracing::warn!(status, "Zendesk rejected the configured credentials");
            }
            return Err(e);
        }

        response.into_body().deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawConfig;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            HttpTransport::normalize_base_url("https://govuk.zendesk.com/api/v2/")
                .unwrap()
                .as_str(),
            "https://govuk.zendesk.com/api/v2/"
        );
        assert_eq!(
            HttpTransport::normalize_base_url("https://govuk.zendesk.com/api/v2")
                .unwrap()
                .as_str(),
            "https://govuk.zendesk.com/api/v2/"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_bad_urls() {
        assert!(HttpTransport::normalize_base_url("govuk.zendesk.com").is_err());
        assert!(HttpTransport::normalize_base_url("ftp://govuk.zendesk.com/").is_err());
        assert!(HttpTransport::normalize_base_url("").is_err());
    }

    #[test]
    fn test_paths_join_under_api_root() {
        let raw = RawConfig::new()
            .with_symbol("username", "user")
            .with_symbol("password", "pass")
            .with_symbol("url", "https://example.zendesk.com/api/v2");
        let config = ClientConfig::resolve(&raw).unwrap();
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(
            transport.base_url().join("tickets/1.json").unwrap().as_str(),
            "https://example.zendesk.com/api/v2/tickets/1.json"
        );
    }
}
