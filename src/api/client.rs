//! InvestHub REST API Client
//!
//! HTTP client bound to the backend base URL. The session identity token is
//! attached to every request as the `Telegram-Init-Data` header; it is
//! captured once at construction and never refreshed.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::error::{ClientError, FetchError, FetchResult};

/// Header carrying the host session init-data (`Telegram-Init-Data`)
pub const INIT_DATA_HEADER: &str = "telegram-init-data";

/// InvestHub backend API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    identity_token: String,
}

impl ApiClient {
    /// Create a client for `base_url` that sends `identity_token` on every call
    pub fn new(
        base_url: impl Into<String>,
        identity_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let mut identity_token = identity_token.into();

        // Unusable as a header value: send an empty token rather than none
        let value = match HeaderValue::from_str(&identity_token) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Identity token unusable as header, sending empty");
                identity_token.clear();
                HeaderValue::from_static("")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(INIT_DATA_HEADER), value);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::Build)?;

        // Normalize: remove trailing slash
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            identity_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token captured at construction
    pub fn identity_token(&self) -> &str {
        &self.identity_token
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` relative to the base URL; non-2xx statuses are errors
    pub async fn get(&self, path: &str) -> FetchResult<Response> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response)
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let response = self.get(path).await?;
        let bytes = response.bytes().await.map_err(FetchError::Body)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_normalized() {
        let client = ApiClient::new("http://localhost:8000/", "").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/api/dashboard"),
            "http://localhost:8000/api/dashboard"
        );
    }

    #[test]
    fn test_token_captured() {
        let client = ApiClient::new("http://localhost:8000", "user=1&hash=ff").unwrap();
        assert_eq!(client.identity_token(), "user=1&hash=ff");
    }

    #[test]
    fn test_invalid_token_degrades_to_empty() {
        let client = ApiClient::new("http://localhost:8000", "line\nbreak").unwrap();
        assert_eq!(client.identity_token(), "");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) on loopback is closed in test environments
        let client = ApiClient::new("http://127.0.0.1:9", "").unwrap();
        let err = client.get("/api/dashboard").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
