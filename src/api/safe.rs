//! Safe Fetch
//!
//! A fetch whose failure path is absorbed into a caller-supplied default.
//! Network errors, non-2xx statuses and malformed bodies are treated alike;
//! nothing is retried and nothing is reported to the caller.

use serde::de::DeserializeOwned;

use super::client::ApiClient;

/// Fetch `path`, returning `fallback` on any failure
pub async fn safe_get<T: DeserializeOwned>(client: &ApiClient, path: &str, fallback: T) -> T {
    match client.get_json(path).await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(path, kind = e.kind(), error = %e, "fetch failed, using fallback");
            fallback
        }
    }
}

/// `safe_get` with the type's default as the fallback
pub async fn safe_get_or_default<T: DeserializeOwned + Default>(client: &ApiClient, path: &str) -> T {
    safe_get(client, path, T::default()).await
}
