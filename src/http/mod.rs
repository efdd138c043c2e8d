//! Generic HTTP collaborator for entity modules
//!
//! Entity modules never talk to the network directly; they go through the
//! [`HttpClient`] trait so the collaborator is an explicit, testable input.
//! [`RestClient`] is the production implementation backed by reqwest.

use crate::core::error::HttpError;
use async_trait::async_trait;
use serde_json::Value;

/// Generic JSON-over-HTTP client
///
/// Paths are resource paths relative to the client's base URL, without a
/// leading slash (e.g. `"categories"` or `"categories/42"`). Success yields
/// the response body as JSON (`Value::Null` for bodiless responses); failure
/// yields an [`HttpError`] carrying either the transport failure or the
/// server's status and error body.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET a resource path
    async fn get(&self, path: &str) -> Result<Value, HttpError>;

    /// POST a JSON body to a resource path
    async fn post(&self, path: &str, body: &Value) -> Result<Value, HttpError>;

    /// PUT a JSON body to a resource path
    async fn put(&self, path: &str, body: &Value) -> Result<Value, HttpError>;

    /// DELETE a resource path
    async fn delete(&self, path: &str) -> Result<Value, HttpError>;
}

/// Reqwest-backed [`HttpClient`] with a fixed base URL
#[derive(Clone)]
pub struct RestClient {
    base_url: String,
    inner: reqwest::Client,
}

impl RestClient {
    /// Create a client for the given API base URL (trailing slash tolerated)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            inner: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Turn a reqwest response into the trait's `Value`-or-`HttpError` shape
    ///
    /// Non-JSON bodies are preserved as JSON strings so server-provided
    /// plain-text error messages survive the trip.
    async fn into_value(response: reqwest::Response) -> Result<Value, HttpError> {
        let status = response.status();
        let text = response.text().await.map_err(|e| HttpError::Transport {
            message: e.to_string(),
        })?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if status.is_success() {
            Ok(body)
        } else {
            Err(HttpError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn transport(err: reqwest::Error) -> HttpError {
        HttpError::Transport {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl HttpClient for RestClient {
    async fn get(&self, path: &str) -> Result<Value, HttpError> {
        let response = self
            .inner
            .get(self.url(path))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::into_value(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, HttpError> {
        let response = self
            .inner
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::into_value(response).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, HttpError> {
        let response = self
            .inner
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::into_value(response).await
    }

    async fn delete(&self, path: &str) -> Result<Value, HttpError> {
        let response = self
            .inner
            .delete(self.url(path))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::into_value(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = RestClient::new("https://api.example.com/");
        assert_eq!(
            client.url("categories"),
            "https://api.example.com/categories"
        );
        assert_eq!(
            client.url("/categories/42"),
            "https://api.example.com/categories/42"
        );
    }
}
