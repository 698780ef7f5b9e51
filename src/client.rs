//! Thin HTTP layer over the content API.
//!
//! [`ApiClient::get_json`] is the single transport entry point: it raises on
//! transport and HTTP failures and hands successful bodies to the caller
//! unvalidated. Retry and fallback behavior live one level up, in the
//! resolution strategies, never here.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, DNS, or timeout failure: no HTTP status was received.
    #[error("request to `{endpoint}` failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("`{endpoint}` returned {status}: {message}")]
    Http {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// The body was received but did not parse as the expected shape.
    #[error("failed to decode response from `{endpoint}`: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid endpoint `{endpoint}`: {source}")]
    Url {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client bound to one API origin.
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(ClientConfig::user_agent())
            .build()
            .map_err(|source| FetchError::Client { source })?;
        Ok(Self {
            http,
            base: config.api_origin.clone(),
        })
    }

    /// Origin this client is bound to.
    pub fn origin(&self) -> &Url {
        &self.base
    }

    /// `GET {origin}/api{path}?{query}`, decoded as `T`.
    ///
    /// No retries and no shape validation beyond JSON decoding: callers are
    /// responsible for normalizing the flat/nested field ambiguity.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<T, FetchError> {
        let url = self.request_url(path, query)?;
        let endpoint = path.to_string();
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        if !status.is_success() {
            return Err(FetchError::Http {
                endpoint,
                status: status.as_u16(),
                message: extract_error_message(&bytes, status.as_u16()),
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode { endpoint, source })
    }

    fn request_url(&self, path: &str, query: Option<&str>) -> Result<Url, FetchError> {
        let joined = format!("/api{path}");
        let mut url = self
            .base
            .join(&joined)
            .map_err(|source| FetchError::Url {
                endpoint: path.to_string(),
                source,
            })?;
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(url)
    }
}

/// Best-effort message from a failure body. The backend wraps errors as
/// `{"error": {"message": "..."}}`; anything else falls back to a generic
/// message carrying the status code.
fn extract_error_message(body: &[u8], status: u16) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<ErrorDetail>,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: Option<String>,
    }

    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_extracted_from_structured_body() {
        let body = br#"{"error":{"status":404,"name":"NotFoundError","message":"Not Found"}}"#;
        assert_eq!(extract_error_message(body, 404), "Not Found");
    }

    #[test]
    fn error_message_falls_back_on_unstructured_body() {
        assert_eq!(
            extract_error_message(b"<html>gateway timeout</html>", 504),
            "HTTP error! status: 504"
        );
        assert_eq!(
            extract_error_message(br#"{"error":{}}"#, 500),
            "HTTP error! status: 500"
        );
    }

    #[test]
    fn request_url_joins_under_api_prefix() {
        let config = ClientConfig::new("http://localhost:1337").expect("config");
        let client = ApiClient::new(&config).expect("client");
        let url = client
            .request_url("/beritas", Some("pagination%5Bpage%5D=1"))
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://localhost:1337/api/beritas?pagination%5Bpage%5D=1"
        );

        let bare = client.request_url("/staffs", None).expect("url");
        assert_eq!(bare.as_str(), "http://localhost:1337/api/staffs");
    }
}
