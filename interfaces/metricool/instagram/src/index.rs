use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const METRICOOL_BASE_URL: &str = "https://app.metricool.com/api";

/// Pre-provisioned credential triple merged into every request's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_token: String,
    pub user_id: String,
    pub blog_id: String,
}

impl Credentials {
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("userToken", self.user_token.as_str()),
            ("userId", self.user_id.as_str()),
            ("blogId", self.blog_id.as_str()),
        ]
    }
}

/// Credentials first, then `extra`. An extra key that is already present
/// overwrites the value in place.
pub fn merge_query_params(
    credentials: &Credentials,
    extra: &[(&str, String)],
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = credentials
        .query_pairs()
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    for (key, value) in extra {
        match merged.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, slot)) => *slot = value.clone(),
            None => merged.push((key.to_string(), value.clone())),
        }
    }

    merged
}

#[derive(Debug, Clone)]
pub struct MetricoolClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl MetricoolClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(METRICOOL_BASE_URL, credentials)
    }

    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `base_url + path` and decode the body as JSON.
    ///
    /// Non-2xx responses fail with [`FetchError::HttpStatus`] carrying the body.
    pub async fn fetch(&self, path: &str, extra: &[(&str, String)]) -> Result<Value, FetchError> {
        // Query string stays out of `url`; it holds the user token.
        let url = format!("{}{}", self.base_url, path);
        let params = merge_query_params(&self.credentials, extra);

        debug!(%url, "sending metricool request");

        let response = self
            .http
            .get(&url)
            .header(header::USER_AGENT, "rust-client")
            .header(header::ACCEPT, "application/json")
            .query(&params)
            .send()
            .await
            .map_err(|source| FetchError::RequestSend {
                url: url.clone(),
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            // Body is diagnostics only.
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::HttpStatus { url, status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::ResponseRead {
                url: url.clone(),
                source: source.without_url(),
            })?;

        let document = serde_json::from_str(&body)
            .map_err(|source| FetchError::DeserializeResponseBody { url: url.clone(), source })?;

        debug!(%url, %status, bytes = body.len(), "decoded metricool response");

        Ok(document)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("RequestSend: GET {url}")]
    RequestSend {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HttpStatus: GET {url} returned {status}: {body}")]
    HttpStatus {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("ResponseRead: GET {url}")]
    ResponseRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("DeserializeResponseBody: GET {url}")]
    DeserializeResponseBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
