use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, AUTHORIZATION, COOKIE};
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Could not reach the registration service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
}

/// Caller credentials relayed to the account API. The hydrated client calls
/// the server functions with the session cookie left by the OAuth redirect;
/// API clients may send a bearer token instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub authorization: Option<String>,
    pub cookie: Option<String>,
}

impl Credentials {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            authorization: read(AUTHORIZATION),
            cookie: read(COOKIE),
        }
    }
}

/// Client for the upstream account API that stores registrations.
pub struct Backend {
    client: Client,
    base_url: String,
}

impl Backend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        credentials: &Credentials,
    ) -> Result<(), BackendError> {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(value) = &credentials.authorization {
            req = req.header(AUTHORIZATION, value);
        }
        if let Some(value) = &credentials.cookie {
            req = req.header(COOKIE, value);
        }

        let res = req.send().await?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let text = res.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %path, "backend refused registration");
        Err(BackendError::Status {
            status: status.as_u16(),
            message: status_message(status.as_u16(), &text),
        })
    }
}

/// Prefers the backend's own message; falls back to the status code.
fn status_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let from_json = parsed
        .as_ref()
        .and_then(|v| v.get("message").or_else(|| v.get("error")))
        .and_then(|v| v.as_str())
        .map(str::to_string);

    match from_json {
        Some(message) if !message.is_empty() => message,
        _ if !body.trim().is_empty() && parsed.is_none() => body.trim().to_string(),
        _ => format!("Registration failed ({status})"),
    }
}
