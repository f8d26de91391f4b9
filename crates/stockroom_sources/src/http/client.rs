//! Inventory API client.

use crate::config::ConfigError;
use core::time::Duration;
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use stockroom_resources::{Envelope, FetchError};

/// HTTP client for the inventory API.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `base_url` is not an absolute
    /// URL that can take path segments, and [`ConfigError::Client`] if the
    /// HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|err| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ConfigError::Client(err.to_string()))?;

        Ok(Self {
            client,
            base_url: parsed,
            token,
        })
    }

    /// The base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the URL for `segments` below the base URL.
    ///
    /// Segments are percent-encoded, so identifiers may contain any character.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a `GET` and decodes the envelope.
    ///
    /// A non-success status whose body is an envelope with a message is
    /// returned as a failed envelope so the server's wording reaches the user.
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Envelope<T>, FetchError> {
        let url = self.endpoint(segments);
        tracing::debug!(%url, "GET");

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| FetchError::Http(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Http(err.to_string()))?;

        if !status.is_success() {
            if let Some(message) = server_message(&body) {
                return Ok(Envelope::failure(message));
            }
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, FetchError> {
    serde_json::from_str(body).map_err(|err| {
        tracing::debug!(%err, body, "response is not an envelope");
        FetchError::Json(err)
    })
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.trim().is_empty())
}

impl core::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
