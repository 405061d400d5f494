//! HTTP request gateway for the shop backend.
//!
//! Wraps `reqwest` and owns the request/response plumbing every endpoint
//! shares: bearer-token injection, query/body shaping per verb, envelope
//! decoding, and the forced-logout side effect on 401. Nothing here retries
//! or backs off; failures surface to the caller with a human-readable
//! message and the caller decides how to render them.

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use repairhub_core::{Envelope, EnvelopeError};

use crate::config::ClientConfig;
use crate::session::SessionStore;

/// Upload endpoint for images (multipart, auth required).
const UPLOAD_IMAGE_PATH: &str = "/self-repair/image/uploadImage";

/// Errors that can occur when calling the shop backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport failure (connect, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered 401; the session has been cleared.
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Non-2xx transport status without a usable envelope.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Envelope decode failure, including business failures (`code != 200`).
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An operation that requires authentication was attempted without a
    /// token. Raised synchronously; a programming/usage error, not retried.
    #[error("authentication token not found")]
    MissingToken,

    /// Endpoint path did not produce a valid URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Client for the shop backend API.
///
/// Cheaply cloneable; all clones share one connection pool and one session.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    client: reqwest::Client,
    api_base: Url,
    session: SessionStore,
}

impl Gateway {
    /// Create a new gateway bound to a session.
    ///
    /// A bootstrap token in the configuration is committed to the session.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        if let Some(token) = config.token.clone() {
            session.set_token(token);
        }

        Self {
            inner: Arc::new(GatewayInner {
                client: reqwest::Client::new(),
                api_base: config.api_base.clone(),
                session,
            }),
        }
    }

    /// The session this gateway injects tokens from (and clears on 401).
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        // The base always ends with a slash; joining a relative path keeps
        // any prefix the base carries.
        self.inner.api_base.join(path.trim_start_matches('/'))
    }

    /// GET with caller parameters merged into the query string.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`] for the failure taxonomy.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(path)?;
        let request = self.inner.client.get(url).query(query);
        self.execute(path, request).await
    }

    /// POST with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`] for the failure taxonomy.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(path)?;
        let request = self.inner.client.post(url).json(body);
        self.execute(path, request).await
    }

    /// DELETE (identifiers are inlined in the path).
    ///
    /// # Errors
    ///
    /// See [`GatewayError`] for the failure taxonomy.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.endpoint(path)?;
        let request = self.inner.client.delete(url);
        self.execute(path, request).await
    }

    /// Upload an image as a multipart form post.
    ///
    /// Returns the URL of the stored image. Unlike the JSON endpoints the
    /// upload route requires authentication up front: a missing token is an
    /// immediate [`GatewayError::MissingToken`].
    ///
    /// # Errors
    ///
    /// Fails on missing token, transport failure, non-2xx status, or a
    /// response without a `data` URL.
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<String, GatewayError> {
        let token = self.inner.session.token().ok_or(GatewayError::MissingToken)?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("images", part);

        let url = self.endpoint(UPLOAD_IMAGE_PATH)?;
        let response = self
            .inner
            .client
            .post(url)
            .bearer_auth(token.expose_secret())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.force_logout();
            return Err(GatewayError::Unauthorized);
        }

        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!(status = %status, body = %truncate(&body), "image upload failed");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // The upload route is judged on transport status plus the presence
        // of the stored URL, not on the business code.
        let value: serde_json::Value = serde_json::from_str(&body)?;
        value
            .get("data")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .ok_or(GatewayError::Envelope(EnvelopeError::MissingData))
    }

    /// Send a request and decode the envelope around its response.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let request = match self.inner.session.token() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        // 401 forces logout independently of whatever the body says.
        if status == StatusCode::UNAUTHORIZED {
            self.force_logout();
            return Err(GatewayError::Unauthorized);
        }

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                path,
                status = %status,
                body = %truncate(&body),
                "backend returned non-success status"
            );
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&body)?;
        let data = envelope.into_optional().map_err(|e| {
            if let EnvelopeError::Business { code, ref message } = e {
                tracing::warn!(path, code, message = %message, "business failure");
            }
            GatewayError::from(e)
        })?;

        // Action endpoints answer success with `data: null`. Payload types
        // that can be built from null (e.g. `Value`) accept it; for the rest
        // an absent payload is missing data.
        match data {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => serde_json::from_value(serde_json::Value::Null)
                .map_err(|_| GatewayError::Envelope(EnvelopeError::MissingData)),
        }
    }

    fn force_logout(&self) {
        tracing::warn!("backend answered 401, forcing logout");
        self.inner.session.logout();
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(500).collect()
}
