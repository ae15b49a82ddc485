//! Authenticated request gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through one `Gateway`. Before a request is sent it
//! reads the session token and attaches it as a bearer credential; when a
//! response comes back 401 it clears the session and hands the rejection to
//! the caller. Failed requests are never retried.
//!
//! ERROR HANDLING
//! ==============
//! Anything other than a 401 passes through untouched: 2xx bodies are decoded
//! from the `{ data, message?, status? }` envelope, other statuses become
//! `ApiError::Status` for the page to display.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::types::ApiEnvelope;
use crate::config::join_url;
use crate::state::session::SessionStore;

/// Status the backend uses to reject a missing, expired or forged token.
pub const UNAUTHORIZED: u16 = 401;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("authentication rejected: {message}")]
    Unauthorized { message: String },
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status carried by the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(UNAUTHORIZED),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Single outbound HTTP client shared by every page.
#[derive(Clone)]
pub struct Gateway {
    base_url: Arc<str>,
    session: SessionStore,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    pub fn new(base_url: &str, session: SessionStore, transport: Arc<dyn Transport>) -> Self {
        Self { base_url: Arc::from(base_url), session, transport }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `GET path`, decoding the envelope payload.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails, is rejected, or the body
    /// does not decode as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(Method::Get, path, None).await?;
        decode_envelope(&resp.body)
    }

    /// `POST path` with a JSON body, decoding the envelope payload.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the body cannot be encoded, the request fails,
    /// is rejected, or the response does not decode as `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        let resp = self.send(Method::Post, path, Some(body)).await?;
        decode_envelope(&resp.body)
    }

    /// `PATCH path` with a JSON body, decoding the envelope payload.
    ///
    /// # Errors
    ///
    /// Same as [`Gateway::post`].
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        let resp = self.send(Method::Patch, path, Some(body)).await?;
        decode_envelope(&resp.body)
    }

    /// `DELETE path`; any response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or is rejected.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    /// Send a request through both interceptors and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no response arrived,
    /// `ApiError::Unauthorized` on 401 (after clearing the session) and
    /// `ApiError::Status` for any other non-2xx status.
    pub async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = self.authorize(method, path, body);
        let resp = match self.transport.send(request).await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("{} {path} failed: {e}", method.as_str());
                return Err(ApiError::Transport(e));
            }
        };
        self.inspect(method, path, resp)
    }

    /// Outbound interception: build the request and attach the current token.
    pub fn authorize(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url: join_url(&self.base_url, path), headers, body }
    }

    /// Inbound interception: tear the session down on 401, pass everything else through.
    fn inspect(&self, method: Method, path: &str, resp: HttpResponse) -> Result<HttpResponse, ApiError> {
        if resp.is_success() {
            return Ok(resp);
        }
        let message = error_message(&resp.body);
        if resp.status == UNAUTHORIZED {
            if self.session.logout() {
                log::warn!("{} {path} rejected with 401; session cleared", method.as_str());
            }
            return Err(ApiError::Unauthorized { message });
        }
        log::warn!("{} {path} returned {}: {message}", method.as_str(), resp.status);
        Err(ApiError::Status { status: resp.status, message })
    }
}

/// Decode the `{ data, message?, status? }` envelope and return its payload.
///
/// # Errors
///
/// Returns `ApiError::Decode` if `body` is not an envelope around `T`.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<ApiEnvelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(ApiError::Decode)
}

/// Human-readable reason from an error body: the envelope `message` when
/// present, otherwise the raw text.
pub fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let trimmed = body.trim();
    if let Ok(ErrorBody { message: Some(message) }) = serde_json::from_str::<ErrorBody>(trimmed) {
        return message;
    }
    if trimmed.is_empty() { "no response body".to_owned() } else { trimmed.to_owned() }
}
