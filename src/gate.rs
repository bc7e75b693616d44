//! Request gate: identity attachment and uniform failure handling for every
//! outbound HTTP call.
//!
//! ARCHITECTURE
//! ============
//! All REST traffic flows through [`RequestGate`]. It attaches the bearer
//! token (read at send time, never cached) and a per-request trace id, and
//! classifies every outcome through the single status mapping in
//! [`crate::error`]. On 401 it tears the session down and nudges the optional
//! [`Navigator`] collaborator toward the login route; it never retries and
//! never recovers a failed call on the caller's behalf.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::session::SessionHandle;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Shell collaborator that can move the user to the login route.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Wraps a [`reqwest::Client`] with the gate's decision rules.
#[derive(Clone)]
pub struct RequestGate {
    client: reqwest::Client,
    base_url: String,
    session: SessionHandle,
    /// `None` when the shell handles redirects itself off the returned error.
    navigator: Option<Arc<dyn Navigator>>,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl RequestGate {
    /// Build a gate over a fresh HTTP client.
    ///
    /// # Errors
    ///
    /// [`GateError::Transport`] if the underlying client cannot be constructed.
    pub fn new(config: &GateConfig, session: SessionHandle) -> Result<Self, GateError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GateError::Transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            session,
            navigator: None,
        })
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Start a request against `path` for callers needing custom headers.
    /// Must be finished through [`RequestGate::run`].
    #[must_use]
    pub fn request_builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.client.request(method, format!("{}{path}", self.base_url))
    }

    /// Send a prepared request through the gate.
    ///
    /// # Errors
    ///
    /// Classified per the central status table; see [`crate::error`].
    pub async fn run(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, GateError> {
        let mut request = builder.build().map_err(GateError::Transport)?;

        // Attach identity unless the caller set its own authorization.
        if !request.headers().contains_key(AUTHORIZATION) {
            if let Some(token) = self.session.snapshot().token {
                match HeaderValue::from_str(&format!("Bearer {token}")) {
                    Ok(value) => {
                        request.headers_mut().insert(AUTHORIZATION, value);
                    }
                    // A tampered stored token cannot be sent; the call goes
                    // out unauthenticated and the 401 path cleans up.
                    Err(_) => {
                        tracing::warn!("stored token is not a valid header value, sending unauthenticated");
                    }
                }
            }
        }

        let request_id = Uuid::new_v4().to_string();
        match HeaderValue::from_str(&request_id) {
            Ok(value) => {
                request.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Err(_) => {
                tracing::warn!(%request_id, "generated request id is not a valid header value");
            }
        }
        tracing::debug!(%request_id, method = %request.method(), url = %request.url(), "dispatching");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                let classified = if err.is_timeout() || err.is_connect() {
                    GateError::Connectivity
                } else {
                    GateError::Transport(err)
                };
                tracing::error!(%request_id, error = %classified, "no response received");
                return Err(classified);
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%request_id, "unauthorized response, tearing down session");
            self.session.logout();
            if let Some(navigator) = &self.navigator {
                navigator.redirect_to_login();
            }
            return Err(GateError::SessionExpired);
        }

        let server_message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error));
        let err = GateError::from_status(status.as_u16(), server_message);
        tracing::error!(%request_id, status = status.as_u16(), error = %err, "request failed");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GateError> {
        response.json().await.map_err(GateError::Decode)
    }

    /// `GET path`, decoding a JSON body.
    ///
    /// # Errors
    ///
    /// Classified per the central status table.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GateError> {
        let response = self.run(self.request_builder(Method::GET, path)).await?;
        Self::decode(response).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Classified per the central status table.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, GateError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.run(self.request_builder(Method::POST, path).json(body)).await?;
        Self::decode(response).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Classified per the central status table.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, GateError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.run(self.request_builder(Method::PUT, path).json(body)).await?;
        Self::decode(response).await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Classified per the central status table.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, GateError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.run(self.request_builder(Method::PATCH, path).json(body)).await?;
        Self::decode(response).await
    }

    /// `DELETE path`, discarding any body.
    ///
    /// # Errors
    ///
    /// Classified per the central status table.
    pub async fn delete(&self, path: &str) -> Result<(), GateError> {
        self.run(self.request_builder(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
