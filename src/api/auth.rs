//! HTTP authentication provider.

use async_trait::async_trait;
use reqwest::Method;

use crate::error::GateError;
use crate::gate::RequestGate;
use crate::session::{AuthProvider, Credentials, LoginResponse};

/// [`AuthProvider`] backed by the console's REST login endpoint.
#[derive(Clone)]
pub struct HttpAuthProvider {
    gate: RequestGate,
}

impl HttpAuthProvider {
    #[must_use]
    pub fn new(gate: RequestGate) -> Self {
        Self { gate }
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, GateError> {
        match self.gate.post("/login", credentials).await {
            Ok(response) => Ok(response),
            // A 401 from the login endpoint means bad credentials, not an
            // expired session; rewrap so callers can tell them apart.
            Err(GateError::SessionExpired) => {
                Err(GateError::AuthenticationFailed("invalid username or password".to_owned()))
            }
            Err(err) => Err(err),
        }
    }

    async fn revoke(&self) {
        if let Err(err) = self.gate.run(self.gate.request_builder(Method::POST, "/logout")).await {
            tracing::debug!(error = %err, "server-side logout failed, ignoring");
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
