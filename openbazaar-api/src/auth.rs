//! Login handshake.
//!
//! Endpoint: `POST /api/v1/login`
//!
//! Request (form body): `username=...&password=...`
//!
//! Response:
//! ```json
//! { "success": true }
//! ```
//!
//! On success the node sets a session cookie (`TWISTED_SESSION`). The client's
//! cookie store keeps it and sends it back on every later request, so
//! authentication is implicit from then on. Nothing is persisted to disk.

use crate::client::OpenBazaarClient;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;
use std::fmt;
use tracing::info;

/// Username and password used for `POST login`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn to_params(&self) -> Params {
        Params::new()
            .with("username", &self.username)
            .with("password", &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl OpenBazaarClient {
    /// Log in with the configured credentials and store the session cookie.
    ///
    /// Called by [`connect`](Self::connect); call it again to refresh an
    /// expired session.
    ///
    /// # Errors
    ///
    /// - [`OpenBazaarError::Http`](crate::OpenBazaarError::Http) — node unreachable
    /// - [`OpenBazaarError::Api`](crate::OpenBazaarError::Api) — credentials rejected
    pub fn login(&self) -> Result<Value> {
        let creds = self.credentials();
        let resp = self.post("login", &creds.to_params())?;
        info!(username = %creds.username, node = %self.base_url(), "logged in");
        Ok(resp)
    }
}
