//! Blocking HTTP client for the OpenBazaar node API.
//!
//! Every call goes to `{scheme}://{host}:{port}/api/v1/{endpoint}`:
//!
//! - `GET`: parameters are appended as a query string
//! - `POST`: parameters are sent as an `application/x-www-form-urlencoded` body
//!
//! The session cookie set by `POST login` is kept in the client's cookie store
//! and replayed on every later request.
//!
//! # Response format
//!
//! Depending on the endpoint (and the node version) the body is either a bare
//! JSON payload or an envelope:
//!
//! ```json
//! { "success": false, "reason": "not logged in" }
//! ```
//!
//! `success: false` is mapped to [`OpenBazaarError::Api`]. Anything else that
//! decodes as JSON is returned unchanged, `success` key included.
//!
//! # Last error
//!
//! Each failed call also stores its message in the client; read it back with
//! [`OpenBazaarClient::last_error`]. A successful call leaves the previous
//! message in place.

use crate::auth::Credentials;
use crate::error::{OpenBazaarError, Result};
use crate::params::Params;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 18469;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const API_PATH: &str = "api/v1/";
const USER_AGENT: &str = concat!("openbazaar-api/", env!("CARGO_PKG_VERSION"));

/// HTTP verb used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// Connection settings for an [`OpenBazaarClient`].
///
/// ```no_run
/// use openbazaar_api::OpenBazaarClient;
/// use std::time::Duration;
///
/// let client = OpenBazaarClient::builder("alice", "hunter2")
///     .host("192.168.1.20")
///     .tls(true)
///     .accept_invalid_certs(true)
///     .timeout(Some(Duration::from_secs(10)))
///     .connect()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct ClientBuilder {
    credentials: Credentials,
    scheme: String,
    host: String,
    port: u16,
    tls: bool,
    root_certificate: Option<Vec<u8>>,
    accept_invalid_certs: bool,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientBuilder {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            scheme: DEFAULT_SCHEME.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            tls: false,
            root_certificate: None,
            accept_invalid_certs: false,
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: USER_AGENT.to_owned(),
        }
    }

    /// URL scheme, `http` by default. Ignored when [`tls`](Self::tls) is set.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Force `https` regardless of [`scheme`](Self::scheme).
    pub fn tls(mut self, enabled: bool) -> Self {
        self.tls = enabled;
        self
    }

    /// Trust an extra PEM-encoded root certificate (e.g. the node's own CA).
    /// Implies [`tls`](Self::tls).
    pub fn root_certificate(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.root_certificate = Some(pem.into());
        self.tls = true;
        self
    }

    /// Skip certificate verification. Nodes usually run with self-signed certs.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Per-request timeout. `None` waits forever.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The API root, e.g. `http://localhost:18469/api/v1/`.
    pub fn base_url(&self) -> Result<Url> {
        let scheme = if self.tls { "https" } else { self.scheme.as_str() };
        let root = Url::parse(&format!("{scheme}://{}:{}/", self.host, self.port))?;
        Ok(root.join(API_PATH)?)
    }

    /// Create the client without contacting the node.
    pub fn build(self) -> Result<OpenBazaarClient> {
        let base_url = self.base_url()?;

        let mut http = Client::builder()
            .user_agent(self.user_agent)
            .cookie_store(true)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs);
        if let Some(pem) = &self.root_certificate {
            http = http.add_root_certificate(reqwest::Certificate::from_pem(pem)?);
        }

        Ok(OpenBazaarClient {
            http: http.build()?,
            base_url,
            credentials: self.credentials,
            last_error: Mutex::new(None),
        })
    }

    /// [`build`](Self::build) and then [`login`](OpenBazaarClient::login).
    pub fn connect(self) -> Result<OpenBazaarClient> {
        let client = self.build()?;
        client.login()?;
        Ok(client)
    }
}

/// Blocking client bound to one node session.
///
/// Holds a [`reqwest::blocking::Client`] with a cookie store and the node's
/// base URL. API methods are implemented in separate modules (`profile`,
/// `social`, `chat`, `notifications`, `listings`, `orders`, `node`) as
/// `impl OpenBazaarClient` blocks.
///
/// One instance is one session: concurrent callers share its cookies and its
/// [`last_error`](Self::last_error) slot. Create one client per session.
#[derive(Debug)]
pub struct OpenBazaarClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
    last_error: Mutex<Option<String>>,
}

impl OpenBazaarClient {
    pub fn builder(username: impl Into<String>, password: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(username, password)
    }

    /// Log in to `http://localhost:18469` with default settings.
    pub fn connect(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(username, password).connect()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Message of the most recent failed call, if any call has failed yet.
    pub fn last_error(&self) -> Option<String> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `GET {base}{endpoint}?{params}`.
    pub fn get(&self, endpoint: &str, params: &Params) -> Result<Value> {
        self.send(Method::Get, endpoint, params)
    }

    /// `POST {base}{endpoint}` with `params` as a form body.
    pub fn post(&self, endpoint: &str, params: &Params) -> Result<Value> {
        self.send(Method::Post, endpoint, params)
    }

    /// Send one request and decode the response.
    ///
    /// Failures are returned and also recorded for [`last_error`](Self::last_error).
    pub fn send(&self, method: Method, endpoint: &str, params: &Params) -> Result<Value> {
        match self.dispatch(method, endpoint, params) {
            Ok(value) => Ok(value),
            Err(err) => self.fail(err),
        }
    }

    /// Record `err` as the last error and return it.
    pub(crate) fn fail<T>(&self, err: OpenBazaarError) -> Result<T> {
        warn!(
            error = %err,
            client_side = err.is_client_side(),
            "openbazaar call failed"
        );
        *self
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(err.to_string());
        Err(err)
    }

    fn dispatch(&self, method: Method, endpoint: &str, params: &Params) -> Result<Value> {
        let mut url = self.base_url.join(endpoint)?;

        let req = match method {
            Method::Get => {
                if !params.is_empty() {
                    url.query_pairs_mut()
                        .extend_pairs(params.as_slice().iter().map(|(k, v)| (*k, v.as_str())));
                }
                self.http.get(url)
            }
            Method::Post => self.http.post(url).form(params.as_slice()),
        };

        let resp = req.send()?;
        debug!(
            %method,
            endpoint,
            params = params.len(),
            status = %resp.status(),
            "node responded"
        );
        let body = resp.text()?;
        decode_envelope(&body)
    }
}

/// Decode a node response body.
///
/// - not JSON → [`OpenBazaarError::Decode`]
/// - object with `"success": false` → [`OpenBazaarError::Api`] carrying `reason`
/// - anything else → the decoded value, unchanged
pub fn decode_envelope(body: &str) -> Result<Value> {
    let json: Value = serde_json::from_str(body).map_err(|_| OpenBazaarError::Decode)?;

    if json.get("success").and_then(Value::as_bool) == Some(false) {
        let reason = json
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_owned();
        return Err(OpenBazaarError::Api { reason });
    }

    Ok(json)
}
