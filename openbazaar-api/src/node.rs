//! Node-level commands: moderator status and shutdown.

use crate::client::OpenBazaarClient;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

impl OpenBazaarClient {
    /// Advertise the node as a moderator on the network.
    pub fn make_moderator(&self) -> Result<Value> {
        self.post("make_moderator", &Params::new())
    }

    /// Stop advertising the node as a moderator.
    pub fn unmake_moderator(&self) -> Result<Value> {
        self.post("unmake_moderator", &Params::new())
    }

    /// Disconnect from peers and stop the node's server process.
    ///
    /// The node may close the connection before answering, in which case this
    /// returns [`OpenBazaarError::Http`](crate::OpenBazaarError::Http).
    pub fn shutdown(&self) -> Result<Value> {
        self.get("shutdown", &Params::new())
    }
}
