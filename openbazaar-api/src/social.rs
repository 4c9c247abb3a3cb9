//! Follow graph and broadcast APIs.
//!
//! | Method                                   | Endpoint                 |
//! |------------------------------------------|--------------------------|
//! | [`OpenBazaarClient::get_followers`]      | `GET get_followers`      |
//! | [`OpenBazaarClient::get_following`]      | `GET get_following`      |
//! | [`OpenBazaarClient::follow`]             | `POST follow`            |
//! | [`OpenBazaarClient::unfollow`]           | `POST unfollow`          |
//! | [`OpenBazaarClient::broadcast`]          | `POST broadcast`         |
//!
//! `get_followers` response:
//! ```json
//! { "followers": [ { "guid": "...", "handle": "@shop", "name": "Shop", "nsfw": false } ] }
//! ```

use crate::client::OpenBazaarClient;
use crate::error::{OpenBazaarError, Result};
use crate::params::Params;
use crate::types::MAX_BROADCAST_CHARS;
use serde_json::Value;

impl OpenBazaarClient {
    /// Nodes following the local node, or following `guid`.
    pub fn get_followers(&self, guid: Option<&str>) -> Result<Value> {
        self.get("get_followers", &Params::new().with("guid", guid))
    }

    /// Nodes followed by the local node, or by `guid`.
    pub fn get_following(&self, guid: Option<&str>) -> Result<Value> {
        self.get("get_following", &Params::new().with("guid", guid))
    }

    /// Follow `guid`: receive its broadcasts and share metadata with it.
    pub fn follow(&self, guid: &str) -> Result<Value> {
        self.post("follow", &Params::new().with("guid", guid))
    }

    pub fn unfollow(&self, guid: &str) -> Result<Value> {
        self.post("unfollow", &Params::new().with("guid", guid))
    }

    /// Send a short message to every follower.
    ///
    /// # Errors
    ///
    /// [`OpenBazaarError::Validation`] when `message` is longer than
    /// [`MAX_BROADCAST_CHARS`] characters. Nothing is truncated.
    pub fn broadcast(&self, message: &str) -> Result<Value> {
        let len = message.chars().count();
        if len > MAX_BROADCAST_CHARS {
            return self.fail(OpenBazaarError::Validation(format!(
                "broadcast message is {len} characters, limit is {MAX_BROADCAST_CHARS}"
            )));
        }
        self.post("broadcast", &Params::new().with("message", message))
    }
}
