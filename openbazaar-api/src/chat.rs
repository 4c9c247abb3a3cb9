//! Chat APIs.
//!
//! ## `get_chat_messages` — `GET /api/v1/get_chat_messages?guid=...&limit=...&start=...`
//!
//! `limit` and `start` are optional; `start` is the message id to page from.
//!
//! ```json
//! [ { "guid": "...", "message": "hello", "timestamp": 1461520044, "outgoing": false, "read": true } ]
//! ```
//!
//! ## `get_chat_conversations` — `GET /api/v1/get_chat_conversations`
//!
//! ## `mark_chat_message_as_read` — `POST /api/v1/mark_chat_message_as_read`

use crate::client::OpenBazaarClient;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

impl OpenBazaarClient {
    /// Messages exchanged with `guid`, newest first.
    pub fn get_chat_messages(
        &self,
        guid: &str,
        limit: Option<u32>,
        start: Option<u64>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("guid", guid)
            .with("limit", limit)
            .with("start", start);
        self.get("get_chat_messages", &params)
    }

    /// Open conversations, one entry per peer.
    pub fn get_chat_conversations(&self) -> Result<Value> {
        self.get("get_chat_conversations", &Params::new())
    }

    /// Mark every message from `guid` as read.
    pub fn mark_chat_message_as_read(&self, guid: &str) -> Result<Value> {
        self.post("mark_chat_message_as_read", &Params::new().with("guid", guid))
    }
}
