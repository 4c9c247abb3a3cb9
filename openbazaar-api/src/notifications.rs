//! Notification APIs.
//!
//! Notifications are raised when a node follows you and on purchase/sale
//! events.
//!
//! ## `get_notifications` — `GET /api/v1/get_notifications?limit=...`
//!
//! ```json
//! {
//!   "notifications": [
//!     { "id": "...", "guid": "...", "handle": "@buyer", "type": "follow",
//!       "order_id": "", "title": "", "timestamp": 1461520044, "read": false }
//!   ]
//! }
//! ```
//!
//! ## `mark_notification_as_read` — `POST /api/v1/mark_notification_as_read`

use crate::client::OpenBazaarClient;
use crate::error::Result;
use crate::params::Params;
use serde_json::Value;

impl OpenBazaarClient {
    /// Up to `limit` notifications, newest first.
    pub fn get_notifications(&self, limit: u32) -> Result<Value> {
        self.get("get_notifications", &Params::new().with("limit", limit))
    }

    /// `id` is the 40-character hex notification id.
    pub fn mark_notification_as_read(&self, id: &str) -> Result<Value> {
        self.post("mark_notification_as_read", &Params::new().with("id", id))
    }
}
