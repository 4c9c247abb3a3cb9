//! Profile, settings and image APIs.
//!
//! # Endpoints
//!
//! ## `get_profile` — `GET /api/v1/profile?guid=...`
//!
//! Omitting `guid` returns the local node's profile.
//!
//! ```json
//! {
//!   "profile": {
//!     "name": "Shop", "handle": "@shop", "vendor": true, "moderator": false,
//!     "primary_color": 16777215, "avatar_hash": "ab12...", "guid": "f3a1..."
//!   }
//! }
//! ```
//!
//! ## `profile` — `POST /api/v1/profile`
//!
//! Form fields of [`ProfileUpdate`]; answers `{ "success": true }`.
//!
//! ## `social_accounts` — `POST /api/v1/social_accounts`
//!
//! `account_type` must be `facebook`, `twitter`, `instagram` or `snapchat`.
//!
//! ## `get_image` — `GET /api/v1/get_image?hash=...&guid=...`
//!
//! Answers with raw image bytes, not JSON.
//!
//! ## `upload_image` — `POST /api/v1/upload_image`
//!
//! `image`, `avatar`, `header`: base64 image data without a `data:` prefix.
//!
//! ```json
//! { "success": true, "image_hashes": ["ab12..."] }
//! ```

use crate::client::OpenBazaarClient;
use crate::error::{OpenBazaarError, Result};
use crate::params::Params;
use crate::types::{ProfileUpdate, SocialAccountType};
use base64::{Engine, engine::general_purpose::STANDARD as B64};
use serde_json::Value;

impl OpenBazaarClient {
    /// Profile of the local node, or of `guid` when given.
    pub fn get_profile(&self, guid: Option<&str>) -> Result<Value> {
        self.get("profile", &Params::new().with("guid", guid))
    }

    /// Update the local node's profile. Unset fields are left untouched.
    ///
    /// # Errors
    ///
    /// [`OpenBazaarError::Validation`] if no field is set.
    pub fn profile(&self, update: &ProfileUpdate) -> Result<Value> {
        if update.is_empty() {
            return self.fail(OpenBazaarError::Validation(
                "profile update has no fields set".into(),
            ));
        }
        self.post("profile", &update.to_params())
    }

    /// Settings of the local node (shipping addresses, currency, moderators...).
    pub fn get_settings(&self) -> Result<Value> {
        self.get("settings", &Params::new())
    }

    /// Update node settings. Not supported yet.
    pub fn settings(&self) -> Result<Value> {
        self.fail(OpenBazaarError::NotImplemented("settings"))
    }

    /// Attach a social account to the profile.
    ///
    /// `account_type` is checked against [`SocialAccountType`] before anything
    /// is sent.
    pub fn social_accounts(&self, account_type: &str, username: &str, proof: &str) -> Result<Value> {
        let account_type: SocialAccountType = match account_type.parse() {
            Ok(t) => t,
            Err(err) => return self.fail(err),
        };
        let params = Params::new()
            .with("account_type", account_type.as_str())
            .with("username", username)
            .with("proof", proof);
        self.post("social_accounts", &params)
    }

    /// Image `hash`, fetched from `guid` when it is not stored locally.
    ///
    /// The node answers with the raw image bytes rather than JSON, so a
    /// successful fetch surfaces as [`OpenBazaarError::Decode`]. Only a
    /// `{"success": false}` answer carries a usable reason.
    pub fn get_image(&self, hash: &str, guid: Option<&str>) -> Result<Value> {
        let params = Params::new().with("hash", hash).with("guid", guid);
        self.get("get_image", &params)
    }

    /// Upload base64-encoded images (no `data:` prefix).
    ///
    /// # Errors
    ///
    /// [`OpenBazaarError::Validation`] if all three are `None`.
    pub fn upload_image(
        &self,
        image: Option<&str>,
        avatar: Option<&str>,
        header: Option<&str>,
    ) -> Result<Value> {
        if image.is_none() && avatar.is_none() && header.is_none() {
            return self.fail(OpenBazaarError::Validation(
                "upload_image needs at least one of image, avatar or header".into(),
            ));
        }
        let params = Params::new()
            .with("image", image)
            .with("avatar", avatar)
            .with("header", header);
        self.post("upload_image", &params)
    }

    /// [`upload_image`](Self::upload_image) for raw image bytes.
    pub fn upload_image_bytes(
        &self,
        image: Option<&[u8]>,
        avatar: Option<&[u8]>,
        header: Option<&[u8]>,
    ) -> Result<Value> {
        let image = image.map(|b| B64.encode(b));
        let avatar = avatar.map(|b| B64.encode(b));
        let header = header.map(|b| B64.encode(b));
        self.upload_image(image.as_deref(), avatar.as_deref(), header.as_deref())
    }
}
