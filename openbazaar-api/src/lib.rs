//! OpenBazaar node API client library.
//!
//! Provides blocking, authenticated access to the REST API a local OpenBazaar
//! node serves under `/api/v1/`: profiles, listings, the follow graph, chat,
//! notifications, image upload, moderation flags and the purchase flow.
//!
//! # Authentication
//!
//! The node issues a session cookie on `POST login`. The client keeps it in
//! memory and sends it with every later call.
//!
//! ```no_run
//! use openbazaar_api::OpenBazaarClient;
//!
//! // http://localhost:18469, then POST login
//! let client = OpenBazaarClient::connect("alice", "hunter2").unwrap();
//! let profile = client.get_profile(None).unwrap();
//! println!("{}", profile["profile"]["name"]);
//! ```
//!
//! # Errors
//!
//! Every call returns [`Result`]. Failures are also mirrored in
//! [`OpenBazaarClient::last_error`], which keeps the newest failure message
//! until another call fails.
//!
//! # API endpoint mapping
//!
//! | Method                                          | Endpoint                          |
//! |-------------------------------------------------|-----------------------------------|
//! | [`OpenBazaarClient::login`]                     | `POST login`                      |
//! | [`OpenBazaarClient::get_profile`]               | `GET profile`                     |
//! | [`OpenBazaarClient::profile`]                   | `POST profile`                    |
//! | [`OpenBazaarClient::get_image`]                 | `GET get_image`                   |
//! | [`OpenBazaarClient::upload_image`]              | `POST upload_image`               |
//! | [`OpenBazaarClient::social_accounts`]           | `POST social_accounts`            |
//! | [`OpenBazaarClient::get_settings`]              | `GET settings`                    |
//! | [`OpenBazaarClient::get_listings`]              | `GET get_listings`                |
//! | [`OpenBazaarClient::get_contracts`]             | `GET contracts`                   |
//! | [`OpenBazaarClient::contracts`]                 | `POST contracts`                  |
//! | [`OpenBazaarClient::get_followers`]             | `GET get_followers`               |
//! | [`OpenBazaarClient::get_following`]             | `GET get_following`               |
//! | [`OpenBazaarClient::follow`]                    | `POST follow`                     |
//! | [`OpenBazaarClient::unfollow`]                  | `POST unfollow`                   |
//! | [`OpenBazaarClient::broadcast`]                 | `POST broadcast`                  |
//! | [`OpenBazaarClient::get_notifications`]         | `GET get_notifications`           |
//! | [`OpenBazaarClient::mark_notification_as_read`] | `POST mark_notification_as_read`  |
//! | [`OpenBazaarClient::get_chat_messages`]         | `GET get_chat_messages`           |
//! | [`OpenBazaarClient::get_chat_conversations`]    | `GET get_chat_conversations`      |
//! | [`OpenBazaarClient::mark_chat_message_as_read`] | `POST mark_chat_message_as_read`  |
//! | [`OpenBazaarClient::purchase_contract`]         | `POST purchase_contract`          |
//! | [`OpenBazaarClient::check_for_payment`]         | `POST check_for_payment`          |
//! | [`OpenBazaarClient::get_sales`]                 | `GET get_sales`                   |
//! | [`OpenBazaarClient::get_purchases`]             | `GET get_purchases`               |
//! | [`OpenBazaarClient::make_moderator`]            | `POST make_moderator`             |
//! | [`OpenBazaarClient::unmake_moderator`]          | `POST unmake_moderator`           |
//! | [`OpenBazaarClient::shutdown`]                  | `GET shutdown`                    |
//!
//! `confirm_order`, `complete_order` and the `settings` setter exist but
//! return [`OpenBazaarError::NotImplemented`].

pub mod auth;
mod chat;
pub mod client;
pub mod error;
mod listings;
mod node;
mod notifications;
mod orders;
pub mod params;
mod profile;
mod social;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::{ClientBuilder, Method, OpenBazaarClient};
pub use error::{OpenBazaarError, Result};
pub use params::Params;
pub use types::{ContractListing, ProfileUpdate, PurchaseOrder, SocialAccountType};
