//! Request payload types for the OpenBazaar node API.
//!
//! Responses are returned as raw [`serde_json::Value`]s because the node's
//! payload shapes differ between versions. The larger POST operations take the
//! typed payloads below instead of long argument lists; each one converts into
//! [`Params`] using the node's field names.

use crate::error::{OpenBazaarError, Result};
use crate::params::Params;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a [`broadcast`](crate::OpenBazaarClient::broadcast) message, in characters.
pub const MAX_BROADCAST_CHARS: usize = 140;

/// A listing may carry at most this many keywords minus one.
pub const MAX_KEYWORDS: usize = 10;

/// Social network accepted by `POST social_accounts`.
///
/// The node matches names case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialAccountType {
    Facebook,
    Twitter,
    Instagram,
    Snapchat,
}

impl SocialAccountType {
    pub const ALL: [Self; 4] = [
        Self::Facebook,
        Self::Twitter,
        Self::Instagram,
        Self::Snapchat,
    ];

    /// Value sent in the `account_type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Snapchat => "snapchat",
        }
    }
}

impl fmt::Display for SocialAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialAccountType {
    type Err = OpenBazaarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                OpenBazaarError::Validation(format!(
                    "unsupported social account type `{s}` (expected facebook, twitter, instagram or snapchat)"
                ))
            })
    }
}

/// A new listing, sent to `POST contracts`.
///
/// Also (de)serializes as JSON with the same field names, so listings can be
/// kept in files and published with `obctl create-listing`.
///
/// | Field                        | API field                    |
/// |------------------------------|------------------------------|
/// | `expiration_date`            | `expiration_date`            |
/// | `metadata_category`          | `metadata_category`          |
/// | `title` / `description`      | `title` / `description`      |
/// | `currency_code` / `price`    | `currency_code` / `price`    |
/// | `process_time`               | `process_time`               |
/// | `nsfw`                       | `nsfw`                       |
/// | `est_delivery_*`             | `est_delivery_domestic` / `est_delivery_international` |
/// | `terms_conditions`           | `terms_conditions`           |
/// | `returns`                    | `returns`                    |
/// | `shipping_*`                 | `shipping_currency_code`, `shipping_domestic`, `shipping_international`, `shipping_origin` |
/// | `ships_to`                   | `ships_to` (repeated)        |
/// | `keywords`                   | `keywords` (repeated, < 10)  |
/// | `category`                   | `category` (user category)   |
/// | `condition` / `sku`          | `condition` / `sku`          |
/// | `images`                     | `images` (repeated hashes)   |
/// | `free_shipping`              | `free_shipping`              |
/// | `moderators`                 | `moderators` (repeated GUIDs)|
/// | `options`                    | `options` (repeated)         |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractListing {
    /// `YYYY-MM-DD HH:MM` in UTC; `None` means the listing never expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// `physical good`, `digital good` or `service`.
    pub metadata_category: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing currency, e.g. `USD` or `BTC`.
    pub currency_code: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_time: Option<String>,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_delivery_domestic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_delivery_international: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_domestic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_international: Option<f64>,
    /// Country the item ships from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_origin: Option<String>,
    /// Countries or regions the item ships to.
    #[serde(default)]
    pub ships_to: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Free-form category chosen by the vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Hashes of images previously uploaded with `upload_image`.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub free_shipping: bool,
    /// GUIDs of moderators accepted for this listing.
    #[serde(default)]
    pub moderators: Vec<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl ContractListing {
    pub fn validate(&self) -> Result<()> {
        if self.keywords.len() >= MAX_KEYWORDS {
            return Err(OpenBazaarError::Validation(format!(
                "a listing takes fewer than {MAX_KEYWORDS} keywords, got {}",
                self.keywords.len()
            )));
        }
        Ok(())
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("expiration_date", &self.expiration_date)
            .with("metadata_category", &self.metadata_category)
            .with("title", &self.title)
            .with("description", &self.description)
            .with("currency_code", &self.currency_code)
            .with("price", self.price)
            .with("process_time", &self.process_time)
            .with("nsfw", self.nsfw)
            .with("est_delivery_domestic", &self.est_delivery_domestic)
            .with("est_delivery_international", &self.est_delivery_international)
            .with("terms_conditions", &self.terms_conditions)
            .with("returns", &self.returns)
            .with("shipping_currency_code", &self.shipping_currency_code)
            .with("shipping_domestic", self.shipping_domestic)
            .with("shipping_international", self.shipping_international)
            .with("shipping_origin", &self.shipping_origin)
            .with("ships_to", &self.ships_to)
            .with("keywords", &self.keywords)
            .with("category", &self.category)
            .with("condition", &self.condition)
            .with("sku", &self.sku)
            .with("images", &self.images)
            .with("free_shipping", self.free_shipping)
            .with("moderators", &self.moderators)
            .with("options", &self.options)
    }
}

/// Changes to the node's own profile, sent to `POST profile`.
///
/// Only fields that are `Some` are sent; the node keeps the rest unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    /// OneName/BlockStack handle.
    pub handle: Option<String>,
    pub about: Option<String>,
    pub short_description: Option<String>,
    pub nsfw: Option<bool>,
    pub vendor: Option<bool>,
    pub moderator: Option<bool>,
    pub website: Option<String>,
    pub email: Option<String>,
    /// RGB colors as base-10 integers (e.g. `16777215` for white).
    pub primary_color: Option<u32>,
    pub secondary_color: Option<u32>,
    pub background_color: Option<u32>,
    pub text_color: Option<u32>,
    /// Hash of an image uploaded with `upload_image`.
    pub avatar: Option<String>,
    pub header: Option<String>,
    /// ASCII-armored PGP public key block.
    pub pgp_key: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("name", &self.name)
            .with("location", &self.location)
            .with("handle", &self.handle)
            .with("about", &self.about)
            .with("short_description", &self.short_description)
            .with("nsfw", self.nsfw)
            .with("vendor", self.vendor)
            .with("moderator", self.moderator)
            .with("website", &self.website)
            .with("email", &self.email)
            .with("primary_color", self.primary_color)
            .with("secondary_color", self.secondary_color)
            .with("background_color", self.background_color)
            .with("text_color", self.text_color)
            .with("avatar", &self.avatar)
            .with("header", &self.header)
            .with("pgp_key", &self.pgp_key)
    }
}

/// An order for someone else's listing, sent to `POST purchase_contract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Contract id (hash) of the listing.
    pub id: String,
    pub quantity: u32,
    /// Recipient name.
    pub ship_to: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    /// GUID of the moderator to use; `None` for a direct payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl PurchaseOrder {
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(OpenBazaarError::Validation(
                "quantity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("id", &self.id)
            .with("quantity", self.quantity)
            .with("ship_to", &self.ship_to)
            .with("address", &self.address)
            .with("city", &self.city)
            .with("state", &self.state)
            .with("postal_code", &self.postal_code)
            .with("moderator", &self.moderator)
            .with("options", &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_account_type_parses_exact_names() {
        for t in SocialAccountType::ALL {
            assert_eq!(t.as_str().parse::<SocialAccountType>().unwrap(), t);
        }
        assert!("Facebook".parse::<SocialAccountType>().is_err());
        assert!(matches!(
            "myspace".parse::<SocialAccountType>(),
            Err(OpenBazaarError::Validation(_))
        ));
    }

    #[test]
    fn listing_params_skip_absent_fields() {
        let listing = ContractListing {
            metadata_category: "physical good".into(),
            title: "Red shoes".into(),
            currency_code: "USD".into(),
            price: 25.0,
            keywords: vec!["shoes".into(), "red".into()],
            moderators: vec!["a".repeat(40)],
            ..Default::default()
        };
        let p = listing.to_params();
        assert_eq!(p.get("title"), Some("Red shoes"));
        assert_eq!(p.get("price"), Some("25"));
        assert_eq!(p.get("nsfw"), Some("false"));
        assert_eq!(p.get("free_shipping"), Some("false"));
        assert_eq!(p.get("sku"), None);
        assert_eq!(p.get("expiration_date"), None);
        assert_eq!(p.get_all("keywords").collect::<Vec<_>>(), ["shoes", "red"]);
        assert_eq!(p.get_all("images").count(), 0);
    }

    #[test]
    fn listing_keyword_limit() {
        let mut listing = ContractListing {
            keywords: vec!["k".into(); MAX_KEYWORDS - 1],
            ..Default::default()
        };
        assert!(listing.validate().is_ok());
        listing.keywords.push("one too many".into());
        assert!(listing.validate().is_err());
    }

    #[test]
    fn profile_colors_are_base_ten() {
        let update = ProfileUpdate {
            primary_color: Some(0x00FF_FFFF),
            vendor: Some(true),
            ..Default::default()
        };
        let p = update.to_params();
        assert_eq!(p.encode(), "vendor=true&primary_color=16777215");
        assert!(!update.is_empty());
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn purchase_order_requires_quantity() {
        let order = PurchaseOrder {
            id: "c".repeat(40),
            quantity: 0,
            ship_to: "Alice".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: "62701".into(),
            moderator: None,
            options: Vec::new(),
        };
        assert!(order.validate().is_err());
        assert_eq!(order.to_params().get("moderator"), None);
    }

    #[test]
    fn listing_loads_from_minimal_json() {
        let listing: ContractListing = serde_json::from_str(
            r#"{
                "metadata_category": "digital good",
                "title": "E-book",
                "currency_code": "BTC",
                "price": 0.01,
                "keywords": ["book"]
            }"#,
        )
        .unwrap();
        assert_eq!(listing.title, "E-book");
        assert!(!listing.nsfw);
        assert!(listing.images.is_empty());
        assert_eq!(listing.sku, None);
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn listing_json_skips_unset_options() {
        let listing = ContractListing {
            title: "Red shoes".into(),
            sku: Some("RS-1".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["sku"], "RS-1");
        assert!(json.get("description").is_none());
        assert!(json.get("expiration_date").is_none());
    }

    #[test]
    fn profile_update_loads_partial_json() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"name": "Shop", "text_color": 0}"#).unwrap();
        assert_eq!(update.name.as_deref(), Some("Shop"));
        assert_eq!(update.to_params().encode(), "name=Shop&text_color=0");
    }

    #[test]
    fn purchase_order_loads_without_moderator() {
        let order: PurchaseOrder = serde_json::from_str(
            r#"{
                "id": "c0ffee", "quantity": 1, "ship_to": "Alice",
                "address": "1 Main St", "city": "Springfield",
                "state": "IL", "postal_code": "62701"
            }"#,
        )
        .unwrap();
        assert_eq!(order.moderator, None);
        assert!(order.options.is_empty());
        assert_eq!(serde_json::to_value(&order).unwrap().get("moderator"), None);
    }
}
