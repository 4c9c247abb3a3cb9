//! Listing (contract) APIs.
//!
//! # Endpoints
//!
//! ## `get_listings` — `GET /api/v1/get_listings?guid=...`
//!
//! ```json
//! {
//!   "listings": [
//!     { "contract_hash": "...", "title": "Red shoes", "price": 25.0,
//!       "currency_code": "USD", "thumbnail_hash": "...", "category": "Shoes", "nsfw": false }
//!   ]
//! }
//! ```
//!
//! ## `get_contracts` — `GET /api/v1/contracts?id=...&guid=...`
//!
//! Full contract JSON (vendor offer, signatures) for listing `id` hosted by `guid`.
//!
//! ## `contracts` — `POST /api/v1/contracts`
//!
//! Creates a listing from the [`ContractListing`] form fields.
//!
//! ```json
//! { "success": true, "id": "<contract hash>" }
//! ```

use crate::client::OpenBazaarClient;
use crate::error::Result;
use crate::params::Params;
use crate::types::ContractListing;
use serde_json::Value;

impl OpenBazaarClient {
    /// Listings of the local node, or of `guid`.
    pub fn get_listings(&self, guid: Option<&str>) -> Result<Value> {
        self.get("get_listings", &Params::new().with("guid", guid))
    }

    /// The full contract `id` as published by node `guid`.
    pub fn get_contracts(&self, id: &str, guid: &str) -> Result<Value> {
        let params = Params::new().with("id", id).with("guid", guid);
        self.get("contracts", &params)
    }

    /// Publish a new listing.
    ///
    /// # Errors
    ///
    /// [`OpenBazaarError::Validation`](crate::OpenBazaarError::Validation) if
    /// the listing has too many keywords; nothing is sent in that case.
    pub fn contracts(&self, listing: &ContractListing) -> Result<Value> {
        if let Err(err) = listing.validate() {
            return self.fail(err);
        }
        self.post("contracts", &listing.to_params())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::client_for;
    use crate::types::ContractListing;
    use httpmock::prelude::*;
    use serde_json::json;

    const GUID: &str = "a06aa22a38f0e62221ab74464c311bd88305f88c";

    fn listing() -> ContractListing {
        ContractListing {
            metadata_category: "physical good".into(),
            title: "Red shoes".into(),
            currency_code: "USD".into(),
            price: 25.5,
            keywords: vec!["shoes".into(), "red".into()],
            ships_to: vec!["ALL".into()],
            free_shipping: true,
            ..Default::default()
        }
    }

    #[test]
    fn listings_for_guid() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/get_listings")
                .query_param("guid", GUID);
            then.status(200).json_body(json!({"listings": []}));
        });

        client_for(&server).get_listings(Some(GUID)).unwrap();
        mock.assert();
    }

    #[test]
    fn get_contract_uses_contracts_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/contracts")
                .query_param("id", "c0ffee")
                .query_param("guid", GUID);
            then.status(200)
                .json_body(json!({"vendor_offer": {"listing": {"item": {"title": "Red shoes"}}}}));
        });

        let resp = client_for(&server).get_contracts("c0ffee", GUID).unwrap();
        assert_eq!(resp["vendor_offer"]["listing"]["item"]["title"], "Red shoes");
        mock.assert();
    }

    #[test]
    fn create_listing_posts_form() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/v1/contracts").body(
                "metadata_category=physical+good&title=Red+shoes&currency_code=USD&price=25.5\
                 &nsfw=false&ships_to=ALL&keywords=shoes&keywords=red&free_shipping=true",
            );
            then.status(200).json_body(json!({"success": true, "id": "c0ffee"}));
        });

        let resp = client_for(&server).contracts(&listing()).unwrap();
        assert_eq!(resp["id"], "c0ffee");
        mock.assert();
    }

    #[test]
    fn too_many_keywords_are_rejected_locally() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.path("/api/v1/contracts");
            then.status(200).json_body(json!({"success": true}));
        });

        let mut listing = listing();
        listing.keywords = (0..10).map(|i| format!("kw{i}")).collect();
        let client = client_for(&server);
        assert!(client.contracts(&listing).is_err());
        assert_eq!(mock.hits(), 0);
    }
}
