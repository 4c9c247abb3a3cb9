//! Purchase and sales APIs.
//!
//! # Endpoints
//!
//! ## `purchase_contract` — `POST /api/v1/purchase_contract`
//!
//! Form fields of [`PurchaseOrder`]. The node answers with the payment details:
//!
//! ```json
//! { "success": true, "payment_address": "1Bitcoin...", "amount": 0.0123, "order_id": "..." }
//! ```
//!
//! ## `check_for_payment` — `POST /api/v1/check_for_payment`
//!
//! ## `get_sales` / `get_purchases` — `GET /api/v1/get_sales`, `GET /api/v1/get_purchases`
//!
//! ```json
//! [ { "order_id": "...", "title": "Red shoes", "status": 1, "timestamp": 1461520044 } ]
//! ```
//!
//! `confirm_order` and `complete_order` are not supported by this client yet.

use crate::client::OpenBazaarClient;
use crate::error::{OpenBazaarError, Result};
use crate::params::Params;
use crate::types::PurchaseOrder;
use serde_json::Value;

impl OpenBazaarClient {
    /// Place an order for a listing.
    pub fn purchase_contract(&self, order: &PurchaseOrder) -> Result<Value> {
        if let Err(err) = order.validate() {
            return self.fail(err);
        }
        self.post("purchase_contract", &order.to_params())
    }

    /// Ask the node to re-check the blockchain for pending order payments.
    pub fn check_for_payment(&self) -> Result<Value> {
        self.post("check_for_payment", &Params::new())
    }

    /// Vendor side: mark an order as shipped. Not supported yet.
    pub fn confirm_order(&self) -> Result<Value> {
        self.fail(OpenBazaarError::NotImplemented("confirm_order"))
    }

    /// Buyer side: release funds and rate the order. Not supported yet.
    pub fn complete_order(&self) -> Result<Value> {
        self.fail(OpenBazaarError::NotImplemented("complete_order"))
    }

    pub fn get_sales(&self) -> Result<Value> {
        self.get("get_sales", &Params::new())
    }

    pub fn get_purchases(&self) -> Result<Value> {
        self.get("get_purchases", &Params::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::OpenBazaarError;
    use crate::test_support::client_for;
    use crate::types::PurchaseOrder;
    use httpmock::prelude::*;
    use serde_json::json;

    fn order() -> PurchaseOrder {
        PurchaseOrder {
            id: "c0ffee".into(),
            quantity: 2,
            ship_to: "Alice Smith".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: "62701".into(),
            moderator: None,
            options: Vec::new(),
        }
    }

    #[test]
    fn purchase_posts_order_without_moderator() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/v1/purchase_contract").body(
                "id=c0ffee&quantity=2&ship_to=Alice+Smith&address=1+Main+St\
                 &city=Springfield&state=IL&postal_code=62701",
            );
            then.status(200)
                .json_body(json!({"success": true, "payment_address": "1Abc", "amount": 0.5}));
        });

        let resp = client_for(&server).purchase_contract(&order()).unwrap();
        assert_eq!(resp["payment_address"], "1Abc");
        mock.assert();
    }

    #[test]
    fn zero_quantity_is_rejected_locally() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.path("/api/v1/purchase_contract");
            then.status(200).json_body(json!({"success": true}));
        });

        let mut order = order();
        order.quantity = 0;
        assert!(client_for(&server).purchase_contract(&order).is_err());
        assert_eq!(mock.hits(), 0);
    }

    #[test]
    fn order_stubs_are_not_implemented() {
        let server = MockServer::start();
        let client = client_for(&server);

        assert!(matches!(
            client.confirm_order(),
            Err(OpenBazaarError::NotImplemented("confirm_order"))
        ));
        assert!(matches!(
            client.complete_order(),
            Err(OpenBazaarError::NotImplemented("complete_order"))
        ));
        assert_eq!(
            client.last_error().as_deref(),
            Some("complete_order is not implemented")
        );
    }

    #[test]
    fn sales_purchases_and_payment_check() {
        let server = MockServer::start();
        let sales = server.mock(|when, then| {
            when.method(GET).path("/api/v1/get_sales");
            then.status(200).json_body(json!([{"order_id": "o1"}]));
        });
        let purchases = server.mock(|when, then| {
            when.method(GET).path("/api/v1/get_purchases");
            then.status(200).json_body(json!([]));
        });
        let payment = server.mock(|when, then| {
            when.method(POST).path("/api/v1/check_for_payment");
            then.status(200).json_body(json!({"success": true}));
        });

        let client = client_for(&server);
        assert_eq!(client.get_sales().unwrap()[0]["order_id"], "o1");
        assert_eq!(client.get_purchases().unwrap(), json!([]));
        client.check_for_payment().unwrap();
        sales.assert();
        purchases.assert();
        payment.assert();
    }
}
