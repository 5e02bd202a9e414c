//! Shared test doubles and fixtures for the store tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{Value, json};

use crate::CommerceError;
use crate::transport::CommerceTransport;

/// Transport fed from a queue of canned responses, recording every call.
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<Value, CommerceError>>>,
    pub calls: RefCell<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<Value, CommerceError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommerceTransport for MockTransport {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, CommerceError> {
        self.calls
            .borrow_mut()
            .push((query.to_string(), variables));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(CommerceError::MissingPayload("exhausted mock")))
    }
}

/// A cart payload with one line of the given quantity.
pub fn cart_payload(cart_id: &str, quantity: u64) -> Value {
    json!({
        "id": cart_id,
        "checkoutUrl": format!("https://shop.example.com/checkout/{cart_id}"),
        "estimatedCost": {
            "totalAmount": { "amount": "49.90", "currencyCode": "EUR" }
        },
        "lines": { "edges": [
            { "node": {
                "id": "line1",
                "quantity": quantity,
                "merchandise": {
                    "id": "gid://shop/Variant/1",
                    "product": {
                        "id": "gid://shop/Product/1",
                        "title": "Trail Shoe",
                        "featuredImage": { "url": "https://cdn/shoe.jpg" }
                    },
                    "price": { "amount": "49.90", "currencyCode": "EUR" }
                }
            } }
        ] }
    })
}

/// An empty cart payload as returned by `cartCreate`.
pub fn empty_cart_payload(cart_id: &str) -> Value {
    json!({
        "id": cart_id,
        "checkoutUrl": format!("https://shop.example.com/checkout/{cart_id}"),
        "estimatedCost": {
            "totalAmount": { "amount": "0.0", "currencyCode": "EUR" }
        },
        "lines": { "edges": [] }
    })
}

pub fn product_node(id: &str, handle: &str) -> Value {
    json!({
        "id": id,
        "title": "Trail Shoe",
        "description": "A shoe",
        "handle": handle,
        "featuredImage": { "url": "https://cdn/shoe.jpg" },
        "variants": { "edges": [
            { "node": {
                "id": format!("{id}-v1"),
                "price": { "amount": "79.90", "currencyCode": "EUR" },
                "compareAtPrice": null,
                "availableForSale": true
            } }
        ] }
    })
}

pub fn collection_node(id: &str, handle: &str) -> Value {
    json!({
        "id": id,
        "title": "Running",
        "handle": handle,
        "description": "Fast things",
        "image": { "url": "https://cdn/run.jpg" }
    })
}
