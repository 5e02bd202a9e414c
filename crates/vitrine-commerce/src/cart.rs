//! Cart Store
//!
//! Holds the last-known-good cart snapshot. Every mutation requests the full
//! cart back and replaces the snapshot wholesale; a failed call leaves the
//! previous snapshot untouched.

use serde_json::{Value, json};

use crate::normalize::cart_from_payload;
use crate::persist::CartIdStore;
use crate::queries;
use crate::transport::CommerceTransport;
use crate::types::Cart;

/// Cart state synchronized against the remote storefront
pub struct CartStore<T: CommerceTransport, S: CartIdStore> {
    transport: T,
    id_store: S,
    cart: Cart,
    loading: bool,
    error: Option<String>,
}

impl<T: CommerceTransport, S: CartIdStore> CartStore<T, S> {
    pub fn new(transport: T, id_store: S) -> Self {
        Self {
            transport,
            id_store,
            cart: Cart::default(),
            loading: false,
            error: None,
        }
    }

    /// Current snapshot
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn item_count(&self) -> u32 {
        self.cart.total_quantity
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Make sure a cart exists: reuse the persisted id when there is one,
    /// otherwise create a fresh cart and persist its id. A persisted id the
    /// server no longer knows falls through to creation.
    pub async fn ensure_cart(&mut self) {
        if self.cart.is_initialized() {
            return;
        }

        match self.id_store.load() {
            Some(cart_id) => self.fetch_cart(&cart_id).await,
            None => self.create_cart().await,
        }
    }

    /// Fetch the cart with the given id. A missing cart on the server side
    /// triggers creation of a new one.
    pub async fn fetch_cart(&mut self, cart_id: &str) {
        self.loading = true;
        self.error = None;

        let result = self
            .transport
            .execute(&queries::get_cart(), json!({ "cartId": cart_id }))
            .await;
        self.loading = false;

        match result {
            Ok(response) => match cart_payload_at(&response, "cart") {
                Some(cart) => self.cart = cart,
                None => {
                    tracing::info!(cart_id, "cart not found remotely, creating a new one");
                    self.create_cart().await;
                }
            },
            Err(err) => self.record_error("Error fetching cart", &err),
        }
    }

    /// Create a new cart and persist its id
    pub async fn create_cart(&mut self) {
        self.loading = true;
        self.error = None;

        let result = self
            .transport
            .execute(&queries::create_cart(), json!({}))
            .await;
        self.loading = false;

        match result {
            Ok(response) => match nested_cart_payload(&response, "cartCreate") {
                Some(cart) => {
                    self.id_store.save(&cart.id);
                    tracing::debug!(cart_id = %cart.id, "created cart");
                    self.cart = cart;
                }
                None => self.record_message("Failed to create cart"),
            },
            Err(err) => self.record_error("Error creating cart", &err),
        }
    }

    /// Add a variant to the cart, initializing the cart first if needed
    pub async fn add_item(&mut self, variant_id: &str, quantity: u32) {
        self.ensure_cart().await;
        if !self.cart.is_initialized() {
            return;
        }

        let variables = json!({
            "cartId": self.cart.id,
            "lines": [ { "merchandiseId": variant_id, "quantity": quantity } ]
        });
        self.mutate(
            &queries::add_lines(),
            variables,
            "cartLinesAdd",
            "Failed to add item to cart",
        )
        .await;
    }

    /// Change the quantity of an existing line
    pub async fn update_item_quantity(&mut self, line_id: &str, quantity: u32) {
        self.ensure_cart().await;
        if !self.cart.is_initialized() {
            return;
        }

        let variables = json!({
            "cartId": self.cart.id,
            "lines": [ { "id": line_id, "quantity": quantity } ]
        });
        self.mutate(
            &queries::update_lines(),
            variables,
            "cartLinesUpdate",
            "Failed to update cart",
        )
        .await;
    }

    /// Remove a line from the cart
    pub async fn remove_item(&mut self, line_id: &str) {
        self.ensure_cart().await;
        if !self.cart.is_initialized() {
            return;
        }

        let variables = json!({
            "cartId": self.cart.id,
            "lineIds": [ line_id ]
        });
        self.mutate(
            &queries::remove_lines(),
            variables,
            "cartLinesRemove",
            "Failed to remove item from cart",
        )
        .await;
    }

    /// Refresh the cart from the remote and return a copy
    pub async fn cart_data(&mut self) -> Option<Cart> {
        self.ensure_cart().await;
        if !self.cart.is_initialized() {
            self.record_message("Failed to initialize cart");
            return None;
        }

        let cart_id = self.cart.id.clone();
        self.fetch_cart(&cart_id).await;
        Some(self.cart.clone())
    }

    async fn mutate(&mut self, query: &str, variables: Value, root: &'static str, failure: &str) {
        self.loading = true;
        self.error = None;

        let result = self.transport.execute(query, variables).await;
        self.loading = false;

        match result {
            Ok(response) => match nested_cart_payload(&response, root) {
                Some(cart) => self.cart = cart,
                None => self.record_message(failure),
            },
            Err(err) => self.record_error(failure, &err),
        }
    }

    fn record_message(&mut self, message: &str) {
        tracing::error!("{message}");
        self.error = Some(message.to_string());
    }

    fn record_error(&mut self, context: &str, err: &crate::CommerceError) {
        let message = format!("{context}: {err}");
        tracing::error!("{message}");
        self.error = Some(message);
    }
}

/// `response.data.<key>` parsed as a cart, null treated as absent
fn cart_payload_at(response: &Value, key: &str) -> Option<Cart> {
    let payload = response.get("data")?.get(key)?;
    if payload.is_null() {
        return None;
    }
    cart_from_payload(payload)
}

/// `response.data.<root>.cart` parsed as a cart
fn nested_cart_payload(response: &Value, root: &str) -> Option<Cart> {
    let payload = response.get("data")?.get(root)?.get("cart")?;
    if payload.is_null() {
        return None;
    }
    cart_from_payload(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommerceError;
    use crate::persist::MemoryCartIdStore;
    use crate::test_support::{MockTransport, cart_payload, empty_cart_payload};
    use vitrine_net::NetError;

    fn store_with(
        responses: Vec<Result<Value, CommerceError>>,
        id_store: MemoryCartIdStore,
    ) -> CartStore<MockTransport, MemoryCartIdStore> {
        CartStore::new(MockTransport::new(responses), id_store)
    }

    #[test]
    fn test_ensure_cart_creates_and_persists() {
        smol::block_on(async {
            let create = json!({ "data": { "cartCreate": {
                "cart": empty_cart_payload("gid://shop/Cart/new")
            } } });
            let mut store = store_with(vec![Ok(create)], MemoryCartIdStore::default());

            store.ensure_cart().await;

            assert_eq!(store.cart().id, "gid://shop/Cart/new");
            assert_eq!(
                store.id_store.load().as_deref(),
                Some("gid://shop/Cart/new")
            );
            assert_eq!(store.transport.call_count(), 1);
        });
    }

    #[test]
    fn test_ensure_cart_reuses_persisted_id() {
        smol::block_on(async {
            let mut id_store = MemoryCartIdStore::default();
            id_store.save("gid://shop/Cart/old");

            let fetch = json!({ "data": { "cart": cart_payload("gid://shop/Cart/old", 2) } });
            let mut store = store_with(vec![Ok(fetch)], id_store);

            store.ensure_cart().await;

            assert_eq!(store.cart().id, "gid://shop/Cart/old");
            assert_eq!(store.cart().total_quantity, 2);
            let (query, variables) = store.transport.calls.borrow()[0].clone();
            assert!(query.contains("query getCart"));
            assert_eq!(variables["cartId"], "gid://shop/Cart/old");
        });
    }

    #[test]
    fn test_stale_persisted_id_falls_back_to_create() {
        smol::block_on(async {
            let mut id_store = MemoryCartIdStore::default();
            id_store.save("gid://shop/Cart/stale");

            let missing = json!({ "data": { "cart": null } });
            let create = json!({ "data": { "cartCreate": {
                "cart": empty_cart_payload("gid://shop/Cart/fresh")
            } } });
            let mut store = store_with(vec![Ok(missing), Ok(create)], id_store);

            store.ensure_cart().await;

            assert_eq!(store.cart().id, "gid://shop/Cart/fresh");
            assert_eq!(
                store.id_store.load().as_deref(),
                Some("gid://shop/Cart/fresh")
            );
            assert_eq!(store.transport.call_count(), 2);
        });
    }

    #[test]
    fn test_add_item_auto_initializes_and_resyncs() {
        smol::block_on(async {
            let create = json!({ "data": { "cartCreate": {
                "cart": empty_cart_payload("gid://shop/Cart/1")
            } } });
            let add = json!({ "data": { "cartLinesAdd": {
                "cart": cart_payload("gid://shop/Cart/1", 2)
            } } });
            let mut store = store_with(vec![Ok(create), Ok(add)], MemoryCartIdStore::default());

            store.add_item("gid://shop/Variant/1", 2).await;

            assert_eq!(store.cart().total_quantity, 2);
            assert_eq!(store.cart().items.len(), 1);
            assert_eq!(store.cart().total_amount, 49.90);

            let calls = store.transport.calls.borrow();
            assert_eq!(calls.len(), 2);
            assert_eq!(calls[1].1["cartId"], "gid://shop/Cart/1");
            assert_eq!(calls[1].1["lines"][0]["merchandiseId"], "gid://shop/Variant/1");
            assert_eq!(calls[1].1["lines"][0]["quantity"], 2);
        });
    }

    #[test]
    fn test_update_quantity_replaces_snapshot() {
        smol::block_on(async {
            let mut id_store = MemoryCartIdStore::default();
            id_store.save("gid://shop/Cart/1");

            let fetch = json!({ "data": { "cart": cart_payload("gid://shop/Cart/1", 1) } });
            let update = json!({ "data": { "cartLinesUpdate": {
                "cart": cart_payload("gid://shop/Cart/1", 5)
            } } });
            let mut store = store_with(vec![Ok(fetch), Ok(update)], id_store);

            store.update_item_quantity("line1", 5).await;

            assert_eq!(store.cart().total_quantity, 5);
            let calls = store.transport.calls.borrow();
            assert_eq!(calls[1].1["lines"][0]["id"], "line1");
            assert_eq!(calls[1].1["lines"][0]["quantity"], 5);
        });
    }

    #[test]
    fn test_remove_item() {
        smol::block_on(async {
            let mut id_store = MemoryCartIdStore::default();
            id_store.save("gid://shop/Cart/1");

            let fetch = json!({ "data": { "cart": cart_payload("gid://shop/Cart/1", 1) } });
            let remove = json!({ "data": { "cartLinesRemove": {
                "cart": empty_cart_payload("gid://shop/Cart/1")
            } } });
            let mut store = store_with(vec![Ok(fetch), Ok(remove)], id_store);

            store.remove_item("line1").await;

            assert_eq!(store.cart().total_quantity, 0);
            assert!(store.cart().items.is_empty());
            let calls = store.transport.calls.borrow();
            assert_eq!(calls[1].1["lineIds"][0], "line1");
        });
    }

    #[test]
    fn test_failed_mutation_keeps_previous_snapshot() {
        smol::block_on(async {
            let mut id_store = MemoryCartIdStore::default();
            id_store.save("gid://shop/Cart/1");

            let fetch = json!({ "data": { "cart": cart_payload("gid://shop/Cart/1", 2) } });
            let failure = Err(CommerceError::Transport(NetError::Http { status: 502 }));
            let mut store = store_with(vec![Ok(fetch), failure], id_store);

            store.add_item("gid://shop/Variant/9", 1).await;

            // Snapshot from before the failed mutation survives
            assert_eq!(store.cart().total_quantity, 2);
            assert!(store.error().unwrap().contains("Failed to add item"));
            assert!(!store.is_loading());
        });
    }

    #[test]
    fn test_cart_data_refreshes_and_returns_copy() {
        smol::block_on(async {
            let mut id_store = MemoryCartIdStore::default();
            id_store.save("gid://shop/Cart/1");

            let first = json!({ "data": { "cart": cart_payload("gid://shop/Cart/1", 1) } });
            let refreshed = json!({ "data": { "cart": cart_payload("gid://shop/Cart/1", 4) } });
            let mut store = store_with(vec![Ok(first), Ok(refreshed)], id_store);

            store.ensure_cart().await;
            let snapshot = store.cart_data().await.unwrap();

            assert_eq!(snapshot.total_quantity, 4);
            assert_eq!(store.cart().total_quantity, 4);
        });
    }

    #[test]
    fn test_formatted_total_from_snapshot() {
        smol::block_on(async {
            let mut id_store = MemoryCartIdStore::default();
            id_store.save("gid://shop/Cart/1");

            let fetch = json!({ "data": { "cart": cart_payload("gid://shop/Cart/1", 1) } });
            let mut store = store_with(vec![Ok(fetch)], id_store);

            store.ensure_cart().await;
            assert_eq!(store.cart().formatted_total(), "49.90 EUR");
        });
    }
}
