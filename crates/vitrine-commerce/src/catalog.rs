//! Catalog Store
//!
//! Product and collection reads with in-memory caches. Caches are checked
//! before every fetch and invalidated only explicitly, there is no expiry.

use std::collections::HashMap;

use serde_json::{Value, json};

use crate::normalize::{collection_from_node, product_from_node};
use crate::queries;
use crate::transport::CommerceTransport;
use crate::types::{Collection, Product, ProductFilterOptions};

/// Number of collections requested by `fetch_all_collections`
const ALL_COLLECTIONS_LIMIT: u32 = 50;

/// Cached catalog reader over a GraphQL transport
pub struct CatalogStore<T: CommerceTransport> {
    transport: T,
    products: HashMap<String, Product>,
    /// Product lists keyed by collection handle or composite filter key
    product_lists: HashMap<String, Vec<Product>>,
    collections_data: HashMap<String, Collection>,
    all_collections: Vec<Collection>,
    loading: bool,
    error: Option<String>,
}

impl<T: CommerceTransport> CatalogStore<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            products: HashMap::new(),
            product_lists: HashMap::new(),
            collections_data: HashMap::new(),
            all_collections: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// A fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last recorded fetch error
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Cached product lookup without touching the network
    pub fn get_product(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    pub fn get_collection(&self, handle: &str) -> Option<&Collection> {
        self.collections_data.get(handle)
    }

    /// Fetch a single product by id, serving from cache when possible
    pub async fn fetch_product(&mut self, product_id: &str) -> Option<Product> {
        if let Some(product) = self.products.get(product_id) {
            return Some(product.clone());
        }

        tracing::debug!(product_id, "fetching product");
        let response = self
            .execute(&queries::product(), json!({ "productId": product_id }))
            .await?;

        let node = data_at(&response, &["product"])?;
        let product = product_from_node(node)?;
        self.products.insert(product_id.to_string(), product.clone());
        Some(product)
    }

    /// Fetch the products of one collection. Each product also lands in the
    /// by-id cache.
    pub async fn fetch_products_by_collection(
        &mut self,
        collection_handle: &str,
        limit: u32,
    ) -> Vec<Product> {
        if let Some(products) = self.product_lists.get(collection_handle) {
            return products.clone();
        }

        let Some(response) = self
            .execute(
                &queries::products_by_collection(),
                json!({ "collectionHandle": collection_handle, "numProducts": limit }),
            )
            .await
        else {
            return Vec::new();
        };

        let Some(edges) = data_at(&response, &["collection", "products"]) else {
            return Vec::new();
        };

        let products = self.collect_products(edges);
        self.product_lists
            .insert(collection_handle.to_string(), products.clone());
        products
    }

    /// Fetch every collection (first 50). The list cache and the by-handle
    /// cache are filled together.
    pub async fn fetch_all_collections(&mut self) -> Vec<Collection> {
        if !self.all_collections.is_empty() {
            return self.all_collections.clone();
        }

        let Some(response) = self
            .execute(
                &queries::all_collections(),
                json!({ "numCollections": ALL_COLLECTIONS_LIMIT }),
            )
            .await
        else {
            return Vec::new();
        };

        let Some(edges) = data_at(&response, &["collections"]) else {
            return Vec::new();
        };

        let collections: Vec<Collection> = edge_nodes(edges)
            .iter()
            .filter_map(|node| collection_from_node(node))
            .collect();

        for collection in &collections {
            self.collections_data
                .insert(collection.handle.clone(), collection.clone());
        }
        self.all_collections = collections.clone();
        collections
    }

    /// Fetch one collection record by handle
    pub async fn fetch_collection(&mut self, collection_handle: &str) -> Option<Collection> {
        if let Some(collection) = self.collections_data.get(collection_handle) {
            return Some(collection.clone());
        }

        let response = self
            .execute(
                &queries::collection(),
                json!({ "collectionHandle": collection_handle }),
            )
            .await?;

        let node = data_at(&response, &["collection"])?;
        let collection = collection_from_node(node)?;
        self.collections_data
            .insert(collection_handle.to_string(), collection.clone());
        Some(collection)
    }

    /// Filtered product listing. The cache key covers every filter
    /// parameter, so distinct filter combinations cache independently.
    pub async fn fetch_products(&mut self, options: &ProductFilterOptions) -> Vec<Product> {
        let cache_key = options.cache_key();
        if let Some(products) = self.product_lists.get(&cache_key) {
            return products.clone();
        }

        let query = queries::products(
            options.sort_by,
            options.cursor.as_deref(),
            &options.tags,
            &options.product_type,
        );

        let Some(response) = self
            .execute(&query, json!({ "numProducts": options.limit }))
            .await
        else {
            return Vec::new();
        };

        let Some(edges) = data_at(&response, &["products"]) else {
            return Vec::new();
        };

        let products = self.collect_products(edges);
        self.product_lists.insert(cache_key, products.clone());
        products
    }

    pub fn clear_product_cache(&mut self, product_id: &str) {
        self.products.remove(product_id);
    }

    pub fn clear_collection_cache(&mut self, collection_handle: &str) {
        self.product_lists.remove(collection_handle);
    }

    pub fn clear_cache(&mut self) {
        self.products.clear();
        self.product_lists.clear();
    }

    fn collect_products(&mut self, connection: &Value) -> Vec<Product> {
        let products: Vec<Product> = edge_nodes(connection)
            .iter()
            .filter_map(|node| product_from_node(node))
            .collect();
        for product in &products {
            self.products.insert(product.id.clone(), product.clone());
        }
        products
    }

    /// Run one GraphQL call with the loading flag raised. A transport
    /// failure records the error and yields `None`.
    async fn execute(&mut self, query: &str, variables: Value) -> Option<Value> {
        self.loading = true;
        let result = self.transport.execute(query, variables).await;
        self.loading = false;

        match result {
            Ok(response) => Some(response),
            Err(err) => {
                let message = format!("Error fetching from storefront: {err}");
                tracing::error!("{message}");
                self.error = Some(message);
                None
            }
        }
    }
}

/// Walk `response.data.<path...>`, treating an explicit null anywhere along
/// the way as absent.
fn data_at<'a>(response: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = response.get("data")?;
    for key in path {
        current = current.get(key)?;
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

fn edge_nodes(value: &Value) -> Vec<&Value> {
    value
        .get("edges")
        .and_then(Value::as_array)
        .map(|edges| edges.iter().filter_map(|e| e.get("node")).collect())
        .unwrap_or_default()
}
