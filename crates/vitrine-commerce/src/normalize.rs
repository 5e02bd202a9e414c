//! Response Normalization
//!
//! Turns the nested edge/node response graphs into the flat domain records.
//! All monetary figures arrive as decimal strings inside `{ amount }` objects.

use serde_json::Value;

use crate::types::{Cart, CartLine, Collection, Product};

/// Parse a `{ "amount": "12.34" }` money object, tolerating a bare string
/// or number in its place. Unparseable input yields `None`.
fn parse_amount(value: &Value) -> Option<f64> {
    let raw = if value.is_object() {
        value.get("amount")?
    } else {
        value
    };
    match raw {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn str_field(node: &Value, key: &str) -> String {
    node.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_str_field(node: &Value, key: &str) -> Option<String> {
    node.get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

fn image_url(node: &Value, key: &str) -> Option<String> {
    node.get(key)
        .and_then(|img| img.get("url"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

fn edge_nodes(value: &Value) -> Vec<&Value> {
    value
        .get("edges")
        .and_then(Value::as_array)
        .map(|edges| edges.iter().filter_map(|e| e.get("node")).collect())
        .unwrap_or_default()
}

/// Normalize one product node from any catalog response. Price, availability
/// and variant id come from the first variant; detail-only fields (images,
/// collections) are empty when the query did not request them.
pub fn product_from_node(node: &Value) -> Option<Product> {
    let id = node.get("id").and_then(Value::as_str)?.to_string();

    let variants = node
        .get("variants")
        .map(edge_nodes)
        .unwrap_or_default();
    let first_variant = variants.first().copied();

    let price = first_variant
        .and_then(|v| v.get("price"))
        .and_then(parse_amount)
        .unwrap_or(0.0);
    let compare_at_price = first_variant
        .and_then(|v| v.get("compareAtPrice"))
        .and_then(parse_amount);
    let available = first_variant
        .and_then(|v| v.get("availableForSale"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let variant_id = first_variant
        .and_then(|v| v.get("id"))
        .and_then(Value::as_str)
        .map(ToString::to_string);

    let images = node
        .get("images")
        .map(edge_nodes)
        .unwrap_or_default()
        .iter()
        .filter_map(|img| img.get("url").and_then(Value::as_str))
        .map(ToString::to_string)
        .collect();

    let collections = node
        .get("collections")
        .map(edge_nodes)
        .unwrap_or_default()
        .iter()
        .filter_map(|c| c.get("handle").and_then(Value::as_str))
        .map(ToString::to_string)
        .collect();

    Some(Product {
        id,
        variant_id,
        title: str_field(node, "title"),
        description: opt_str_field(node, "description"),
        handle: str_field(node, "handle"),
        featured_image: image_url(node, "featuredImage"),
        images,
        price,
        on_sale: compare_at_price.is_some_and(|c| c > price),
        compare_at_price,
        available,
        collections,
    })
}

/// Normalize one collection node
pub fn collection_from_node(node: &Value) -> Option<Collection> {
    let id = node.get("id").and_then(Value::as_str)?.to_string();

    Some(Collection {
        id,
        title: str_field(node, "title"),
        handle: str_field(node, "handle"),
        description: opt_str_field(node, "description"),
        image: image_url(node, "image"),
        // The storefront API does not expose a count
        products_count: 0,
    })
}

/// Rebuild the whole cart snapshot from a cart payload. The total quantity
/// is recomputed from the lines rather than trusted from the server.
pub fn cart_from_payload(payload: &Value) -> Option<Cart> {
    let id = payload.get("id").and_then(Value::as_str)?.to_string();

    let items: Vec<CartLine> = payload
        .get("lines")
        .map(edge_nodes)
        .unwrap_or_default()
        .iter()
        .filter_map(|node| {
            let merchandise = node.get("merchandise")?;
            let product = merchandise.get("product")?;

            Some(CartLine {
                id: node.get("id").and_then(Value::as_str)?.to_string(),
                variant_id: str_field(merchandise, "id"),
                product_id: str_field(product, "id"),
                title: str_field(product, "title"),
                quantity: node.get("quantity").and_then(Value::as_u64).unwrap_or(0) as u32,
                price: merchandise
                    .get("price")
                    .and_then(parse_amount)
                    .unwrap_or(0.0),
                featured_image: image_url(product, "featuredImage"),
            })
        })
        .collect();

    let total = payload
        .get("estimatedCost")
        .and_then(|c| c.get("totalAmount"));

    Some(Cart {
        id,
        total_quantity: items.iter().map(|i| i.quantity).sum(),
        total_amount: total.and_then(parse_amount).unwrap_or(0.0),
        currency_code: total
            .and_then(|t| t.get("currencyCode"))
            .and_then(Value::as_str)
            .unwrap_or("EUR")
            .to_string(),
        checkout_url: str_field(payload, "checkoutUrl"),
        items,
    })
}
