//! Domain Records
//!
//! Flat projections of the nested GraphQL response graphs, plus the filter
//! options for catalog queries.

use serde::{Deserialize, Serialize};

/// Normalized product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub variant_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub handle: String,
    pub featured_image: Option<String>,
    pub images: Vec<String>,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    /// Derived: compare-at price present and strictly above the price
    pub on_sale: bool,
    pub available: bool,
    /// Collection handle memberships
    pub collections: Vec<String>,
}

/// Normalized collection record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Not exposed by the storefront API; kept for the UI contract
    pub products_count: u32,
}

/// One line item in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub variant_id: String,
    pub product_id: String,
    pub title: String,
    pub quantity: u32,
    pub price: f64,
    pub featured_image: Option<String>,
}

/// Cart snapshot, fully replaced from each mutation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    pub items: Vec<CartLine>,
    /// Recomputed client-side as the sum of line quantities
    pub total_quantity: u32,
    /// Taken from the remote aggregate
    pub total_amount: f64,
    pub currency_code: String,
    pub checkout_url: String,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            id: String::new(),
            items: Vec::new(),
            total_quantity: 0,
            total_amount: 0.0,
            currency_code: "EUR".to_string(),
            checkout_url: String::new(),
        }
    }
}

impl Cart {
    pub fn is_initialized(&self) -> bool {
        !self.id.is_empty()
    }

    /// Display string for the cart total
    pub fn formatted_total(&self) -> String {
        format!("{:.2} {}", self.total_amount, self.currency_code)
    }
}

/// Catalog sort options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    PriceAsc,
    #[default]
    PriceDesc,
    TitleAsc,
    TitleDesc,
    CreatedAsc,
    CreatedDesc,
    Relevance,
}

impl SortOption {
    /// Translate to the remote (sort key, reverse) pair
    pub fn to_graphql(self) -> (&'static str, bool) {
        match self {
            SortOption::PriceAsc => ("PRICE", false),
            SortOption::PriceDesc => ("PRICE", true),
            SortOption::TitleAsc => ("TITLE", false),
            SortOption::TitleDesc => ("TITLE", true),
            SortOption::CreatedAsc => ("CREATED_AT", false),
            SortOption::CreatedDesc => ("CREATED_AT", true),
            SortOption::Relevance => ("RELEVANCE", false),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::TitleAsc => "title-asc",
            SortOption::TitleDesc => "title-desc",
            SortOption::CreatedAsc => "created-asc",
            SortOption::CreatedDesc => "created-desc",
            SortOption::Relevance => "relevance",
        }
    }
}

/// Filter options for `fetch_products`
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilterOptions {
    pub min_price: f64,
    pub max_price: f64,
    pub available: bool,
    pub sort_by: SortOption,
    pub filter_query: String,
    pub tags: Vec<String>,
    pub product_type: String,
    pub limit: u32,
    pub cursor: Option<String>,
}

impl Default for ProductFilterOptions {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: 1_000_000.0,
            available: true,
            sort_by: SortOption::default(),
            filter_query: String::new(),
            tags: Vec::new(),
            product_type: String::new(),
            limit: 10,
            cursor: None,
        }
    }
}

impl ProductFilterOptions {
    /// Composite cache key over every filter parameter
    pub fn cache_key(&self) -> String {
        format!(
            "all_products_{}_{}_{}_{}_{}_{}_{}_{}_{}",
            self.min_price,
            self.max_price,
            self.available,
            self.sort_by.as_str(),
            self.filter_query,
            self.tags.join("_"),
            self.product_type,
            self.limit,
            self.cursor.as_deref().unwrap_or("")
        )
    }
}
