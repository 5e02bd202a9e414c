//! GraphQL Documents
//!
//! Query and mutation builders for the storefront API. Cart operations all
//! request the same cart field set so each response carries a full snapshot.

use crate::types::SortOption;

/// Field selection shared by every cart query and mutation
pub const CART_FIELDS: &str = r#"
  id
  checkoutUrl
  estimatedCost {
    totalAmount {
      amount
      currencyCode
    }
  }
  lines(first: 100) {
    edges {
      node {
        id
        quantity
        merchandise {
          ... on ProductVariant {
            id
            product {
              id
              title
              featuredImage {
                url
              }
            }
            price {
              amount
              currencyCode
            }
          }
        }
      }
    }
  }
"#;

pub fn get_cart() -> String {
    format!(
        r#"
query getCart($cartId: ID!) {{
  cart(id: $cartId) {{
{CART_FIELDS}
  }}
}}
"#
    )
}

pub fn create_cart() -> String {
    format!(
        r#"
mutation createCart {{
  cartCreate {{
    cart {{
{CART_FIELDS}
    }}
  }}
}}
"#
    )
}

pub fn add_lines() -> String {
    format!(
        r#"
mutation addToCart($cartId: ID!, $lines: [CartLineInput!]!) {{
  cartLinesAdd(cartId: $cartId, lines: $lines) {{
    cart {{
{CART_FIELDS}
    }}
  }}
}}
"#
    )
}

pub fn update_lines() -> String {
    format!(
        r#"
mutation updateCartLines($cartId: ID!, $lines: [CartLineUpdateInput!]!) {{
  cartLinesUpdate(cartId: $cartId, lines: $lines) {{
    cart {{
{CART_FIELDS}
    }}
  }}
}}
"#
    )
}

pub fn remove_lines() -> String {
    format!(
        r#"
mutation removeCartLines($cartId: ID!, $lineIds: [ID!]!) {{
  cartLinesRemove(cartId: $cartId, lineIds: $lineIds) {{
    cart {{
{CART_FIELDS}
    }}
  }}
}}
"#
    )
}

pub fn product() -> String {
    r#"
query getProduct($productId: ID!) {
  product(id: $productId) {
    id
    title
    description
    handle
    featuredImage {
      url
      altText
    }
    images(first: 10) {
      edges {
        node {
          url
          altText
          width
          height
        }
      }
    }
    priceRange {
      minVariantPrice {
        amount
        currencyCode
      }
    }
    compareAtPriceRange {
      minVariantPrice {
        amount
        currencyCode
      }
    }
    variants(first: 5) {
      edges {
        node {
          id
          title
          availableForSale
          price {
            amount
            currencyCode
          }
          image {
            url
            altText
            width
            height
          }
          compareAtPrice {
            amount
            currencyCode
          }
        }
      }
    }
  }
}
"#
    .to_string()
}

pub fn products_by_collection() -> String {
    r#"
query getProductsByCollection($collectionHandle: String!, $numProducts: Int!) {
  collection(handle: $collectionHandle) {
    products(first: $numProducts) {
      edges {
        node {
          id
          title
          handle
          featuredImage {
            url
            altText
          }
          priceRange {
            minVariantPrice {
              amount
              currencyCode
            }
            maxVariantPrice {
              amount
              currencyCode
            }
          }
          compareAtPriceRange {
            minVariantPrice {
              amount
              currencyCode
            }
          }
          variants(first: 1) {
            edges {
              node {
                id
                price {
                  amount
                  currencyCode
                }
                compareAtPrice {
                  amount
                  currencyCode
                }
                availableForSale
              }
            }
          }
        }
      }
    }
  }
}
"#
    .to_string()
}

pub fn all_collections() -> String {
    r#"
query getAllCollections($numCollections: Int!) {
  collections(first: $numCollections) {
    edges {
      node {
        id
        title
        handle
        description
        image {
          url
          altText
        }
      }
    }
  }
}
"#
    .to_string()
}

pub fn collection() -> String {
    r#"
query getCollection($collectionHandle: String!) {
  collection(handle: $collectionHandle) {
    id
    title
    handle
    description
    image {
      url
      altText
    }
  }
}
"#
    .to_string()
}

/// Product listing query. Sort, cursor, tag and product-type filters are
/// baked into the document because the sort key is an enum literal in the
/// GraphQL grammar, not a variable.
pub fn products(
    sort_by: SortOption,
    cursor: Option<&str>,
    tags: &[String],
    product_type: &str,
) -> String {
    let (sort_key, reverse) = sort_by.to_graphql();

    let after_cursor = match cursor {
        Some(c) if !c.is_empty() => format!(r#", after: "{c}""#),
        _ => String::new(),
    };
    // Only the first tag is usable as a server-side filter
    let tag_filter = match tags.first() {
        Some(tag) => format!(r#", tag: "{tag}""#),
        None => String::new(),
    };
    let type_filter = if product_type.is_empty() {
        String::new()
    } else {
        format!(r#", productType: "{product_type}""#)
    };

    format!(
        r#"
query getProducts($numProducts: Int!) {{
  products(
    first: $numProducts
    sortKey: {sort_key}
    reverse: {reverse}
    {after_cursor}
    {tag_filter}
    {type_filter}
  ) {{
    pageInfo {{
      hasNextPage
      endCursor
    }}
    edges {{
      node {{
        id
        title
        description
        handle
        productType
        tags
        createdAt
        collections(first: 5) {{
          edges {{
            node {{
              id
              title
              handle
            }}
          }}
        }}
        featuredImage {{
          url
          altText
        }}
        priceRange {{
          minVariantPrice {{
            amount
            currencyCode
          }}
          maxVariantPrice {{
            amount
            currencyCode
          }}
        }}
        compareAtPriceRange {{
          minVariantPrice {{
            amount
            currencyCode
          }}
        }}
        variants(first: 1) {{
          edges {{
            node {{
              id
              price {{
                amount
                currencyCode
              }}
              compareAtPrice {{
                amount
                currencyCode
              }}
              availableForSale
            }}
          }}
        }}
      }}
    }}
  }}
}}
"#
    )
}
