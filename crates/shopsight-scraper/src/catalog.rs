//! Full-catalog extraction from the public `products.json` endpoint.
//!
//! Pages are fetched sequentially with an incrementing `page` parameter.
//! Pagination stops on the first empty page, on any non-200 response, or at
//! the configured page ceiling. The upstream page count is not trusted: a
//! cycling or pathological feed ends at `max_pages` with a partial catalog.

use serde::Deserialize;
use url::Url;

use shopsight_core::Product;

use crate::client::StorefrontClient;

/// Pagination bounds for one catalog fetch.
#[derive(Debug, Clone)]
pub struct CatalogLimits {
    /// `limit` query parameter sent on each page request.
    pub page_size: u32,
    /// Hard ceiling on pages fetched per store.
    pub max_pages: usize,
}

impl Default for CatalogLimits {
    fn default() -> Self {
        Self {
            page_size: 250,
            max_pages: 50,
        }
    }
}

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    products: Vec<CatalogItem>,
}

/// One product entry from the listing feed. Only the fields the catalog
/// scraper reads are modeled; anything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct CatalogItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    handle: Option<String>,
    #[serde(default)]
    image: Option<CatalogImage>,
    #[serde(default)]
    variants: Vec<CatalogVariant>,
}

#[derive(Debug, Deserialize)]
struct CatalogImage {
    #[serde(default)]
    src: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogVariant {
    /// Observed as a decimal string on live storefronts, but tolerated as a
    /// bare number too. Parsed leniently in [`parse_price`].
    #[serde(default)]
    price: Option<serde_json::Value>,
}

/// Fetches every catalog page from `base` until natural termination or the
/// page ceiling.
///
/// Page-level failures end pagination and the accumulated products are
/// returned; the caller cannot distinguish "feed absent" from "feed empty",
/// by the same absence semantics as the page scrapers.
pub async fn fetch_catalog(
    client: &StorefrontClient,
    base: &Url,
    limits: &CatalogLimits,
) -> Vec<Product> {
    let mut products: Vec<Product> = Vec::new();
    let mut page = 1usize;

    loop {
        if page > limits.max_pages {
            tracing::warn!(
                store = %base,
                max_pages = limits.max_pages,
                "catalog page ceiling reached; returning partial catalog"
            );
            break;
        }

        let path = format!("products.json?limit={}&page={page}", limits.page_size);
        let url = match base.join(&path) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(store = %base, error = %e, "catalog URL join failed");
                break;
            }
        };

        let value = match client.get_json(url).await {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(store = %base, page, error = %e, "catalog page fetch failed");
                break;
            }
        };

        let parsed: CatalogResponse = match serde_json::from_value(value) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(store = %base, page, error = %e, "catalog page shape mismatch");
                break;
            }
        };

        if parsed.products.is_empty() {
            break;
        }

        products.extend(parsed.products.into_iter().map(|item| to_product(item, base)));
        page += 1;
    }

    products
}

fn to_product(item: CatalogItem, base: &Url) -> Product {
    let url = item
        .handle
        .as_deref()
        .filter(|h| !h.is_empty())
        .and_then(|handle| base.join(&format!("products/{handle}")).ok())
        .map(|u| u.to_string());

    let image = item
        .image
        .and_then(|img| img.src)
        .filter(|src| !src.is_empty())
        .and_then(|src| base.join(&src).ok())
        .map(|u| u.to_string());

    let price = item
        .variants
        .first()
        .and_then(|v| v.price.as_ref())
        .and_then(parse_price);

    Product {
        title: item.title.trim().to_owned(),
        url,
        price,
        image,
    }
}

/// Lenient price parse: accepts a JSON number or a numeric string.
/// Anything else (including negative values) is treated as absent.
fn parse_price(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|p| p.is_finite() && *p >= 0.0)
}
