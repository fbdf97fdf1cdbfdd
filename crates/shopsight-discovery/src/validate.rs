//! Platform-membership validation.
//!
//! A candidate counts as a storefront when its catalog feed answers with a
//! JSON object carrying a `products` key. The item limit keeps the probe
//! cheap; the feed contents are not inspected here.

use url::Url;

use shopsight_scraper::StorefrontClient;

pub(crate) async fn is_storefront(client: &StorefrontClient, root: &Url) -> bool {
    let Ok(probe) = root.join("products.json?limit=1") else {
        return false;
    };

    match client.get_json(probe).await {
        Ok(value) => value.as_object().is_some_and(|map| map.contains_key("products")),
        Err(e) => {
            tracing::debug!(candidate = %root, error = %e, "storefront probe failed");
            false
        }
    }
}
