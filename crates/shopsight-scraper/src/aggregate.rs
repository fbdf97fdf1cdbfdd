//! One aggregation pass over a storefront: home page plus the fixed list of
//! conventional sub-pages, assembled into a single [`BrandContext`].
//!
//! Every page-level failure degrades to the absent value for that field.
//! The only hard error is a store URL that cannot be normalized to a root.

use chrono::Utc;

use shopsight_core::BrandContext;

use crate::catalog::{fetch_catalog, CatalogLimits};
use crate::client::{store_root, StorefrontClient};
use crate::error::ScrapeError;
use crate::home::{parse_home, HomePage};
use crate::{about, contact, faqs, links, policies};

/// Runs the full scrape-and-aggregate pipeline against `website_url`.
///
/// Fetches are strictly sequential: home page, catalog pagination, then the
/// sub-page probes in a fixed order. The home document is fetched once and
/// parsed once for all three home-page scrapers.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidStoreUrl`] if `website_url` cannot be
/// normalized to a scheme+host root. All other failures are absorbed as
/// absent fields.
pub async fn fetch_brand_context(
    client: &StorefrontClient,
    website_url: &str,
    limits: &CatalogLimits,
) -> Result<BrandContext, ScrapeError> {
    let base = store_root(website_url)?;

    let home = match client.fetch_page(&base, "/").await {
        Ok(body) => parse_home(&body, &base),
        Err(e) => {
            tracing::debug!(store = %base, error = %e, "home page fetch failed");
            HomePage::default()
        }
    };

    let catalog = fetch_catalog(client, &base, limits).await;
    let policies = policies::fetch_policies(client, &base).await;
    let faqs = faqs::fetch_faqs(client, &base).await;
    let contact = contact::fetch_contact(client, &base).await;
    let about_text = about::fetch_about(client, &base).await;
    let important_links = links::fetch_important_links(client, &base).await;

    let context = BrandContext {
        store_url: base.to_string(),
        brand_name: home.brand_name,
        hero_products: home.hero_products,
        catalog,
        policies,
        faqs,
        social: home.social,
        contact,
        about_text,
        important_links,
        fetched_at: Utc::now(),
    };

    tracing::info!(
        store = %base,
        hero_products = context.hero_products.len(),
        catalog = context.catalog.len(),
        policies = context.policies.len(),
        faqs = context.faqs.len(),
        "aggregated brand context"
    );

    Ok(context)
}
