//! Heuristic competitor discovery.
//!
//! Builds platform-biased queries from the brand name (or bare host),
//! scrapes a search engine's HTML results page for external hosts, and keeps
//! only candidates whose catalog feed answers like a storefront. There is no
//! relevance scoring beyond search-engine ordering; membership on the
//! platform is the sole validation signal.
//!
//! The search surface is scraped markup, not an API — if its format changes,
//! discovery silently degrades to zero candidates. Every query and probe
//! failure is absorbed and logged at debug.

mod queries;
mod search;
mod validate;

use std::collections::HashSet;

use url::Url;

use shopsight_scraper::StorefrontClient;

use crate::queries::build_queries;
use crate::search::extract_candidate_roots;
use crate::validate::is_storefront;

const DEFAULT_SEARCH_BASE: &str = "https://html.duckduckgo.com/html/";

/// Discovers competitor storefront roots for one brand.
///
/// Borrows the per-request [`StorefrontClient`]; discovery never outlives
/// the inbound request that asked for it.
pub struct CompetitorFinder<'a> {
    client: &'a StorefrontClient,
    search_base: Url,
    /// Candidate hosts gathered per requested competitor before validation.
    candidate_factor: usize,
}

impl<'a> CompetitorFinder<'a> {
    #[must_use]
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self {
            client,
            search_base: Url::parse(DEFAULT_SEARCH_BASE).expect("valid default search base"),
            candidate_factor: 4,
        }
    }

    /// Points the finder at a different results page. Used by tests; also
    /// the seam for swapping the search surface if its markup breaks.
    #[must_use]
    pub fn with_search_base(mut self, search_base: Url) -> Self {
        self.search_base = search_base;
        self
    }

    #[must_use]
    pub fn with_candidate_factor(mut self, candidate_factor: usize) -> Self {
        self.candidate_factor = candidate_factor.max(1);
        self
    }

    /// Returns up to `limit` validated competitor roots, in discovery order.
    ///
    /// Candidate gathering stops at `limit * candidate_factor` distinct
    /// hosts; the store's own host is always excluded.
    pub async fn discover(
        &self,
        store_root: &Url,
        brand_name: Option<&str>,
        limit: usize,
    ) -> Vec<Url> {
        let own_origin = store_root.origin().ascii_serialization();
        let host = store_root.host_str().unwrap_or_default();
        let target = limit.saturating_mul(self.candidate_factor);

        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates: Vec<Url> = Vec::new();

        'queries: for query in build_queries(brand_name, host) {
            let mut url = self.search_base.clone();
            url.query_pairs_mut().clear().append_pair("q", &query);

            let body = match self.client.get_text(url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(query, error = %e, "search query failed");
                    continue;
                }
            };

            for root in extract_candidate_roots(&body) {
                let origin = root.origin().ascii_serialization();
                if origin == own_origin || !seen.insert(origin) {
                    continue;
                }
                candidates.push(root);
                if candidates.len() >= target {
                    break 'queries;
                }
            }
        }

        tracing::debug!(
            store = %store_root,
            candidates = candidates.len(),
            "gathered competitor candidates"
        );

        let mut validated = Vec::new();
        for candidate in candidates {
            if validated.len() >= limit {
                break;
            }
            if is_storefront(self.client, &candidate).await {
                validated.push(candidate);
            }
        }

        tracing::info!(
            store = %store_root,
            validated = validated.len(),
            limit,
            "competitor discovery complete"
        );

        validated
    }
}
