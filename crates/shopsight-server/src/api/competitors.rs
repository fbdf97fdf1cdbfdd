//! GET /competitors — primary brand aggregation plus competitor discovery.
//!
//! Competitor-level failures are absorbed: a candidate that cannot be
//! aggregated, or that fails the storefront-signal gate, is dropped from
//! the list rather than surfaced as a partial error.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use url::Url;

use shopsight_core::CompetitorReport;
use shopsight_discovery::CompetitorFinder;
use shopsight_scraper::fetch_brand_context;

use crate::middleware::RequestId;

use super::{aggregate_primary, catalog_limits, normalize_limit, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct CompetitorParams {
    website_url: String,
    limit: Option<usize>,
}

pub(super) async fn get_competitors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CompetitorParams>,
) -> Result<Json<CompetitorReport>, ApiError> {
    let limit = normalize_limit(params.limit);
    let (client, brand) = aggregate_primary(&state, &req_id.0, &params.website_url).await?;

    // brand.store_url is the normalized root the aggregator already built.
    let store_root = Url::parse(&brand.store_url).map_err(|e| {
        tracing::error!(request_id = req_id.0, error = %e, "normalized root failed to re-parse");
        ApiError::new("internal_error", format!("internal error: {e}"))
    })?;

    let search_base = Url::parse(&state.config.search_base_url).map_err(|e| {
        tracing::error!(request_id = req_id.0, error = %e, "configured search base is not a URL");
        ApiError::new("internal_error", format!("internal error: {e}"))
    })?;
    let finder = CompetitorFinder::new(&client)
        .with_search_base(search_base)
        .with_candidate_factor(state.config.discovery_candidate_factor);
    let roots = finder
        .discover(&store_root, brand.brand_name.as_deref(), limit)
        .await;

    let limits = catalog_limits(&state.config);
    let mut competitors = Vec::new();
    for root in roots {
        match fetch_brand_context(&client, root.as_str(), &limits).await {
            Ok(context) if context.has_storefront_signal() => competitors.push(context),
            Ok(_) => {
                tracing::debug!(competitor = %root, "competitor dropped: no storefront signal");
            }
            Err(e) => {
                tracing::debug!(competitor = %root, error = %e, "competitor aggregation failed");
            }
        }
    }

    Ok(Json(CompetitorReport { brand, competitors }))
}
