//! GET /insights — one storefront aggregation pass.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use shopsight_core::BrandContext;

use crate::middleware::RequestId;

use super::{aggregate_primary, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct InsightsParams {
    website_url: String,
}

pub(super) async fn get_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<InsightsParams>,
) -> Result<Json<BrandContext>, ApiError> {
    let (_client, context) = aggregate_primary(&state, &req_id.0, &params.website_url).await?;
    Ok(Json(context))
}
