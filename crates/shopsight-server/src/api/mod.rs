mod competitors;
mod insights;
mod ui;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shopsight_core::{AppConfig, BrandContext};
use shopsight_scraper::{fetch_brand_context, CatalogLimits, ScrapeError, StorefrontClient};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            // The original surface reports "not a recognized storefront"
            // as 401; kept for contract compatibility.
            "not_storefront" => StatusCode::UNAUTHORIZED,
            "invalid_url" | "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Clamps the requested competitor count into the supported 1..=5 range.
pub(super) fn normalize_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(3).clamp(1, 5)
}

pub(super) fn catalog_limits(config: &AppConfig) -> CatalogLimits {
    CatalogLimits {
        page_size: config.catalog_page_size,
        max_pages: config.catalog_max_pages,
    }
}

/// Builds the per-request client and runs the aggregation pass for the
/// primary brand, enforcing the storefront-signal gate.
///
/// The client is returned so competitor discovery can reuse it within the
/// same inbound request.
pub(super) async fn aggregate_primary(
    state: &AppState,
    req_id: &str,
    website_url: &str,
) -> Result<(StorefrontClient, BrandContext), ApiError> {
    let config = &state.config;
    let client = StorefrontClient::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| {
            tracing::error!(request_id = req_id, error = %e, "failed to build HTTP client");
            ApiError::new("internal_error", format!("internal error: {e}"))
        })?;

    let context = fetch_brand_context(&client, website_url, &catalog_limits(config))
        .await
        .map_err(|e| match e {
            ScrapeError::InvalidStoreUrl { .. } => ApiError::new("invalid_url", e.to_string()),
            other => {
                tracing::error!(request_id = req_id, error = %other, "aggregation failed");
                ApiError::new("internal_error", format!("internal error: {other}"))
            }
        })?;

    if !context.has_storefront_signal() {
        return Err(ApiError::new(
            "not_storefront",
            "website not found or not a recognized storefront",
        ));
    }

    Ok((client, context))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health))
        .route("/insights", get(insights::get_insights))
        .route("/competitors", get(competitors::get_competitors))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_state() -> AppState {
        // Search base points at a reserved name so no test ever reaches a
        // real search engine; tests that exercise discovery override it.
        state_with("https://search.invalid/html/".to_owned())
    }

    fn state_with(search_base_url: String) -> AppState {
        let config = AppConfig {
            env: shopsight_core::Environment::Test,
            bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
            log_level: "warn".to_owned(),
            request_timeout_secs: 5,
            user_agent: "shopsight-test/0.1".to_owned(),
            catalog_page_size: 250,
            catalog_max_pages: 5,
            discovery_candidate_factor: 4,
            search_base_url,
        };
        AppState {
            config: Arc::new(config),
        }
    }

    fn encode(raw: &str) -> String {
        url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
    }

    /// Mounts a minimal but valid storefront: home page with a hero anchor
    /// and a one-page catalog, plus the limit=1 validation probe.
    async fn mount_storefront(server: &MockServer, brand: &str) {
        let home = format!(
            concat!(
                "<html><head><title>{brand} | Store</title></head><body>",
                r#"<a href="/products/flagship" title="{brand} Flagship">shop</a>"#,
                "</body></html>",
            ),
            brand = brand
        );
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(home))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/products.json"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
                "products": [{
                    "title": format!("{brand} Flagship"),
                    "handle": "flagship",
                    "variants": [{"price": "25.00"}]
                }]
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/products.json"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"products": []})))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/products.json"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"products": []})))
            .mount(server)
            .await;
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    #[test]
    fn normalize_limit_defaults_to_three() {
        assert_eq!(normalize_limit(None), 3);
    }

    #[test]
    fn normalize_limit_clamps_range() {
        assert_eq!(normalize_limit(Some(0)), 1);
        assert_eq!(normalize_limit(Some(9)), 5);
        assert_eq!(normalize_limit(Some(2)), 2);
    }

    #[tokio::test]
    async fn health_returns_ok_status() {
        let app = build_app(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn root_serves_html_page() {
        let app = build_app(test_state());
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn responses_carry_request_id_header() {
        let app = build_app(test_state());
        let response = app
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "test-id-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "test-id-42"
        );
    }

    #[tokio::test]
    async fn insights_rejects_unparsable_url() {
        let app = build_app(test_state());
        let response = app
            .oneshot(
                Request::get("/insights?website_url=not%20a%20url")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_url");
    }

    #[tokio::test]
    async fn insights_gates_empty_storefront_with_401() {
        // A live mock store that answers nothing useful: home 404, feed 404.
        let store = MockServer::start().await;

        let app = build_app(test_state());
        let uri = format!("/insights?website_url={}", encode(&store.uri()));
        let response = app
            .oneshot(Request::get(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_storefront");
    }

    #[tokio::test]
    async fn insights_returns_brand_context_for_live_store() {
        let store = MockServer::start().await;
        mount_storefront(&store, "Acme").await;

        let app = build_app(test_state());
        let uri = format!("/insights?website_url={}", encode(&store.uri()));
        let response = app
            .oneshot(Request::get(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let ctx = body_json(response).await;
        assert_eq!(ctx["brand_name"], "Acme");
        assert_eq!(ctx["catalog"].as_array().unwrap().len(), 1);
        assert_eq!(ctx["catalog"][0]["price"], 25.0);
        assert_eq!(ctx["hero_products"][0]["title"], "Acme Flagship");
        assert!(ctx["fetched_at"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn competitors_limit_is_enforced_end_to_end() {
        let store = MockServer::start().await;
        let rival_a = MockServer::start().await;
        let rival_b = MockServer::start().await;
        let rival_c = MockServer::start().await;
        let search = MockServer::start().await;

        mount_storefront(&store, "Acme").await;
        mount_storefront(&rival_a, "RivalA").await;
        mount_storefront(&rival_b, "RivalB").await;
        mount_storefront(&rival_c, "RivalC").await;

        let results = format!(
            concat!(
                r#"<a href="{a}/collections/all">A</a>"#,
                r#"<a href="{b}">B</a>"#,
                r#"<a href="{c}">C</a>"#,
            ),
            a = rival_a.uri(),
            b = rival_b.uri(),
            c = rival_c.uri()
        );
        Mock::given(method("GET"))
            .and(path("/html/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(results))
            .mount(&search)
            .await;

        let app = build_app(state_with(format!("{}/html/", search.uri())));
        let uri = format!("/competitors?website_url={}&limit=2", encode(&store.uri()));
        let response = app
            .oneshot(Request::get(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let report = body_json(response).await;
        assert_eq!(report["brand"]["brand_name"], "Acme");
        let competitors = report["competitors"].as_array().unwrap();
        assert_eq!(competitors.len(), 2, "limit=2 caps the competitor list");
        for competitor in competitors {
            let has_catalog = !competitor["catalog"].as_array().unwrap().is_empty();
            let has_heroes = !competitor["hero_products"].as_array().unwrap().is_empty();
            assert!(has_catalog || has_heroes, "every competitor passes the gate");
        }
    }

    #[tokio::test]
    async fn competitors_for_dead_store_is_401() {
        let store = MockServer::start().await;

        let app = build_app(test_state());
        let uri = format!("/competitors?website_url={}", encode(&store.uri()));
        let response = app
            .oneshot(Request::get(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
