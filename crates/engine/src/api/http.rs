//! HTTP routes.

use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method},
    response::Html,
    routing::get,
    Json, Router,
};
use lotto_domain::LotteryResult;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api::views;
use crate::app::App;
use crate::use_cases::LotteryError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(home))
        .route("/api/health", get(health))
        .route("/api/lottery", get(draw))
}

/// Build a CORS layer from `CORS_ALLOWED_ORIGINS`: `*` or a comma-separated
/// origin list. Returns `None` when unset or when no origin is usable.
pub fn cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?.trim();

    let cors = CorsLayer::new().allow_methods([Method::GET, Method::OPTIONS]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match HeaderValue::from_str(s) {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!(
                    origin = %s.escape_default(),
                    error = %e,
                    "Ignoring invalid CORS origin"
                );
                None
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS has no valid origins, CORS disabled");
        return None;
    }

    Some(cors.allow_origin(origins))
}

async fn health() -> &'static str {
    "OK"
}

/// Home page: one draw over the configured range, rendered as HTML.
async fn home(State(app): State<Arc<App>>) -> Result<Html<String>, ApiError> {
    let result = app
        .use_cases
        .lottery
        .draw
        .execute_in(app.home_range)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Html(views::lottery_page(&result)))
}

#[derive(Debug, Deserialize)]
struct DrawQuery {
    min: Option<i32>,
    max: Option<i32>,
}

async fn draw(
    State(app): State<Arc<App>>,
    Query(query): Query<DrawQuery>,
) -> Result<Json<LotteryResult>, ApiError> {
    let min = query.min.unwrap_or(app.home_range.min());
    let max = query.max.unwrap_or(app.home_range.max());
    let result = app.use_cases.lottery.draw.execute(min, max)?;
    Ok(Json(result))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<LotteryError> for ApiError {
    fn from(e: LotteryError) -> Self {
        match e {
            LotteryError::InvalidRange(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use lotto_domain::{DrawRange, LotteryRules};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::config::LotteryConfig;

    fn router_with(value: i32, config: LotteryConfig) -> Router {
        let app = App::new(
            config,
            Arc::new(FixedClock(Utc::now())),
            Arc::new(FixedRandom(value)),
        );
        routes().with_state(Arc::new(app))
    }

    fn router_drawing(value: i32) -> Router {
        router_with(value, LotteryConfig::default())
    }

    async fn send_get(router: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = router.oneshot(request).await.expect("response");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    async fn preflight(router: Router, origin: &str) -> Option<String> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/lottery")
            .header("origin", origin)
            .header("access-control-request-method", "GET")
            .body(Body::empty())
            .expect("request");
        let response = router.oneshot(request).await.expect("response");
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    fn router_with_cors(allowed_origins: &str) -> Option<Router> {
        cors_layer(Some(allowed_origins)).map(|cors| router_drawing(0).layer(cors))
    }

    #[test]
    fn cors_disabled_when_unset() {
        assert!(cors_layer(None).is_none());
        assert!(cors_layer(Some("  ")).is_none());
    }

    #[tokio::test]
    async fn cors_wildcard_allows_any_origin() {
        let router = router_with_cors("*").expect("cors layer");
        assert_eq!(
            preflight(router, "http://example.com").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn cors_list_allows_listed_origins() {
        let allowed = "http://a.example, http://b.example";
        let router = router_with_cors(allowed).expect("cors layer");
        assert_eq!(
            preflight(router, "http://b.example").await.as_deref(),
            Some("http://b.example")
        );
        let router = router_with_cors(allowed).expect("cors layer");
        assert_eq!(preflight(router, "http://c.example").await, None);
    }

    #[tokio::test]
    async fn cors_list_keeps_valid_origins_when_some_are_invalid() {
        let allowed = "bad\norigin,http://a.example";
        let router = router_with_cors(allowed).expect("cors layer");
        assert_eq!(
            preflight(router, "http://a.example").await.as_deref(),
            Some("http://a.example")
        );
    }

    #[test]
    fn cors_all_invalid_origins_disable_cors() {
        assert!(cors_layer(Some("bad\norigin, bad\u{7f}one")).is_none());
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, body) = send_get(router_drawing(0), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn home_renders_winning_draw() {
        let (status, body) = send_get(router_drawing(9), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<strong id="drawn-number">9</strong>"#));
        assert!(body.contains("congratulations, you won"));
    }

    #[tokio::test]
    async fn home_renders_losing_draw() {
        let (status, body) = send_get(router_drawing(1), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<strong id="drawn-number">1</strong>"#));
        assert!(body.contains("try again"));
    }

    #[tokio::test]
    async fn home_uses_configured_rules() {
        let config = LotteryConfig {
            home_range: DrawRange::new(1, 7).expect("range"),
            rules: LotteryRules::new(3, "jackpot", "no luck").expect("rules"),
        };
        let (_, body) = send_get(router_with(3, config), "/").await;
        assert!(body.contains("jackpot"));
    }

    #[tokio::test]
    async fn lottery_api_returns_json() {
        let (status, body) = send_get(router_drawing(9), "/api/lottery").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(
            json,
            serde_json::json!({ "drawn_number": 9, "message": "congratulations, you won" })
        );
    }

    #[tokio::test]
    async fn lottery_api_accepts_explicit_range() {
        let (status, body) = send_get(router_drawing(25), "/api/lottery?min=20&max=30").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(json["drawn_number"], 25);
        assert_eq!(json["message"], "try again");
    }

    #[tokio::test]
    async fn lottery_api_rejects_inverted_range() {
        let (status, body) = send_get(router_drawing(0), "/api/lottery?min=10&max=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid draw range"));
    }

    #[tokio::test]
    async fn lottery_api_rejects_non_numeric_bounds() {
        let (status, _) = send_get(router_drawing(0), "/api/lottery?min=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
