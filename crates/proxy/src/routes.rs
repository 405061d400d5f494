//! Image proxy route.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::instrument;

/// Some image hosts refuse requests without a browser user agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    client: reqwest::Client,
}

impl AppState {
    /// Create state with a fresh HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the proxy router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/image-proxy", get(image_proxy))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ProxyQuery {
    url: Option<String>,
}

/// Fetch a remote image and re-serve its bytes and content type.
#[instrument(skip(state, query), fields(url = query.url.as_deref().unwrap_or("<missing>")))]
async fn image_proxy(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Response {
    let Some(url) = query.url.filter(|u| !u.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Image URL is required"})),
        )
            .into_response();
    };

    let response = match state
        .client
        .get(&url)
        .header(header::USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "upstream fetch failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal Server Error", "details": e.to_string()})),
            )
                .into_response();
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = %status, "upstream returned non-success status");
        return (status, Json(json!({"error": "Failed to fetch image"}))).into_response();
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    match response.bytes().await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed reading upstream body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal Server Error", "details": e.to_string()})),
            )
                .into_response()
        }
    }
}
