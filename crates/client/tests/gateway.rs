//! Gateway integration tests against an in-process backend.
//!
//! Spins a real axum server on a loopback port and drives the gateway at it,
//! covering the envelope contract, header/query shaping, and the forced
//! logout on 401.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{Value, json};

use repairhub_client::api;
use repairhub_client::config::ClientConfig;
use repairhub_client::gateway::{Gateway, GatewayError};
use repairhub_client::session::SessionStore;
use repairhub_core::{EnvelopeError, OrderId, ToolId};

async fn envelope_success() -> Json<Value> {
    Json(json!({"code": 200, "data": {"foo": 1}}))
}

async fn envelope_business() -> Json<Value> {
    Json(json!({"code": 403, "msg": "nope"}))
}

async fn unauthorized() -> impl IntoResponse {
    // Envelope claims success; the transport status must win.
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"code": 200, "data": {"foo": 1}})),
    )
}

async fn server_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded")
}

async fn echo_auth_header(headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    Json(json!({"code": 200, "data": {"authorization": auth}}))
}

async fn echo_query(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({"code": 200, "data": params}))
}

async fn echo_body(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({"code": 200, "data": body}))
}

async fn delete_tool(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({"code": 200, "data": {"deleted": id}}))
}

async fn user_info(State(hits): State<Arc<AtomicUsize>>) -> Json<Value> {
    // Later fetches see a renamed user, so tests can tell a fresh fetch
    // from a replay of the first profile.
    let n = hits.fetch_add(1, Ordering::SeqCst);
    let name = if n == 0 { "testuser" } else { "renamed" };
    Json(json!({
        "code": 200,
        "data": {
            "id": 1,
            "name": name,
            "account": "testuser",
            "email": "testuser@example.com",
            "permissions": [67, 68, 69],
            "self_user_type": 1,
            "account_brand_id": 1,
            "brand_name": "MockBrand"
        }
    }))
}

struct TestBackend {
    base_url: String,
    profile_hits: Arc<AtomicUsize>,
}

async fn spawn_backend() -> TestBackend {
    let profile_hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route("/envelope/success", get(envelope_success))
        .route("/envelope/business", get(envelope_business))
        .route("/unauthorized", get(unauthorized))
        .route("/boom", get(server_error))
        .route("/echo/headers", get(echo_auth_header))
        .route("/echo/query", get(echo_query))
        .route("/echo/body", post(echo_body))
        .route(
            "/self-repair/guides-release/deleteTool/{id}",
            delete(delete_tool),
        )
        .route("/user/userInfo", get(user_info))
        .route(
            "/self-repair/guides-release/toolBinding",
            post(|| async { Json(json!({"code": 200, "data": null})) }),
        )
        .route(
            "/self-repair/image/uploadImage",
            post(|| async { Json(json!({"code": 200, "data": "https://cdn.example.com/i.png"})) }),
        )
        .with_state(Arc::clone(&profile_hits));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    TestBackend {
        base_url: format!("http://{addr}"),
        profile_hits,
    }
}

fn gateway_for(backend: &TestBackend, session: SessionStore) -> Gateway {
    let config = ClientConfig::new(backend.base_url.parse().expect("base url"));
    Gateway::new(&config, session)
}

#[tokio::test]
async fn success_envelope_resolves_to_unwrapped_data() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::new());

    let data: Value = gateway
        .get("/envelope/success", &[])
        .await
        .expect("success");
    assert_eq!(data, json!({"foo": 1}));
}

#[tokio::test]
async fn business_failure_rejects_with_server_message() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::new());

    let err = gateway
        .get::<Value>("/envelope/business", &[])
        .await
        .expect_err("business failure");

    assert_eq!(err.to_string(), "nope");
    match err {
        GatewayError::Envelope(EnvelopeError::Business { code, message }) => {
            assert_eq!(code, 403);
            assert_eq!(message, "nope");
        }
        other => panic!("expected business failure, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_401_forces_logout_regardless_of_envelope() {
    let backend = spawn_backend().await;
    let session = SessionStore::with_token(SecretString::from("stale-token"));
    let gateway = gateway_for(&backend, session.clone());

    // Hydrate first so the test proves the profile is cleared too.
    session
        .get_user_info(&gateway)
        .await
        .expect("initial hydration");
    assert!(session.is_hydrated());

    let err = gateway
        .get::<Value>("/unauthorized", &[])
        .await
        .expect_err("401");

    assert!(matches!(err, GatewayError::Unauthorized));
    assert!(session.token().is_none());
    assert!(session.user_info().is_none());
    assert!(!session.is_hydrated());
}

#[tokio::test]
async fn other_non_2xx_surfaces_status_without_logout() {
    let backend = spawn_backend().await;
    let session = SessionStore::with_token(SecretString::from("still-valid"));
    let gateway = gateway_for(&backend, session.clone());

    let err = gateway.get::<Value>("/boom", &[]).await.expect_err("500");

    match err {
        GatewayError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "backend exploded");
        }
        other => panic!("expected status failure, got {other:?}"),
    }
    assert!(session.token().is_some(), "500 must not clear the session");
}

#[tokio::test]
async fn bearer_token_attached_when_session_has_one() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(
        &backend,
        SessionStore::with_token(SecretString::from("secret-token")),
    );

    let data: Value = gateway.get("/echo/headers", &[]).await.expect("echo");
    assert_eq!(data["authorization"], "Bearer secret-token");
}

#[tokio::test]
async fn no_auth_header_when_anonymous() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::new());

    let data: Value = gateway.get("/echo/headers", &[]).await.expect("echo");
    assert_eq!(data["authorization"], "");
}

#[tokio::test]
async fn get_merges_params_into_query_string() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::new());

    let data: Value = gateway
        .get(
            "/echo/query",
            &[("page", "2".to_string()), ("keyword", "screen".to_string())],
        )
        .await
        .expect("echo");

    assert_eq!(data["page"], "2");
    assert_eq!(data["keyword"], "screen");
}

#[tokio::test]
async fn post_carries_json_body() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::new());

    let data: Value = gateway
        .post("/echo/body", &json!({"sales_area": 2}))
        .await
        .expect("echo");
    assert_eq!(data, json!({"sales_area": 2}));
}

#[tokio::test]
async fn delete_inlines_identifier_in_path() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::new());

    let data = api::shop::delete_tool(&gateway, ToolId::new(7))
        .await
        .expect("delete");
    assert_eq!(data["deleted"], 7);
}

#[tokio::test]
async fn concurrent_profile_fetches_share_one_request() {
    let backend = spawn_backend().await;
    let session = SessionStore::with_token(SecretString::from("tok"));
    let gateway = gateway_for(&backend, session.clone());

    let (a, b) = tokio::join!(
        session.get_user_info(&gateway),
        session.get_user_info(&gateway)
    );

    let a = a.expect("first caller").expect("profile");
    let b = b.expect("second caller").expect("profile");
    assert_eq!(a, b);
    assert_eq!(
        backend.profile_hits.load(Ordering::SeqCst),
        1,
        "second caller must reuse the in-flight fetch"
    );
}

#[tokio::test]
async fn sequential_profile_fetches_observe_server_side_changes() {
    let backend = spawn_backend().await;
    let session = SessionStore::with_token(SecretString::from("tok"));
    let gateway = gateway_for(&backend, session.clone());

    let first = session
        .get_user_info(&gateway)
        .await
        .expect("first fetch")
        .expect("profile");
    assert_eq!(first.name, "testuser");

    // The backend renamed the user between calls; a later call must
    // re-fetch rather than replay the committed profile.
    let second = session
        .get_user_info(&gateway)
        .await
        .expect("second fetch")
        .expect("profile");
    assert_eq!(second.name, "renamed");
    assert_eq!(backend.profile_hits.load(Ordering::SeqCst), 2);
    assert_eq!(session.user_name().as_deref(), Some("renamed"));
}

#[tokio::test]
async fn action_endpoint_accepts_null_data_on_success() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::new());

    let data = api::shop::tool_binding(&gateway, &json!({"guide_id": 3, "tool_ids": [7]}))
        .await
        .expect("binding succeeds");
    assert_eq!(data, Value::Null);
}

#[tokio::test]
async fn null_data_is_missing_for_required_payloads() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::new());

    let err = gateway
        .post::<repairhub_core::UserInfo, _>(
            "/self-repair/guides-release/toolBinding",
            &json!({}),
        )
        .await
        .expect_err("profile cannot be null");
    assert!(matches!(
        err,
        GatewayError::Envelope(EnvelopeError::MissingData)
    ));
}

#[tokio::test]
async fn profile_fetch_failure_leaves_session_unmutated() {
    let session = SessionStore::with_token(SecretString::from("tok"));
    // Unroutable backend: the fetch fails at the transport layer.
    let config = ClientConfig::new("http://127.0.0.1:1".parse().expect("url"));
    let bad_gateway = Gateway::new(&config, session.clone());

    let err = session
        .get_user_info(&bad_gateway)
        .await
        .expect_err("transport failure");
    assert!(matches!(err, GatewayError::Http(_)));
    assert!(session.token().is_some());
    assert!(!session.is_hydrated());
}

#[tokio::test]
async fn upload_image_returns_stored_url() {
    let backend = spawn_backend().await;
    let gateway = gateway_for(&backend, SessionStore::with_token(SecretString::from("tok")));

    let url = gateway
        .upload_image(vec![0x89, 0x50, 0x4E, 0x47], "image.png")
        .await
        .expect("upload");
    assert_eq!(url, "https://cdn.example.com/i.png");
}

#[tokio::test]
async fn completed_order_round_trips_through_envelope() {
    // Dedicated router: the order payload is too big to inline above.
    let app = Router::new().route(
        "/self-repair/shop-order/details",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("id").map(String::as_str), Some("10"));
            Json(json!({
                "code": 200,
                "data": {
                    "id": 10,
                    "user_id": 1,
                    "order_no": "RO-2024-0001",
                    "status": 2,
                    "total_amount": "119.98",
                    "currency": "USD",
                    "shop_order_info_details": [],
                    "shop_customer_ship_info": {
                        "id": 1, "name": "Test User", "country_code": "US",
                        "zipcode": "94016", "state_code": "CA", "city": "Daly City",
                        "address1": "1 Repair Way", "email": "testuser@example.com"
                    },
                    "shop_bill_ship_info": {
                        "id": 2, "name": "Test User", "country_code": "US",
                        "zipcode": "94016", "state_code": "CA", "city": "Daly City",
                        "address1": "1 Repair Way", "email": "testuser@example.com"
                    }
                }
            }))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    let config = ClientConfig::new(format!("http://{addr}").parse().expect("base url"));
    let gateway = Gateway::new(&config, SessionStore::new());

    let order = api::shop::get_completed_order(&gateway, OrderId::new(10))
        .await
        .expect("order");
    assert_eq!(order.order_no, "RO-2024-0001");
    assert_eq!(order.total_amount, "119.98");
}
