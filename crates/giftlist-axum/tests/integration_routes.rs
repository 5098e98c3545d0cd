//! Integration tests for the Axum web server.
//!
//! These tests verify that routes are correctly wired to handlers and
//! that the HTML routes never surface storage failures.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use giftlist_axum::bootstrap::{AxumContext, bootstrap};
use giftlist_axum::routes::create_router;
use giftlist_core::{
    Gift, GiftId, GiftStore, RegistryService, RepositoryError, SeedCatalog, StoreBackend,
};
use giftlist_db::{SqliteGiftStore, setup_test_database};

/// Store whose medium is always unreachable.
struct UnreachableStore;

#[async_trait]
impl GiftStore for UnreachableStore {
    async fn initialize(&self, _catalog: &SeedCatalog) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".into()))
    }

    async fn list_all(&self) -> Result<Vec<Gift>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".into()))
    }

    async fn mark_bought(&self, _id: GiftId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".into()))
    }
}

async fn seeded_app() -> Router {
    let pool = setup_test_database().await.unwrap();
    let registry = RegistryService::new(
        Arc::new(SqliteGiftStore::new(pool)),
        SeedCatalog::new(["Escorredor de Pratos", "Cafeteira"]),
    );
    registry.initialize().await.unwrap();
    create_router(AxumContext::new(Arc::new(registry)))
}

fn unreachable_app() -> Router {
    let registry = RegistryService::new(Arc::new(UnreachableStore), SeedCatalog::default());
    create_router(AxumContext::new(Arc::new(registry)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn submit_purchase(app: &Router, form_body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/comprar")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn api_buy(app: &Router, id: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/gifts/{id}/buy"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn bought_flags(app: &Router) -> Vec<bool> {
    let (status, body) = get(app, "/api/gifts").await;
    assert_eq!(status, StatusCode::OK);
    let gifts: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    gifts.iter().map(|g| g["bought"].as_bool().unwrap()).collect()
}

fn assert_redirects_home(response: &axum::response::Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn index_lists_gifts() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Escorredor de Pratos"));
    assert!(body.contains("Cafeteira"));
}

#[tokio::test]
async fn api_lists_gifts_as_json() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/gifts").await;
    assert_eq!(status, StatusCode::OK);
    let gifts: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        gifts,
        serde_json::json!([
            {"id": 1, "name": "Escorredor de Pratos", "bought": false},
            {"id": 2, "name": "Cafeteira", "bought": false}
        ])
    );
}

#[tokio::test]
async fn purchase_marks_gift_and_redirects() {
    let app = seeded_app().await;

    let response = submit_purchase(&app, "gift_id=2").await;
    assert_redirects_home(&response);
    assert_eq!(bought_flags(&app).await, [false, true]);

    let (_, body) = get(&app, "/").await;
    assert!(body.contains("Comprado"));
}

#[tokio::test]
async fn repeated_purchase_redirects_without_change() {
    let app = seeded_app().await;

    assert_redirects_home(&submit_purchase(&app, "gift_id=2").await);
    assert_redirects_home(&submit_purchase(&app, "gift_id=2").await);
    assert_eq!(bought_flags(&app).await, [false, true]);
}

#[tokio::test]
async fn invalid_purchases_redirect_without_change() {
    let app = seeded_app().await;

    for form_body in [
        "gift_id=abc",
        "gift_id=-1",
        "gift_id=999999",
        "gift_id=",
        "",
        "gift_id=2&gift_id=1",
    ] {
        assert_redirects_home(&submit_purchase(&app, form_body).await);
    }

    // No form content type at all
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/comprar")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_redirects_home(&response);

    assert_eq!(bought_flags(&app).await, [false, false]);
}

#[tokio::test]
async fn api_buy_reports_transition_once() {
    let app = seeded_app().await;

    assert_eq!(api_buy(&app, "1").await, serde_json::json!({"bought": true}));
    assert_eq!(api_buy(&app, "1").await, serde_json::json!({"bought": false}));
    assert_eq!(api_buy(&app, "abc").await, serde_json::json!({"bought": false}));
}

#[tokio::test]
async fn unreachable_store_degrades_html_and_fails_api() {
    let app = unreachable_app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Nenhum presente disponível"));

    assert_redirects_home(&submit_purchase(&app, "gift_id=1").await);

    let (status, body) = get(&app, "/api/gifts").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["status"], 503);
}

#[tokio::test]
async fn bootstrap_seeds_json_backend_once() {
    let dir = tempfile::tempdir().unwrap();
    let backend = StoreBackend::Json {
        path: dir.path().join("gifts.json"),
    };

    let ctx = bootstrap(&backend).await.unwrap();
    assert_eq!(ctx.registry.list_gifts().await.len(), 22);
    assert!(ctx.registry.mark_bought("2").await);

    // A restart must keep both the records and the purchase
    let ctx = bootstrap(&backend).await.unwrap();
    let gifts = ctx.registry.list_gifts().await;
    assert_eq!(gifts.len(), 22);
    assert!(gifts[1].bought);
}

#[tokio::test]
async fn bootstrap_fails_when_store_is_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let backend = StoreBackend::Json {
        path: blocker.join("gifts.json"),
    };

    assert!(bootstrap(&backend).await.is_err());
}
