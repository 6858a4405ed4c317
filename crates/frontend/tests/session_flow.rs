//! End-to-end session and listing scenarios against a stubbed API

use serde_json::json;
use storefront_core::{ACCESS_KEY, FileStore, MemoryStore, REFRESH_KEY, TokenStore};
use storefront_frontend::forms::{LOGGED_IN_MESSAGE, RecordingNotifier};
use storefront_frontend::{
    FormHandlers, ListingView, LoginForm, RefreshOutcome, SessionManager, SessionState,
    load_listing,
};
use storefront_http::StorefrontClient;
use storefront_http::types::ProductQuery;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn stub_login(server: &MockServer, access: &str, refresh: &str) {
    Mock::given(method("POST"))
        .and(path("/api/login/"))
        .and(body_json(json!({"username": "a", "password": "b"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": access, "refresh": refresh})),
        )
        .mount(server)
        .await;
}

fn seeded(access: &str, refresh: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store
        .set_many(&[(ACCESS_KEY, access), (REFRESH_KEY, refresh)])
        .unwrap();
    store
}

#[tokio::test]
async fn test_login_form_persists_issued_tokens() {
    let server = MockServer::start().await;
    stub_login(&server, "T1", "R1").await;

    let client = StorefrontClient::new(server.uri()).unwrap();
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let handlers = FormHandlers::new(SessionManager::new(client, store.clone()), &notifier);

    let form = LoginForm {
        username: "a".to_string(),
        password: "b".to_string(),
    };
    handlers.submit(form.into()).await.unwrap();

    assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some("T1"));
    assert_eq!(store.get(REFRESH_KEY).unwrap().as_deref(), Some("R1"));
    assert_eq!(notifier.messages(), vec![LOGGED_IN_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_session_survives_reopening_the_store() {
    let server = MockServer::start().await;
    stub_login(&server, "T1", "R1").await;
    let dir = TempDir::new().unwrap();
    let token_file = dir.path().join("tokens.json");

    let client = StorefrontClient::new(server.uri()).unwrap();
    let first = SessionManager::new(client.clone(), FileStore::new(&token_file));
    first.login("a", "b").await.unwrap();
    drop(first);

    let second = SessionManager::new(client, FileStore::new(&token_file));
    assert_eq!(second.state().unwrap(), SessionState::HasSession);
    assert_eq!(second.access_token().unwrap().as_deref(), Some("T1"));
}

#[tokio::test]
async fn test_refresh_without_session_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "X"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = StorefrontClient::new(server.uri()).unwrap();
    let manager = SessionManager::new(client, MemoryStore::new());

    assert_eq!(manager.refresh_access().await, RefreshOutcome::Skipped);
    assert_eq!(manager.state().unwrap(), SessionState::NoSession);
}

#[tokio::test]
async fn test_refresh_replaces_access_token_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .and(body_json(json!({"refresh": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "T2"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded("T1", "R1");
    let client = StorefrontClient::new(server.uri()).unwrap();
    let manager = SessionManager::new(client, store.clone());

    assert_eq!(manager.refresh_access().await, RefreshOutcome::Refreshed);
    assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some("T2"));
    assert_eq!(store.get(REFRESH_KEY).unwrap().as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_failed_refresh_leaves_tokens_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token is invalid or expired",
            "code": "token_not_valid"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded("T1", "R1");
    let client = StorefrontClient::new(server.uri()).unwrap();
    let manager = SessionManager::new(client, store.clone());

    assert_eq!(manager.refresh_access().await, RefreshOutcome::Failed);
    assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some("T1"));
    assert_eq!(store.get(REFRESH_KEY).unwrap().as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_empty_catalog_renders_no_products_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = StorefrontClient::new(server.uri()).unwrap();
    let view = load_listing(&client, &ProductQuery::default()).await;

    assert_eq!(view, ListingView::Empty);
    assert_eq!(view.to_string(), "No products available at the moment.\n");
}

#[tokio::test]
async fn test_unreachable_catalog_renders_error() {
    // Nothing listens on the discard port
    let client = StorefrontClient::new("http://127.0.0.1:9").unwrap();
    let view = load_listing(&client, &ProductQuery::default()).await;

    let ListingView::Failed(reason) = &view else {
        panic!("expected failure, got {view:?}");
    };
    assert!(reason.starts_with("Request failed"));
    assert!(view.render_html().contains("Error loading products: "));
}
