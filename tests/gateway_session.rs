//! Integration tests for the request gateway and the session lifecycle.
//!
//! A wiremock server stands in for the platform backend so the properties
//! of the core can be exercised end to end: bearer injection, caller
//! header precedence, and the 401 forced-logout protocol.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use handraise::api::ApiClient;
use handraise::app::App;
use handraise::auth::{CredentialStore, MemorySlot, SessionEvents, SessionQuery, SessionState};
use handraise::config::Config;
use handraise::notify::{Notice, Notifier};
use handraise::routes::Route;

fn me_body() -> serde_json::Value {
    serde_json::json!({
        "id": "9ab6dd0a-4f3c-4b8e-90ab-0a8f0cf7a111",
        "email": "vol@example.org",
        "role": "VOLUNTEER"
    })
}

struct Harness {
    store: Arc<CredentialStore>,
    events: SessionEvents,
    api: ApiClient,
    notices: tokio::sync::mpsc::UnboundedReceiver<Notice>,
}

fn harness(origin: &str) -> Harness {
    let store = Arc::new(CredentialStore::new(Box::new(MemorySlot::default())));
    let events = SessionEvents::new();
    let (notifier, notices) = Notifier::channel();
    let api = ApiClient::new(origin, store.clone(), events.clone(), notifier).expect("client");
    Harness {
        store,
        events,
        api,
        notices,
    }
}

#[tokio::test]
async fn test_authenticated_request_carries_exact_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_body()))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    h.store.set("tok-123");

    let user = h.api.fetch_me().await.expect("authenticated call");
    assert_eq!(user.email, "vol@example.org");
}

#[tokio::test]
async fn test_request_without_credential_has_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/opportunity/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    h.api.search_opportunities().await.expect("anonymous call");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_caller_supplied_authorization_header_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_body()))
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    h.store.set("store-token");

    let builder = h
        .api
        .request(reqwest::Method::GET, "/auth/me")
        .header("authorization", "Bearer caller-token");
    let response = h.api.execute(builder).await.expect("call");
    assert!(response.status().is_success());

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(
        requests[0].headers.get("authorization").map(|v| v.to_str().unwrap()),
        Some("Bearer caller-token")
    );
}

#[tokio::test]
async fn test_unauthorized_response_clears_credential_and_emits_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/opportunity/search"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Could not validate credentials"
            })),
        )
        .mount(&server)
        .await;

    let mut h = harness(&server.uri());
    h.store.set("expired-token");
    let mut rx = h.events.subscribe();

    let err = h.api.search_opportunities().await.expect_err("401 maps to error");
    assert!(matches!(err, handraise::api::ApiError::Unauthorized));

    assert_eq!(h.store.get(), None, "credential must be cleared");
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), 1, "exactly one invalidation event");

    let notice = h.notices.try_recv().expect("advisory notice");
    assert!(notice.text.contains("Session expired"));
}

#[tokio::test]
async fn test_concurrent_unauthorized_responses_clear_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "expired"})),
        )
        .mount(&server)
        .await;

    let mut h = harness(&server.uri());
    h.store.set("expired-token");
    let mut rx = h.events.subscribe();

    // Two independent in-flight requests both observe the 401; neither may
    // panic and the clear-and-signal sequence must happen exactly once.
    let (a, b) = tokio::join!(h.api.fetch_my_matches(), h.api.fetch_my_applications());
    assert!(a.is_err());
    assert!(b.is_err());

    assert_eq!(h.store.get(), None);
    assert_eq!(*rx.borrow_and_update(), 1, "one event despite two failures");

    // One advisory notice, not a logout storm.
    let mut notices = 0;
    while h.notices.try_recv().is_ok() {
        notices += 1;
    }
    assert_eq!(notices, 1);
}

#[tokio::test]
async fn test_session_query_resolves_absent_on_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "expired"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    h.store.set("expired-token");
    let session = SessionQuery::new(h.api.clone(), h.store.clone());

    // The failure is swallowed into "no session"; it does not propagate.
    assert_eq!(session.current().await, None);
    assert_eq!(h.store.get(), None);
}

#[tokio::test]
async fn test_forced_logout_lands_on_login_within_one_turn() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "expired"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(CredentialStore::new(Box::new(MemorySlot::default())));
    store.set("expired-token");
    let config = Config {
        backend_url: Some(server.uri()),
        last_email: None,
    };

    let mut app = App::new(config, store.clone()).expect("build app");
    assert_eq!(*app.navigator.current(), Route::Dashboard);
    assert_eq!(app.session_state, SessionState::Loading);

    app.start();

    let mut tries = 0;
    while matches!(app.session_state, SessionState::Loading) && tries < 100 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        app.tick();
        tries += 1;
    }

    assert_eq!(app.session_state, SessionState::Anonymous);
    assert_eq!(*app.navigator.current(), Route::Login);
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn test_login_stores_token_and_resolves_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "fresh-token"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_body()))
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    h.api
        .login("vol@example.org", "hunter2")
        .await
        .expect("login");
    assert_eq!(h.store.get().as_deref(), Some("fresh-token"));

    let session = SessionQuery::new(h.api.clone(), h.store.clone());
    let user = session.current().await.expect("resolved session");
    assert_eq!(user.email, "vol@example.org");
}

#[tokio::test]
async fn test_session_cache_is_invalid_once_credential_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_body()))
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    h.store.set("tok");
    let session = SessionQuery::new(h.api.clone(), h.store.clone());
    assert!(session.current().await.is_some());

    // Clearing the credential invalidates the cached identity without any
    // further network traffic.
    h.store.clear();
    assert_eq!(session.current().await, None);
}

#[tokio::test]
async fn test_direct_clear_and_logout_converge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_body()))
        .mount(&server)
        .await;

    // Entry point one: clear through the store API directly.
    let direct = harness(&server.uri());
    direct.store.set("tok");
    let direct_session = SessionQuery::new(direct.api.clone(), direct.store.clone());
    assert!(direct_session.current().await.is_some());
    direct.store.clear();

    // Entry point two: the session query's logout wrapper.
    let wrapped = harness(&server.uri());
    wrapped.store.set("tok");
    let wrapped_session = SessionQuery::new(wrapped.api.clone(), wrapped.store.clone());
    assert!(wrapped_session.current().await.is_some());
    wrapped_session.logout().await;

    // Both converge to the same observable state.
    assert_eq!(direct.store.get(), None);
    assert_eq!(wrapped.store.get(), None);
    assert_eq!(direct_session.current().await, None);
    assert_eq!(wrapped_session.current().await, None);
}

#[tokio::test]
async fn test_server_detail_surfaces_on_notification_channel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/opportunity/search"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"detail": "embedding service down"})),
        )
        .mount(&server)
        .await;

    let mut h = harness(&server.uri());
    assert!(h.api.search_opportunities().await.is_err());

    let notice = h.notices.try_recv().expect("advisory notice");
    assert_eq!(notice.text, "embedding service down");
}

#[tokio::test]
async fn test_gateway_returns_raw_response_for_callers_that_inspect_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let h = harness(&server.uri());
    let response = h
        .api
        .execute(h.api.request(reqwest::Method::GET, "/healthz"))
        .await
        .expect("non-2xx is not an error at the execute layer");
    assert_eq!(response.status().as_u16(), 503);
}
