mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn callback_without_code_skips_exchange() {
    let app = TestApp::new(FakeAuth::default());

    let response = app.router.oneshot(get("/auth/callback", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/dashboard"));
    assert_eq!(FakeAuth::count(&app.auth.exchange_calls), 0);
    assert!(set_cookies(response.headers()).is_empty());
}

#[tokio::test]
async fn callback_exchanges_code_with_verifier() {
    let artist = user("artist@example.com", None);
    let auth = FakeAuth::default().with_code("code-1", session("at", "rt", artist));
    let app = TestApp::new(auth);

    let response = app
        .router
        .oneshot(get("/auth/callback?code=code-1", Some("sb-code-verifier=v123")))
        .await
        .unwrap();

    assert_eq!(location(&response), Some("/dashboard"));
    let cookies = set_cookies(response.headers());
    assert!(set_cookie(&cookies, "sb-access-token").unwrap().starts_with("sb-access-token=at;"));
    assert!(set_cookie(&cookies, "sb-refresh-token").unwrap().starts_with("sb-refresh-token=rt;"));
    assert!(set_cookie(&cookies, "sb-code-verifier").unwrap().contains("Max-Age=0"));
    assert_eq!(*app.auth.verifiers.lock().unwrap(), vec![Some("v123".to_string())]);
}

fn post_callback(uri: &str) -> Request<Body> {
    Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn posted_code_is_exchanged() {
    let artist = user("artist@example.com", None);
    let auth = FakeAuth::default().with_code("c1", session("at", "rt", artist));
    let app = TestApp::new(auth);

    let response = app.router.oneshot(post_callback("/auth/callback?code=c1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/dashboard"));
    let cookies = set_cookies(response.headers());
    assert!(set_cookie(&cookies, "sb-access-token").unwrap().starts_with("sb-access-token=at;"));
    assert!(set_cookie(&cookies, "sb-refresh-token").unwrap().starts_with("sb-refresh-token=rt;"));
    assert_eq!(FakeAuth::count(&app.auth.exchange_calls), 1);
}

#[tokio::test]
async fn posted_callback_without_code_skips_exchange() {
    let app = TestApp::new(FakeAuth::default());

    let response = app.router.oneshot(post_callback("/auth/callback")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/dashboard"));
    assert_eq!(FakeAuth::count(&app.auth.exchange_calls), 0);
    assert!(set_cookies(response.headers()).is_empty());
}

#[tokio::test]
async fn failed_exchange_still_redirects_without_session() {
    let app = TestApp::new(FakeAuth::default());

    let response = app.router.oneshot(get("/auth/callback?code=bogus", None)).await.unwrap();

    assert_eq!(location(&response), Some("/dashboard"));
    assert_eq!(FakeAuth::count(&app.auth.exchange_calls), 1);
    assert!(set_cookies(response.headers()).is_empty());
}

#[tokio::test]
async fn login_sets_session_cookies() {
    let artist = user("artist@example.com", None);
    let auth = FakeAuth::default()
        .with_password("artist@example.com", "hunter22", session("at", "rt", artist));
    let app = TestApp::new(auth);

    let response = app
        .router
        .oneshot(post_json(
            "/api/auth/login",
            None,
            json!({ "email": "artist@example.com", "password": "hunter22" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(response.headers());
    assert!(set_cookie(&cookies, "sb-access-token").is_some());
    assert!(set_cookie(&cookies, "sb-refresh-token").is_some());
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["email"], "artist@example.com");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new(FakeAuth::default());

    let response = app
        .router
        .oneshot(post_json(
            "/api/auth/login",
            None,
            json!({ "email": "artist@example.com", "password": "nope" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(response.headers()).is_empty());
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Invalid login credentials");
}

#[tokio::test]
async fn register_validates_input() {
    let app = TestApp::new(FakeAuth::default());

    let response = app
        .router
        .oneshot(post_json(
            "/api/auth/register",
            None,
            json!({ "email": "not-an-email", "password": "123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn register_stores_code_verifier() {
    let app = TestApp::new(FakeAuth::default());

    let response = app
        .router
        .oneshot(post_json(
            "/api/auth/register",
            None,
            json!({ "email": "new@example.com", "password": "secret-pass" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookies = set_cookies(response.headers());
    let verifier = set_cookie(&cookies, "sb-code-verifier").unwrap();
    assert!(!verifier.starts_with("sb-code-verifier=;"));
    assert!(set_cookie(&cookies, "sb-access-token").is_none());
    assert_eq!(body_json(response).await["data"]["requires_email_confirmation"], true);
}

#[tokio::test]
async fn logout_clears_cookies_even_when_service_is_down() {
    let app = TestApp::new(FakeAuth::default().unreachable());

    let response = app
        .router
        .oneshot(post_json("/api/auth/logout", Some("sb-access-token=at"), json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(FakeAuth::count(&app.auth.sign_out_calls), 1);
    let cookies = set_cookies(response.headers());
    assert!(set_cookie(&cookies, "sb-access-token").unwrap().contains("Max-Age=0"));
    assert!(set_cookie(&cookies, "sb-refresh-token").unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn session_endpoint_is_401_without_cookies() {
    let app = TestApp::new(FakeAuth::default());

    let response = app.router.oneshot(get("/api/auth/session", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_endpoint_returns_user() {
    let auth = FakeAuth::default().with_user("good", user("artist@example.com", Some("admin")));
    let app = TestApp::new(auth);

    let response = app
        .router
        .oneshot(get("/api/auth/session", Some("sb-access-token=good")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["user"]["role"], "admin");
}
