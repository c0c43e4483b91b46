// tests/e2e_auth.rs
use axum::http::{Method, StatusCode};
use chrono::Duration;
use harmocrew_core::application::ports::security::PasswordHasher;
use serde_json::json;
use std::sync::Arc;

mod support;

use support::{RecordingPasswordHasher, TOKEN_TTL_SECONDS, TestApp, assert_error_response};

#[tokio::test]
async fn register_login_and_profile_round_trip() {
    let app = TestApp::spawn().await;
    let (id, token) = app.sign_up("Ana", "ana@x.com").await;

    let (status, body) = app.get("/profile", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], id);
    assert_eq!(body["user"]["nome"], "Ana");
    assert_eq!(body["user"]["last_login_at"], "2024-01-01T00:00:00Z");
    assert_eq!(
        body["user"]["profile_pic_url"],
        format!("https://i.pravatar.cc/150?u={id}")
    );
}

#[tokio::test]
async fn login_response_carries_token_and_expiry() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com").await;

    let (status, body) = app
        .call(
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "ana@x.com", "password": support::PASSWORD })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["expires_in"], TOKEN_TTL_SECONDS);
    assert_eq!(body["expires_at"], "2024-01-01T01:00:00Z");
    assert_eq!(body["user"]["email"], "ana@x.com");
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com").await;

    let response = app
        .request(
            Method::POST,
            "/register",
            None,
            Some(json!({ "nome": "Other", "email": "ana@x.com", "senha": "another-pass" })),
        )
        .await;
    assert_error_response(response, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn register_rejects_missing_and_invalid_fields() {
    let app = TestApp::spawn().await;

    for payload in [
        json!({ "email": "a@x.com", "senha": "long-enough" }),
        json!({ "nome": "Ana", "email": "not-an-email", "senha": "long-enough" }),
        json!({ "nome": "Ana", "email": "a@x.com", "senha": "short" }),
        json!({ "nome": "Ana", "email": "a@x.com" }),
    ] {
        let response = app
            .request(Method::POST, "/register", None, Some(payload.clone()))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{payload}");
    }
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_unauthorized() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com").await;

    for payload in [
        json!({ "email": "ana@x.com", "senha": "wrong-password" }),
        json!({ "email": "nobody@x.com", "senha": "wrong-password" }),
    ] {
        let response = app
            .request(Method::POST, "/login", None, Some(payload))
            .await;
        assert_error_response(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
    }
}

#[tokio::test]
async fn unknown_email_still_verifies_a_password() {
    let hasher = Arc::new(RecordingPasswordHasher::default());
    let app = TestApp::spawn_with_hasher(Arc::clone(&hasher) as Arc<dyn PasswordHasher>).await;
    app.register("Ana", "ana@x.com").await;

    let response = app
        .request(
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "nobody@x.com", "senha": support::PASSWORD })),
        )
        .await;
    assert_error_response(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
    assert_eq!(hasher.verified(), vec![hasher.decoy_hash().to_owned()]);

    app.login("ana@x.com").await;
    assert_eq!(hasher.verified().len(), 2);
}

#[tokio::test]
async fn login_without_password_is_bad_request() {
    let app = TestApp::spawn().await;
    let response = app
        .request(Method::POST, "/login", None, Some(json!({ "email": "a@x.com" })))
        .await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn token_is_valid_until_exactly_its_expiry() {
    let app = TestApp::spawn().await;
    let (_, token) = app.sign_up("Ana", "ana@x.com").await;

    app.clock.advance(Duration::seconds(TOKEN_TTL_SECONDS));
    let (status, _) = app.get("/profile", &token).await;
    assert_eq!(status, StatusCode::OK);

    app.clock.advance(Duration::seconds(1));
    let response = app.request(Method::GET, "/profile", Some(&token), None).await;
    assert_error_response(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = TestApp::spawn().await;
    let response = app.request(Method::GET, "/posts", None, None).await;
    assert_error_response(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn malformed_authorization_headers_are_unauthorized() {
    use axum::body::Body;
    use axum::http::{Request, header::AUTHORIZATION};
    use tower::util::ServiceExt as _;

    let app = TestApp::spawn().await;
    let (_, token) = app.sign_up("Ana", "ana@x.com").await;

    for header in [
        token.clone(),
        format!("Basic {token}"),
        format!("Bearer {token} extra"),
        "Bearer".to_string(),
    ] {
        let request = Request::builder()
            .uri("/profile")
            .header(AUTHORIZATION, header.as_str())
            .body(Body::empty())
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{header}");
    }

    let request = Request::builder()
        .uri("/profile")
        .header(AUTHORIZATION, format!("bEaReR {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn tampered_token_is_unauthorized() {
    let app = TestApp::spawn().await;
    let (_, token) = app.sign_up("Ana", "ana@x.com").await;

    let signature_start = token.rfind('.').unwrap() + 1;
    let first = token.as_bytes()[signature_start];
    let replacement = if first == b'A' { "B" } else { "A" };
    let mut forged = token.clone();
    forged.replace_range(signature_start..=signature_start, replacement);

    let response = app.request(Method::GET, "/profile", Some(&forged), None).await;
    assert_error_response(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn token_of_deleted_user_is_unauthorized() {
    let app = TestApp::spawn().await;
    let (id, token) = app.sign_up("Ana", "ana@x.com").await;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(app.pool.as_ref())
        .await
        .unwrap();

    let response = app.request(Method::GET, "/profile", Some(&token), None).await;
    assert_error_response(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}
