// tests/e2e_concurrency.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::TestApp;

#[tokio::test]
async fn concurrent_duplicate_registrations_admit_exactly_one() {
    let app = TestApp::spawn().await;
    let payload = json!({ "nome": "Ana", "email": "ana@x.com", "senha": support::PASSWORD });

    let (first, second) = tokio::join!(
        app.request(Method::POST, "/register", None, Some(payload.clone())),
        app.request(Method::POST, "/register", None, Some(payload.clone())),
    );

    let mut statuses = [first.status(), second.status()];
    statuses.sort_by_key(|status| status.as_u16());
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[tokio::test]
async fn concurrent_duplicate_follows_leave_one_edge() {
    let app = TestApp::spawn().await;
    let (_, token) = app.sign_up("Ana", "ana@x.com").await;
    let (b, _) = app.sign_up("Bruno", "bruno@x.com").await;
    let uri = format!("/follow/{b}");

    let (first, second) = tokio::join!(
        app.request(Method::POST, &uri, Some(&token), None),
        app.request(Method::POST, &uri, Some(&token), None),
    );
    let mut statuses = [first.status(), second.status()];
    statuses.sort_by_key(|status| status.as_u16());
    assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);

    let (_, body) = app.get(&format!("/followers/{b}"), &token).await;
    assert_eq!(body["followers"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_duplicate_applications_admit_exactly_one() {
    let app = TestApp::spawn().await;
    let (_, owner) = app.sign_up("Ana", "ana@x.com").await;
    let (_, applicant) = app.sign_up("Bruno", "bruno@x.com").await;
    let post_id = app.create_post(&owner, "need a drummer").await;
    let uri = format!("/candidatar/{post_id}");

    let (first, second) = tokio::join!(
        app.request(Method::POST, &uri, Some(&applicant), None),
        app.request(Method::POST, &uri, Some(&applicant), None),
    );
    let mut statuses = [first.status(), second.status()];
    statuses.sort_by_key(|status| status.as_u16());
    assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);

    let (_, body) = app.get("/candidaturas_recebidas", &owner).await;
    assert_eq!(body["candidaturas"].as_array().unwrap().len(), 1);
}
