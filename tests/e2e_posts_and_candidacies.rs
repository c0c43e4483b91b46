// tests/e2e_posts_and_candidacies.rs
use axum::http::{Method, StatusCode};
use chrono::Duration;
use serde_json::json;

mod support;

use support::{TestApp, assert_error_response};

#[tokio::test]
async fn feed_is_newest_first_and_respects_limit() {
    let app = TestApp::spawn().await;
    let (a, token) = app.sign_up("Ana", "ana@x.com").await;

    let first = app.create_post(&token, "first").await;
    app.clock.advance(Duration::seconds(5));
    let second = app.create_post(&token, "second").await;

    let (status, body) = app.get("/posts", &token).await;
    assert_eq!(status, StatusCode::OK);
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts[0]["id"], second);
    assert_eq!(posts[1]["id"], first);
    assert_eq!(posts[0]["user_id"], a);
    assert_eq!(posts[0]["nome"], "Ana");
    assert_eq!(posts[0]["titulo"], "second");

    let (_, body) = app.get("/posts?limit=1", &token).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 1);

    let (_, body) = app.get(&format!("/user/{a}/posts"), &token).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_post_rejects_blank_fields() {
    let app = TestApp::spawn().await;
    let (_, token) = app.sign_up("Ana", "ana@x.com").await;

    let response = app
        .request(
            Method::POST,
            "/posts",
            Some(&token),
            Some(json!({ "titulo": "  ", "texto": "body" })),
        )
        .await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;

    let response = app
        .request(Method::POST, "/posts", Some(&token), Some(json!({ "titulo": "t" })))
        .await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn candidacy_lifecycle() {
    let app = TestApp::spawn().await;
    let (_, owner) = app.sign_up("Ana", "ana@x.com").await;
    let (applicant_id, applicant) = app.sign_up("Bruno", "bruno@x.com").await;
    let post_id = app.create_post(&owner, "need a drummer").await;

    let (status, body) = app
        .post(&format!("/candidatar/{post_id}"), &applicant, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["candidatura"]["status"], "pending");
    let candidacy_id = body["candidatura"]["id"].as_i64().unwrap();

    let (_, body) = app.get("/candidaturas_recebidas", &owner).await;
    let received = body["candidaturas"].as_array().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["candidato"]["id"], applicant_id);
    assert_eq!(received[0]["post"]["titulo"], "need a drummer");

    let (status, body) = app
        .post(&format!("/candidaturas/{candidacy_id}/aceitar"), &owner, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["candidatura"]["status"], "accepted");

    let (_, body) = app.get("/candidaturas?status=pending", &owner).await;
    assert!(body["candidaturas"].as_array().unwrap().is_empty());
    let (_, body) = app.get("/candidaturas?status=accepted", &owner).await;
    assert_eq!(body["candidaturas"].as_array().unwrap().len(), 1);

    let (_, body) = app
        .post(&format!("/candidaturas/{candidacy_id}/rejeitar"), &owner, None)
        .await;
    assert_eq!(body["candidatura"]["status"], "rejected");
}

#[tokio::test]
async fn candidacy_rules_map_to_statuses() {
    let app = TestApp::spawn().await;
    let (_, owner) = app.sign_up("Ana", "ana@x.com").await;
    let (_, applicant) = app.sign_up("Bruno", "bruno@x.com").await;
    let post_id = app.create_post(&owner, "need a drummer").await;

    let response = app
        .request(Method::POST, &format!("/candidatar/{post_id}"), Some(&owner), None)
        .await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;

    let response = app
        .request(Method::POST, "/candidatar/9999", Some(&applicant), None)
        .await;
    assert_error_response(response, StatusCode::NOT_FOUND, "Not Found").await;

    let (_, body) = app
        .post(&format!("/candidatar/{post_id}"), &applicant, None)
        .await;
    let candidacy_id = body["candidatura"]["id"].as_i64().unwrap();

    let response = app
        .request(
            Method::POST,
            &format!("/candidatar/{post_id}"),
            Some(&applicant),
            None,
        )
        .await;
    assert_error_response(response, StatusCode::CONFLICT, "Conflict").await;

    let response = app
        .request(
            Method::POST,
            &format!("/candidaturas/{candidacy_id}/aceitar"),
            Some(&applicant),
            None,
        )
        .await;
    assert_error_response(response, StatusCode::FORBIDDEN, "Forbidden").await;

    let response = app
        .request(
            Method::POST,
            &format!("/candidaturas/{candidacy_id}/talvez"),
            Some(&owner),
            None,
        )
        .await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;

    let response = app
        .request(Method::POST, "/candidaturas/9999/aceitar", Some(&owner), None)
        .await;
    assert_error_response(response, StatusCode::NOT_FOUND, "Not Found").await;

    // refused resolutions leave the candidacy untouched
    let (_, body) = app.get("/candidaturas_recebidas", &owner).await;
    let received = body["candidaturas"].as_array().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["id"], candidacy_id);
    assert_eq!(received[0]["status"], "pending");
}
