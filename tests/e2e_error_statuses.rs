// tests/e2e_error_statuses.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use tower::util::ServiceExt as _;

mod support;

use support::{TestApp, assert_error_response, json_body};

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = TestApp::spawn().await;
    let response = app.request(Method::GET, "/nope", None, None).await;
    assert_error_response(response, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn malformed_json_body_is_bad_request() {
    let app = TestApp::spawn().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn non_numeric_path_id_is_bad_request() {
    let app = TestApp::spawn().await;
    let (_, token) = app.sign_up("Ana", "ana@x.com").await;
    let response = app
        .request(Method::GET, "/user/abc", Some(&token), None)
        .await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn health_reports_database() {
    let app = TestApp::spawn().await;
    let response = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::spawn().await;
    let response = app.request(Method::GET, "/openapi.json", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["paths"]["/messages/contacts"].is_object());
}
