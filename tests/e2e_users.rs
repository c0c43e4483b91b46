// tests/e2e_users.rs
use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

mod support;

use support::{TestApp, assert_error_response};

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|user| user["id"].as_i64().unwrap())
        .collect()
}

async fn follow_rows(app: &TestApp) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows")
        .fetch_one(app.pool.as_ref())
        .await
        .unwrap()
}

#[tokio::test]
async fn follow_then_unfollow_updates_both_lists() {
    let app = TestApp::spawn().await;
    let (a, token_a) = app.sign_up("Ana", "ana@x.com").await;
    let (b, token_b) = app.sign_up("Bruno", "bruno@x.com").await;

    let (status, _) = app.post(&format!("/follow/{b}"), &token_a, None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/followers/{b}"), &token_b).await;
    assert_eq!(ids(&body["followers"]), vec![a]);
    let (_, body) = app.get(&format!("/following/{a}"), &token_b).await;
    assert_eq!(ids(&body["following"]), vec![b]);
    let (_, body) = app.get("/api/me/following", &token_a).await;
    assert_eq!(ids(&body["following"]), vec![b]);

    let (_, body) = app.get(&format!("/user/{b}"), &token_a).await;
    assert_eq!(body["user"]["is_following"], true);
    assert_eq!(body["user"]["followers_count"], 1);
    assert_eq!(body["user"]["following_count"], 0);

    let (status, _) = app.post(&format!("/unfollow/{b}"), &token_a, None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get(&format!("/followers/{b}"), &token_b).await;
    assert!(ids(&body["followers"]).is_empty());
}

#[tokio::test]
async fn follow_edge_cases_map_to_statuses() {
    let app = TestApp::spawn().await;
    let (a, token_a) = app.sign_up("Ana", "ana@x.com").await;
    let (b, _) = app.sign_up("Bruno", "bruno@x.com").await;

    let response = app
        .request(Method::POST, &format!("/follow/{a}"), Some(&token_a), None)
        .await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;

    let response = app
        .request(Method::POST, "/follow/9999", Some(&token_a), None)
        .await;
    assert_error_response(response, StatusCode::NOT_FOUND, "Not Found").await;

    app.post(&format!("/follow/{b}"), &token_a, None).await;
    let response = app
        .request(Method::POST, &format!("/follow/{b}"), Some(&token_a), None)
        .await;
    assert_error_response(response, StatusCode::CONFLICT, "Conflict").await;

    assert_eq!(follow_rows(&app).await, 1);

    app.post(&format!("/unfollow/{b}"), &token_a, None).await;
    assert_eq!(follow_rows(&app).await, 0);
    let response = app
        .request(Method::POST, &format!("/unfollow/{b}"), Some(&token_a), None)
        .await;
    assert_error_response(response, StatusCode::CONFLICT, "Conflict").await;
    assert_eq!(follow_rows(&app).await, 0);
}

#[tokio::test]
async fn follower_lists_of_unknown_user_are_not_found() {
    let app = TestApp::spawn().await;
    let (_, token) = app.sign_up("Ana", "ana@x.com").await;

    for uri in ["/followers/404", "/following/404", "/user/404", "/user/404/posts"] {
        let response = app.request(Method::GET, uri, Some(&token), None).await;
        assert_error_response(response, StatusCode::NOT_FOUND, "Not Found").await;
    }
}

#[tokio::test]
async fn search_matches_name_or_email_and_skips_the_caller() {
    let app = TestApp::spawn().await;
    let (_, token) = app.sign_up("Ana Souza", "ana@x.com").await;
    let (b, _) = app.sign_up("Mariana", "mari@x.com").await;
    let (c, _) = app.sign_up("Carlos", "carlos.ana@x.com").await;
    app.sign_up("Diego", "diego@x.com").await;

    let (status, body) = app.get("/search_users?q=ana", &token).await;
    assert_eq!(status, StatusCode::OK);
    let mut found = ids(&body["users"]);
    found.sort_unstable();
    assert_eq!(found, vec![b, c]);

    let (_, body) = app.get("/search_users?query=diego", &token).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 1);

    let (_, body) = app.get("/search_users?q=%20%20", &token).await;
    assert!(ids(&body["users"]).is_empty());

    let (_, body) = app.get("/search_users?q=%25", &token).await;
    assert!(ids(&body["users"]).is_empty());
}

#[tokio::test]
async fn profile_fields_update_independently() {
    let app = TestApp::spawn().await;
    let (id, token) = app.sign_up("Ana", "ana@x.com").await;

    let (status, body) = app
        .call(
            Method::PUT,
            "/user/me/descricao",
            Some(&token),
            Some(json!({ "descricao": "  bassist  " })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["descricao"], "bassist");

    let (_, body) = app
        .call(
            Method::PUT,
            "/user/me/links",
            Some(&token),
            Some(json!({ "links": "https://band.example" })),
        )
        .await;
    assert_eq!(body["user"]["links"], "https://band.example");
    assert_eq!(body["user"]["descricao"], "bassist");

    let (_, body) = app
        .call(
            Method::PUT,
            "/user/me/profile_pic",
            Some(&token),
            Some(json!({ "profile_pic_url": "https://img.example/ana.png" })),
        )
        .await;
    assert_eq!(body["user"]["profile_pic_url"], "https://img.example/ana.png");

    let (_, body) = app
        .call(
            Method::PUT,
            "/user/me/profile_pic",
            Some(&token),
            Some(json!({ "profile_pic_url": "" })),
        )
        .await;
    assert_eq!(
        body["user"]["profile_pic_url"],
        format!("https://i.pravatar.cc/150?u={id}")
    );

    let response = app
        .request(Method::PUT, "/user/me/links", Some(&token), Some(json!({})))
        .await;
    assert_error_response(response, StatusCode::BAD_REQUEST, "Bad Request").await;
}
