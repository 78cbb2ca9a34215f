use crate::e2e::helpers;

use helpers::{
    api_path, mock_token_endpoint, spawn_app, test_config, unreachable_url, TestContext,
    TOKEN_PATH,
};
use httpmock::prelude::*;
use hyper::StatusCode;
use test_context::test_context;

const GENERIC_MESSAGE: &str = "Internal server error";

#[tokio::test]
async fn it_should_return_generic_500_on_network_failure() {
    let server = MockServer::start_async().await;
    mock_token_endpoint(&server).await;
    let config = test_config(&server.url(TOKEN_PATH), &unreachable_url().await);
    let client = spawn_app(&config).await;

    let response = client.get("/api/foods/search?q=apple").await.unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), &serde_json::json!({ "message": GENERIC_MESSAGE }));
}

#[tokio::test]
async fn it_should_hide_rejected_credentials_behind_generic_500() {
    let server = MockServer::start_async().await;
    let oauth = server
        .mock_async(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(401)
                .header("content-type", "application/json")
                .body(r#"{"error":"invalid_client"}"#);
        })
        .await;
    let upstream = server
        .mock_async(|when, then| {
            when.path(api_path("/food/v4"));
            then.status(200).body("{}");
        })
        .await;
    let config = test_config(&server.url(TOKEN_PATH), &server.url("/rest"));
    let client = spawn_app(&config).await;

    let response = client.get("/api/foods/details?food_id=1").await.unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), &serde_json::json!({ "message": GENERIC_MESSAGE }));
    let raw = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert!(!raw.contains("invalid_client"));
    oauth.assert_async().await;
    upstream.assert_calls_async(0).await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_generic_500_when_upstream_body_is_not_json(ctx: &TestContext) {
    ctx.server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/recipe-types/v2"));
            then.status(503).body("<html>Service Unavailable</html>");
        })
        .await;

    let response = ctx.client.get("/api/recipes/types").await.unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message(GENERIC_MESSAGE);
}

#[tokio::test]
async fn it_should_reuse_one_token_across_requests() {
    let server = MockServer::start_async().await;
    let oauth = server
        .mock_async(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"access_token":"shared","expires_in":86400}"#);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/food-categories/v2"))
                .header("authorization", "Bearer shared");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"food_categories":{}}"#);
        })
        .await;
    let config = test_config(&server.url(TOKEN_PATH), &server.url("/rest"));
    let client = spawn_app(&config).await;

    for _ in 0..3 {
        client
            .get("/api/foods/categories")
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    oauth.assert_calls_async(1).await;
}
