use crate::e2e::helpers;

use helpers::{api_path, TestContext, TEST_TOKEN};
use httpmock::prelude::*;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_food_search_with_renamed_params(ctx: &TestContext) {
    let upstream = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/foods/search/v3"))
                .header("authorization", format!("Bearer {}", TEST_TOKEN))
                .query_param("search_expression", "toast")
                .query_param("page_number", "3")
                .query_param("max_results", "10")
                .query_param("format", "json");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"foods_search":{"max_results":"10","total_results":"1","page_number":"3"}}"#);
        })
        .await;

    let response = ctx
        .client
        .get("/api/foods/search?q=toast&page=3&max_results=10")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json(),
        &json!({"foods_search":{"max_results":"10","total_results":"1","page_number":"3"}})
    );
    upstream.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_search_without_query_before_calling_upstream(ctx: &TestContext) {
    let upstream = ctx
        .server
        .mock_async(|when, then| {
            when.path(api_path("/foods/search/v3"));
            then.status(200).body("{}");
        })
        .await;

    let response = ctx.client.get("/api/foods/search").await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Missing required parameter: q");
    upstream.assert_calls_async(0).await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_cap_search_max_results_at_fifty(ctx: &TestContext) {
    let upstream = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/foods/search/v3"))
                .query_param("max_results", "50");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"foods_search":{}}"#);
        })
        .await;

    let response = ctx
        .client
        .get("/api/foods/search?q=rice&max_results=100")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    upstream.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_numbers(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/foods/search?q=rice&page=first")
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json().get("message").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_barcode_length(ctx: &TestContext) {
    let upstream = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/food/barcode/find-by-id/v2"))
                .query_param("barcode", "0041570054161");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"food_id":{"value":"4949432"}}"#);
        })
        .await;

    for barcode in ["004157005416", "00415700541612"] {
        let response = ctx
            .client
            .get(&format!("/api/foods/barcode?barcode={}", barcode))
            .await
            .unwrap();
        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("13 digits");
    }

    let response = ctx
        .client
        .get("/api/foods/barcode?barcode=0041570054161")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["food_id"]["value"], "4949432");
    upstream.assert_calls_async(1).await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_relay_upstream_not_found_unchanged(ctx: &TestContext) {
    let error_body = r#"{"error":{"code":106,"message":"Invalid ID: food_id '999' does not exist"}}"#;
    ctx.server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/food/v4"))
                .query_param("food_id", "999");
            then.status(404)
                .header("content-type", "application/json")
                .body(error_body);
        })
        .await;

    let response = ctx.client.get("/api/foods/details?food_id=999").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json(),
        &serde_json::from_str::<serde_json::Value>(error_body).unwrap()
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_autocomplete_with_cap(ctx: &TestContext) {
    let upstream = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/food/autocomplete/v2"))
                .query_param("expression", "chic")
                .query_param("max_results", "10");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"suggestions":{"suggestion":["chicken","chickpeas"]}}"#);
        })
        .await;

    let response = ctx
        .client
        .get("/api/foods/autocomplete?q=chic&max_results=40")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["suggestions"]["suggestion"][1], "chickpeas");
    upstream.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_brands_with_default_type(ctx: &TestContext) {
    let upstream = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/brands/v2"))
                .query_param("starts_with", "K")
                .query_param("brand_type", "manufacturer");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"food_brands":{"food_brand":["Kellogg's"]}}"#);
        })
        .await;

    let response = ctx.client.get("/api/foods/brands?starts_with=K").await.unwrap();

    response.assert_status(StatusCode::OK);
    upstream.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_categories_and_sub_categories(ctx: &TestContext) {
    let categories = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/food-categories/v2"))
                .query_param("region", "UK");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"food_categories":{"food_category":[]}}"#);
        })
        .await;
    let sub_categories = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/food-sub-categories/v2"))
                .query_param("food_category_id", "2");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"food_sub_categories":{"food_sub_category":["Cheese"]}}"#);
        })
        .await;

    ctx.client
        .get("/api/foods/categories?region=UK")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    ctx.client
        .get("/api/foods/sub-categories?food_category_id=2")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    ctx.client
        .get("/api/foods/sub-categories")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);

    categories.assert_async().await;
    sub_categories.assert_calls_async(1).await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_post_natural_language_input(ctx: &TestContext) {
    let upstream = ctx
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/natural-language-processing/v1"))
                .header("authorization", format!("Bearer {}", TEST_TOKEN))
                .body_includes(r#""user_input":"two eggs and a coffee""#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"food_response":[{"food_id":3092}]}"#);
        })
        .await;

    let response = ctx
        .client
        .post(
            "/api/foods/natural-language",
            &json!({ "user_input": "two eggs and a coffee", "region": "US" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["food_response"][0]["food_id"], 3092);
    upstream.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_image_recognition_without_image(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/foods/image-recognition", &json!({ "region": "US" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("image_b64");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json_bodies(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/api/foods/natural-language", "{not json")
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json().get("message").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_image_recognition(ctx: &TestContext) {
    let upstream = ctx
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/image-recognition/v2"))
                .body_includes(r#""image_b64":"aGVsbG8=""#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"food_response":[]}"#);
        })
        .await;

    let response = ctx
        .client
        .post(
            "/api/foods/image-recognition",
            &json!({ "image_b64": "aGVsbG8=", "include_food_attributes": true }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    upstream.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_relay_upstream_body_byte_for_byte(ctx: &TestContext) {
    let raw = r#"{"zeta":1,"alpha":{"price":1.50}}"#;
    ctx.server
        .mock_async(|when, then| {
            when.method(GET)
                .path(api_path("/food/v4"))
                .query_param("food_id", "42");
            then.status(200)
                .header("content-type", "application/json")
                .body(raw);
        })
        .await;

    let response = ctx.client.get("/api/foods/details?food_id=42").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(String::from_utf8(response.body_bytes.clone()).unwrap(), raw);
    assert_eq!(
        response.header("content-type").map(String::as_str),
        Some("application/json")
    );
}
