// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for the HTTP surface, driving the router in-process
//! without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use all_units::api::router;
use all_units::units::UnitRegistry;

fn app() -> Router {
    router(Arc::new(UnitRegistry::new()))
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_convert_success_returns_plain_text() {
    let response = app()
        .oneshot(post_form("/convert", "value=10&from=kg&to=g"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "10000.000 g");
}

#[tokio::test]
async fn test_convert_temperature_through_form() {
    let response = app()
        .oneshot(post_form("/convert", "value=0&from=C&to=K"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "273.150 K");
}

#[tokio::test]
async fn test_convert_missing_field_is_json_error() {
    let response = app()
        .oneshot(post_form("/convert", "from=kg&to=g"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "All fields (value, from, to) are required");
}

#[tokio::test]
async fn test_convert_non_numeric_value_rejected() {
    let response = app()
        .oneshot(post_form("/convert", "value=ten&from=kg&to=g"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"], "Invalid value: must be a number");
}

#[tokio::test]
async fn test_convert_dimension_mismatch_rejected() {
    let response = app()
        .oneshot(post_form("/convert", "value=1&from=kg&to=m"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body["error"],
        "cannot convert between different dimensions: kg (mass) and m (length)"
    );
}

#[tokio::test]
async fn test_convert_rejects_get_with_405() {
    let response = app().oneshot(get("/convert")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Method not allowed. Please use POST.");
}

#[tokio::test]
async fn test_unit_info_known_unit() {
    let response = app().oneshot(get("/unit-info?unit=kg")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["symbol"], "kg");
    assert_eq!(body["name"], "Kilogram");
    assert_eq!(body["dimension"], "mass");
    assert_eq!(body["factor"], 1000.0);
}

#[tokio::test]
async fn test_unit_info_missing_and_unknown() {
    let response = app().oneshot(get("/unit-info")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app().oneshot(get("/unit-info?unit=parsec")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"], "Invalid unit symbol: parsec");
}

#[tokio::test]
async fn test_units_by_dimension_listing_is_sorted() {
    let response = app()
        .oneshot(get("/units-by-dimension?dimension=mass"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let units = body.as_array().expect("expected a JSON array");
    assert_eq!(units.len(), 6);
    assert_eq!(units[0]["symbol"], "mg");
    assert!(units.iter().any(|unit| unit["symbol"] == "kg"));
}

#[tokio::test]
async fn test_units_by_dimension_missing_and_unknown() {
    let response = app().oneshot(get("/units-by-dimension")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app()
        .oneshot(get("/units-by-dimension?dimension=charisma"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"], "Invalid dimension: charisma");
}

#[tokio::test]
async fn test_index_page_renders_with_registry_data() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("\"Kilogram\""));
    assert!(!page.contains("{{UNITS_DATA}}"));
    assert!(!page.contains("{{CURRENT_YEAR}}"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let response = app().oneshot(get("/static/style.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = app().oneshot(get("/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
