//! Integration tests for the address CRUD API
//!
//! These drive the real router against an in-memory SQLite database,
//! covering every route and both error kinds.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use address_book::{Database, web};

async fn test_app() -> Router {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to open in-memory database");
    web::app(Arc::new(db))
}

fn sample_payload() -> Value {
    json!({
        "latitude": 40.7128,
        "longitude": -74.0060,
        "name": "Sample Address",
        "address": "123 Main St",
        "city": "Sample City",
        "state": "Sample State",
        "zip_code": "12345"
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_sample(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/addresses/", &sample_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_create_returns_record_with_assigned_id() {
    let app = test_app().await;

    let created = create_sample(&app).await;

    assert!(created["id"].is_i64());
    assert_eq!(created["latitude"], json!(40.7128));
    assert_eq!(created["longitude"], json!(-74.0060));
    assert_eq!(created["name"], "Sample Address");
    assert_eq!(created["address"], "123 Main St");
    assert_eq!(created["city"], "Sample City");
    assert_eq!(created["state"], "Sample State");
    assert_eq!(created["zip_code"], "12345");
}

#[tokio::test]
async fn test_create_missing_field_is_validation_error() {
    let app = test_app().await;

    let mut payload = sample_payload();
    payload.as_object_mut().unwrap().remove("city");

    let response = app
        .clone()
        .oneshot(json_request("POST", "/addresses/", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation");
    assert!(body["detail"].as_str().unwrap().contains("city"));

    // No row was persisted
    let response = app.oneshot(get_request("/addresses/")).await.unwrap();
    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_mistyped_field_is_validation_error() {
    let app = test_app().await;

    let mut payload = sample_payload();
    payload["latitude"] = json!("not a number");

    let response = app
        .oneshot(json_request("POST", "/addresses/", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_returns_exactly_what_was_submitted() {
    let app = test_app().await;
    let created = create_sample(&app).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(get_request(&format!("/addresses/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_nonexistent_is_not_found() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/addresses/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert!(body["detail"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_list_returns_all_rows() {
    let app = test_app().await;
    create_sample(&app).await;
    create_sample(&app).await;
    create_sample(&app).await;

    let response = app.oneshot(get_request("/addresses/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_replaces_all_mutable_fields() {
    let app = test_app().await;
    let created = create_sample(&app).await;
    let id = created["id"].as_i64().unwrap();

    let replacement = json!({
        "latitude": 51.5074,
        "longitude": -0.1278,
        "name": "Updated Address",
        "address": "456 Other St",
        "city": "Other City",
        "state": "Other State",
        "zip_code": "67890"
    });

    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/addresses/{id}"), &replacement))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["name"], "Updated Address");

    // Subsequent fetch reflects the update exactly
    let response = app
        .oneshot(get_request(&format!("/addresses/{id}")))
        .await
        .unwrap();
    let fetched = body_json(response).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_nonexistent_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("PUT", "/addresses/42", &sample_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_malformed_payload_is_validation_error() {
    let app = test_app().await;
    let created = create_sample(&app).await;
    let id = created["id"].as_i64().unwrap();

    let mut payload = sample_payload();
    payload.as_object_mut().unwrap().remove("zip_code");

    let response = app
        .oneshot(json_request("PUT", &format!("/addresses/{id}"), &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let app = test_app().await;
    let created = create_sample(&app).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/addresses/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let confirmation = body_json(response).await;
    assert_eq!(confirmation["id"], json!(id));
    assert_eq!(confirmation["deleted"], json!(true));

    // Subsequent fetch is a 404
    let response = app
        .oneshot(get_request(&format!("/addresses/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/addresses/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_out_of_range_coordinates_are_accepted() {
    // Coordinate ranges are intentionally unchecked
    let app = test_app().await;

    let mut payload = sample_payload();
    payload["latitude"] = json!(400.0);
    payload["longitude"] = json!(-720.5);

    let response = app
        .oneshot(json_request("POST", "/addresses/", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["latitude"], json!(400.0));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let response = app
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert!(doc.get("openapi").is_some());
    assert!(doc["paths"].get("/addresses/").is_some());
}

#[tokio::test]
async fn test_docs_page_is_served() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/docs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&bytes);
    assert!(html.contains("swagger-ui"));
}
