//! Generated OpenAPI document and the interactive docs page

use axum::{Router, response::Html, response::Json, routing::get};
use serde_json::Value;
use utoipa::OpenApi;

use crate::api;
use crate::error::ErrorBody;
use crate::models::{Address, AddressCreate};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address Book API",
        description = "Minimal CRUD service for postal addresses with geocoordinates"
    ),
    paths(
        api::create_address,
        api::list_addresses,
        api::get_address,
        api::update_address,
        api::delete_address,
    ),
    components(schemas(Address, AddressCreate, api::DeleteConfirmation, ErrorBody)),
    tags((name = "addresses", description = "Address CRUD operations"))
)]
struct ApiDoc;

/// Interactive docs page; renders the OpenAPI document with Swagger UI
const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Address Book API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

pub fn router() -> Router {
    Router::new()
        .route("/docs", get(docs_page))
        .route("/api-docs/openapi.json", get(openapi_json))
}

async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

async fn openapi_json() -> Json<Value> {
    // The derive builds the document at compile time; serialization
    // cannot fail for a static schema
    Json(serde_json::to_value(ApiDoc::openapi()).unwrap_or(Value::Null))
}
