//! HTTP API layer: route handlers for the address CRUD operations

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::Database;
use crate::error::AddressBookError;
use crate::models::{Address, AddressCreate};

/// Shared state handed to every handler
pub type AppState = Arc<Database>;

/// Confirmation body returned by a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    /// Id of the removed address
    pub id: i64,
    pub deleted: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/addresses/", get(list_addresses).post(create_address))
        .route(
            "/addresses/{id}",
            get(get_address).put(update_address).delete(delete_address),
        )
        .with_state(state)
}

/// Unwrap the JSON extractor, turning a rejection into a validation
/// error that names the offending field.
fn validated(
    payload: Result<Json<AddressCreate>, JsonRejection>,
) -> Result<AddressCreate, AddressBookError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(AddressBookError::validation(rejection.body_text())),
    }
}

/// Create a new address
#[utoipa::path(
    post,
    path = "/addresses/",
    request_body = AddressCreate,
    responses(
        (status = 201, description = "Address created", body = Address),
        (status = 422, description = "Malformed payload", body = crate::error::ErrorBody),
    ),
    tag = "addresses"
)]
pub(crate) async fn create_address(
    State(db): State<AppState>,
    payload: Result<Json<AddressCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Address>), AddressBookError> {
    let payload = validated(payload)?;
    let address = db.insert_address(payload).await?;
    tracing::debug!(id = address.id, "created address");
    Ok((StatusCode::CREATED, Json(address)))
}

/// Get a list of all addresses
#[utoipa::path(
    get,
    path = "/addresses/",
    responses(
        (status = 200, description = "All stored addresses", body = [Address]),
    ),
    tag = "addresses"
)]
pub(crate) async fn list_addresses(
    State(db): State<AppState>,
) -> Result<Json<Vec<Address>>, AddressBookError> {
    let addresses = db.get_all_addresses().await?;
    Ok(Json(addresses))
}

/// Get a single address by id
#[utoipa::path(
    get,
    path = "/addresses/{id}",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 200, description = "The requested address", body = Address),
        (status = 404, description = "Address not found", body = crate::error::ErrorBody),
    ),
    tag = "addresses"
)]
pub(crate) async fn get_address(
    State(db): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Address>, AddressBookError> {
    let address = db.get_address(id).await?;
    Ok(Json(address))
}

/// Update an address by id, overwriting all mutable fields
#[utoipa::path(
    put,
    path = "/addresses/{id}",
    params(("id" = i64, Path, description = "Address id")),
    request_body = AddressCreate,
    responses(
        (status = 200, description = "The updated address", body = Address),
        (status = 404, description = "Address not found", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed payload", body = crate::error::ErrorBody),
    ),
    tag = "addresses"
)]
pub(crate) async fn update_address(
    State(db): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<AddressCreate>, JsonRejection>,
) -> Result<Json<Address>, AddressBookError> {
    let payload = validated(payload)?;
    let address = db.update_address(id, payload).await?;
    tracing::debug!(id, "updated address");
    Ok(Json(address))
}

/// Delete an address by id
#[utoipa::path(
    delete,
    path = "/addresses/{id}",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address deleted", body = DeleteConfirmation),
        (status = 404, description = "Address not found", body = crate::error::ErrorBody),
    ),
    tag = "addresses"
)]
pub(crate) async fn delete_address(
    State(db): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, AddressBookError> {
    db.delete_address(id).await?;
    tracing::debug!(id, "deleted address");
    Ok(Json(DeleteConfirmation { id, deleted: true }))
}
