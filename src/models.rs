//! Data model for the address book
//! These types map directly to the `addresses` SQLite table

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stored postal address with geocoordinates
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Address {
    /// Unique identifier (auto-increment)
    pub id: i64,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Display name of the location
    pub name: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or region
    pub state: String,
    /// Postal code
    pub zip_code: String,
}

/// Request payload for creating or replacing an address.
///
/// All fields are required. Coordinate ranges are intentionally not
/// enforced; any float is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddressCreate {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl AddressCreate {
    /// Attach a storage-assigned id to this payload
    #[must_use]
    pub fn with_id(self, id: i64) -> Address {
        Address {
            id,
            latitude: self.latitude,
            longitude: self.longitude,
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
        }
    }
}
