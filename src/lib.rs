//! Address book - a minimal CRUD REST service for postal addresses
//! with geocoordinates.
//!
//! This library provides the address data model, SQLite persistence,
//! the HTTP API layer, and the generated OpenAPI documentation.

pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use config::AddressBookConfig;
pub use db::Database;
pub use error::AddressBookError;
pub use models::{Address, AddressCreate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AddressBookError>;
