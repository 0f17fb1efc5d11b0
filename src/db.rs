//! Persistence layer for the address book
//! Uses SQLite via sqlx; every operation issues exactly one SQL statement

use std::path::Path;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::instrument;

use crate::models::{Address, AddressCreate};
use crate::{AddressBookError, Result};

/// Run database migrations to create/update schema
async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS addresses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            zip_code TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_addresses_name ON addresses(name);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Database connection pool wrapper
#[derive(Debug)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create and initialize the database at the given file path
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
        Self::connect(&db_url, 5).await
    }

    /// Create an in-memory database, used by tests.
    /// A single connection, since every in-memory connection is its own database.
    pub async fn open_in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    async fn connect(db_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(db_url)
            .await?;

        // WAL keeps concurrent reads from blocking on writes
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await?;

        run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Insert a new address and return it with the generated id
    #[instrument(skip(self, payload))]
    pub async fn insert_address(&self, payload: AddressCreate) -> Result<Address> {
        let result = sqlx::query(
            r#"
            INSERT INTO addresses (latitude, longitude, name, address, city, state, zip_code)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(payload.latitude)
        .bind(payload.longitude)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.city)
        .bind(&payload.state)
        .bind(&payload.zip_code)
        .execute(&self.pool)
        .await?;

        Ok(payload.with_id(result.last_insert_rowid()))
    }

    /// Get an address by id
    #[instrument(skip(self))]
    pub async fn get_address(&self, id: i64) -> Result<Address> {
        sqlx::query_as::<_, Address>("SELECT * FROM addresses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AddressBookError::NotFound { id })
    }

    /// Get all addresses in storage-default order
    #[instrument(skip(self))]
    pub async fn get_all_addresses(&self) -> Result<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>("SELECT * FROM addresses")
            .fetch_all(&self.pool)
            .await?;
        Ok(addresses)
    }

    /// Overwrite all mutable fields of an address and return the updated row
    #[instrument(skip(self, payload))]
    pub async fn update_address(&self, id: i64, payload: AddressCreate) -> Result<Address> {
        let result = sqlx::query(
            r#"
            UPDATE addresses
            SET latitude = ?, longitude = ?, name = ?, address = ?, city = ?, state = ?, zip_code = ?
            WHERE id = ?
            "#,
        )
        .bind(payload.latitude)
        .bind(payload.longitude)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.city)
        .bind(&payload.state)
        .bind(&payload.zip_code)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AddressBookError::NotFound { id });
        }

        Ok(payload.with_id(id))
    }

    /// Delete an address by id
    #[instrument(skip(self))]
    pub async fn delete_address(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AddressBookError::NotFound { id });
        }

        Ok(())
    }
}
