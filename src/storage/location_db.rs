//! SQLite database of picture locations.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{core::config::DatabaseConfig, data::location::LocationRow, Result};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS location (
    filename TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    datetime TEXT
)";

/// Location database
///
/// Stores one row per picture with its signed coordinates and, when known,
/// the GPS datetime. The file and its parent directory are created on open.
#[derive(Debug, Clone)]
pub struct LocationDb {
    path: PathBuf,
    pool: SqlitePool,
}

impl LocationDb {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        debug!("Connecting to SQLite database: {:?}", path);
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;

        Ok(Self { path, pool })
    }

    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::open(&config.path).await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts all rows in a single transaction.
    pub async fn insert(&self, rows: &[LocationRow]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for row in rows {
            inserted += sqlx::query(
                "INSERT INTO location (filename, latitude, longitude, datetime) VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(&row.filename)
            .bind(row.latitude)
            .bind(row.longitude)
            .bind(row.datetime)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        info!("{} rows inserted into the location database", inserted);
        Ok(inserted)
    }

    /// All rows in insertion order.
    pub async fn select_all(&self) -> Result<Vec<LocationRow>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            "SELECT filename, latitude, longitude, datetime FROM location ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Deletes the rows of every picture under `directory` and returns how
    /// many were removed. Sibling directories sharing a name prefix are
    /// left alone.
    pub async fn delete(&self, directory: &str) -> Result<u64> {
        let directory = directory.trim_end_matches('/');
        let deleted = sqlx::query(
            "DELETE FROM location
             WHERE filename = ?1 OR substr(filename, 1, length(?1) + 1) = ?1 || '/'",
        )
        .bind(directory)
        .execute(&self.pool)
        .await?
        .rows_affected();

        info!("{} rows removed from the location database", deleted);
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM location")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    pub async fn close(self) {
        debug!("Disconnecting from SQLite database: {:?}", self.path);
        self.pool.close().await;
    }
}
