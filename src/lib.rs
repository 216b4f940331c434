//! # pic2map
//!
//! Display the location of geotagged pictures in an interactive map.
//!
//! The crate explores a directory tree for JPEG pictures, extracts their GPS
//! EXIF tags, stores the locations in a SQLite database and renders them as
//! clustered markers on a Leaflet map served over HTTP.

pub mod core;
pub mod data;
pub mod layers;
pub mod photos;
pub mod rendering;
pub mod storage;
pub mod ui;

#[cfg(feature = "server")]
pub mod server;

pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::AppConfig,
    geo::LatLng,
    map::{Map, MapOptions},
};

pub use layers::{
    base::LayerTrait, cluster::MarkerClusterGroup, marker::Marker, tile::TileLayer,
};

pub use ui::popup::Popup;

pub use rendering::{context::RenderContext, page::render_page};

pub use data::location::{LocationRow, PhotoLocation};

pub use photos::{explorer::TreeExplorer, gps::GpsMetadata};

pub use storage::location_db::LocationDb;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Pic2MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Datetime parse error: {0}")]
    Datetime(#[from] chrono::ParseError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] globwalk::GlobError),

    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid GPS metadata: {0}")]
    InvalidMetadata(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = Pic2MapError;
