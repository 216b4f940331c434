//! Prelude module for common pic2map types and traits
//!
//! `use pic2map::prelude::*;` brings in everything needed to build and
//! render a location map.

pub use crate::core::{
    config::{AppConfig, DatabaseConfig, MapConfig, ServerConfig},
    geo::LatLng,
    map::{Map, MapOptions},
};

pub use crate::layers::{
    base::LayerTrait,
    cluster::{ClusterOptions, MarkerClusterGroup},
    manager::LayerManager,
    marker::Marker,
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::ui::popup::{Popup, PopupOptions};

pub use crate::rendering::{context::RenderContext, page::render_page};

pub use crate::data::location::{LocationRow, PhotoLocation};

pub use crate::photos::{filter_gps_metadata, read_gps_metadata, GpsMetadata, TreeExplorer};

pub use crate::storage::location_db::LocationDb;

#[cfg(feature = "server")]
pub use crate::server::{router, serve, AppState};

pub use crate::{Error as Pic2MapError, Result};
