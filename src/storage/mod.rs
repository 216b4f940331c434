//! Persistent storage for picture locations.

pub mod location_db;

pub use location_db::LocationDb;
