pub mod explorer;
pub mod gps;

pub use explorer::TreeExplorer;
pub use gps::{filter_gps_metadata, read_gps_metadata, GpsMetadata};
