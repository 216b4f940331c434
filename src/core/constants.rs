//! Map defaults shared by the renderer, the configuration layer and the server.
//! Keeping them in a single place makes it easier to tweak them.

/// DOM element id the map canvas binds to.
pub const DEFAULT_CONTAINER_ID: &str = "map";

/// Initial center of the map view (Champaign county, Illinois).
pub const DEFAULT_CENTER: (f64, f64) = (40.2001925, -89.0876265);

/// Initial zoom level of the map view.
pub const DEFAULT_ZOOM: u8 = 3;

/// OpenStreetMap tile URL template (`{s}` subdomain, `{z}/{x}/{y}` tile).
pub const OSM_TILE_URL: &str = "http://{s}.tile.osm.org/{z}/{x}/{y}.png";

/// Attribution shown in the corner of the map for OpenStreetMap tiles.
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

/// Highest zoom level OpenStreetMap serves tiles for.
pub const OSM_MAX_ZOOM: u8 = 19;

/// Leaflet release loaded by the rendered page.
pub const LEAFLET_VERSION: &str = "1.9.4";

/// Leaflet.markercluster release loaded by the rendered page.
pub const MARKERCLUSTER_VERSION: &str = "1.5.3";

/// Application name, used for the data directory.
pub const APP_NAME: &str = "pic2map";

/// Filename of the location database inside the data directory.
pub const DATABASE_FILENAME: &str = "location.db";

/// Default address the web server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the web server listens on.
pub const DEFAULT_PORT: u16 = 5000;
