//! Configuration system for the map renderer, the location database and the
//! web server
//!
//! Every section has sensible defaults; [`AppConfig::from_env`] layers
//! `PIC2MAP_*` environment variables on top of them.

use std::{
    env,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use crate::{
    core::{constants, geo::LatLng},
    Error, Result,
};

/// Map view and layer settings used when building a [`crate::Map`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// DOM element id the map binds to
    pub container_id: String,
    /// Initial view center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: u8,
    /// Tile URL template
    pub tile_url: String,
    /// Attribution text (HTML) shown for the tile layer
    pub attribution: String,
    /// Group markers into a cluster layer
    pub cluster_markers: bool,
    /// Center the view on the average picture location instead of `center`
    pub center_on_locations: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: constants::DEFAULT_CONTAINER_ID.to_string(),
            center: constants::DEFAULT_CENTER.into(),
            zoom: constants::DEFAULT_ZOOM,
            tile_url: constants::OSM_TILE_URL.to_string(),
            attribution: constants::OSM_ATTRIBUTION.to_string(),
            cluster_markers: true,
            center_on_locations: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
}

impl DatabaseConfig {
    /// Database stored in the given data directory.
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            path: directory.into().join(constants::DATABASE_FILENAME),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::in_directory(default_data_dir())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| Error::Config(format!("invalid host address: {:?}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
        }
    }
}

/// Top level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub map: MapConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Defaults overridden by `PIC2MAP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("PIC2MAP_DATA_DIR") {
            config.database = DatabaseConfig::in_directory(dir);
        }
        if let Some(path) = lookup("PIC2MAP_DATABASE") {
            config.database.path = PathBuf::from(path);
        }
        if let Some(host) = lookup("PIC2MAP_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PIC2MAP_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("PIC2MAP_PORT is not a port: {port:?}")))?;
        }
        if let Some(url) = lookup("PIC2MAP_TILE_URL") {
            config.map.tile_url = url;
        }
        if let Some(attribution) = lookup("PIC2MAP_ATTRIBUTION") {
            config.map.attribution = attribution;
        }
        if let Some(cluster) = lookup("PIC2MAP_CLUSTER") {
            config.map.cluster_markers = parse_flag("PIC2MAP_CLUSTER", &cluster)?;
        }
        if let Some(center) = lookup("PIC2MAP_CENTER_ON_LOCATIONS") {
            config.map.center_on_locations = parse_flag("PIC2MAP_CENTER_ON_LOCATIONS", &center)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.map.container_id.is_empty() {
            return Err(Error::Config("map container id is empty".to_string()));
        }
        if !self.map.center.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "map center out of range: {:?}",
                self.map.center
            )));
        }
        if self.map.zoom > constants::OSM_MAX_ZOOM {
            return Err(Error::Config(format!(
                "zoom {} exceeds maximum {}",
                self.map.zoom,
                constants::OSM_MAX_ZOOM
            )));
        }
        if !self.map.tile_url.contains("{z}") {
            return Err(Error::Config(format!(
                "tile url template has no {{z}} placeholder: {}",
                self.map.tile_url
            )));
        }
        self.server.socket_addr()?;
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("{name} is not a boolean: {value:?}"))),
    }
}

/// XDG data directory for the application (`$XDG_DATA_HOME/pic2map`,
/// `~/.local/share/pic2map` when unset).
pub fn default_data_dir() -> PathBuf {
    let base = env::var_os("XDG_DATA_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(constants::APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.map.container_id, "map");
        assert_eq!(config.map.center, LatLng::new(40.2001925, -89.0876265));
        assert_eq!(config.map.zoom, 3);
        assert!(config.map.cluster_markers);
        assert!(config.database.path.ends_with("pic2map/location.db"));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PIC2MAP_DATA_DIR", "/tmp/photos"),
            ("PIC2MAP_HOST", "0.0.0.0"),
            ("PIC2MAP_PORT", "8080"),
            ("PIC2MAP_CLUSTER", "off"),
        ]))
        .unwrap();

        assert_eq!(config.database.path, PathBuf::from("/tmp/photos/location.db"));
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "0.0.0.0:8080".parse().unwrap()
        );
        assert!(!config.map.cluster_markers);
    }

    #[test]
    fn test_invalid_port() {
        let result = AppConfig::from_lookup(lookup(&[("PIC2MAP_PORT", "http")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_flag() {
        let result = AppConfig::from_lookup(lookup(&[("PIC2MAP_CLUSTER", "maybe")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_tile_url_without_zoom() {
        let result = AppConfig::from_lookup(lookup(&[(
            "PIC2MAP_TILE_URL",
            "http://tiles.example.com/tile.png",
        )]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
