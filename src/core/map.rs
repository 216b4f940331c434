use log::debug;

use crate::{
    core::{config::MapConfig, constants, geo::LatLng},
    data::location::PhotoLocation,
    layers::{
        base::LayerTrait,
        cluster::{ClusterOptions, MarkerClusterGroup},
        manager::LayerManager,
        marker::Marker,
        tile::TileLayer,
    },
    rendering::context::RenderContext,
    Error, Result,
};

const TILE_LAYER_ID: &str = "tiles";
const MARKER_CLUSTER_ID: &str = "marker_cluster";

#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Initial view center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: u8,
    /// Group markers into a cluster layer instead of adding them to the map
    pub cluster_markers: bool,
    /// Options for the cluster layer when `cluster_markers` is set
    pub cluster: ClusterOptions,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: constants::DEFAULT_CENTER.into(),
            zoom: constants::DEFAULT_ZOOM,
            cluster_markers: true,
            cluster: ClusterOptions::default(),
        }
    }
}

/// Map view renderer
///
/// Owns the view (container, center, zoom) and every layer placed on it:
/// the tile layer, the marker cluster layer and any marker added directly.
/// Rendering turns the whole scene into a Leaflet script.
pub struct Map {
    container_id: String,
    options: MapOptions,
    layers: LayerManager,
    marker_cluster: Option<String>,
    marker_count: usize,
}

impl Map {
    /// Creates a map bound to the `container_id` element, viewing `center`
    /// at `zoom`, with OpenStreetMap tiles and a marker cluster layer.
    pub fn initialize(container_id: &str, center: LatLng, zoom: u8) -> Result<Self> {
        let options = MapOptions {
            center,
            zoom,
            ..MapOptions::default()
        };
        Self::with_options(
            container_id,
            options,
            TileLayer::openstreetmap(TILE_LAYER_ID.to_string()),
        )
    }

    /// Creates a map from explicit options and tile layer.
    pub fn with_options(container_id: &str, options: MapOptions, tiles: TileLayer) -> Result<Self> {
        if container_id.is_empty() {
            return Err(Error::Render("map container id is empty".to_string()));
        }

        let mut map = Self {
            container_id: container_id.to_string(),
            options,
            layers: LayerManager::new(),
            marker_cluster: None,
            marker_count: 0,
        };

        debug!(
            "Initializing map in #{} at {:?}, zoom {}",
            map.container_id, map.options.center, map.options.zoom
        );
        map.layers.add_layer(Box::new(tiles))?;

        if map.options.cluster_markers {
            let group = MarkerClusterGroup::with_options(
                MARKER_CLUSTER_ID.to_string(),
                map.options.cluster.clone(),
            );
            map.layers.add_layer(Box::new(group))?;
            map.marker_cluster = Some(MARKER_CLUSTER_ID.to_string());
        }

        Ok(map)
    }

    /// Creates a map from the application configuration.
    pub fn from_config(config: &MapConfig) -> Result<Self> {
        let options = MapOptions {
            center: config.center,
            zoom: config.zoom,
            cluster_markers: config.cluster_markers,
            ..MapOptions::default()
        };
        let tiles = TileLayer::from_template(
            TILE_LAYER_ID.to_string(),
            &config.tile_url,
            &config.attribution,
        );
        Self::with_options(&config.container_id, options, tiles)
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn center(&self) -> LatLng {
        self.options.center
    }

    pub fn zoom(&self) -> u8 {
        self.options.zoom
    }

    pub fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.options.center = center;
        self.options.zoom = zoom;
    }

    /// Adds an arbitrary layer on top of the map.
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        self.layers.add_layer(layer)
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    /// The marker cluster layer, when clustering is enabled.
    pub fn marker_cluster(&self) -> Option<&MarkerClusterGroup> {
        let id = self.marker_cluster.as_deref()?;
        self.layers
            .get_layer(id)?
            .as_any()
            .downcast_ref::<MarkerClusterGroup>()
    }

    /// Adds one marker per location, each with a popup giving the filename
    /// and, when present, the GPS datetime. Markers go to the cluster layer
    /// when clustering is enabled, to the map otherwise.
    ///
    /// Either every marker is added or none is. Returns the number of
    /// markers added, always `locations.len()`.
    pub fn add_markers(&mut self, locations: &[PhotoLocation]) -> Result<usize> {
        debug!("Adding {} markers", locations.len());

        let markers: Vec<Marker> = locations
            .iter()
            .enumerate()
            .map(|(index, location)| {
                Marker::for_location(format!("marker_{}", self.marker_count + index), location)
            })
            .collect();

        match self.marker_cluster.as_deref() {
            Some(cluster_id) => {
                self.layers
                    .with_layer_mut(cluster_id, move |layer| {
                        layer
                            .as_any_mut()
                            .downcast_mut::<MarkerClusterGroup>()
                            .map(|group| {
                                for marker in markers {
                                    group.add_marker(marker);
                                }
                            })
                    })
                    .flatten()
                    .ok_or_else(|| Error::Layer(format!("missing cluster layer {cluster_id}")))?;
            }
            None => {
                if let Some(taken) = markers
                    .iter()
                    .find(|marker| self.layers.get_layer(marker.id()).is_some())
                {
                    return Err(Error::Layer(format!(
                        "layer id already in use: {}",
                        taken.id()
                    )));
                }
                for marker in markers {
                    self.layers.add_layer(Box::new(marker))?;
                }
            }
        }

        self.marker_count += locations.len();
        Ok(locations.len())
    }

    /// Total number of markers added to the map.
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Emits the map and all of its layers.
    pub fn render(&self, context: &mut RenderContext) -> Result<()> {
        let map = context.declare(
            "map",
            &format!(
                "L.map({}).setView({}, {})",
                RenderContext::literal(&self.container_id)?,
                RenderContext::literal(&self.options.center.to_array())?,
                self.options.zoom
            ),
        );
        self.layers.render(context, &map)
    }

    /// The Leaflet script drawing this map.
    pub fn to_script(&self) -> Result<String> {
        let mut context = RenderContext::new();
        self.render(&mut context)?;
        Ok(context.into_script())
    }
}
