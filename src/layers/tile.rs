use serde::Serialize;

use crate::{
    core::constants,
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::context::RenderContext,
    Result,
};

/// Configuration for a tile layer
///
/// Serializes to the option object `L.tileLayer` takes; the URL template is
/// passed separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "http://{s}.tile.osm.org/{z}/{x}/{y}.png")
    #[serde(skip)]
    pub url_template: String,
    /// Available subdomains for load balancing
    pub subdomains: Vec<String>,
    /// Attribution text (HTML)
    pub attribution: String,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: constants::OSM_TILE_URL.to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            attribution: constants::OSM_ATTRIBUTION.to_string(),
            min_zoom: 0,
            max_zoom: constants::OSM_MAX_ZOOM,
        }
    }
}

/// Background imagery fetched by the browser from a tile server
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
}

impl TileLayer {
    pub fn new(id: String, name: String, options: TileLayerOptions) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Tile),
            options,
        }
    }

    /// Create a tile layer for OpenStreetMap
    pub fn openstreetmap(id: String) -> Self {
        Self::new(id, "OpenStreetMap".to_string(), TileLayerOptions::default())
    }

    /// Tile layer for an arbitrary URL template and attribution.
    pub fn from_template(id: String, url_template: &str, attribution: &str) -> Self {
        let options = TileLayerOptions {
            url_template: url_template.to_string(),
            attribution: attribution.to_string(),
            ..TileLayerOptions::default()
        };
        Self::new(id, "Tiles".to_string(), options)
    }

    pub fn tile_options(&self) -> &TileLayerOptions {
        &self.options
    }
}

impl LayerTrait for TileLayer {
    crate::layer_properties_accessors!(properties);

    fn render(&self, context: &mut RenderContext, target: &str) -> Result<()> {
        context.push(format!(
            "L.tileLayer({}, {}).addTo({})",
            RenderContext::literal(&self.options.url_template)?,
            RenderContext::literal(&self.options)?,
            target
        ));
        Ok(())
    }
}
