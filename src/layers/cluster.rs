//! Marker clustering layer.
//!
//! Grouping nearby pins is done in the browser by Leaflet.markercluster; this
//! layer owns the markers and emits the group they are added to.

use serde::Serialize;

use crate::{
    layers::base::{LayerProperties, LayerTrait, LayerType},
    layers::marker::Marker,
    rendering::context::RenderContext,
    Result,
};

/// Options handed to `L.markerClusterGroup`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterOptions {
    /// Maximum radius (pixels) a cluster covers from its central marker
    pub max_cluster_radius: u32,
    /// Zoom level from which markers are never clustered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_clustering_at_zoom: Option<u8>,
    /// Spread markers of a cluster when clicked at the max zoom level
    pub spiderfy_on_max_zoom: bool,
    /// Show the bounds of a cluster on mouse over
    pub show_coverage_on_hover: bool,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_cluster_radius: 80,
            disable_clustering_at_zoom: None,
            spiderfy_on_max_zoom: true,
            show_coverage_on_hover: true,
        }
    }
}

pub struct MarkerClusterGroup {
    properties: LayerProperties,
    options: ClusterOptions,
    markers: Vec<Marker>,
}

impl MarkerClusterGroup {
    pub fn new(id: String) -> Self {
        Self::with_options(id, ClusterOptions::default())
    }

    pub fn with_options(id: String, options: ClusterOptions) -> Self {
        let properties = LayerProperties::new(
            id,
            "Marker cluster".to_string(),
            LayerType::MarkerCluster,
        )
        .with_z_index(10);
        Self {
            properties,
            options,
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl LayerTrait for MarkerClusterGroup {
    crate::layer_properties_accessors!(properties);

    fn render(&self, context: &mut RenderContext, target: &str) -> Result<()> {
        let expression = if self.options == ClusterOptions::default() {
            "L.markerClusterGroup()".to_string()
        } else {
            format!("L.markerClusterGroup({})", RenderContext::literal(&self.options)?)
        };
        let group = context.declare("markerCluster", &expression);
        context.push(format!("{target}.addLayer({group})"));

        for marker in self.markers.iter().filter(|marker| marker.is_visible()) {
            marker.render(context, &group)?;
        }
        Ok(())
    }
}
