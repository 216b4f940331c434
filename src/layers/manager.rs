use fxhash::FxHashMap as HashMap;

use crate::{layers::base::LayerTrait, rendering::context::RenderContext, Error, Result};

/// Manages layers for the map, handling ordering and rendering
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Ordered list of layer IDs for rendering (sorted by z-index, then insertion)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Adds a layer to the manager. Layer ids must be unique.
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        if self.layers.contains_key(&layer_id) {
            return Err(Error::Render(format!("duplicate layer id: {layer_id}")));
        }
        let z_index = layer.z_index();

        self.layers.insert(layer_id.clone(), layer);

        // Insert in sorted order by z-index
        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.render_order.insert(insert_pos, layer_id);
        Ok(())
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Applies a function to a specific layer mutably
    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layers.get_mut(layer_id).map(|layer| f(layer.as_mut()))
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Renders all visible layers in order onto `target`
    pub fn render(&self, context: &mut RenderContext, target: &str) -> Result<()> {
        for layer in self.layers() {
            if layer.is_visible() {
                layer.render(context, target)?;
            }
        }
        Ok(())
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::geo::LatLng, layers::marker::Marker, layers::tile::TileLayer};

    #[test]
    fn test_render_order_follows_z_index() {
        let mut manager = LayerManager::new();
        manager
            .add_layer(Box::new(Marker::new("m".to_string(), LatLng::new(1.0, 2.0))))
            .unwrap();
        manager
            .add_layer(Box::new(TileLayer::openstreetmap("osm".to_string())))
            .unwrap();

        let ids: Vec<&str> = manager.layers().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["osm", "m"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut manager = LayerManager::new();
        let position = LatLng::new(1.0, 2.0);
        manager
            .add_layer(Box::new(Marker::new("m".to_string(), position)))
            .unwrap();
        let result = manager.add_layer(Box::new(Marker::new("m".to_string(), position)));

        assert!(result.is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_remove_layer() {
        let mut manager = LayerManager::new();
        manager
            .add_layer(Box::new(TileLayer::openstreetmap("osm".to_string())))
            .unwrap();

        assert!(manager.remove_layer("osm").is_some());
        assert!(manager.is_empty());
        assert!(manager.layers().is_empty());
    }

    #[test]
    fn test_hidden_layers_are_not_rendered() {
        let mut manager = LayerManager::new();
        manager
            .add_layer(Box::new(TileLayer::openstreetmap("osm".to_string())))
            .unwrap();
        manager.with_layer_mut("osm", |layer| layer.set_visible(false));

        let mut context = RenderContext::new();
        manager.render(&mut context, "map").unwrap();
        assert!(context.is_empty());
    }
}
