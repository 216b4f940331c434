use crate::{
    core::geo::LatLng,
    data::location::PhotoLocation,
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::context::RenderContext,
    ui::popup::Popup,
    Result,
};

pub struct Marker {
    properties: LayerProperties,
    position: LatLng,
    popup: Option<Popup>,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        let properties = LayerProperties::new(id, "Marker".to_string(), LayerType::Marker)
            .with_z_index(10);
        Self {
            properties,
            position,
            popup: None,
        }
    }

    /// Marker at a picture location with its filename/datetime popup bound.
    pub fn for_location(id: String, location: &PhotoLocation) -> Self {
        Self::new(id, location.position()).with_popup(Popup::for_location(location))
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// `L.marker(...)` expression, popup included.
    pub fn expression(&self) -> Result<String> {
        let mut expression = format!(
            "L.marker({})",
            RenderContext::literal(&self.position.to_array())?
        );
        if let Some(popup) = &self.popup {
            expression.push_str(&popup.bind_expression()?);
        }
        Ok(expression)
    }
}

impl LayerTrait for Marker {
    crate::layer_properties_accessors!(properties);

    fn render(&self, context: &mut RenderContext, target: &str) -> Result<()> {
        context.push(format!("{}.addLayer({})", target, self.expression()?));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_for_location() {
        let location = PhotoLocation::new(40.2, -89.1, "a.jpg").with_datetime("2020-01-01");
        let marker = Marker::for_location("marker_0".to_string(), &location);

        assert_eq!(marker.position(), LatLng::new(40.2, -89.1));
        assert_eq!(
            marker.popup().map(Popup::content),
            Some("Filename: a.jpg<br>GPS datetime: 2020-01-01")
        );
    }

    #[test]
    fn test_render() {
        let location = PhotoLocation::new(40.2, -89.1, "a.jpg");
        let marker = Marker::for_location("marker_0".to_string(), &location);
        let mut context = RenderContext::new();
        marker.render(&mut context, "markerCluster").unwrap();

        assert_eq!(
            context.statements(),
            ["markerCluster.addLayer(L.marker([40.2,-89.1]).bindPopup(\"Filename: a.jpg\"));"]
        );
    }

    #[test]
    fn test_marker_without_popup() {
        let marker = Marker::new("m".to_string(), LatLng::new(0.0, 0.0));
        assert_eq!(marker.expression().unwrap(), "L.marker([0.0,0.0])");
        assert!(marker.popup().is_none());
    }
}
