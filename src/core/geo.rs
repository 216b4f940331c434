use geo::{Centroid, MultiPoint, Point};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Average position of a set of coordinates, `None` when the set is empty.
    ///
    /// Computed as the planar centroid in degrees, which is what the map uses
    /// to center itself on a collection of pictures.
    pub fn average<I>(coords: I) -> Option<LatLng>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let points: MultiPoint<f64> = coords
            .into_iter()
            .map(|coord| Point::new(coord.lng, coord.lat))
            .collect::<Vec<_>>()
            .into();
        points
            .centroid()
            .map(|centroid| LatLng::new(centroid.y(), centroid.x()))
    }

    /// `[lat, lng]` pair in the order Leaflet expects.
    pub fn to_array(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.7128, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lng, -74.0060);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_lat_lng_out_of_range() {
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn test_average() {
        let center = LatLng::average(vec![
            LatLng::new(1.0, 2.0),
            LatLng::new(3.0, 4.0),
            LatLng::new(5.0, 6.0),
        ])
        .unwrap();

        assert!((center.lat - 3.0).abs() < 1e-9);
        assert!((center.lng - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(LatLng::average(Vec::new()), None);
    }

    #[test]
    fn test_from_tuple() {
        let coord: LatLng = (40.2, -89.1).into();
        assert_eq!(coord.to_array(), [40.2, -89.1]);
    }
}
