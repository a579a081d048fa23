//! Flood zone overlay data for the dashboard map

use serde::{Deserialize, Serialize};

use crate::types::LatLng;

/// A flood-prone area with its marker position and risk polygon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloodZone {
    pub name: String,
    pub coords: LatLng,
    pub polygon: Vec<LatLng>,
}

impl FloodZone {
    fn new(name: &str, coords: (f64, f64), polygon: &[(f64, f64)]) -> Self {
        Self {
            name: name.to_string(),
            coords: LatLng(coords.0, coords.1),
            polygon: polygon.iter().map(|&(lat, lng)| LatLng(lat, lng)).collect(),
        }
    }
}

/// Map centre for the South India overview and its zoom level
pub const MAP_CENTER: LatLng = LatLng(12.5, 78.5);
pub const MAP_ZOOM: u8 = 6;

/// Static flood-prone zones in South India
pub fn flood_zones() -> Vec<FloodZone> {
    vec![
        FloodZone::new(
            "Kuttanad, Kerala",
            (9.3793, 76.5741),
            &[
                (9.400, 76.500),
                (9.450, 76.600),
                (9.420, 76.700),
                (9.370, 76.650),
                (9.350, 76.550),
            ],
        ),
        FloodZone::new(
            "Chennai, Tamil Nadu",
            (13.0827, 80.2707),
            &[(13.12, 80.20), (13.10, 80.30), (13.05, 80.28), (13.06, 80.22)],
        ),
        FloodZone::new(
            "Hyderabad, Telangana",
            (17.3850, 78.4867),
            &[(17.40, 78.45), (17.42, 78.50), (17.36, 78.52), (17.34, 78.48)],
        ),
        FloodZone::new(
            "Bangalore Urban, Karnataka",
            (12.9716, 77.5946),
            &[(12.99, 77.56), (12.97, 77.62), (12.95, 77.60), (12.96, 77.55)],
        ),
        FloodZone::new(
            "Rajahmundry, Andhra Pradesh",
            (17.0005, 81.8040),
            &[(17.02, 81.78), (17.01, 81.83), (16.99, 81.82), (16.98, 81.78)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zones_are_closed_polygons() {
        for zone in flood_zones() {
            assert!(zone.polygon.len() >= 3, "{} needs a polygon", zone.name);
        }
    }

    #[test]
    fn test_zone_wire_format() {
        let value = serde_json::to_value(&flood_zones()[1]).unwrap();
        assert_eq!(value["name"], "Chennai, Tamil Nadu");
        assert_eq!(value["coords"][0], 13.0827);
        assert_eq!(value["polygon"].as_array().unwrap().len(), 4);
    }
}
