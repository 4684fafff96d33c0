// src/models/geocode.rs
// DOCUMENTATION: Result of resolving a postal code
// PURPOSE: Typed view of what the geocoder tells us about a ZIP code

use geo_types::Point;

/// Resolved postal code
/// DOCUMENTATION: Coordinates may be absent even when the code resolved;
/// city and locality data are still usable in that case
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    /// x = longitude, y = latitude
    pub coordinates: Option<Point<f64>>,
    /// Long name of the first "locality" address component
    pub city_name: Option<String>,
    /// Alternate localities sharing the postal code, city duplicates removed
    pub alternate_localities: Vec<String>,
}

impl GeocodeResult {
    /// Build a result, dropping localities that only restate the city
    pub fn new(
        coordinates: Option<Point<f64>>,
        city_name: Option<String>,
        localities: Vec<String>,
    ) -> Self {
        let alternate_localities = match city_name.as_deref() {
            Some(city) if !city.is_empty() => filter_localities(localities, city),
            _ => localities,
        };

        Self {
            coordinates,
            city_name,
            alternate_localities,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|p| p.y())
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|p| p.x())
    }
}

/// Remove every locality whose lowercase text contains the lowercase city name
pub fn filter_localities(localities: Vec<String>, city_name: &str) -> Vec<String> {
    let city = city_name.to_lowercase();
    localities
        .into_iter()
        .filter(|locality| !locality.to_lowercase().contains(&city))
        .collect()
}
