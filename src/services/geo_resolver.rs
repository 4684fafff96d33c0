// src/services/geo_resolver.rs
// DOCUMENTATION: Postal code resolution
// PURPOSE: Turn a ZIP code into coordinates, a city name and alternate localities

use crate::models::GeocodeResult;
use crate::services::{GeocodeEntry, GeocodeResponse, GoogleMapsClient};
use geo_types::Point;

/// Geocoding service
/// DOCUMENTATION: One outbound call per postal code, no retries.
/// Every failure collapses to None so callers can skip the token.
pub struct GeoResolver;

impl GeoResolver {
    /// Resolve a single postal code token
    ///
    /// # Returns
    /// `None` when the request fails, the status is not 2xx, the body is
    /// malformed or no result came back. `Some` with absent coordinates when
    /// the code resolved without a usable location.
    pub async fn resolve(client: &GoogleMapsClient, postal_code: &str) -> Option<GeocodeResult> {
        match client.geocode(postal_code).await {
            Ok(response) => {
                let result = Self::from_response(response);
                if result.is_none() {
                    log::warn!("Geocoding returned no results for {}", postal_code);
                }
                result
            }
            Err(e) => {
                log::warn!("Geocoding failed for {}: {}", postal_code, e);
                None
            }
        }
    }

    /// Extract a GeocodeResult from the first geocoding candidate
    pub fn from_response(response: GeocodeResponse) -> Option<GeocodeResult> {
        let entry = response.results.into_iter().next()?;

        let coordinates = entry.coordinates();
        let city_name = entry.city_name();
        let localities = entry.postcode_localities.unwrap_or_default();

        Some(GeocodeResult::new(coordinates, city_name, localities))
    }
}

impl GeocodeEntry {
    fn coordinates(&self) -> Option<Point<f64>> {
        let location = self.geometry.as_ref()?.location.as_ref()?;
        match (location.lat, location.lng) {
            // Zero on either axis counts as missing
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => Some(Point::new(lng, lat)),
            _ => None,
        }
    }

    fn city_name(&self) -> Option<String> {
        self.address_components
            .iter()
            .filter(|component| !component.long_name.trim().is_empty())
            .find(|component| component.types.iter().any(|t| t == "locality"))
            .map(|component| component.long_name.clone())
    }
}
