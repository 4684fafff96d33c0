// src/services/place_details.rs
// DOCUMENTATION: Place detail enrichment
// PURPOSE: Fetch phone number, opening hours and Google Maps URL for a place

use crate::errors::ScrapeError;
use crate::models::{PlaceDetails, MISSING};
use crate::services::{DetailsResult, GoogleMapsClient};

/// Place details service
/// DOCUMENTATION: Missing fields degrade to "-"; only transport-level
/// failures are returned as errors
pub struct PlaceDetailFetcher;

impl PlaceDetailFetcher {
    pub async fn fetch_details(
        client: &GoogleMapsClient,
        place_id: &str,
    ) -> Result<PlaceDetails, ScrapeError> {
        let result = client.place_details(place_id).await?;
        Ok(Self::from_result(result))
    }

    /// Apply the placeholder rules to a raw details payload
    pub fn from_result(result: DetailsResult) -> PlaceDetails {
        let opening_hours = result
            .opening_hours
            .map(|hours| hours.weekday_text.join("\n"))
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| MISSING.to_string());

        PlaceDetails {
            phone_number: result
                .international_phone_number
                .unwrap_or_else(|| MISSING.to_string()),
            opening_hours,
            url: result.url.unwrap_or_else(|| MISSING.to_string()),
        }
    }
}
