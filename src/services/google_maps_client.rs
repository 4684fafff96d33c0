// src/services/google_maps_client.rs
// DOCUMENTATION: Google Maps web service client
// PURPOSE: Handle communication with the Geocoding, Text Search and Place Details APIs

use crate::config::env::DEFAULT_GOOGLE_MAPS_BASE_URL;
use crate::config::Config;
use crate::errors::ScrapeError;
use crate::models::TextSearchQuery;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Google Maps API client
/// DOCUMENTATION: Holds the API key for the whole process lifetime.
/// No request timeout is configured; reqwest defaults apply.
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Root of the web service APIs, without trailing slash
    base_url: String,
}

/// Response from the Geocoding API
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeEntry>,
    pub status: Option<String>,
}

/// One geocoding candidate
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeocodeEntry {
    #[serde(default)]
    pub address_components: Vec<GoogleAddressComponent>,
    /// Localities sharing this postal code (not always present)
    pub postcode_localities: Option<Vec<String>>,
    pub geometry: Option<GoogleGeometry>,
}

/// Address component from Google
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleAddressComponent {
    /// Long name (e.g., "New York", "10001")
    #[serde(default)]
    pub long_name: String,
    /// Types of this component (e.g., ["locality", "political"])
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleGeometry {
    pub location: Option<GoogleLocation>,
}

/// Coordinates from Google; either side may be missing in malformed payloads
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Response from Places Text Search
/// DOCUMENTATION: Only the first page is consumed; next_page_token is kept
/// for logging but never followed
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<TextSearchResult>,
    pub status: Option<String>,
    pub next_page_token: Option<String>,
    pub error_message: Option<String>,
}

/// Individual place from Text Search
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextSearchResult {
    /// Google's unique place identifier
    pub place_id: Option<String>,
    pub name: Option<String>,
    /// Rating (0-5)
    pub rating: Option<f64>,
    /// Number of user ratings
    pub user_ratings_total: Option<u32>,
    pub formatted_address: Option<String>,
}

/// Response from Place Details
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub result: DetailsResult,
    pub status: Option<String>,
}

/// Subset of Place Details fields this tool exports
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DetailsResult {
    /// Phone number (international format)
    pub international_phone_number: Option<String>,
    pub opening_hours: Option<GoogleOpeningHours>,
    /// Google Maps URL
    pub url: Option<String>,
}

/// Opening hours metadata
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleOpeningHours {
    /// One human-readable line per weekday, upstream order
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

impl GoogleMapsClient {
    /// Create a client against the production Google Maps APIs
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_GOOGLE_MAPS_BASE_URL)
    }

    /// Create a client with a custom base URL (local mocks, proxies)
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(
            config.google_maps_api_key.clone(),
            &config.google_maps_base_url,
        )
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Geocode a single postal code
    /// DOCUMENTATION: Returns Err for transport failures, non-2xx statuses
    /// and undecodable bodies; callers decide whether that is fatal
    pub async fn geocode(&self, postal_code: &str) -> Result<GeocodeResponse, ScrapeError> {
        let url = format!("{}/geocode/json", self.base_url);
        let components = format!("postal_code:{}", postal_code);
        let params = [("key", self.api_key.as_str()), ("components", components.as_str())];

        log::debug!("Geocoding postal code: {}", postal_code);

        let response = self.client.get(&url).query(&params).send().await.map_err(|e| {
            log::error!("Geocoding request failed for {}: {}", postal_code, e);
            ScrapeError::ExternalApiError(format!("Request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            log::warn!("Geocoding API returned {} for {}", status, postal_code);
            return Err(ScrapeError::ExternalApiError(format!(
                "Geocoding status {}",
                status
            )));
        }

        response.json::<GeocodeResponse>().await.map_err(|e| {
            log::error!("Failed to parse geocoding response: {}", e);
            ScrapeError::ExternalApiError(format!("Parse error: {}", e))
        })
    }

    /// Run one text search and return the first page of results
    pub async fn text_search(
        &self,
        query: &TextSearchQuery,
    ) -> Result<Vec<TextSearchResult>, ScrapeError> {
        let url = query.to_url(&self.base_url, &self.api_key)?;

        log::debug!(
            "Places text search: query={:?}, location={:?}",
            query.query,
            query.location_param()
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            log::error!("Places text search request failed: {}", e);
            ScrapeError::ExternalApiError(format!("Request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Places text search error {}: {}", status, body);
            return Err(ScrapeError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let api_response: TextSearchResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse text search response: {}", e);
            ScrapeError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        if api_response.next_page_token.is_some() {
            log::debug!("Ignoring next_page_token for query {:?}", query.query);
        }

        // Payloads without a status are treated as OK
        match api_response.status.as_deref().unwrap_or("OK") {
            "OK" | "ZERO_RESULTS" => {
                log::info!(
                    "Text search {:?} returned {} results",
                    query.query,
                    api_response.results.len()
                );
                Ok(api_response.results)
            }
            "OVER_QUERY_LIMIT" => {
                log::error!("Google Places API quota exceeded");
                Err(ScrapeError::RateLimitExceeded)
            }
            other => {
                let msg = api_response
                    .error_message
                    .unwrap_or_else(|| format!("Unknown status: {}", other));
                log::error!("Places text search failed: {}", msg);
                Err(ScrapeError::ExternalApiError(msg))
            }
        }
    }

    /// Fetch phone, hours and URL for one place (English text)
    pub async fn place_details(&self, place_id: &str) -> Result<DetailsResult, ScrapeError> {
        let url = format!("{}/place/details/json", self.base_url);
        let params = [
            ("placeid", place_id),
            ("language", "en"),
            ("key", self.api_key.as_str()),
        ];

        log::debug!("Place details lookup: place_id={}", place_id);

        let response = self.client.get(&url).query(&params).send().await.map_err(|e| {
            log::error!("Place details request failed: {}", e);
            ScrapeError::ExternalApiError(format!("Request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(ScrapeError::ExternalApiError(format!(
                "Details request failed with {}",
                response.status()
            )));
        }

        let api_response: DetailsResponse = response
            .json()
            .await
            .map_err(|e| ScrapeError::ExternalApiError(format!("Parse error: {}", e)))?;

        Ok(api_response.result)
    }
}
