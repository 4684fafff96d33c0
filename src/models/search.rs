// src/models/search.rs
// DOCUMENTATION: Search input, query and outcome models
// PURPOSE: Data transfer objects for the /search endpoints and the CLI

use geo_types::Point;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::PlaceRecord;
use crate::errors::ScrapeError;

/// Keyword used when the form leaves it out
pub const DEFAULT_KEYWORD: &str = "construction";

/// Notice attached to an outcome with no places
pub const NO_RESULTS_NOTICE: &str = "No results found for the given input.";

fn default_keyword() -> String {
    DEFAULT_KEYWORD.to_string()
}

/// User search form
/// DOCUMENTATION: Query string of GET /search and GET /search/export.
/// Exactly one of `zip` / `area` must be non-empty after trimming.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchForm {
    /// One or more whitespace-separated postal codes
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub zip: String,

    /// Free-text area, e.g. "Notting Hill London"
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub area: String,

    /// Search keyword
    #[serde(default = "default_keyword")]
    #[validate(length(min = 1, max = 255))]
    pub keyword: String,
}

impl SearchForm {
    pub fn new(zip: &str, area: &str, keyword: &str) -> Self {
        Self {
            zip: zip.to_string(),
            area: area.to_string(),
            keyword: keyword.to_string(),
        }
    }

    /// Trim all fields, then validate
    pub fn normalized(&self) -> Result<Self, ScrapeError> {
        let form = Self {
            zip: self.zip.trim().to_string(),
            area: self.area.trim().to_string(),
            keyword: self.keyword.trim().to_string(),
        };

        form.validate()
            .map_err(|e| ScrapeError::ValidationError(e.to_string()))?;

        Ok(form)
    }
}

/// A single Places text search
/// DOCUMENTATION: Keyword text plus an optional coordinate anchor.
/// Rendered to the upstream textsearch URL by `to_url`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSearchQuery {
    pub query: String,
    /// x = longitude, y = latitude
    pub location: Option<Point<f64>>,
}

impl TextSearchQuery {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: None,
        }
    }

    pub fn near(query: impl Into<String>, location: Point<f64>) -> Self {
        Self {
            query: query.into(),
            location: Some(location),
        }
    }

    /// `lat,lng` as the Places API expects it
    pub fn location_param(&self) -> Option<String> {
        self.location.map(|p| format!("{},{}", p.y(), p.x()))
    }

    /// Full request URL for this query
    pub fn to_url(&self, base_url: &str, api_key: &str) -> Result<Url, ScrapeError> {
        let endpoint = format!("{}/place/textsearch/json", base_url.trim_end_matches('/'));

        let mut params = vec![("query", self.query.clone())];
        if let Some(location) = self.location_param() {
            params.push(("location", location));
        }
        params.push(("key", api_key.to_string()));

        Url::parse_with_params(&endpoint, &params)
            .map_err(|e| ScrapeError::ConfigError(format!("Invalid search URL: {}", e)))
    }
}

/// Result of one search session
/// DOCUMENTATION: Response body of GET /search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Unique places in first-seen order
    pub places: Vec<PlaceRecord>,
    /// Per-ZIP problems that did not stop the batch
    pub warnings: Vec<String>,
    /// Neutral notice, set when no place was found
    pub notice: Option<String>,
    /// Number of text searches issued
    pub query_count: usize,
}

impl SearchOutcome {
    pub fn new(places: Vec<PlaceRecord>, warnings: Vec<String>, query_count: usize) -> Self {
        let notice = if places.is_empty() {
            Some(NO_RESULTS_NOTICE.to_string())
        } else {
            None
        };

        Self {
            places,
            warnings,
            notice,
            query_count,
        }
    }
}
