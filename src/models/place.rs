// src/models/place.rs
// DOCUMENTATION: Core data structures for scraped places
// PURPOSE: One row of the results table, plus the detail fields merged into it

use serde::{Deserialize, Serialize};

/// Placeholder shown for any missing text column
pub const MISSING: &str = "-";

/// Column headers, in output order
pub const COLUMNS: [&str; 7] = [
    "Place",
    "Ratings",
    "TotalRatings",
    "Address",
    "Phone Number",
    "Opening Hours",
    "URL",
];

/// Fields obtained from the Place Details endpoint
/// DOCUMENTATION: Every field falls back to "-" when upstream omits it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub phone_number: String,
    pub opening_hours: String,
    pub url: String,
}

impl Default for PlaceDetails {
    fn default() -> Self {
        Self {
            phone_number: MISSING.to_string(),
            opening_hours: MISSING.to_string(),
            url: MISSING.to_string(),
        }
    }
}

/// Represents one unique place found during a search session
/// DOCUMENTATION: Created once per place_id, never mutated afterwards.
/// Serialized with the table column names; place_id stays internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Google's unique place identifier (dedup key)
    #[serde(skip_serializing, default)]
    pub place_id: String,

    #[serde(rename = "Place")]
    pub name: String,

    /// Rating (0-5)
    #[serde(rename = "Ratings")]
    pub rating: Option<f64>,

    /// Number of user ratings
    #[serde(rename = "TotalRatings")]
    pub rating_count: Option<u32>,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Phone Number")]
    pub phone_number: String,

    /// Weekday lines joined with '\n'
    #[serde(rename = "Opening Hours")]
    pub opening_hours: String,

    /// Google Maps URL
    #[serde(rename = "URL")]
    pub url: String,
}

/// Ratings always carry a decimal point ("4.0", "4.5")
fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

impl PlaceRecord {
    /// Render the record as table cells in `COLUMNS` order
    pub fn to_row(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.rating
                .map(format_rating)
                .unwrap_or_else(|| MISSING.to_string()),
            self.rating_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            self.address.clone(),
            self.phone_number.clone(),
            self.opening_hours.clone(),
            self.url.clone(),
        ]
    }
}
