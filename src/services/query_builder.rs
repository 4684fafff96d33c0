// src/services/query_builder.rs
// DOCUMENTATION: Search query construction
// PURPOSE: Turn ZIP codes or a free-text area plus a keyword into text-search queries

use crate::errors::ScrapeError;
use crate::models::{GeocodeResult, SearchForm, TextSearchQuery};
use crate::services::{GeoResolver, GoogleMapsClient};
use geo_types::Point;

/// Which of the two location fields drives the search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchInput {
    /// Whitespace-separated postal codes
    ZipCodes(Vec<String>),
    /// Free-text area, words joined by single spaces
    Area(String),
}

impl SearchInput {
    /// Select the input mode from a trimmed form
    /// DOCUMENTATION: Both fields set is a conflict, both empty is rejected
    pub fn from_form(form: &SearchForm) -> Result<Self, ScrapeError> {
        let zip = form.zip.trim();
        let area = form.area.trim();

        match (zip.is_empty(), area.is_empty()) {
            (false, false) => Err(ScrapeError::InputConflict),
            (true, true) => Err(ScrapeError::EmptyInput),
            (false, true) => Ok(SearchInput::ZipCodes(
                zip.split_whitespace().map(str::to_string).collect(),
            )),
            (true, false) => Ok(SearchInput::Area(
                area.split_whitespace().collect::<Vec<_>>().join(" "),
            )),
        }
    }
}

/// Queries to run plus per-token warnings gathered on the way
#[derive(Debug, Default)]
pub struct QueryPlan {
    pub queries: Vec<TextSearchQuery>,
    pub warnings: Vec<String>,
}

/// Query construction service
pub struct QueryBuilder;

impl QueryBuilder {
    /// Keyword searched near a coordinate
    pub fn coordinate_query(keyword: &str, location: Point<f64>) -> TextSearchQuery {
        TextSearchQuery::near(keyword, location)
    }

    /// Keyword searched by locality name, qualified with the city when known
    pub fn locality_query(keyword: &str, locality: &str, city: Option<&str>) -> TextSearchQuery {
        let text = match city {
            Some(city) => format!("{} {} {}", keyword, locality, city),
            None => format!("{} {}", keyword, locality),
        };
        TextSearchQuery::text(text)
    }

    pub fn area_query(keyword: &str, area: &str) -> TextSearchQuery {
        TextSearchQuery::text(format!("{} {}", keyword, area))
    }

    /// Queries for one resolved postal code
    /// DOCUMENTATION: Empty when the geocode carries no coordinates;
    /// otherwise the coordinate query followed by one query per locality
    pub fn queries_for_geocode(keyword: &str, geocode: &GeocodeResult) -> Vec<TextSearchQuery> {
        let Some(location) = geocode.coordinates else {
            return Vec::new();
        };

        let mut queries = vec![Self::coordinate_query(keyword, location)];
        queries.extend(geocode.alternate_localities.iter().map(|locality| {
            Self::locality_query(keyword, locality, geocode.city_name.as_deref())
        }));
        queries
    }

    /// Build the full query list for an input
    /// DOCUMENTATION: Geocodes every ZIP token in order. A token that cannot be
    /// resolved adds a warning and the batch continues.
    pub async fn build(
        client: &GoogleMapsClient,
        keyword: &str,
        input: &SearchInput,
    ) -> QueryPlan {
        let mut plan = QueryPlan::default();

        match input {
            SearchInput::Area(area) => {
                plan.queries.push(Self::area_query(keyword, area));
            }
            SearchInput::ZipCodes(tokens) => {
                for token in tokens {
                    let queries = GeoResolver::resolve(client, token)
                        .await
                        .map(|geocode| Self::queries_for_geocode(keyword, &geocode))
                        .unwrap_or_default();

                    if queries.is_empty() {
                        let warning = ScrapeError::GeocodeNotFound(token.clone()).to_string();
                        log::warn!("{}", warning);
                        plan.warnings.push(warning);
                        continue;
                    }

                    log::debug!("ZIP {} expanded to {} queries", token, queries.len());
                    plan.queries.extend(queries);
                }
            }
        }

        plan
    }
}
