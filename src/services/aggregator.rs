// src/services/aggregator.rs
// DOCUMENTATION: Text search aggregation
// PURPOSE: Run every query, deduplicate places by place_id and enrich them with details

use crate::errors::ScrapeError;
use crate::models::{PlaceDetails, PlaceRecord, TextSearchQuery};
use crate::services::{GoogleMapsClient, PlaceDetailFetcher, TextSearchResult};
use std::collections::HashSet;

/// Places accumulated during one search
/// DOCUMENTATION: Insertion-ordered; the first record for a place_id wins
#[derive(Debug, Default)]
pub struct SearchSession {
    places: Vec<PlaceRecord>,
    seen: HashSet<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, place_id: &str) -> bool {
        self.seen.contains(place_id)
    }

    /// Returns false when the place_id was already present
    pub fn insert(&mut self, record: PlaceRecord) -> bool {
        if !self.seen.insert(record.place_id.clone()) {
            return false;
        }
        self.places.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn into_places(self) -> Vec<PlaceRecord> {
        self.places
    }
}

/// Aggregation service
/// DOCUMENTATION: Sequential: one search per query, one details call per
/// unique place. Only the first page of each search is read.
pub struct PlaceSearchAggregator;

impl PlaceSearchAggregator {
    /// Aggregate all queries into one ordered, deduplicated table
    ///
    /// # Returns
    /// Places in first-seen order across queries. Any search or details
    /// failure aborts the session with the underlying error.
    pub async fn aggregate(
        client: &GoogleMapsClient,
        queries: &[TextSearchQuery],
    ) -> Result<Vec<PlaceRecord>, ScrapeError> {
        let mut session = SearchSession::new();
        let mut duplicates = 0usize;

        for (idx, query) in queries.iter().enumerate() {
            log::debug!("Running query {}/{}: {:?}", idx + 1, queries.len(), query.query);

            let results = client.text_search(query).await?;

            for result in results {
                let Some(place_id) = result.place_id.clone() else {
                    log::warn!("Skipping search result without place_id: {:?}", result.name);
                    continue;
                };

                if session.contains(&place_id) {
                    duplicates += 1;
                    continue;
                }

                let details = PlaceDetailFetcher::fetch_details(client, &place_id).await?;
                session.insert(Self::build_record(place_id, result, details));
            }
        }

        log::info!(
            "Aggregated {} unique places from {} queries ({} duplicates dropped)",
            session.len(),
            queries.len(),
            duplicates
        );

        Ok(session.into_places())
    }

    /// Merge search fields with detail fields
    pub fn build_record(
        place_id: String,
        result: TextSearchResult,
        details: PlaceDetails,
    ) -> PlaceRecord {
        PlaceRecord {
            place_id,
            name: result.name.unwrap_or_default(),
            rating: result.rating,
            rating_count: result.user_ratings_total,
            address: result.formatted_address.unwrap_or_default(),
            phone_number: details.phone_number,
            opening_hours: details.opening_hours,
            url: details.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{client_for, mount_details, mount_search};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ids(places: &[PlaceRecord]) -> Vec<&str> {
        places.iter().map(|p| p.place_id.as_str()).collect()
    }

    #[test]
    fn test_session_first_insert_wins() {
        let mut session = SearchSession::new();
        let first = PlaceSearchAggregator::build_record(
            "A".to_string(),
            TextSearchResult {
                name: Some("First".to_string()),
                ..Default::default()
            },
            PlaceDetails::default(),
        );
        let mut second = first.clone();
        second.name = "Second".to_string();

        assert!(session.insert(first));
        assert!(!session.insert(second));
        assert_eq!(session.len(), 1);
        assert_eq!(session.into_places()[0].name, "First");
    }

    #[test]
    fn test_build_record_defaults() {
        let record = PlaceSearchAggregator::build_record(
            "A".to_string(),
            TextSearchResult::default(),
            PlaceDetails::default(),
        );

        assert_eq!(record.name, "");
        assert_eq!(record.address, "");
        assert!(record.rating.is_none());
        assert!(record.rating_count.is_none());
        assert_eq!(record.phone_number, "-");
    }

    #[tokio::test]
    async fn test_duplicate_place_fetched_once() {
        let server = MockServer::start().await;
        mount_search(&server, "construction Chelsea", &["ABC123"]).await;
        mount_search(&server, "construction Soho", &["ABC123"]).await;
        mount_details(&server, "ABC123").await;

        let queries = vec![
            TextSearchQuery::text("construction Chelsea"),
            TextSearchQuery::text("construction Soho"),
        ];
        let places = PlaceSearchAggregator::aggregate(&client_for(&server), &queries)
            .await
            .unwrap();

        assert_eq!(ids(&places), vec!["ABC123"]);
        assert_eq!(places[0].name, "Place ABC123");
        assert_eq!(places[0].rating, Some(4.2));
        assert_eq!(places[0].rating_count, Some(17));
    }

    #[tokio::test]
    async fn test_first_seen_order_across_queries() {
        let server = MockServer::start().await;
        mount_search(&server, "q1", &["A", "B"]).await;
        mount_search(&server, "q2", &["B", "C"]).await;
        for id in ["A", "B", "C"] {
            mount_details(&server, id).await;
        }

        let queries = vec![TextSearchQuery::text("q1"), TextSearchQuery::text("q2")];
        let places = PlaceSearchAggregator::aggregate(&client_for(&server), &queries)
            .await
            .unwrap();

        assert_eq!(ids(&places), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_results_without_place_id_are_skipped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/place/textsearch/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [
                    { "name": "Nameless" },
                    { "place_id": "A", "name": "Alpha" }
                ]
            })))
            .mount(&server)
            .await;
        mount_details(&server, "A").await;

        let places = PlaceSearchAggregator::aggregate(
            &client_for(&server),
            &[TextSearchQuery::text("construction")],
        )
        .await
        .unwrap();

        assert_eq!(ids(&places), vec!["A"]);
        assert_eq!(places[0].address, "");
    }

    #[tokio::test]
    async fn test_search_failure_aborts_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/place/textsearch/json"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let result = PlaceSearchAggregator::aggregate(
            &client_for(&server),
            &[TextSearchQuery::text("construction")],
        )
        .await;

        assert!(matches!(result, Err(ScrapeError::ExternalApiError(_))));
    }
}
