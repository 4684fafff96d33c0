// src/services/search_service.rs
// DOCUMENTATION: Search orchestration
// PURPOSE: Validate the form, build queries, aggregate places into an outcome

use crate::errors::ScrapeError;
use crate::models::{SearchForm, SearchOutcome};
use crate::services::{GoogleMapsClient, PlaceSearchAggregator, QueryBuilder, SearchInput};
use std::time::Instant;

/// Search service
/// DOCUMENTATION: Entry point shared by the HTTP handlers and the CLI.
/// Input errors are returned before any network call is made.
pub struct SearchService;

impl SearchService {
    /// Run one search session
    ///
    /// Process:
    /// 1. Trim and validate the form
    /// 2. Pick ZIP or Area mode (conflict / empty input rejected)
    /// 3. Build queries, geocoding ZIP tokens
    /// 4. Aggregate when at least one query was built
    pub async fn run(
        client: &GoogleMapsClient,
        form: &SearchForm,
    ) -> Result<SearchOutcome, ScrapeError> {
        let start_time = Instant::now();
        let form = form.normalized()?;
        let input = SearchInput::from_form(&form)?;

        log::info!("Starting search: keyword={:?}, input={:?}", form.keyword, input);

        let plan = QueryBuilder::build(client, &form.keyword, &input).await;

        let places = if plan.queries.is_empty() {
            log::info!("No queries built, skipping aggregation");
            Vec::new()
        } else {
            PlaceSearchAggregator::aggregate(client, &plan.queries).await?
        };

        let outcome = SearchOutcome::new(places, plan.warnings, plan.queries.len());

        log::info!(
            "Search completed: {} places, {} warnings, {} queries in {:.1}s",
            outcome.places.len(),
            outcome.warnings.len(),
            outcome.query_count,
            start_time.elapsed().as_secs_f64()
        );

        Ok(outcome)
    }
}
