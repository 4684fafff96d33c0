// src/handlers/search.rs
// DOCUMENTATION: HTTP handlers for place searches
// PURPOSE: Parse the search form, run the search, return JSON or CSV

use crate::errors::ScrapeError;
use crate::models::SearchForm;
use crate::services::{export_csv, GoogleMapsClient, SearchService, EXPORT_FILE_NAME};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};

/// GET /search
/// Run a search and return the results table as JSON
pub async fn search_places(
    client: web::Data<GoogleMapsClient>,
    query: web::Query<SearchForm>,
) -> Result<impl Responder, ScrapeError> {
    let outcome = SearchService::run(client.get_ref(), &query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /search/export
/// Run a search and return the results table as a CSV attachment.
/// No places means no download: 204 No Content.
pub async fn export_places(
    client: web::Data<GoogleMapsClient>,
    query: web::Query<SearchForm>,
) -> Result<impl Responder, ScrapeError> {
    let outcome = SearchService::run(client.get_ref(), &query.into_inner()).await?;

    for warning in &outcome.warnings {
        log::warn!("Export warning: {}", warning);
    }

    if outcome.places.is_empty() {
        log::info!("Export skipped: {}", outcome.notice.as_deref().unwrap_or_default());
        return Ok(HttpResponse::NoContent().finish());
    }

    let body = export_csv(&outcome.places)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(EXPORT_FILE_NAME.to_string())],
        })
        .body(body))
}

/// Configuration for search routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/search")
            .route("", web::get().to(search_places))
            .route("/export", web::get().to(export_places)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{client_for, mount_details, mount_search, TEST_KEY};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use wiremock::MockServer;

    #[actix_web::test]
    async fn test_conflict_returns_bad_request() {
        let server = MockServer::start().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client_for(&server)))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/search?zip=10001&area=SoHo%20New%20York")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INPUT_CONFLICT");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_area_search_returns_table() {
        let server = MockServer::start().await;
        mount_search(&server, "construction Notting Hill London", &["A", "B"]).await;
        mount_details(&server, "A").await;
        mount_details(&server, "B").await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client_for(&server)))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/search?area=Notting+Hill+London")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["query_count"], 1);
        assert_eq!(body["places"].as_array().unwrap().len(), 2);
        assert_eq!(body["places"][0]["Place"], "Place A");
        assert!(body["places"][0].get("place_id").is_none());
        assert!(body["notice"].is_null());
    }

    #[actix_web::test]
    async fn test_export_sets_attachment_headers() {
        let server = MockServer::start().await;
        mount_search(&server, "plumbing Soho London", &["A", "B"]).await;
        mount_details(&server, "A").await;
        mount_details(&server, "B").await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client_for(&server)))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/search/export?area=Soho%20London&keyword=plumbing")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers().clone();
        assert_eq!(
            headers.get("content-type").unwrap().to_str().unwrap(),
            "text/csv; charset=utf-8"
        );
        assert!(headers
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("Scraped_Places.csv"));

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("Place,Ratings,TotalRatings,Address,Phone Number,Opening Hours,URL"));
        assert_eq!(csv::Reader::from_reader(text.as_bytes()).records().count(), 2);
        assert!(!text.contains(TEST_KEY));
    }

    #[actix_web::test]
    async fn test_export_without_results_has_no_attachment() {
        let server = MockServer::start().await;
        mount_search(&server, "construction Nowhere", &[]).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client_for(&server)))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/search/export?area=Nowhere")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.headers().get("content-disposition").is_none());
    }
}
