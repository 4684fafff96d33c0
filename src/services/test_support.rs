// src/services/test_support.rs
// DOCUMENTATION: Shared wiremock fixtures for service tests
// PURPOSE: Mount canned Google Maps responses on a mock server

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::GoogleMapsClient;

pub const TEST_KEY: &str = "test_key";

pub fn client_for(server: &MockServer) -> GoogleMapsClient {
    GoogleMapsClient::with_base_url(TEST_KEY.to_string(), &server.uri())
}

/// Geocode body with a locality component and optional postcode localities
pub fn geocode_body(lat: f64, lng: f64, city: &str, localities: &[&str]) -> Value {
    json!({
        "status": "OK",
        "results": [{
            "address_components": [
                { "long_name": "10001", "types": ["postal_code"] },
                { "long_name": city, "types": ["locality", "political"] }
            ],
            "postcode_localities": localities,
            "geometry": { "location": { "lat": lat, "lng": lng } }
        }]
    })
}

pub async fn mount_geocode(server: &MockServer, postal_code: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("components", format!("postal_code:{}", postal_code)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a text search answering `query` with the given place ids
pub async fn mount_search(server: &MockServer, query: &str, place_ids: &[&str]) {
    let results: Vec<Value> = place_ids
        .iter()
        .map(|id| {
            json!({
                "place_id": id,
                "name": format!("Place {}", id),
                "rating": 4.2,
                "user_ratings_total": 17,
                "formatted_address": format!("{} Main St", id)
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": results
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a details response for `place_id` that must be hit exactly once
pub async fn mount_details(server: &MockServer, place_id: &str) {
    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("placeid", place_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "international_phone_number": "+1 212-555-0100",
                "opening_hours": { "weekday_text": ["Monday: 9:00 AM – 5:00 PM"] },
                "url": format!("https://maps.google.com/?cid={}", place_id)
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}
