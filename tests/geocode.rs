use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sat_spotter::geocode::{HttpGeocoder, ReverseGeocoder, UNKNOWN_PLACE};

fn geocoder(server: &MockServer) -> HttpGeocoder {
    HttpGeocoder::new(reqwest::Client::new(), &server.uri(), Duration::from_secs(5))
}

#[tokio::test]
async fn first_candidate_name_is_consumed() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "features": [
            { "properties": { "name": "Kabinda" } },
            { "properties": { "name": "Lomami" } }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "-6.25"))
        .and(query_param("lon", "24.25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    assert_eq!(geocoder(&server).place_name(-6.25, 24.25).await, "Kabinda");
}

#[tokio::test]
async fn zero_candidates_yield_the_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "features": [] })))
        .mount(&server)
        .await;

    assert_eq!(geocoder(&server).place_name(0.0, 0.0).await, UNKNOWN_PLACE);
}

#[tokio::test]
async fn nameless_candidate_yields_the_sentinel() {
    let server = MockServer::start().await;
    let body = serde_json::json!({ "features": [ { "properties": {} } ] });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    assert_eq!(geocoder(&server).place_name(0.0, 0.0).await, UNKNOWN_PLACE);
}

#[tokio::test]
async fn service_failure_never_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert_eq!(geocoder(&server).place_name(51.0, 101.0).await, UNKNOWN_PLACE);
}
