//! Error handling tests: transport failures, HTTP statuses, malformed bodies

use std::time::Duration;

use geo_client::{ClientConfig, GeoClient, GeoError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(base_url: &str) -> GeoClient {
    let config = ClientConfig::new().with_base_url(base_url);
    GeoClient::with_config(config)
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_esearch_server_error_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client.search_datasets("cancer", "gds", 10).await;
    match result {
        Err(GeoError::ApiError { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_esummary_not_found_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client.fetch_summaries(&ids(&["200012345"]), "gds").await;
    match result {
        Err(GeoError::ApiError { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_search_never_reaches_summary_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client.search_and_summarize("cancer", "gds", 10).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_esearch_malformed_json_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client.search_datasets("cancer", "gds", 10).await;
    assert!(matches!(result, Err(GeoError::JsonError(_))));
}

#[tokio::test]
async fn test_esummary_malformed_xml_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<eSummaryResult><DocSum><Id>1</Broken>"),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client.fetch_summaries(&ids(&["1"]), "gds").await;
    assert!(matches!(result, Err(GeoError::XmlError(_))));
}

#[tokio::test]
async fn test_request_timeout_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"esearchresult": {"idlist": []}}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_millis(50));
    let client = GeoClient::with_config(config);

    let result = client.search_datasets("cancer", "gds", 10).await;
    match result {
        Err(GeoError::RequestError(e)) => assert!(e.is_timeout()),
        other => panic!("expected RequestError, got {:?}", other),
    }
}
