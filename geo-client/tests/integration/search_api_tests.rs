//! Integration tests for the ESearch operation against a mocked E-utilities server

use geo_client::{ClientConfig, GeoClient, GeoError};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: JSON response from ESearch
fn esearch_json_response(ids: &[&str], total_count: usize) -> String {
    let id_list: Vec<String> = ids.iter().map(|id| format!("\"{}\"", id)).collect();
    format!(
        r#"{{
            "esearchresult": {{
                "count": "{}",
                "retmax": "{}",
                "idlist": [{}]
            }}
        }}"#,
        total_count,
        ids.len(),
        id_list.join(",")
    )
}

/// Helper: create a GeoClient pointing at the mock server
fn create_test_client(base_url: &str) -> GeoClient {
    let config = ClientConfig::new().with_base_url(base_url);
    GeoClient::with_config(config)
}

#[tokio::test]
async fn test_search_datasets_returns_identifiers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "gds"))
        .and(query_param("term", "breast AND cancer"))
        .and(query_param("retmax", "20"))
        .and(query_param("retmode", "json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(esearch_json_response(&["200012345", "200067890"], 2)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let ids = client
        .search_datasets("breast AND cancer", "gds", 20)
        .await
        .unwrap();

    assert_eq!(ids, vec!["200012345", "200067890"]);
}

#[tokio::test]
async fn test_search_datasets_missing_idlist_yields_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"esearchresult": {"count": "0"}}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let ids = client.search_datasets("no such thing", "gds", 10).await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_search_datasets_ncbi_error_field_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"ERROR": "Empty term and query_key - nothing todo"}}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client.search_datasets("", "gds", 10).await;
    match result {
        Err(GeoError::ApiError { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("nothing todo"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_datasets_sends_identification_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("tool", "test-client"))
        .and(query_param("email", "test@example.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(esearch_json_response(&["1"], 1)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_tool("test-client")
        .with_email("test@example.com");
    let client = GeoClient::with_config(config);

    let ids = client.search_datasets("lymphoma", "gds", 10).await.unwrap();
    assert_eq!(ids, vec!["1"]);
}

#[tokio::test]
async fn test_search_datasets_encodes_term() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", "breast OR cancer"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(esearch_json_response(&["42"], 1)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let ids = client
        .search_datasets("breast OR cancer", "gds", 10)
        .await
        .unwrap();
    assert_eq!(ids, vec!["42"]);
}

#[tokio::test]
#[traced_test]
async fn test_search_datasets_warns_when_cap_exceeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(esearch_json_response(&["1", "2"], 5000)),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let ids = client.search_datasets("cancer", "gds", 2).await.unwrap();
    assert_eq!(ids.len(), 2);
    assert!(logs_contain("More records match than the requested cap"));
}
