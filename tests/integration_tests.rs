//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: HTTP pages → paginator → frequency table / collection

use pretty_assertions::assert_eq;
use serde_json::json;
use seshat_client::http::{HttpClient, HttpClientConfig};
use seshat_client::types::BackoffType;
use seshat_client::{get_frequencies, Collection, Error, Settings};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .max_retries(1)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(5),
            Duration::from_millis(50),
        )
        .build();
    HttpClient::with_config(config).unwrap()
}

/// Roads over two pages, ProfessionalSoldiers on one
async fn mount_fixture(server: &MockServer) {
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/sc/roads/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 4,
            "next": null,
            "previous": format!("{base}/sc/roads/"),
            "results": [
                {"id": 3, "road": "present", "year_from": 0, "year_to": null},
                {
                    "id": 4,
                    "road": "present",
                    "year_from": null,
                    "year_to": null,
                    "polity": {"id": 7, "start_year": 3, "end_year": 20}
                },
            ],
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sc/roads/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 4,
            "next": format!("{base}/sc/roads/?page=2"),
            "previous": null,
            "results": [
                {"id": 1, "road": "present", "year_from": -5, "year_to": -4},
                {"id": 2, "road": "absent", "year_from": -5, "year_to": 4},
            ],
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sc/professional-soldiers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"id": 10, "professional_soldier": "present", "year_from": -1, "year_to": 1},
                {"id": 11, "professional_soldier": "present", "year_from": 100, "year_to": 200},
            ],
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Frequency Aggregation
// ============================================================================

#[tokio::test]
async fn test_frequencies_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server).await;

    let client = client_for(&mock_server);
    let years: Vec<i64> = (-5..=4).collect();

    let table = get_frequencies(
        &client,
        &["Roads", "ProfessionalSoldiers"],
        &years,
        "present",
    )
    .await
    .unwrap();

    assert_eq!(table.shape(), (10, 2));
    assert_eq!(table.class_names(), ["Roads", "ProfessionalSoldiers"]);
    assert_eq!(
        table.column("Roads").unwrap(),
        vec![1, 1, 0, 0, 0, 1, 0, 0, 1, 1]
    );
    assert_eq!(
        table.column("ProfessionalSoldiers").unwrap(),
        vec![0, 0, 0, 0, 1, 1, 1, 0, 0, 0]
    );
    assert_eq!(table.get(0, "Roads"), Some(1));
    assert_eq!(table.total(), 8);
}

#[tokio::test]
async fn test_frequencies_to_parquet() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server).await;

    let client = client_for(&mock_server);
    let years: Vec<i64> = (-5..=4).collect();
    let table = get_frequencies(&client, &["Roads", "ProfessionalSoldiers"], &years, "present")
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let rows = table.write_parquet(dir.path().join("freq.parquet")).unwrap();
    assert_eq!(rows, 10);
}

#[tokio::test]
async fn test_frequencies_unknown_class_fetches_nothing() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = get_frequencies(&client, &["Unicorns"], &[0], "present")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownClass { ref class_name } if class_name == "Unicorns"));
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_frequencies_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sc/roads/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = get_frequencies(&client, &["Roads"], &[0], "present")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

// ============================================================================
// Collection Operations
// ============================================================================

#[tokio::test]
async fn test_collection_all_deduplicated() {
    let mock_server = MockServer::start().await;
    mount_fixture(&mock_server).await;

    let client = client_for(&mock_server);
    let roads = Collection::open(&client, "Roads").unwrap();

    let records = roads.all().await.unwrap();
    let ids: Vec<_> = records.iter().filter_map(|r| r.id()).cloned().collect();
    assert_eq!(ids, vec![json!(1), json!(2), json!(3), json!(4)]);
}

#[tokio::test]
async fn test_collection_get_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/general/polity-suprapolities/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "polity_suprapolity": "Achaemenid Empire",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let collection = Collection::open(&client, "PolitySuprapolities").unwrap();
    let record = collection.get(42).await.unwrap();

    assert_eq!(
        record.get("polity_suprapolity"),
        Some(&json!("Achaemenid Empire"))
    );
}

// ============================================================================
// Settings
// ============================================================================

#[tokio::test]
async fn test_settings_drive_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/core/polities/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 373,
            "next": null,
            "previous": null,
            "results": [],
        })))
        .mount(&mock_server)
        .await;

    let yaml = format!(
        "base_url: \"{}\"\nhttp:\n  max_retries: 0\n",
        mock_server.uri()
    );
    let settings = Settings::from_yaml_str(&yaml).unwrap();
    let client = HttpClient::with_config(settings.http_client_config()).unwrap();

    let polities = Collection::open(&client, "Polities").unwrap();
    assert_eq!(polities.count().await.unwrap(), 373);
}
