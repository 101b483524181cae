use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use talkdata_sdk::types::ChartData;
use talkdata_sdk::{ApiBase, Client, ClientConfig, Error, QueryBackend};
use talkdata_testing::fixtures::{revenue_chart_body, sales_by_region_body};

fn client_for(server: &MockServer) -> Client {
    let api_base = ApiBase::resolve("/api", &server.base_url()).unwrap();
    Client::new(ClientConfig::new(api_base)).unwrap()
}

#[test]
fn test_query_posts_question_and_decodes_answer() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/query")
            .json_body(json!({"question": "Show me sales by region"}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(sales_by_region_body());
    });

    let response = client_for(&server).ask("Show me sales by region").unwrap();

    mock.assert();
    assert_eq!(
        response.sql_query,
        "SELECT region, SUM(sales) AS sales FROM orders GROUP BY region"
    );
    assert_eq!(response.row_count(), 1);
    assert!(response.chart_data.is_none());
    assert_eq!(response.results[0]["region"], json!("East"));
}

#[test]
fn test_query_decodes_bar_chart() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(200).json_body(revenue_chart_body());
    });

    let response = client_for(&server).ask("Revenue by category").unwrap();

    let Some(ChartData::Bar(bar)) = response.chart_data else {
        panic!("expected a bar chart");
    };
    assert_eq!(bar.labels, vec!["A", "B"]);
    assert_eq!(bar.values, vec![10.0, 20.0]);
}

#[test]
fn test_backend_error_message_surfaces() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(500).json_body(json!({"error": "ambiguous column"}));
    });

    let err = client_for(&server).ask("which one?").unwrap_err();

    assert!(matches!(err, Error::Http { status: 500, .. }));
    assert_eq!(err.error_info().message, "ambiguous column");
}

#[test]
fn test_empty_error_body_uses_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(502);
    });

    let err = client_for(&server).ask("anything").unwrap_err();

    assert!(matches!(
        err,
        Error::Http {
            status: 502,
            message: None
        }
    ));
    assert_eq!(err.error_info().message, "An error occurred");
}

#[test]
fn test_validation_error_from_backend() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(400).json_body(json!({"error": "Question is required"}));
    });

    let err = client_for(&server).ask("").unwrap_err();

    assert_eq!(err.error_info().message, "Question is required");
}

#[test]
fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(200).body("<html>gateway</html>");
    });

    let err = client_for(&server).ask("anything").unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(err.error_info().message, "An error occurred");
}

#[test]
fn test_unreachable_backend_is_transport_error() {
    // Port 9 (discard) is closed on test machines.
    let api_base = ApiBase::resolve("http://127.0.0.1:9/api", "").unwrap();
    let config = ClientConfig::new(api_base).with_timeout(Some(Duration::from_secs(2)));
    let client = Client::new(config).unwrap();

    let err = client.ask("anything").unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.error_info().message, "An error occurred");
}

#[test]
fn test_health_and_tables() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(json!({"status": "ok"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/tables");
        then.status(200)
            .json_body(json!({"tables": ["customers", "orders", "products"]}));
    });

    let client = client_for(&server);

    assert!(client.health().unwrap().is_ok());
    assert_eq!(
        client.tables().unwrap().tables,
        vec!["customers", "orders", "products"]
    );
}

#[test]
fn test_client_usable_as_trait_object() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(200).json_body(sales_by_region_body());
    });

    let backend: Box<dyn QueryBackend> = Box::new(client_for(&server));
    let request = talkdata_sdk::types::QueryRequest::new("Show me sales by region");

    assert!(backend.query(&request).is_ok());
    mock.assert();
}
