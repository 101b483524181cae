use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use talkdata_testing::TempConfig;
use talkdata_testing::fixtures::{large_body, revenue_chart_body, sales_by_region_body};

/// A `talkdata` command isolated from the user's config and environment.
#[allow(deprecated)]
fn talkdata(config: &TempConfig) -> Command {
    let mut cmd = Command::cargo_bin("talkdata").unwrap();
    cmd.env("TALKDATA_CONFIG", config.path())
        .env_remove("TALKDATA_API_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.base_url())
}

#[test]
fn test_examples_lists_presets() {
    let config = TempConfig::missing();

    talkdata(&config)
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Show me sales by region"));
}

#[test]
fn test_ask_prints_sql_and_table() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/query")
            .json_body(json!({"question": "Show me sales by region"}));
        then.status(200).json_body(sales_by_region_body());
    });
    let config = TempConfig::missing();

    talkdata(&config)
        .args(["ask", "Show", "me", "sales", "by", "region"])
        .args(["--api-url", &api_url(&server)])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated SQL:\n  SELECT region, SUM(sales) AS sales FROM orders GROUP BY region\n",
        ))
        .stdout(predicate::str::contains("Results (1 rows)"))
        .stdout(predicate::str::contains("East"))
        .stdout(predicate::str::contains("Key Insights:").not());

    mock.assert();
}

#[test]
fn test_ask_failure_exits_nonzero_with_backend_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(500).json_body(json!({"error": "ambiguous column"}));
    });
    let config = TempConfig::missing();

    talkdata(&config)
        .args(["ask", "which one?", "--api-url", &api_url(&server)])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Error: ambiguous column"));
}

#[test]
fn test_ask_failure_without_message_uses_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(503);
    });
    let config = TempConfig::missing();

    talkdata(&config)
        .args(["ask", "anything", "--api-url", &api_url(&server)])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: An error occurred"));
}

#[test]
fn test_ask_json_output() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(200).json_body(revenue_chart_body());
    });
    let config = TempConfig::missing();

    let output = talkdata(&config)
        .args(["ask", "Revenue by category", "--format", "json"])
        .args(["--api-url", &api_url(&server)])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let response = &value["content"]["response"];
    assert_eq!(value["content"]["state"], "succeeded");
    assert_eq!(response["chart"]["kind"], "bar");
    assert_eq!(response["chart"]["categories"], json!(["A", "B"]));
    assert_eq!(response["table"]["columns"], json!(["category", "revenue"]));
    assert!(value.get("badge").is_none());
}

#[test]
fn test_ask_csv_is_capped() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/query");
        then.status(200).json_body(large_body(60, 120));
    });
    let config = TempConfig::missing();

    let output = talkdata(&config)
        .args(["ask", "all products", "--csv", "--api-url", &api_url(&server)])
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("id,name\n0,item-0\n"));
    assert_eq!(text.lines().count(), 51);
}

#[test]
fn test_blank_question_is_rejected() {
    let config = TempConfig::missing();

    talkdata(&config)
        .args(["ask", "   ", "--api-url", "http://127.0.0.1:9/api"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Question must not be empty"));
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
            .json_body(json!({"tables": ["customers", "orders"]}));
    });
    let config = TempConfig::missing();

    talkdata(&config)
        .args(["health", "--api-url", &api_url(&server)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend is up"))
        .stdout(predicate::str::contains("Status: ok"));

    talkdata(&config)
        .args(["tables", "--api-url", &api_url(&server)])
        .assert()
        .success()
        .stdout("customers\norders\n");
}

#[test]
fn test_api_base_from_config_file() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/backend/health");
        then.status(200).json_body(json!({"status": "ok"}));
    });
    let config = TempConfig::with_contents(&format!(
        "api_base = \"/backend\"\norigin = \"{}\"\n",
        server.base_url()
    ));

    talkdata(&config).arg("health").assert().success();

    mock.assert();
}

#[test]
fn test_env_api_url_beats_config() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/tables");
        then.status(200).json_body(json!({"tables": []}));
    });
    let config = TempConfig::with_contents("api_base = \"http://127.0.0.1:9/api\"\n");

    talkdata(&config)
        .arg("tables")
        .env("TALKDATA_API_URL", api_url(&server))
        .assert()
        .success()
        .stdout(predicate::str::contains("No tables available"));

    mock.assert();
}

#[test]
fn test_unreachable_backend_fails_health() {
    let config = TempConfig::missing();

    talkdata(&config)
        .args(["health", "--api-url", "http://127.0.0.1:9/api", "--timeout", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not reachable"));
}
