//! Integration tests for the `publish` command against a mocked dashboard

use quality_publish_lib::Host;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WORKSPACE: &str = "tests/fixtures/build";

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn publish_args(dashboard_url: &str, extra: &[&'static str]) -> Vec<String> {
    let mut args: Vec<String> = [
        "quality-publish",
        "publish",
        "--workspace",
        WORKSPACE,
        "--junit",
        "**/surefire-reports/TEST-*.xml",
        "--jacoco",
        "**/jacoco.xml",
        "--dashboard-url",
        dashboard_url,
        "--nice-name",
        "ci-main",
        "--job-name",
        "team/service",
        "--job-url",
        "https://ci.example.com/job/team/job/service/",
        "--build-number",
        "42",
        "--build-url",
        "https://ci.example.com/job/team/job/service/42/",
        "--instance-url",
        "https://ci.example.com/",
        "--started-by",
        "alex",
        "--start-time",
        "1709287930000",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    args.extend(extra.iter().map(ToString::to_string));
    args
}

#[tokio::test]
async fn test_publish_registers_build_then_posts_metrics() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/build"))
        .and(header("authorization", "apiToken s3cret"))
        .and(body_partial_json(json!({
            "number": "42",
            "jobName": "team/service",
            "niceName": "ci-main",
            "buildStatus": "Success",
            "startTime": 1_709_287_930_000_i64,
            "startedBy": "alex",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("\"65e1a2b3c4\""))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/quality/static-analysis"))
        .and(header("authorization", "apiToken s3cret"))
        .and(body_partial_json(json!({
            "projectName": "team/service",
            "projectId": "team/service",
            "projectVersion": "42",
            "serverUrl": "https://ci.example.com/",
            "niceName": "ci-main",
            "type": "StaticAnalysis",
            "timestamp": 1_709_287_930_000_i64,
            "hygieiaId": "65e1a2b3c4",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("\"65e1a2b3c5\""))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/api", server.uri());
    let mut host = TestHost::new();
    quality_publish_lib::run(&mut host, publish_args(&url, &["--token", "s3cret"])).await.unwrap();

    let output = host.output_str();
    assert!(output.contains("Analysing 2 junit file(s)"), "{output}");
    assert!(output.contains("Produced 10 metrics"), "{output}");
    assert!(output.contains("Publishing 10 metrics to"), "{output}");
    assert!(output.contains("Published complete metric data. 201 Created"), "{output}");
    assert!(host.error_str().is_empty(), "{}", host.error_str());
    assert_eq!(host.exit_code, None);

    let requests = server.received_requests().await.unwrap();
    let quality: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let metrics = quality["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 10);

    let line_coverage = metrics.iter().find(|m| m["name"] == "line_coverage").unwrap();
    assert_eq!(line_coverage, &json!({"name": "line_coverage", "value": "80.0", "formattedValue": "80.000", "status": "Ok"}));
}

#[tokio::test]
async fn test_publish_rejected_metrics_are_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/build"))
        .respond_with(ResponseTemplate::new(201).set_body_string("abc"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/quality/static-analysis"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid metrics"))
        .expect(2)
        .mount(&server)
        .await;

    let url = format!("{}/api", server.uri());
    let mut host = TestHost::new();
    quality_publish_lib::run(&mut host, publish_args(&url, &[])).await.unwrap();

    let errors = host.error_str();
    assert!(errors.contains("Failed publishing complete metric data. 400 Bad Request: invalid metrics"), "{errors}");
    assert_eq!(host.exit_code, None);

    let mut host = TestHost::new();
    quality_publish_lib::run(&mut host, publish_args(&url, &["--error-if-rejected"])).await.unwrap();
    assert_eq!(host.exit_code, Some(1));
}

#[tokio::test]
async fn test_publish_without_registration_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/build"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/quality/static-analysis"))
        .and(body_partial_json(json!({"hygieiaId": ""})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/api/", server.uri());
    let mut host = TestHost::new();
    quality_publish_lib::run(&mut host, publish_args(&url, &[])).await.unwrap();

    assert!(host.error_str().contains("Failed registering build. 500 Internal Server Error"), "{}", host.error_str());
    assert!(host.output_str().contains("Published complete metric data."));
}

#[tokio::test]
async fn test_publish_unreachable_dashboard_fails() {
    // A dropped wiremock server returns to a shared pool and keeps answering,
    // so use a port that is genuinely closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let url = format!("http://127.0.0.1:{port}/api");

    let mut host = TestHost::new();
    let result = quality_publish_lib::run(&mut host, publish_args(&url, &[])).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_publish_rejects_invalid_dashboard_url() {
    let mut host = TestHost::new();
    let result = quality_publish_lib::run(&mut host, publish_args("ftp://dashboard.example.com", &[])).await;
    assert!(result.is_err());

    // nothing is analysed before the dashboard settings are known to be usable
    assert!(!host.output_str().contains("Analysing"));
}
