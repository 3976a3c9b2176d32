//! Integration tests for the fetch pipeline
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch, parse and extract cycle end-to-end.

use pagescope::config::{FetchConfig, DEFAULT_USER_AGENT};
use pagescope::output::NO_TITLE;
use pagescope::{analyze, crawl_url, FailureKind, FetchState, HtmlVersion};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
        <head>
            <title>Test Page</title>
        </head>
        <body>
            <h1>Main Heading</h1>
            <h2>Sub Heading</h2>
            <a href="/internal">Internal Link</a>
            <a href="https://external.com">External Link</a>
            <form id="login-form">
                <input type="text" name="username">
                <input type="password" name="password">
            </form>
        </body>
    </html>
"#;

fn html_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "text/html")
}

async fn serve(route: &str, response: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_valid_response() {
    let mock_server = serve("/", html_response(200, TEST_PAGE)).await;

    let result = crawl_url(&mock_server.uri(), &FetchConfig::default()).await;

    assert!(result.success, "unexpected error: {}", result.error_message);
    assert_eq!(result.url, mock_server.uri());
    assert_eq!(result.status_code, 200);
    assert_eq!(result.status_line, "200 OK");
    assert_eq!(result.state, FetchState::Done);
    assert!(result.failure.is_none());
    assert!(result.error_message.is_empty());

    assert_eq!(result.title, "Test Page");
    assert_eq!(result.html_version, Some(HtmlVersion::Html5));
    assert_eq!(result.doc_type, "html");
    assert!(result.has_login_form);
    assert_eq!(result.heading_counts.get("h1"), Some(&1));
    assert_eq!(result.heading_counts.get("h2"), Some(&1));
    assert_eq!(result.heading_counts.len(), 2);
    assert_eq!(result.internal_link_count, 1);
    assert_eq!(result.external_link_count, 1);
    assert_eq!(result.inaccessible_link_count, 0);
}

#[tokio::test]
async fn test_404_response() {
    let mock_server = serve("/missing", html_response(404, TEST_PAGE)).await;

    let url = format!("{}/missing", mock_server.uri());
    let result = crawl_url(&url, &FetchConfig::default()).await;

    assert!(!result.success);
    assert_eq!(result.status_code, 404);
    assert_eq!(result.status_line, "404 Not Found");
    assert_eq!(result.state, FetchState::StatusRejected);
    assert_eq!(result.failure, Some(FailureKind::NonSuccessStatus));
    assert_eq!(
        result.error_message,
        "Not Found - The requested page does not exist"
    );

    // The body is never parsed, so extractor fields keep their defaults.
    assert!(result.title.is_empty());
    assert!(result.html_version.is_none());
    assert!(result.doc_type.is_empty());
    assert!(result.heading_counts.is_empty());
    assert!(!result.has_login_form);
    assert_eq!(result.total_links(), 0);
}

#[tokio::test]
async fn test_server_error_responses() {
    let cases = [
        (500, "Internal Server Error - The server encountered an error"),
        (503, "Server Error - The server encountered an error"),
        (403, "Forbidden - Access to this resource is denied"),
        (429, "Client Error - There's an issue with the request"),
    ];

    for (status, expected) in cases {
        let mock_server = serve("/", html_response(status, "oops")).await;
        let result = crawl_url(&mock_server.uri(), &FetchConfig::default()).await;

        assert!(!result.success);
        assert_eq!(result.status_code, status);
        assert_eq!(result.error_message, expected, "status {}", status);
    }
}

/// Serves one 200 response whose body is shorter than its Content-Length,
/// then closes the connection
async fn serve_truncated_body() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;

        let response = "HTTP/1.1 200 OK\r\n\
            Content-Type: text/html\r\n\
            Content-Length: 1000\r\n\
            \r\n\
            <html><head><title>Cut";
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_truncated_body_is_parse_failure() {
    let url = serve_truncated_body().await;

    let result = crawl_url(&url, &FetchConfig::default()).await;

    assert!(!result.success);
    assert_eq!(result.state, FetchState::ParseFailed);
    assert_eq!(result.failure, Some(FailureKind::Parse));
    assert_eq!(result.status_code, 200);
    assert_eq!(result.status_line, "200 OK");
    assert!(
        result.error_message.starts_with("Failed to parse HTML"),
        "unexpected error: {}",
        result.error_message
    );

    // Extraction never ran.
    assert!(result.title.is_empty());
    assert!(result.html_version.is_none());
}

#[tokio::test]
async fn test_non_200_success_status_rejected() {
    let mock_server = serve("/", html_response(204, "")).await;

    let result = crawl_url(&mock_server.uri(), &FetchConfig::default()).await;

    assert!(!result.success);
    assert_eq!(result.status_code, 204);
    assert_eq!(result.error_message, "Unexpected status code");
}

#[tokio::test]
async fn test_no_title() {
    let mock_server = serve(
        "/",
        html_response(200, "<html><body><h1>No Title Page</h1></body></html>"),
    )
    .await;

    let result = crawl_url(&mock_server.uri(), &FetchConfig::default()).await;

    assert!(result.success, "unexpected error: {}", result.error_message);
    assert_eq!(result.title, NO_TITLE);
    assert_eq!(result.html_version, Some(HtmlVersion::Unknown));
    assert_eq!(result.doc_type, "No DOCTYPE found");
}

#[tokio::test]
async fn test_timeout_is_network_failure() {
    let mock_server = serve(
        "/slow",
        html_response(200, TEST_PAGE).set_delay(Duration::from_secs(5)),
    )
    .await;

    let config = FetchConfig::default().with_timeout(1);
    let url = format!("{}/slow", mock_server.uri());
    let result = crawl_url(&url, &config).await;

    assert!(!result.success);
    assert_eq!(result.state, FetchState::Failed);
    assert_eq!(result.failure, Some(FailureKind::Network));
    assert_eq!(result.status_code, 0);
    assert!(
        result.error_message.contains("timed out"),
        "unexpected error: {}",
        result.error_message
    );
}

#[tokio::test]
async fn test_default_headers_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(html_response(200, TEST_PAGE))
        .mount(&mock_server)
        .await;

    let result = crawl_url(&mock_server.uri(), &FetchConfig::default()).await;

    // Unmatched requests get wiremock's default 404.
    assert!(result.success, "unexpected error: {}", result.error_message);
}

#[tokio::test]
async fn test_configured_headers_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("x-trace", "pagescope"))
        .and(header("user-agent", "pagescope-test"))
        .respond_with(html_response(200, TEST_PAGE))
        .mount(&mock_server)
        .await;

    let config = FetchConfig::default()
        .with_header("X-Trace", "pagescope")
        .with_header("User-Agent", "pagescope-test");

    let result = crawl_url(&mock_server.uri(), &config).await;
    assert!(result.success, "unexpected error: {}", result.error_message);
}

#[tokio::test]
async fn test_redirect_followed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", "/new"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html_response(
            200,
            "<html><head><title>Moved</title></head></html>",
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/old", mock_server.uri());
    let result = crawl_url(&url, &FetchConfig::default()).await;

    assert!(result.success, "unexpected error: {}", result.error_message);
    assert_eq!(result.title, "Moved");
    assert_eq!(result.url, url);
}

#[tokio::test]
async fn test_links_classified_against_fetched_host() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let page = format!(
        r##"<html><body>
            <a href="/">Root</a>
            <a href="{base}/page">Absolute same host</a>
            <a href="https://external.com/page">External</a>
            <a href="mailto:someone@example.com">Mail</a>
            <a href="#top">Top</a>
            <a>Nothing</a>
        </body></html>"##,
        base = base_url
    );

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(200, &page))
        .mount(&mock_server)
        .await;

    let result = crawl_url(&base_url, &FetchConfig::default()).await;

    assert!(result.success, "unexpected error: {}", result.error_message);
    assert_eq!(result.internal_link_count, 2);
    assert_eq!(result.external_link_count, 1);
    assert_eq!(result.inaccessible_link_count, 3);
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let mock_server = serve("/", html_response(200, TEST_PAGE)).await;

    let first = crawl_url(&mock_server.uri(), &FetchConfig::default()).await;
    let second = crawl_url(&mock_server.uri(), &FetchConfig::default()).await;

    assert!(first.success);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_analyze_validates_then_fetches() {
    let mock_server = serve("/", html_response(200, TEST_PAGE)).await;

    let input = format!("  {}  ", mock_server.uri());
    let result = analyze(&input, &FetchConfig::default())
        .await
        .expect("mock server URL should validate");

    assert!(result.success, "unexpected error: {}", result.error_message);
    assert_eq!(result.url, mock_server.uri());
    assert_eq!(result.title, "Test Page");
}

#[tokio::test]
async fn test_analyze_rejects_invalid_input_without_fetching() {
    let mock_server = serve("/", html_response(200, TEST_PAGE)).await;

    assert!(analyze("invalid-url", &FetchConfig::default()).await.is_err());
    assert!(analyze("", &FetchConfig::default()).await.is_err());

    let received = mock_server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}
