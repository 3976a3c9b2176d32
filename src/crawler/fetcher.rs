//! HTTP fetcher and pipeline driver
//!
//! This module runs one page analysis from start to finish:
//! - Building an HTTP client from an explicit [`FetchConfig`]
//! - Sending a single GET request (no retries)
//! - Interpreting the response status
//! - Parsing the body and running the extractors
//!
//! Every failure is captured in the returned [`CrawlResult`]; nothing is
//! propagated to the caller.

use crate::config::FetchConfig;
use crate::crawler::error::FetchError;
use crate::crawler::parser::{parse_document, summarize};
use crate::output::CrawlResult;
use crate::state::FetchState;
use crate::url::normalize_url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{redirect::Policy, Client, Response, StatusCode};
use std::time::Duration;

/// Maximum number of redirects followed before giving up
const MAX_REDIRECTS: usize = 10;

/// Builds an HTTP client from the fetch configuration
///
/// The client carries the configured headers as defaults, a whole-request
/// timeout, and follows up to 10 redirects.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(FetchError::RequestConstruction)` - A header was invalid or the
///   client could not be initialized
///
/// # Example
///
/// ```
/// use pagescope::config::FetchConfig;
/// use pagescope::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default());
/// assert!(client.is_ok());
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();

    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            FetchError::RequestConstruction(format!("invalid header name '{}': {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            FetchError::RequestConstruction(format!("invalid value for header '{}': {}", name, e))
        })?;
        headers.insert(header_name, header_value);
    }

    Client::builder()
        .default_headers(headers)
        .timeout(config.timeout())
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(|e| FetchError::RequestConstruction(e.to_string()))
}

/// Fetches a page and analyzes it
///
/// # Pipeline
///
/// | State | Outcome |
/// |-------|---------|
/// | Requesting | client/request build error or network error → Failed |
/// | Received | status code and status line recorded |
/// | Received | status ≠ 200 → StatusRejected, body never read |
/// | Parsing | body read error → ParseFailed |
/// | Extracting | all extractors run → Done |
///
/// The input is normalized (an `https://` scheme is added when missing)
/// but not validated; see [`crate::analyze`] for the validating entry
/// point.
///
/// # Arguments
///
/// * `input` - The URL to fetch
/// * `config` - Timeout and request headers
///
/// # Returns
///
/// A fully populated [`CrawlResult`]. `success` is true only when a 200
/// response was received and parsed.
pub async fn crawl_url(input: &str, config: &FetchConfig) -> CrawlResult {
    let url = normalize_url(input);
    let mut result = CrawlResult::new(url.clone());

    tracing::info!(url = %url, "Fetching page");
    transition(&mut result, FetchState::Requesting);

    let response = match send_request(&url, config).await {
        Ok(response) => response,
        Err(err) => return fail(result, FetchState::Failed, err),
    };

    let status = response.status();
    result.status_code = status.as_u16();
    result.status_line = status.to_string();
    transition(&mut result, FetchState::Received);

    if status != StatusCode::OK {
        drop(response);
        return fail(
            result,
            FetchState::StatusRejected,
            FetchError::NonSuccessStatus {
                status: status.as_u16(),
            },
        );
    }

    transition(&mut result, FetchState::Parsing);
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            return fail(
                result,
                FetchState::ParseFailed,
                FetchError::Parse(format!("failed to read response body: {}", err)),
            )
        }
    };

    let document = parse_document(&body);
    transition(&mut result, FetchState::Extracting);
    result.apply_summary(summarize(&document, &url));

    transition(&mut result, FetchState::Done);
    result.success = result.state.is_success();

    tracing::info!(
        url = %result.url,
        status = result.status_code,
        title = %result.title,
        "Page analyzed"
    );

    result
}

/// Builds the client and request, then sends it
async fn send_request(url: &str, config: &FetchConfig) -> Result<Response, FetchError> {
    let client = build_http_client(config)?;

    let request = client
        .get(url)
        .build()
        .map_err(|e| FetchError::RequestConstruction(e.to_string()))?;

    client
        .execute(request)
        .await
        .map_err(|e| classify_send_error(e, config.timeout()))
}

fn classify_send_error(err: reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout)
    } else if err.is_builder() {
        FetchError::RequestConstruction(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}

/// Moves the result to `next`, which must be a legal successor
fn transition(result: &mut CrawlResult, next: FetchState) {
    debug_assert!(
        result.state.can_transition_to(next),
        "illegal fetch transition {} -> {}",
        result.state,
        next
    );
    if next.is_terminal() {
        tracing::debug!(url = %result.url, from = %result.state, to = %next, "Fetch finished");
    } else {
        tracing::debug!(url = %result.url, from = %result.state, to = %next, "Fetch state change");
    }
    result.state = next;
}

/// Records a terminal failure on the result
fn fail(mut result: CrawlResult, state: FetchState, err: FetchError) -> CrawlResult {
    debug_assert!(state.is_failure(), "{} is not a failure state", state);
    transition(&mut result, state);
    result.success = false;
    result.failure = Some(err.kind());
    result.error_message = err.to_string();

    tracing::warn!(
        url = %result.url,
        status = result.status_code,
        kind = %err.kind(),
        "Fetch failed: {}",
        result.error_message
    );

    result
}
