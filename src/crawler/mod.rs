//! Crawler module for single-page fetching and analysis
//!
//! This module contains the fetch pipeline, including:
//! - HTTP fetching with a bounded timeout
//! - Status interpretation
//! - HTML parsing and extractor orchestration

mod error;
mod fetcher;
mod parser;

pub use error::{status_description, FailureKind, FetchError};
pub use fetcher::{build_http_client, crawl_url};
pub use parser::{parse_document, parse_html, summarize, PageSummary};
