//! HTML parsing and page summarization
//!
//! This module hands response bodies to the HTML parser and runs every
//! extractor over the resulting document tree:
//! - Page title
//! - Doctype and markup version
//! - Heading counts
//! - Login form presence
//! - Link classification

use crate::extract::{
    classify_links, detect_login_form, extract_headings, extract_html_version, extract_title,
    HtmlVersion, LinkCounts,
};
use scraper::Html;
use std::collections::BTreeMap;

/// Everything extracted from a parsed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    /// Trimmed `<title>` text; empty when the page has none
    pub title: String,

    pub html_version: HtmlVersion,

    /// Doctype declaration text, or the "no doctype" placeholder
    pub doc_type: String,

    /// `h1`..`h6` -> occurrence count, absent levels omitted
    pub heading_counts: BTreeMap<String, usize>,

    pub has_login_form: bool,

    pub links: LinkCounts,
}

/// Parses a response body into a document tree
///
/// The parser recovers from malformed markup the way browsers do, so this
/// never fails.
pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}

/// Runs all extractors against a parsed document
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `base_url` - The URL the page was fetched from, used to classify links
pub fn summarize(document: &Html, base_url: &str) -> PageSummary {
    let root = document.tree.root();
    let (html_version, doc_type) = extract_html_version(root);

    PageSummary {
        title: extract_title(root),
        html_version,
        doc_type,
        heading_counts: extract_headings(root),
        has_login_form: detect_login_form(root),
        links: classify_links(root, base_url),
    }
}

/// Parses HTML content and extracts its summary in one step
///
/// # Example
///
/// ```
/// use pagescope::crawler::parse_html;
///
/// let html = r#"<!DOCTYPE html><html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let summary = parse_html(html, "https://example.com/");
/// assert_eq!(summary.title, "Test");
/// assert_eq!(summary.links.internal, 1);
/// ```
pub fn parse_html(html: &str, base_url: &str) -> PageSummary {
    summarize(&parse_document(html), base_url)
}
