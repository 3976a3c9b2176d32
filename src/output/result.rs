//! The record produced by one page analysis

use crate::crawler::{FailureKind, PageSummary};
use crate::extract::HtmlVersion;
use crate::state::FetchState;
use std::collections::BTreeMap;

/// Title reported when the page has no usable `<title>`
pub const NO_TITLE: &str = "No title found";

/// Outcome of analyzing a single page
///
/// Built fresh for every call and filled in stage by stage. It owns all of
/// its data; nothing here points back into the parsed document or the
/// network connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlResult {
    /// The normalized URL that was fetched
    pub url: String,

    /// HTTP status code, 0 if no response arrived
    pub status_code: u16,

    /// Status text paired with the code, e.g. "404 Not Found"
    pub status_line: String,

    pub title: String,

    /// Markup version; `None` when extraction never ran
    pub html_version: Option<HtmlVersion>,

    pub doc_type: String,

    /// `h1`..`h6` -> count, levels with no occurrences absent
    pub heading_counts: BTreeMap<String, usize>,

    pub has_login_form: bool,

    pub internal_link_count: usize,
    pub external_link_count: usize,
    pub inaccessible_link_count: usize,

    /// Empty on success
    pub error_message: String,

    pub success: bool,

    /// State the pipeline stopped in
    pub state: FetchState,

    /// What went wrong, if anything
    pub failure: Option<FailureKind>,
}

impl CrawlResult {
    /// Creates an empty result for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: 0,
            status_line: String::new(),
            title: String::new(),
            html_version: None,
            doc_type: String::new(),
            heading_counts: BTreeMap::new(),
            has_login_form: false,
            internal_link_count: 0,
            external_link_count: 0,
            inaccessible_link_count: 0,
            error_message: String::new(),
            success: false,
            state: FetchState::NotStarted,
            failure: None,
        }
    }

    /// Copies extractor output into the result
    ///
    /// An empty title is replaced with [`NO_TITLE`].
    pub fn apply_summary(&mut self, summary: PageSummary) {
        self.title = if summary.title.is_empty() {
            NO_TITLE.to_string()
        } else {
            summary.title
        };
        self.html_version = Some(summary.html_version);
        self.doc_type = summary.doc_type;
        self.heading_counts = summary.heading_counts;
        self.has_login_form = summary.has_login_form;
        self.internal_link_count = summary.links.internal;
        self.external_link_count = summary.links.external;
        self.inaccessible_link_count = summary.links.inaccessible;
    }

    /// Total number of headings across all levels
    pub fn headings_total(&self) -> usize {
        self.heading_counts.values().sum()
    }

    /// Total number of anchors classified
    pub fn total_links(&self) -> usize {
        self.internal_link_count + self.external_link_count + self.inaccessible_link_count
    }
}
