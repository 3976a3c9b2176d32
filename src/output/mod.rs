//! Output module for page analysis results
//!
//! This module handles:
//! - The result record produced by each analysis
//! - Printing a report to the console
//! - Writing a markdown report to disk

mod console;
mod markdown;
mod result;

pub use console::{format_result, print_result};
pub use markdown::{format_markdown_report, write_markdown_report};
pub use result::{CrawlResult, NO_TITLE};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
