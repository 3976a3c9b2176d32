//! pagescope: a single-page web analyzer
//!
//! This crate fetches one web page and summarizes it: title, doctype and
//! markup version, heading counts, whether it has a login form, and how its
//! links split into internal, external and inaccessible ones.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for pagescope operations
///
/// Fetch failures are not represented here; they are recorded on the
/// returned [`CrawlResult`] instead.
#[derive(Debug, Error)]
pub enum PageScopeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// URL-specific errors, raised before any request is made
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Please enter a URL!")]
    Empty,

    #[error("Please enter a valid URL (must start with http:// or https://): {0}")]
    Invalid(String),
}

/// Result type alias for pagescope operations
pub type Result<T> = std::result::Result<T, PageScopeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, FetchConfig};
pub use crawler::{crawl_url, FailureKind};
pub use extract::HtmlVersion;
pub use output::CrawlResult;
pub use state::FetchState;
pub use url::{is_valid_url, normalize_url};

/// Validates user input, then fetches and analyzes the page
///
/// Validation runs on the raw input, before normalization. Invalid input is
/// the only error returned; every fetch failure is reported inside the
/// [`CrawlResult`].
///
/// # Example
///
/// ```no_run
/// use pagescope::{analyze, FetchConfig};
///
/// # async fn example() -> pagescope::Result<()> {
/// let result = analyze("doruk.com", &FetchConfig::default()).await?;
/// println!("{}: {}", result.url, result.title);
/// # Ok(())
/// # }
/// ```
pub async fn analyze(input: &str, config: &FetchConfig) -> Result<CrawlResult> {
    let input = crate::url::validate_input(input)?;
    Ok(crawl_url(input, config).await)
}
