//! Configuration module for pagescope
//!
//! This module holds the explicit fetch configuration (timeout and request
//! headers) and loads it from an optional TOML file.
//!
//! # Example
//!
//! ```no_run
//! use pagescope::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pagescope.toml")).unwrap();
//! println!("Requests time out after {:?}", config.fetch.timeout());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, DEFAULT_ACCEPT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, load_settings};
pub use validation::validate_fetch_config;
