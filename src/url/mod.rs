//! URL handling module for pagescope
//!
//! This module provides input validation, normalization of user-supplied
//! addresses, and the host key used when classifying links.

mod domain;
mod normalize;
mod validate;

// Re-export main functions
pub use domain::extract_domain;
pub use normalize::normalize_url;
pub use validate::{is_valid_url, validate_input};
