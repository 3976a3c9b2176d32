use crate::config::types::{Config, FetchConfig};
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};

/// Upper bound for the request timeout, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates fetch configuration
pub fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    for (name, value) in &config.headers {
        validate_header(name, value)?;
    }

    Ok(())
}

/// Validates a single header name/value pair
fn validate_header(name: &str, value: &str) -> Result<(), ConfigError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ConfigError::InvalidHeader(format!("Invalid header name '{}': {}", name, e)))?;

    HeaderValue::from_str(value).map_err(|e| {
        ConfigError::InvalidHeader(format!("Invalid value for header '{}': {}", name, e))
    })?;

    Ok(())
}
