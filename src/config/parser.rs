use crate::config::types::Config;
use crate::config::validation::{validate, validate_fetch_config};
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use pagescope::config::load_config;
///
/// let config = load_config(Path::new("pagescope.toml")).unwrap();
/// println!("Timeout: {:?}", config.fetch.timeout());
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so two runs can be told apart by the settings they
/// used.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Loads the configuration file (if any) and applies a timeout override
///
/// Without a path the defaults are used. The override is validated the same
/// way a timeout read from a file is.
///
/// # Returns
///
/// * `Ok(Config)` - The effective configuration
/// * `Err(ConfigError)` - The file failed to load, or the override is out of
///   range
pub fn load_settings(
    path: Option<&Path>,
    timeout_secs: Option<u64>,
) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(timeout_secs) = timeout_secs {
        config.fetch = config.fetch.with_timeout(timeout_secs);
        validate_fetch_config(&config.fetch)?;
    }

    Ok(config)
}
