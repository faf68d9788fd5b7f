use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Wiki base URL is an http(s) origin
/// - Wiki timeout, when set, is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Wiki validation
    let base_url = config.wiki.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "wiki.base_url cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "wiki.base_url must start with http:// or https://, got '{}'",
            base_url
        )));
    }
    if config.wiki.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "wiki.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
