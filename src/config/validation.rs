//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic parsing. Pure function,
//! returns every violation rather than stopping at the first.

use thiserror::Error;

use crate::config::schema::FaucetConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("rpc.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("rate_limit.max_requests must be at least 1")]
    ZeroMaxRequests,

    #[error("rate_limit.window_ms must be greater than zero")]
    ZeroWindow,

    #[error("confirmation.poll_interval_ms must be greater than zero")]
    ZeroPollInterval,

    #[error("confirmation.timeout_ms must be at least poll_interval_ms")]
    TimeoutBelowInterval,

    #[error("store.path must not be empty")]
    EmptyStorePath,
}

/// Validate a parsed configuration, collecting all violations.
pub fn validate_config(config: &FaucetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let urls = [
        ("rpc.devnet_url", &config.rpc.devnet_url),
        ("rpc.testnet_url", &config.rpc.testnet_url),
    ];
    for (field, value) in urls {
        if let Err(e) = url::Url::parse(value) {
            errors.push(ValidationError::InvalidUrl {
                field,
                reason: e.to_string(),
            });
        }
    }

    if config.rpc.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.rate_limit.max_requests == 0 {
        errors.push(ValidationError::ZeroMaxRequests);
    }
    if config.rate_limit.window_ms == 0 {
        errors.push(ValidationError::ZeroWindow);
    }
    if config.confirmation.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }
    if config.confirmation.timeout_ms < config.confirmation.poll_interval_ms {
        errors.push(ValidationError::TimeoutBelowInterval);
    }
    if config.store.path.trim().is_empty() {
        errors.push(ValidationError::EmptyStorePath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&FaucetConfig::default()).is_ok());
    }

    #[test]
    fn all_violations_are_collected() {
        let mut config = FaucetConfig::default();
        config.rpc.devnet_url = "not a url".to_string();
        config.rate_limit.max_requests = 0;
        config.store.path = "  ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroMaxRequests));
        assert!(errors.contains(&ValidationError::EmptyStorePath));
    }

    #[test]
    fn timeout_must_cover_at_least_one_poll() {
        let mut config = FaucetConfig::default();
        config.confirmation.poll_interval_ms = 5_000;
        config.confirmation.timeout_ms = 4_000;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::TimeoutBelowInterval]);
    }
}
