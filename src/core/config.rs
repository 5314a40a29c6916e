//! Configuration management

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::models::Endpoint;

/// Default endpoint for the query-parameter GET family
const DEFAULT_MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";

/// Default endpoint for the path-segment GET family
const DEFAULT_LINGVA_URL: &str = "https://lingva.ml/api/v1";

/// Endpoints of the two compared translation APIs
///
/// An explicit value constructed at startup and passed by parameter into
/// client calls; nothing here is global or mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// First API, read from `MYMEMORY_URL`
    pub api_a: Endpoint,
    /// Second API, read from `LINGVA_URL`
    pub api_b: Endpoint,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            api_a: Endpoint::new(DEFAULT_MYMEMORY_URL),
            api_b: Endpoint::new(DEFAULT_LINGVA_URL),
        }
    }
}

impl CompareConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_a = std::env::var("MYMEMORY_URL")
            .unwrap_or_else(|_| DEFAULT_MYMEMORY_URL.to_string());
        let api_b =
            std::env::var("LINGVA_URL").unwrap_or_else(|_| DEFAULT_LINGVA_URL.to_string());

        Self {
            api_a: Endpoint::new(api_a),
            api_b: Endpoint::new(api_b),
        }
    }

    /// Load configuration and report classification problems
    pub fn load() -> Self {
        let config = Self::from_env();
        config.validate();
        config
    }

    /// Warn about endpoints the client will reject without a network call
    ///
    /// Misconfiguration is not fatal here; the client reports it as a
    /// `Failure` result instead.
    pub fn validate(&self) {
        for endpoint in [&self.api_a, &self.api_b] {
            if endpoint.url.trim().is_empty() {
                warn!("Endpoint URL is empty");
            } else if endpoint.provider.is_none() {
                warn!("Cannot determine API family for endpoint: {}", endpoint.url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ApiProvider;

    #[test]
    fn test_config_from_env() {
        // Defaults apply when the variables are unset
        std::env::remove_var("MYMEMORY_URL");
        std::env::remove_var("LINGVA_URL");

        let config = CompareConfig::from_env();
        assert_eq!(config.api_a.url, DEFAULT_MYMEMORY_URL);
        assert_eq!(config.api_a.provider, Some(ApiProvider::MyMemory));
        assert_eq!(config.api_b.url, DEFAULT_LINGVA_URL);
        assert_eq!(config.api_b.provider, Some(ApiProvider::Lingva));

        // Overrides are classified at load time
        std::env::set_var("LINGVA_URL", "https://lingva.example.org/api/v1");
        let config = CompareConfig::from_env();
        assert_eq!(config.api_b.url, "https://lingva.example.org/api/v1");
        assert_eq!(config.api_b.provider, Some(ApiProvider::Lingva));
        std::env::remove_var("LINGVA_URL");
    }

    #[test]
    fn test_default_matches_env_defaults() {
        let config = CompareConfig::default();
        assert_eq!(config.api_a.provider, Some(ApiProvider::MyMemory));
        assert_eq!(config.api_b.provider, Some(ApiProvider::Lingva));
    }
}
