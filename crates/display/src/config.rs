//! Configuration for the display layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Well-known location of the genesis alias document.
pub const DEFAULT_GENESIS_ALIASES_URL: &str =
    "https://namada.info/shielded-expedition.88f17d1d14/output/genesis_tm_address_to_alias.json";

const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Alias-resolver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// URL of the genesis alias document.
    pub url: String,

    /// Bound on a single lookup, covering connection and body read.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GENESIS_ALIASES_URL.to_string(),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_well_known_document() {
        let config = ResolverConfig::default();
        assert_eq!(config.url, DEFAULT_GENESIS_ALIASES_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn deserialize_with_human_readable_timeout() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"url": "http://localhost:8080/aliases.json", "timeout": "2s"}"#)
                .unwrap();

        assert_eq!(config.url, "http://localhost:8080/aliases.json");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ResolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }
}
