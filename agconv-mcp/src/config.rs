//! Server configuration from the environment

use std::env;

/// Places beyond this are noise in an f64
const MAX_ROUND_PLACES: u32 = 15;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `tracing` filter directive, from AGCONV_LOG or RUST_LOG
    pub log_filter: String,
    /// Decimal places applied to returned values when a call gives none
    pub round_places: Option<u32>,
    /// Problems found while reading the environment, logged once logging is up
    pub warnings: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            round_places: None,
            warnings: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ServerConfig::default();

        if let Some(filter) = lookup("AGCONV_LOG").or_else(|| lookup("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.log_filter = filter.trim().to_string();
            }
        }

        if let Some(raw) = lookup("AGCONV_ROUND_PLACES") {
            match raw.trim().parse::<u32>() {
                Ok(places) if places <= MAX_ROUND_PLACES => config.round_places = Some(places),
                _ => config.warnings.push(format!(
                    "ignoring AGCONV_ROUND_PLACES={:?}: expected an integer from 0 to {}",
                    raw, MAX_ROUND_PLACES
                )),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), ServerConfig::default());
    }

    #[test]
    fn test_log_filter_precedence() {
        assert_eq!(config(&[("RUST_LOG", "warn")]).log_filter, "warn");
        assert_eq!(
            config(&[("RUST_LOG", "warn"), ("AGCONV_LOG", "agconv_units=debug")]).log_filter,
            "agconv_units=debug"
        );
        assert_eq!(config(&[("AGCONV_LOG", "  ")]).log_filter, "info");
    }

    #[test]
    fn test_round_places() {
        let c = config(&[("AGCONV_ROUND_PLACES", "4")]);
        assert_eq!(c.round_places, Some(4));
        assert!(c.warnings.is_empty());
    }

    #[test]
    fn test_invalid_round_places_fall_back() {
        for raw in ["four", "-1", "99"] {
            let c = config(&[("AGCONV_ROUND_PLACES", raw)]);
            assert_eq!(c.round_places, None);
            assert_eq!(c.warnings.len(), 1);
        }
    }
}
