//! Engine configuration.
//!
//! Host applications can embed [`EngineConfig`] in their own serde-backed
//! configuration files or load it from the environment.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable toggling per-rule trace events.
pub const TRACE_RULES_ENV: &str = "RULE_ENGINE_TRACE_RULES";

/// Settings shared by both engines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Emit a trace event for every rule, eligible or skipped
    pub trace_rules: bool,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            trace_rules: env::var(TRACE_RULES_ENV)
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or_default(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert!(!EngineConfig::default().trace_rules);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("yes please"), None);
    }

    #[test]
    fn test_config_deserialization() {
        let config: EngineConfig = serde_json::from_str(r#"{"trace_rules": true}"#).unwrap();
        assert!(config.trace_rules);

        // Missing fields take their defaults
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
