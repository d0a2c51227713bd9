//! # Agent Configuration
//!
//! Builder-style settings for an [`AgentSession`](crate::agent::AgentSession),
//! loadable from TOML or from `OVAL_AGENT_*` environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Namespace of the OVAL definitions schema, used as the check engine key
pub const OVAL_DEFINITIONS_NAMESPACE: &str = "http://oval.mitre.org/XMLSchema/oval-definitions-5";

/// Fact name under which interface MAC addresses are exported
pub const ETHERNET_MAC_FACT: &str = "urn:xccdf:fact:ethernet:MAC";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Check-system namespace the session registers under
    pub engine_namespace: String,

    /// Fact name for exported MAC addresses
    pub mac_fact_name: String,

    /// Keep probed objects between evaluations until the next reset
    pub cache_probed_items: bool,

    /// Enable debug logging
    pub debug_logging: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            engine_namespace: OVAL_DEFINITIONS_NAMESPACE.to_string(),
            mac_fact_name: ETHERNET_MAC_FACT.to_string(),
            cache_probed_items: true,
            debug_logging: false,
        }
    }
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.engine_namespace = namespace.into();
        self
    }

    pub fn with_mac_fact_name(mut self, name: impl Into<String>) -> Self {
        self.mac_fact_name = name.into();
        self
    }

    pub fn with_cache_probed_items(mut self, enabled: bool) -> Self {
        self.cache_probed_items = enabled;
        self
    }

    /// Enable debug logging
    pub fn with_debug_logging(mut self) -> Self {
        self.debug_logging = true;
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Defaults overridden by `OVAL_AGENT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            engine_namespace: lookup("OVAL_AGENT_ENGINE_NAMESPACE")
                .unwrap_or(defaults.engine_namespace),
            mac_fact_name: lookup("OVAL_AGENT_MAC_FACT_NAME").unwrap_or(defaults.mac_fact_name),
            cache_probed_items: lookup("OVAL_AGENT_CACHE_PROBED_ITEMS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_probed_items),
            debug_logging: lookup("OVAL_AGENT_DEBUG_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.debug_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.engine_namespace, OVAL_DEFINITIONS_NAMESPACE);
        assert_eq!(config.mac_fact_name, "urn:xccdf:fact:ethernet:MAC");
        assert!(config.cache_probed_items);
        assert!(!config.debug_logging);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AgentConfig::from_toml_str("cache_probed_items = false\n").unwrap();
        assert!(!config.cache_probed_items);
        assert_eq!(config.engine_namespace, OVAL_DEFINITIONS_NAMESPACE);
    }

    #[test]
    fn test_invalid_toml() {
        assert_matches!(
            AgentConfig::from_toml_str("cache_probed_items = \"sometimes\""),
            Err(ConfigError::Toml(_))
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "engine_namespace = \"urn:example:check\"").unwrap();
        writeln!(file, "debug_logging = true").unwrap();

        let config = AgentConfig::from_file(file.path()).unwrap();
        assert_eq!(config.engine_namespace, "urn:example:check");
        assert!(config.debug_logging);

        assert_matches!(
            AgentConfig::from_file(file.path().with_extension("missing")),
            Err(ConfigError::Io(_))
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("OVAL_AGENT_MAC_FACT_NAME", "urn:example:mac"),
            ("OVAL_AGENT_CACHE_PROBED_ITEMS", "false"),
            ("OVAL_AGENT_DEBUG_LOGGING", "not-a-bool"),
        ]
        .into_iter()
        .collect();

        let config = AgentConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.mac_fact_name, "urn:example:mac");
        assert!(!config.cache_probed_items);
        // unparsable values fall back to the default
        assert!(!config.debug_logging);
        assert_eq!(config.engine_namespace, OVAL_DEFINITIONS_NAMESPACE);
    }

    #[test]
    fn test_builder() {
        let config = AgentConfig::new()
            .with_engine_namespace("urn:example:check")
            .with_cache_probed_items(false)
            .with_debug_logging();
        assert_eq!(config.engine_namespace, "urn:example:check");
        assert!(!config.cache_probed_items);
        assert!(config.debug_logging);
    }
}
