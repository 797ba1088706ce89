//! Channel policy configuration.
//!
//! Deployments declare which channel processors run and under which
//! keywords in a TOML file; the parsed policy builds a validated
//! [`ChannelDecisionManager`]. Transport-specific entry points cannot be
//! declared in configuration and are injected programmatically.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::channel::{
    ChannelDecisionManager, ChannelEntryPoint, InsecureChannelProcessor, SecureChannelProcessor,
};

/// Top-level channel policy configuration.
///
/// ```toml
/// [secure]
/// enabled = true
/// keyword = "REQUIRES_SECURE_CHANNEL"
///
/// [insecure]
/// enabled = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPolicyConfig {
    /// Secure-channel enforcement policy. Enabled by default.
    #[serde(default = "default_secure_policy")]
    pub secure: ProcessorPolicy,

    /// Insecure-channel enforcement policy. Disabled by default.
    #[serde(default = "default_insecure_policy")]
    pub insecure: ProcessorPolicy,
}

/// Policy for one processor strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorPolicy {
    /// Whether the processor participates in dispatch.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Keyword override; the processor's built-in default applies when
    /// absent.
    #[serde(default)]
    pub keyword: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_secure_policy() -> ProcessorPolicy {
    ProcessorPolicy {
        enabled: true,
        keyword: None,
    }
}

fn default_insecure_policy() -> ProcessorPolicy {
    ProcessorPolicy {
        enabled: false,
        keyword: None,
    }
}

impl Default for ChannelPolicyConfig {
    fn default() -> Self {
        Self {
            secure: default_secure_policy(),
            insecure: default_insecure_policy(),
        }
    }
}

impl ChannelPolicyConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Serialize configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Build a validated [`ChannelDecisionManager`] from this policy.
    ///
    /// When `entry_point` is `Some`, it is installed on every enabled
    /// processor; otherwise each processor keeps its built-in default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the declared policy does
    /// not pass the manager's lifecycle check (no processor enabled, or
    /// an empty keyword override).
    pub fn build_manager(
        &self,
        entry_point: Option<Arc<dyn ChannelEntryPoint>>,
    ) -> Result<ChannelDecisionManager, ConfigError> {
        let mut manager = ChannelDecisionManager::new();

        if self.secure.enabled {
            let mut processor = SecureChannelProcessor::new();
            if let Some(keyword) = &self.secure.keyword {
                processor.set_secure_keyword(keyword.clone());
            }
            if let Some(entry_point) = &entry_point {
                processor.set_entry_point(Some(entry_point.clone()));
            }
            manager.add_processor(Arc::new(processor));
        }

        if self.insecure.enabled {
            let mut processor = InsecureChannelProcessor::new();
            if let Some(keyword) = &self.insecure.keyword {
                processor.set_insecure_keyword(keyword.clone());
            }
            if let Some(entry_point) = &entry_point {
                processor.set_entry_point(Some(entry_point.clone()));
            }
            manager.add_processor(Arc::new(processor));
        }

        manager
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(manager)
    }
}

/// Errors from channel policy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading configuration file.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Validation error.
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ChannelPolicyConfig::from_toml("").unwrap();
        assert!(config.secure.enabled);
        assert!(config.secure.keyword.is_none());
        assert!(!config.insecure.enabled);
    }

    #[test]
    fn test_parse_full_policy() {
        let toml = r#"
            [secure]
            enabled = true
            keyword = "NEEDS_TLS"

            [insecure]
            enabled = true
        "#;
        let config = ChannelPolicyConfig::from_toml(toml).unwrap();
        assert_eq!(config.secure.keyword.as_deref(), Some("NEEDS_TLS"));
        assert!(config.insecure.enabled);
        assert!(config.insecure.keyword.is_none());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = ChannelPolicyConfig::from_toml("[secure").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_build_manager_from_defaults() {
        let config = ChannelPolicyConfig::default();
        let manager = config.build_manager(None).unwrap();
        assert_eq!(manager.len(), 1);
        manager.validate().unwrap();
    }

    #[test]
    fn test_build_manager_with_both_processors() {
        let toml = r#"
            [insecure]
            enabled = true
        "#;
        let config = ChannelPolicyConfig::from_toml(toml).unwrap();
        let manager = config.build_manager(None).unwrap();
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_all_disabled_fails_validation() {
        let toml = r#"
            [secure]
            enabled = false
        "#;
        let config = ChannelPolicyConfig::from_toml(toml).unwrap();
        let err = config.build_manager(None).unwrap_err();
        match err {
            ConfigError::Validation(msg) => {
                assert!(msg.contains("channelProcessors"), "unexpected message: {msg}");
            },
            other => panic!("expected ConfigError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_keyword_override_fails_validation() {
        let toml = r#"
            [secure]
            keyword = ""
        "#;
        let config = ChannelPolicyConfig::from_toml(toml).unwrap();
        let err = config.build_manager(None).unwrap_err();
        match err {
            ConfigError::Validation(msg) => {
                assert!(msg.contains("secureKeyword"), "unexpected message: {msg}");
            },
            other => panic!("expected ConfigError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ChannelPolicyConfig::default();
        let toml = config.to_toml().unwrap();
        let back = ChannelPolicyConfig::from_toml(&toml).unwrap();
        assert_eq!(back.secure.enabled, config.secure.enabled);
        assert_eq!(back.insecure.enabled, config.insecure.enabled);
    }
}
