//! Registry configuration.
//!
//! Configuration is plain data: build it in code, read it from the
//! environment, or (with the `config` feature) deserialize it from JSON.

use std::env;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable selecting the [`DuplicatePolicy`].
pub const ENV_DUPLICATE_POLICY: &str = "IOC_REGISTRY_DUPLICATE_POLICY";
/// Environment variable enabling resolution tracing.
pub const ENV_TRACE: &str = "IOC_REGISTRY_TRACE";

/// What happens when a service that already has a factory is registered again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// Keep the existing factory and ignore the new one
    #[default]
    KeepFirst,
    /// Replace the existing factory with the new one
    Replace,
}

impl DuplicatePolicy {
    /// Parses `keep_first` / `replace` (case-insensitive, `-` accepted for `_`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "keep_first" | "first" => Some(DuplicatePolicy::KeepFirst),
            "replace" | "last" => Some(DuplicatePolicy::Replace),
            _ => None,
        }
    }
}

/// Settings for a [`ServiceRegistry`](crate::ServiceRegistry)
///
/// # Examples
///
/// ```rust
/// use ioc_registry::{DuplicatePolicy, RegistryConfig, ServiceRegistry};
///
/// let config = RegistryConfig::default()
///     .duplicate_policy(DuplicatePolicy::Replace)
///     .trace_resolution(true);
///
/// let registry = ServiceRegistry::with_config(config);
/// assert_eq!(registry.config().duplicate_policy, DuplicatePolicy::Replace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct RegistryConfig {
    /// Re-registration policy
    pub duplicate_policy: DuplicatePolicy,
    /// Install a [`TracingObserver`](crate::TracingObserver) on construction
    pub trace_resolution: bool,
}

impl RegistryConfig {
    /// Sets the re-registration policy.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Enables or disables resolution tracing.
    pub fn trace_resolution(mut self, enabled: bool) -> Self {
        self.trace_resolution = enabled;
        self
    }

    /// Reads the configuration from `IOC_REGISTRY_*` environment variables.
    ///
    /// Unset variables keep their defaults. Unparseable values keep their
    /// defaults too and are reported with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DUPLICATE_POLICY) {
            match DuplicatePolicy::parse(&raw) {
                Some(policy) => config.duplicate_policy = policy,
                None => warn!(variable = ENV_DUPLICATE_POLICY, value = %raw, "ignoring invalid duplicate policy"),
            }
        }

        if let Some(raw) = lookup(ENV_TRACE) {
            match parse_flag(&raw) {
                Some(enabled) => config.trace_resolution = enabled,
                None => warn!(variable = ENV_TRACE, value = %raw, "ignoring invalid boolean flag"),
            }
        }

        config
    }

    /// Deserializes a configuration from JSON; missing fields take defaults.
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = RegistryConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.duplicate_policy, DuplicatePolicy::KeepFirst);
        assert!(!config.trace_resolution);
    }

    #[test]
    fn reads_both_variables() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            (ENV_DUPLICATE_POLICY, "Replace"),
            (ENV_TRACE, "yes"),
        ]));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Replace);
        assert!(config.trace_resolution);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            (ENV_DUPLICATE_POLICY, "sometimes"),
            (ENV_TRACE, "maybe"),
        ]));
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn policy_parsing_accepts_dashes() {
        assert_eq!(DuplicatePolicy::parse("keep-first"), Some(DuplicatePolicy::KeepFirst));
        assert_eq!(DuplicatePolicy::parse(" KEEP_FIRST "), Some(DuplicatePolicy::KeepFirst));
        assert_eq!(DuplicatePolicy::parse("last"), Some(DuplicatePolicy::Replace));
        assert_eq!(DuplicatePolicy::parse(""), None);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_round_trip_uses_snake_case() {
        let config = RegistryConfig::from_json(r#"{"duplicate_policy":"replace"}"#).unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Replace);
        assert!(!config.trace_resolution);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"replace\""));
    }
}
