//! Client configuration loaded once at construction.
//!
//! # Design
//! `ClientConfig` is plain serde data. Sources (a JSON file, the process
//! environment) each produce a partial config and `merge` layers them, the
//! later source winning per field. Environment reading goes through a
//! lookup function so tests never touch the real process environment.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::retry::RetryConfig;

pub const ENV_REGION: &str = "OCI_REGION";
pub const ENV_ENDPOINT: &str = "OCI_DBMGMT_ENDPOINT";
pub const ENV_TIMEOUT_MS: &str = "OCI_DBMGMT_TIMEOUT_MS";
pub const ENV_PROXY: &str = "OCI_DBMGMT_PROXY";
pub const ENV_MAX_ATTEMPTS: &str = "OCI_DBMGMT_MAX_ATTEMPTS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ClientConfig {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    /// Client-wide retry policy. `None` means a single attempt per call.
    pub retry: Option<RetryConfig>,
    pub timeout_ms: Option<u64>,
    pub proxy: Option<String>,
}

impl ClientConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json)
            .map_err(|e| ApiError::Configuration(format!("invalid client configuration: {e}")))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded client configuration");
        Ok(config)
    }

    /// Read the `OCI_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let timeout_ms = get(ENV_TIMEOUT_MS)
            .map(|v| parse_number::<u64>(ENV_TIMEOUT_MS, &v))
            .transpose()?;
        let retry = get(ENV_MAX_ATTEMPTS)
            .map(|v| parse_number::<u32>(ENV_MAX_ATTEMPTS, &v))
            .transpose()?
            .map(|attempts| RetryConfig::default().with_max_attempts(attempts));

        Ok(Self {
            region: get(ENV_REGION),
            endpoint: get(ENV_ENDPOINT),
            retry,
            timeout_ms,
            proxy: get(ENV_PROXY),
        })
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: ClientConfig) -> ClientConfig {
        ClientConfig {
            region: other.region.or(self.region),
            endpoint: other.endpoint.or(self.endpoint),
            retry: other.retry.or(self.retry),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
            proxy: other.proxy.or(self.proxy),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ApiError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::Configuration(format!("{name} must be a non-negative integer, got `{value}`")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn json_uses_camel_case() {
        let config = ClientConfig::from_json_str(
            r#"{
                "region": "us-phoenix-1",
                "timeoutMs": 2500,
                "retry": {"maxAttempts": 4, "backoff": {"type": "none"}}
            }"#,
        )
        .unwrap();
        assert_eq!(config.region.as_deref(), Some("us-phoenix-1"));
        assert_eq!(config.timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(config.retry.unwrap().max_attempts, 4);
    }

    #[test]
    fn unknown_keys_are_configuration_errors() {
        let err = ClientConfig::from_json_str(r#"{"regoin": "us-phoenix-1"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn environment_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_REGION, "eu-frankfurt-1"),
            (ENV_TIMEOUT_MS, "1000"),
            (ENV_MAX_ATTEMPTS, "3"),
            (ENV_PROXY, ""),
        ]))
        .unwrap();
        assert_eq!(config.region.as_deref(), Some("eu-frankfurt-1"));
        assert_eq!(config.timeout_ms, Some(1000));
        assert_eq!(config.retry.map(|r| r.max_attempts), Some(3));
        assert_eq!(config.proxy, None);
    }

    #[test]
    fn bad_number_in_environment() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_MS));
    }

    #[test]
    fn later_source_wins_per_field() {
        let file = ClientConfig {
            region: Some("us-ashburn-1".into()),
            timeout_ms: Some(5000),
            ..Default::default()
        };
        let env = ClientConfig {
            region: Some("ap-tokyo-1".into()),
            ..Default::default()
        };
        let merged = file.merge(env);
        assert_eq!(merged.region.as_deref(), Some("ap-tokyo-1"));
        assert_eq!(merged.timeout_ms, Some(5000));
    }
}
