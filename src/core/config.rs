use crate::core::{constants::*, error::SwapResult, SwapError};
use std::env;
use std::fmt;
use std::str::FromStr;

#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub chain_id: u64,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub private_key: Option<String>,
    pub rpc_url: Option<String>,
}

impl Config {
    pub fn from_env() -> SwapResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or empty values take the
    /// default; a value that does not parse is a `ConfigError`.
    pub fn from_lookup<F>(lookup: F) -> SwapResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("PARASWAP_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| PARASWAP_API_URL.to_string());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            chain_id: parse_var(&lookup, "CHAIN_ID", DEFAULT_CHAIN_ID)?,
            timeout_secs: parse_var(&lookup, "TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT)?,
            max_retries: parse_var(&lookup, "MAX_RETRIES", MAX_HTTP_RETRIES)?,
            private_key: lookup("PRIVATE_KEY").filter(|key| !key.trim().is_empty()),
            rpc_url: lookup("RPC_URL").filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn validate(&self) -> SwapResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(SwapError::ConfigError(format!(
                "Aggregator URL must start with http:// or https://, got {}",
                self.api_url
            )));
        }

        if self.chain_id == 0 {
            return Err(SwapError::ConfigError(
                "Chain id must be greater than 0".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(SwapError::ConfigError(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn require_private_key(&self) -> SwapResult<&str> {
        self.private_key
            .as_deref()
            .ok_or_else(|| SwapError::ConfigError("PRIVATE_KEY is not set".to_string()))
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> SwapResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| {
            SwapError::ConfigError(format!("{} has an invalid value: {}", key, value))
        }),
    }
}

// Secrets never reach logs through {:?}.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("chain_id", &self.chain_id)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("rpc_url", &self.rpc_url.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: PARASWAP_API_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            timeout_secs: DEFAULT_HTTP_TIMEOUT,
            max_retries: MAX_HTTP_RETRIES,
            private_key: None,
            rpc_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]);
        assert_eq!(config.api_url, PARASWAP_API_URL);
        assert_eq!(config.chain_id, 42161);
        assert_eq!(config.timeout_secs, DEFAULT_HTTP_TIMEOUT);
        assert_eq!(config.max_retries, MAX_HTTP_RETRIES);
        assert!(config.private_key.is_none());
        assert!(config.rpc_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = config_from(&[
            ("PARASWAP_API_URL", "http://localhost:8080/"),
            ("CHAIN_ID", "1"),
            ("MAX_RETRIES", "0"),
            ("TIMEOUT_SECS", ""),
        ]);
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.chain_id, 1);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.timeout_secs, DEFAULT_HTTP_TIMEOUT);
    }

    #[test]
    fn test_unparsable_values_are_config_errors() {
        for (key, value) in [
            ("CHAIN_ID", "arbitrum-sepolia"),
            ("TIMEOUT_SECS", "not-a-number"),
            ("MAX_RETRIES", "-1"),
        ] {
            let err = Config::from_lookup(|k| (k == key).then(|| value.to_string())).unwrap_err();
            match err {
                SwapError::ConfigError(msg) => assert!(msg.contains(key), "{}", msg),
                other => panic!("unexpected error for {}: {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(SwapError::ConfigError(_))));

        let mut config = Config::default();
        config.api_url = "apiv5.paraswap.io".to_string();
        assert!(matches!(config.validate(), Err(SwapError::ConfigError(_))));

        let mut config = Config::default();
        config.chain_id = 0;
        assert!(matches!(config.validate(), Err(SwapError::ConfigError(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = config_from(&[
            ("PRIVATE_KEY", "0xdeadbeefdeadbeef"),
            ("RPC_URL", "https://arb.example/v2/secret-token"),
        ]);
        let printed = format!("{:?}", config);
        assert!(!printed.contains("deadbeef"));
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_require_private_key() {
        assert!(matches!(
            Config::default().require_private_key(),
            Err(SwapError::ConfigError(_))
        ));
        let config = config_from(&[("PRIVATE_KEY", "abc")]);
        assert_eq!(config.require_private_key().unwrap(), "abc");
    }
}
