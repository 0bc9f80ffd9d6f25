//! Configuration management
//!
//! Everything comes from the environment; there is no config file.

use std::fmt;

use crate::application::errors::ConfigError;

pub const TOKEN_VAR: &str = "BOT_TOKEN";
pub const API_URL_VAR: &str = "BOT_API_URL";
pub const POLL_TIMEOUT_VAR: &str = "BOT_POLL_TIMEOUT";

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_POLL_TIMEOUT: u64 = 30;

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub poll_timeout_secs: u64,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT,
        }
    }

    /// Load from environment variables; `BOT_TOKEN` is required
    pub fn load_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let token = value(TOKEN_VAR).ok_or_else(|| ConfigError::MissingEnv(TOKEN_VAR.to_string()))?;
        let mut config = Config::new(token);

        if let Some(url) = value(API_URL_VAR) {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(timeout) = value(POLL_TIMEOUT_VAR) {
            config.poll_timeout_secs = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                name: POLL_TIMEOUT_VAR.to_string(),
                value: timeout.clone(),
            })?;
        }

        Ok(config)
    }

    /// Token shortened for logs
    pub fn redacted_token(&self) -> String {
        let prefix: String = self.token.chars().take(8).collect();
        format!("{}...", prefix)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.redacted_token())
            .field("api_url", &self.api_url)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_missing_token_fails() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::MissingEnv("BOT_TOKEN".to_string()));
        assert_eq!(load(&[("BOT_TOKEN", "  ")]).unwrap_err(), ConfigError::MissingEnv("BOT_TOKEN".to_string()));
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("BOT_TOKEN", "123:abc")]).unwrap();
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.poll_timeout_secs, DEFAULT_POLL_TIMEOUT);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("BOT_TOKEN", "123:abc"),
            ("BOT_API_URL", "http://localhost:8081/"),
            ("BOT_POLL_TIMEOUT", "5"),
        ])
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8081");
        assert_eq!(config.poll_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = load(&[("BOT_TOKEN", "t"), ("BOT_POLL_TIMEOUT", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = Config::new("1234567890:SECRET");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("SECRET"));
        assert!(debug.contains("12345678..."));
    }
}
