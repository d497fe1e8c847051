use std::env;
use std::time::Duration;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::profile::adapter::outgoing::profile_api_http::ProfileApiConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least {0} characters long for HS256 algorithm")]
    WeakSecret(usize),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub profile_api: ProfileApiConfig,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from the process environment. Call after the
    /// dotenv files have been applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let timeout_secs = parse_or(&lookup, "PROFILE_API_TIMEOUT_SECS", 10u64)?;
        let leeway_secs = parse_or(&lookup, "JWT_LEEWAY_SECS", 30u64)?;

        let base_url = required("PROFILE_API_BASE_URL")?;
        let secret_key = required("JWT_SECRET")?;
        if secret_key.len() < JwtConfig::MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret(JwtConfig::MIN_SECRET_LEN));
        }

        Ok(Self {
            host,
            port,
            profile_api: ProfileApiConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            jwt: JwtConfig::new(secret_key, leeway_secs),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults_for_optional_keys() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PROFILE_API_BASE_URL", "http://localhost:8082/api"),
            ("JWT_SECRET", SECRET),
        ]))
        .unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.profile_api.timeout, Duration::from_secs(10));
        assert_eq!(config.jwt.leeway_seconds, 30);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("PROFILE_API_BASE_URL", "http://backend:8082/api"),
            ("PROFILE_API_TIMEOUT_SECS", "3"),
            ("JWT_SECRET", SECRET),
            ("JWT_LEEWAY_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.profile_api.base_url, "http://backend:8082/api");
        assert_eq!(config.profile_api.timeout, Duration::from_secs(3));
        assert_eq!(config.jwt.leeway_seconds, 5);
    }

    #[test]
    fn missing_backend_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("JWT_SECRET", SECRET)])).unwrap_err();

        assert_eq!(err, ConfigError::Missing("PROFILE_API_BASE_URL"));
    }

    #[test]
    fn short_secret_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("PROFILE_API_BASE_URL", "http://localhost:8082/api"),
            ("JWT_SECRET", "short"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::WeakSecret(32));
    }

    #[test]
    fn unparsable_port_is_reported_with_value() {
        let err = AppConfig::from_lookup(lookup(&[
            ("PORT", "eighty"),
            ("PROFILE_API_BASE_URL", "http://localhost:8082/api"),
            ("JWT_SECRET", SECRET),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }
}
